use std::io::Cursor;

use flight_delay_sort::flight::Flight;
use flight_delay_sort::flight_data::read_flights;
use flight_delay_sort::session::Session;

mod common;

fn run_session(flights: Vec<Flight>, script: &str) -> Result<(usize, String), anyhow::Error> {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), flights);
    session.with_seed(5);
    let runs = session.run()?;
    let output = String::from_utf8(session.into_output())?;
    Ok((runs, output))
}

#[test]
fn test_carrier_then_airport() -> Result<(), anyhow::Error> {
    let flights = read_flights(&common::sample_csv())?;
    let (runs, output) = run_session(flights, "1\n1\nZZ\nAA\nY\n2\n2\nchicago\nN\n")?;

    assert_eq!(runs, 2);
    assert!(output.contains("Invalid airline carrier code. Please enter a valid airline code: "));
    assert!(output.contains("You selected Quick Sort."));
    assert!(output.contains("You selected Merge Sort."));
    assert_eq!(output.matches("Best Case (Already Sorted) Sorting Time: ").count(), 2);
    assert_eq!(output.matches("Worst Case (Reverse Sorted) Sorting Time: ").count(), 2);
    assert_eq!(output.matches("Average Case (Random Order) Sorting Time: ").count(), 2);
    // AA flights
    assert_eq!(output.matches("Shortest delay: -12 minutes").count(), 3);
    assert_eq!(output.matches("Longest delay: 25310 minutes").count(), 6);
    // Chicago flights
    assert_eq!(output.matches("Shortest delay: -5 minutes").count(), 3);
    assert!(output.ends_with("Exiting the program. Goodbye!\n"));
    Ok(())
}

#[test]
fn test_all_data() -> Result<(), anyhow::Error> {
    let flights = read_flights(&common::sample_csv())?;
    let (runs, output) = run_session(flights, "2\n3\nn\n")?;
    assert_eq!(runs, 1);
    assert_eq!(output.matches("Shortest delay: -12 minutes").count(), 3);
    assert_eq!(output.matches("Longest delay: 41025 minutes").count(), 3);
    Ok(())
}

#[test]
fn test_invalid_choices() -> Result<(), anyhow::Error> {
    let flights = read_flights(&common::sample_csv())?;
    let (runs, output) = run_session(flights, "7\nquick\n1\n4\n3\nmaybe\nN\n")?;
    assert_eq!(runs, 1);
    assert_eq!(output.matches("Invalid choice. Please enter 1 or 2: ").count(), 2);
    assert_eq!(output.matches("Invalid choice. Please enter 1, 2, or 3: ").count(), 1);
    assert_eq!(output.matches("Invalid choice. Please enter Y or N: ").count(), 1);
    Ok(())
}

#[test]
fn test_no_match_try_again() -> Result<(), anyhow::Error> {
    let flights = read_flights(&common::sample_csv())?;
    let (runs, output) = run_session(flights, "1\n2\nNowhere City\nY\n1\n2\nDenver\nN\n")?;
    assert_eq!(runs, 1);
    assert!(output.contains("No flights found for airport city containing: Nowhere City"));
    assert!(output.contains("Do you want to try again? (Y/N): "));
    assert_eq!(output.matches("Shortest delay: 0 minutes").count(), 3);
    Ok(())
}

#[test]
fn test_no_match_give_up() -> Result<(), anyhow::Error> {
    let flights = read_flights(&common::sample_csv())?;
    let (runs, output) = run_session(flights, "1\n2\nNowhere\nN\n")?;
    assert_eq!(runs, 0);
    assert!(!output.contains("Sorting Time"));
    assert!(output.ends_with("Exiting the program. Goodbye!\n"));
    Ok(())
}

#[test]
fn test_end_of_input() -> Result<(), anyhow::Error> {
    let flights = read_flights(&common::sample_csv())?;
    for script in ["", "1\n", "1\n1\n", "1\n2\n", "2\n3\n"] {
        let (_runs, output) = run_session(flights.clone(), script)?;
        assert!(output.ends_with("Exiting the program. Goodbye!\n"), "script: {script:?}");
    }
    Ok(())
}

#[test]
fn test_rest_of_filter_line_ignored() -> Result<(), anyhow::Error> {
    let flights = read_flights(&common::sample_csv())?;
    // anything after the filter number is dropped before the airport name is read
    let (runs, output) = run_session(flights, "2\n2 extra words\nAtlanta\nN\n")?;
    assert_eq!(runs, 1);
    assert_eq!(output.matches("Longest delay: 41025 minutes").count(), 3);
    Ok(())
}
