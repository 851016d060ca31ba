use std::fmt::{Display, Formatter};

/// A record that can be sorted by the algorithms in this crate.
///
/// Only the key takes part in comparisons, everything else a record carries is payload.
///
/// # Examples
/// ```
/// use flight_delay_sort::flight::{Flight, Keyed};
/// let flight = Flight::new("AA", "Chicago, IL: Chicago O'Hare International", 17);
/// assert_eq!(flight.key(), 17);
/// ```
pub trait Keyed {
    /// Key type
    type Key: Ord + Copy;

    /// Get the sort key of this record
    fn key(&self) -> Self::Key;
}

impl Keyed for i64 {
    type Key = i64;

    fn key(&self) -> i64 {
        *self
    }
}

/// A single flight delay record.
///
/// Sorted by the arrival delay in minutes. The delay may be negative, zero or positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Flight {
    carrier: String,
    airport_name: String,
    arr_delay: i64,
}

impl Flight {
    /// Create a new [Flight]
    ///
    /// # Arguments
    /// * `carrier` - the carrier code, for example `AA`
    /// * `airport_name` - the airport name, usually including the city
    /// * `arr_delay` - the arrival delay in minutes
    pub fn new(carrier: &str, airport_name: &str, arr_delay: i64) -> Flight {
        Flight {
            carrier: carrier.to_string(),
            airport_name: airport_name.to_string(),
            arr_delay,
        }
    }

    /// Get the carrier code
    pub fn carrier(&self) -> &String {
        &self.carrier
    }

    /// Get the airport name
    pub fn airport_name(&self) -> &String {
        &self.airport_name
    }

    /// Get the arrival delay in minutes
    pub fn arr_delay(&self) -> i64 {
        self.arr_delay
    }
}

impl Keyed for Flight {
    type Key = i64;

    fn key(&self) -> i64 {
        self.arr_delay
    }
}

impl Display for Flight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.carrier, self.airport_name, self.arr_delay)
    }
}
