use std::collections::BTreeSet;

use regex::RegexBuilder;

use crate::flight::Flight;

/// Selects the flights a benchmark runs over
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Flights of a carrier, the code must match exactly
    Carrier(String),
    /// Flights whose airport name contains the text, ignoring case
    Airport(String),
    /// Every flight
    All,
}

impl Filter {
    /// Copy the flights matching this filter, keeping their order
    pub fn apply(&self, flights: &[Flight]) -> Result<Vec<Flight>, anyhow::Error> {
        let selected: Vec<Flight> = match self {
            Filter::Carrier(carrier) => {
                flights.iter()
                    .filter(|f| f.carrier() == carrier)
                    .cloned()
                    .collect()
            }
            Filter::Airport(airport) => {
                let matcher = RegexBuilder::new(&regex::escape(airport))
                    .case_insensitive(true)
                    .build()?;
                flights.iter()
                    .filter(|f| matcher.is_match(f.airport_name()))
                    .cloned()
                    .collect()
            }
            Filter::All => flights.to_vec(),
        };
        log::info!("{:?} selected {} of {} flights", self, selected.len(), flights.len());
        Ok(selected)
    }
}

/// Distinct carrier codes in `flights`
pub fn carriers(flights: &[Flight]) -> BTreeSet<String> {
    flights.iter()
        .map(|f| f.carrier().clone())
        .collect()
}
