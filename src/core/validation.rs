use crate::models::trip::{MAX_CYCLE_HOURS, TripInput};
use std::collections::BTreeMap;
use std::fmt;

/// Validation messages keyed by input field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    fn insert(&mut self, field: &'static str, msg: &str) {
        self.0.insert(field, msg.to_string());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", msgs.join(" "))
    }
}

/// Check a trip request before it is sent. Every violation is reported.
pub fn validate(input: &TripInput) -> Result<(), FieldErrors> {
    let mut errs = FieldErrors::default();

    if input.current_location.trim().is_empty() {
        errs.insert("current_location", "Enter your current location.");
    }
    if input.pickup_location.trim().is_empty() {
        errs.insert("pickup_location", "Enter pickup location.");
    }
    if input.dropoff_location.trim().is_empty() {
        errs.insert("dropoff_location", "Enter dropoff location.");
    }
    if !(0.0..=MAX_CYCLE_HOURS).contains(&input.current_cycle_hours) {
        // also catches NaN
        errs.insert(
            "current_cycle_hours",
            "Cycle hours must be between 0 and 70.",
        );
    }

    if errs.is_empty() { Ok(()) } else { Err(errs) }
}
