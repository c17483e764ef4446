//! Employee model.
//!
//! Employees are identified by name and declare the shifts they are
//! willing or able to work.

use serde::{Deserialize, Serialize};

use super::ShiftKey;

/// An employee and their availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee name.
    pub name: String,
    /// Shifts this employee can work.
    #[serde(default)]
    pub availability: Vec<ShiftKey>,
}

impl Employee {
    /// Creates an employee with no availability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            availability: Vec::new(),
        }
    }

    /// Adds an available shift.
    pub fn with_shift(mut self, shift: ShiftKey) -> Self {
        self.availability.push(shift);
        self
    }

    /// Adds several available shifts.
    pub fn with_availability(mut self, shifts: impl IntoIterator<Item = ShiftKey>) -> Self {
        self.availability.extend(shifts);
        self
    }

    /// Whether this employee can work the given shift.
    pub fn is_available_for(&self, shift: &ShiftKey) -> bool {
        self.availability.contains(shift)
    }
}
