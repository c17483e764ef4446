//! Roster (problem input) model.
//!
//! Bundles the week's shifts and the employees who may staff them.
//! Both lists are ordered: shift order drives the search order, and
//! employee order drives candidate enumeration order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Employee, Shift, ShiftKey};
use crate::error::GenerateError;
use crate::generator::{GenerationOutcome, GeneratorConfig, ScheduleGenerator};

/// Shifts and employees for one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Shifts to staff, in search order.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// Employees, in enumeration order.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shift.
    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shifts.push(shift);
        self
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Finds a shift by key.
    pub fn shift(&self, key: &ShiftKey) -> Option<&Shift> {
        self.shifts.iter().find(|s| &s.key == key)
    }

    /// Shift keys in declaration order.
    pub fn shift_keys(&self) -> Vec<ShiftKey> {
        self.shifts.iter().map(|s| s.key.clone()).collect()
    }

    /// Required headcount per shift.
    pub fn requirements(&self) -> HashMap<ShiftKey, u32> {
        self.shifts
            .iter()
            .map(|s| (s.key.clone(), s.required))
            .collect()
    }

    /// Generates schedule options for this roster.
    pub fn generate(&self, config: &GeneratorConfig) -> Result<GenerationOutcome, GenerateError> {
        ScheduleGenerator::with_config(config.clone()).generate_roster(self)
    }

    /// Employees available for a shift, in roster order.
    pub fn available_for(&self, key: &ShiftKey) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.is_available_for(key))
            .collect()
    }
}
