//! Schedule (solution) model.
//!
//! A schedule assigns a group of employees to every shift of the week.
//! It is valid when no employee works two shifts on the same day.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ShiftKey;

/// A complete weekly schedule.
///
/// Assignments are kept in shift declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Shift assignments (shift → employees).
    pub assignments: Vec<ShiftAssignment>,
}

/// The employees staffing one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Staffed shift.
    pub shift: ShiftKey,
    /// Assigned employee names, in availability order.
    pub employees: Vec<String>,
}

/// An employee booked on more than one shift of the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleBooking {
    /// Day on which the conflict occurs.
    pub day: Weekday,
    /// Double-booked employee.
    pub employee: String,
    /// All shifts of that day the employee is assigned to.
    pub shifts: Vec<ShiftKey>,
}

impl ShiftAssignment {
    /// Creates a new assignment.
    pub fn new(shift: ShiftKey, employees: Vec<String>) -> Self {
        Self { shift, employees }
    }

    /// Number of assigned employees.
    #[inline]
    pub fn headcount(&self) -> usize {
        self.employees.len()
    }

    /// Whether the named employee works this shift.
    pub fn includes(&self, employee: &str) -> bool {
        self.employees.iter().any(|e| e == employee)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: ShiftAssignment) {
        self.assignments.push(assignment);
    }

    /// Employees assigned to a shift.
    pub fn employees_for(&self, shift: &ShiftKey) -> Option<&[String]> {
        self.assignments
            .iter()
            .find(|a| &a.shift == shift)
            .map(|a| a.employees.as_slice())
    }

    /// Shifts worked by an employee, in schedule order.
    pub fn shifts_for_employee(&self, employee: &str) -> Vec<&ShiftKey> {
        self.assignments
            .iter()
            .filter(|a| a.includes(employee))
            .map(|a| &a.shift)
            .collect()
    }

    /// Assignments falling on the given day.
    pub fn assignments_on(&self, day: Weekday) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.shift.day == day)
            .collect()
    }

    /// Finds every employee working more than one shift on a day.
    ///
    /// Conflicts are reported in order of first appearance.
    pub fn daily_conflicts(&self) -> Vec<DoubleBooking> {
        let mut index: HashMap<(Weekday, &str), usize> = HashMap::new();
        let mut bookings: Vec<DoubleBooking> = Vec::new();

        for a in &self.assignments {
            for employee in &a.employees {
                let slot = *index
                    .entry((a.shift.day, employee.as_str()))
                    .or_insert_with(|| {
                        bookings.push(DoubleBooking {
                            day: a.shift.day,
                            employee: employee.clone(),
                            shifts: Vec::new(),
                        });
                        bookings.len() - 1
                    });
                bookings[slot].shifts.push(a.shift.clone());
            }
        }

        bookings.retain(|b| b.shifts.len() > 1);
        bookings
    }

    /// Whether no employee is double-booked on any day.
    pub fn is_valid(&self) -> bool {
        self.daily_conflicts().is_empty()
    }

    /// Number of staffed shifts.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Total number of employee-shift slots filled.
    pub fn total_headcount(&self) -> usize {
        self.assignments.iter().map(ShiftAssignment::headcount).sum()
    }
}
