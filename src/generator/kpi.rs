//! Schedule workload metrics.
//!
//! Descriptive figures for comparing schedule options side by side.
//! Nothing here feeds back into the search.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Shifts per employee | Number of shifts an employee is assigned to |
//! | Hours per employee | Sum of assigned shift lengths |
//! | Total hours | Sum over all employee-shift slots |
//! | Hours spread | Max minus min hours across rostered employees |

use std::collections::HashMap;

use crate::models::{Roster, Schedule};

/// Workload indicators for one schedule.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Assigned shift count per employee (every rostered employee present).
    pub shifts_by_employee: HashMap<String, usize>,
    /// Worked hours per employee (every rostered employee present).
    pub hours_by_employee: HashMap<String, f64>,
    /// Total staffed hours.
    pub total_hours: f64,
    /// Difference between the most and least loaded employee (hours).
    pub hours_spread: f64,
}

impl ScheduleKpi {
    /// Computes workload figures from a schedule and its roster.
    ///
    /// Shifts absent from the roster contribute a count but no hours.
    pub fn calculate(schedule: &Schedule, roster: &Roster) -> Self {
        let mut shifts_by_employee: HashMap<String, usize> = roster
            .employees
            .iter()
            .map(|e| (e.name.clone(), 0))
            .collect();
        let mut hours_by_employee: HashMap<String, f64> = roster
            .employees
            .iter()
            .map(|e| (e.name.clone(), 0.0))
            .collect();
        let mut total_hours = 0.0;

        for assignment in &schedule.assignments {
            let hours = roster
                .shift(&assignment.shift)
                .map(|s| s.hours())
                .unwrap_or(0.0);

            for employee in &assignment.employees {
                *shifts_by_employee.entry(employee.clone()).or_insert(0) += 1;
                *hours_by_employee.entry(employee.clone()).or_insert(0.0) += hours;
                total_hours += hours;
            }
        }

        let hours_spread = if hours_by_employee.is_empty() {
            0.0
        } else {
            let max = hours_by_employee.values().copied().fold(f64::MIN, f64::max);
            let min = hours_by_employee.values().copied().fold(f64::MAX, f64::min);
            max - min
        };

        Self {
            shifts_by_employee,
            hours_by_employee,
            total_hours,
            hours_spread,
        }
    }

    /// Hours worked by an employee (0 if unknown).
    pub fn hours_for(&self, employee: &str) -> f64 {
        self.hours_by_employee.get(employee).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Shift, ShiftAssignment, ShiftKey};
    use chrono::NaiveTime;

    fn key(s: &str) -> ShiftKey {
        s.parse().unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn assign(shift: &str, employees: &[&str]) -> ShiftAssignment {
        ShiftAssignment::new(key(shift), employees.iter().map(|e| e.to_string()).collect())
    }

    fn sample_roster() -> Roster {
        Roster::new()
            .with_shift(Shift::new(key("Sun Morning"), hm(9, 30), hm(16, 30), 1))
            .with_shift(Shift::new(key("Sun Evening"), hm(15, 30), hm(22, 30), 1))
            .with_shift(Shift::new(key("Fri Morning"), hm(9, 30), hm(15, 30), 2))
            .with_employee(Employee::new("Alice"))
            .with_employee(Employee::new("Bob"))
            .with_employee(Employee::new("Grace"))
    }

    #[test]
    fn test_kpi_basic() {
        let mut schedule = Schedule::new();
        schedule.add_assignment(assign("Sun Morning", &["Alice"]));
        schedule.add_assignment(assign("Sun Evening", &["Bob"]));
        schedule.add_assignment(assign("Fri Morning", &["Alice", "Bob"]));

        let kpi = ScheduleKpi::calculate(&schedule, &sample_roster());
        assert_eq!(kpi.shifts_by_employee["Alice"], 2);
        assert_eq!(kpi.shifts_by_employee["Bob"], 2);
        assert_eq!(kpi.shifts_by_employee["Grace"], 0);
        assert!((kpi.hours_for("Alice") - 13.0).abs() < 1e-10); // 7 + 6
        assert!((kpi.hours_for("Bob") - 13.0).abs() < 1e-10);
        assert!((kpi.hours_for("Grace") - 0.0).abs() < 1e-10);
        assert!((kpi.total_hours - 26.0).abs() < 1e-10);
        assert!((kpi.hours_spread - 13.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_unknown_shift_has_no_hours() {
        let mut schedule = Schedule::new();
        schedule.add_assignment(assign("Wed Night", &["Alice"]));

        let kpi = ScheduleKpi::calculate(&schedule, &sample_roster());
        assert_eq!(kpi.shifts_by_employee["Alice"], 1);
        assert!((kpi.total_hours - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &Roster::new());
        assert!(kpi.shifts_by_employee.is_empty());
        assert!((kpi.total_hours - 0.0).abs() < 1e-10);
        assert!((kpi.hours_spread - 0.0).abs() < 1e-10);
        assert!((kpi.hours_for("Nobody") - 0.0).abs() < 1e-10);
    }
}
