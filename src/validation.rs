//! Input validation for rostering problems.
//!
//! Checks structural integrity of shifts, requirements, and employee
//! availability before any search starts. Detects:
//! - Duplicate shift keys and duplicate employee names
//! - Shifts without a requirement, or with a zero requirement
//! - Shifts whose end time is not after their start time
//! - A zero result cap
//!
//! All problems are collected; validation does not stop at the first one.

use crate::generator::GeneratorConfig;
use crate::models::{Employee, Roster, ShiftKey};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The same shift key appears twice in the shift list.
    DuplicateShift,
    /// Two employees share the same name.
    DuplicateEmployee,
    /// An employee has an empty name.
    EmptyName,
    /// A shift has no entry in the requirements map.
    MissingRequirement,
    /// A shift requires zero employees.
    InvalidRequirement,
    /// A shift ends at or before its start.
    InvalidTimeRange,
    /// The maximum number of schedules is zero.
    InvalidCap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the raw generator inputs.
///
/// Checks:
/// 1. No duplicate shift keys
/// 2. Every shift has a requirement, and that requirement is positive
/// 3. No empty or duplicate employee names
///
/// Availability for shifts outside `shifts` is allowed; those entries
/// never match anything.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    shifts: &[ShiftKey],
    requirements: &HashMap<ShiftKey, u32>,
    employees: &[Employee],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut shift_keys = HashSet::new();
    for shift in shifts {
        if !shift_keys.insert(shift) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateShift,
                format!("Duplicate shift: {shift}"),
            ));
            continue;
        }

        match requirements.get(shift) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingRequirement,
                format!("Shift '{shift}' has no staffing requirement"),
            )),
            Some(0) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRequirement,
                format!("Shift '{shift}' requires zero employees"),
            )),
            Some(_) => {}
        }
    }

    let mut names = HashSet::new();
    for employee in employees {
        if employee.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Employee with an empty name",
            ));
        } else if !names.insert(employee.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmployee,
                format!("Duplicate employee: {}", employee.name),
            ));
        }
    }

    finish(errors)
}

/// Validates a complete roster: shift times plus everything
/// [`validate_input`] checks.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    for shift in &roster.shifts {
        if shift.end <= shift.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Shift '{}' ends at {} which is not after its start {}",
                    shift.key, shift.end, shift.start
                ),
            ));
        }
    }

    if let Err(mut input_errors) = validate_input(
        &roster.shift_keys(),
        &roster.requirements(),
        &roster.employees,
    ) {
        errors.append(&mut input_errors);
    }

    finish(errors)
}

/// Validates generator settings.
pub fn validate_config(config: &GeneratorConfig) -> ValidationResult {
    let mut errors = Vec::new();
    if config.max_options == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCap,
            "max_options must be at least 1",
        ));
    }
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Shift;
    use chrono::NaiveTime;

    fn key(s: &str) -> ShiftKey {
        s.parse().unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn reqs(entries: &[(&str, u32)]) -> HashMap<ShiftKey, u32> {
        entries.iter().map(|(k, v)| (key(k), *v)).collect()
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        let shifts = vec![key("Mon Morning"), key("Mon Evening")];
        let requirements = reqs(&[("Mon Morning", 2), ("Mon Evening", 1)]);
        let employees = vec![
            Employee::new("A").with_shift(key("Mon Morning")),
            Employee::new("B").with_shift(key("Mon Evening")),
        ];
        assert!(validate_input(&shifts, &requirements, &employees).is_ok());
    }

    #[test]
    fn test_duplicate_shift() {
        let shifts = vec![key("Mon Morning"), key("Mon Morning")];
        let requirements = reqs(&[("Mon Morning", 1)]);

        let errors = validate_input(&shifts, &requirements, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateShift);
        assert!(errors[0].message.contains("Mon Morning"));
    }

    #[test]
    fn test_missing_requirement() {
        let shifts = vec![key("Mon Morning"), key("Mon Evening")];
        let requirements = reqs(&[("Mon Morning", 1)]);

        let errors = validate_input(&shifts, &requirements, &[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::MissingRequirement));
    }

    #[test]
    fn test_zero_requirement() {
        let shifts = vec![key("Mon Morning")];
        let requirements = reqs(&[("Mon Morning", 0)]);

        let errors = validate_input(&shifts, &requirements, &[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidRequirement));
    }

    #[test]
    fn test_requirement_for_unlisted_shift_is_ignored() {
        let shifts = vec![key("Mon Morning")];
        let requirements = reqs(&[("Mon Morning", 1), ("Sun Evening", 3)]);
        assert!(validate_input(&shifts, &requirements, &[]).is_ok());
    }

    #[test]
    fn test_duplicate_and_empty_employee() {
        let shifts = vec![key("Mon Morning")];
        let requirements = reqs(&[("Mon Morning", 1)]);
        let employees = vec![Employee::new("A"), Employee::new("A"), Employee::new("  ")];

        let errors = validate_input(&shifts, &requirements, &employees).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateEmployee));
        assert!(has_kind(&errors, ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_availability_for_unlisted_shift_is_allowed() {
        let shifts = vec![key("Mon Morning")];
        let requirements = reqs(&[("Mon Morning", 1)]);
        let employees = vec![Employee::new("A")
            .with_shift(key("Mon Morning"))
            .with_shift(key("Wed Evening"))];

        assert!(validate_input(&shifts, &requirements, &employees).is_ok());
    }

    #[test]
    fn test_roster_time_range() {
        let roster = Roster::new()
            .with_shift(Shift::new(key("Mon Morning"), hm(16, 30), hm(9, 30), 1))
            .with_shift(Shift::new(key("Mon Evening"), hm(15, 30), hm(15, 30), 1));

        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidTimeRange)
                .count(),
            2
        );
    }

    #[test]
    fn test_roster_duplicate_shift() {
        let roster = Roster::new()
            .with_shift(Shift::new(key("Mon Morning"), hm(9, 30), hm(16, 30), 1))
            .with_shift(Shift::new(key("Mon Morning"), hm(9, 30), hm(16, 30), 2));

        let errors = validate_roster(&roster).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateShift));
    }

    #[test]
    fn test_zero_cap() {
        let config = GeneratorConfig::new().with_max_options(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidCap);
        assert!(validate_config(&GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let shifts = vec![key("Mon Morning"), key("Mon Morning"), key("Tue Morning")];
        let requirements = reqs(&[("Mon Morning", 0)]);
        let employees = vec![Employee::new("A").with_shift(key("Wed Morning"))];

        let errors = validate_input(&shifts, &requirements, &employees).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].to_string(), errors[0].message);
    }
}
