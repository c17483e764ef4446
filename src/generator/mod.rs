//! Schedule generation.
//!
//! Produces up to a capped number of valid weekly schedules, in a
//! deterministic order, from shifts, staffing requirements, and employee
//! availability.
//!
//! # Algorithm
//!
//! 1. For every shift, collect the available employees.
//! 2. If any shift has fewer available employees than it requires, stop
//!    and report every such shift. No groups are enumerated.
//! 3. Search the product of groups across shifts in declared order,
//!    drawing each shift's groups (exactly the required size, lexicographic
//!    over employee order) on demand and skipping any choice that puts an
//!    employee on two shifts of one day.
//! 4. Emit schedules in discovery order until the cap is reached.
//!
//! The output equals filtering the full Cartesian product by the daily
//! no-double-booking rule and keeping the first `max_options` survivors.
//!
//! # Submodules
//!
//! - [`ScheduleKpi`]: per-employee workload figures for a generated schedule

mod candidates;
mod config;
mod kpi;
mod search;

pub use candidates::{Combinations, ShiftCandidates};
pub use config::{GeneratorConfig, DEFAULT_MAX_OPTIONS};
pub use kpi::ScheduleKpi;

use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::GenerateError;
use crate::models::{Employee, Roster, Schedule, ShiftKey};
use crate::validation::{validate_config, validate_input, validate_roster};
use search::{Search, SearchEnd};

/// A shift that cannot be staffed with the current availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfeasibleShift {
    /// The understaffed shift.
    pub shift: ShiftKey,
    /// Required headcount.
    pub required: u32,
    /// Employees available for it.
    pub available: usize,
}

/// Why a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// Every combination was examined.
    Exhausted,
    /// `max_options` schedules were found.
    CapReached,
    /// At least one shift had too few available employees.
    Infeasible,
    /// The time limit expired; schedules found so far are returned.
    DeadlineExceeded,
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOutcome {
    /// Valid schedules in discovery order.
    pub schedules: Vec<Schedule>,
    /// Shifts with insufficient availability, in shift order.
    pub infeasible: Vec<InfeasibleShift>,
    /// Why the run ended.
    pub stop_reason: StopReason,
    /// Search nodes visited.
    pub explored: u64,
}

impl GenerationOutcome {
    fn infeasible(infeasible: Vec<InfeasibleShift>) -> Self {
        Self {
            schedules: Vec::new(),
            infeasible,
            stop_reason: StopReason::Infeasible,
            explored: 0,
        }
    }

    /// Whether no schedule was produced.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Number of schedule options.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }
}

/// Capped, deterministic schedule generator.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use u_shift::generator::ScheduleGenerator;
/// use u_shift::models::{Employee, ShiftKey};
///
/// let morning: ShiftKey = "Mon Morning".parse().unwrap();
/// let evening: ShiftKey = "Mon Evening".parse().unwrap();
/// let shifts = vec![morning.clone(), evening.clone()];
/// let requirements = HashMap::from([(morning.clone(), 2), (evening.clone(), 1)]);
/// let employees = vec![
///     Employee::new("A").with_shift(morning.clone()),
///     Employee::new("B").with_shift(morning.clone()),
///     Employee::new("C").with_shift(evening.clone()),
/// ];
///
/// let generator = ScheduleGenerator::new().with_max_options(5);
/// let outcome = generator.generate(&shifts, &requirements, &employees).unwrap();
/// assert_eq!(outcome.schedules.len(), 1);
/// assert_eq!(outcome.schedules[0].employees_for(&evening).unwrap(), ["C".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from a configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Sets the result cap.
    pub fn with_max_options(mut self, max_options: usize) -> Self {
        self.config.max_options = max_options;
        self
    }

    /// Sets the search time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.config.time_limit = Some(limit);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates schedules for the given shifts.
    ///
    /// `employees` is the availability mapping; its order fixes the
    /// order in which candidate groups are tried.
    ///
    /// # Errors
    /// [`GenerateError::InvalidInput`] when validation fails. An
    /// infeasible shift is not an error: it yields an empty outcome with
    /// [`StopReason::Infeasible`].
    pub fn generate(
        &self,
        shifts: &[ShiftKey],
        requirements: &HashMap<ShiftKey, u32>,
        employees: &[Employee],
    ) -> Result<GenerationOutcome, GenerateError> {
        let mut errors = Vec::new();
        if let Err(mut e) = validate_config(&self.config) {
            errors.append(&mut e);
        }
        if let Err(mut e) = validate_input(shifts, requirements, employees) {
            errors.append(&mut e);
        }
        if !errors.is_empty() {
            return Err(GenerateError::InvalidInput(errors));
        }

        Ok(self.run(shifts, requirements, employees))
    }

    /// Generates schedules for a roster.
    ///
    /// Also rejects shifts whose end time is not after their start.
    pub fn generate_roster(&self, roster: &Roster) -> Result<GenerationOutcome, GenerateError> {
        let mut errors = Vec::new();
        if let Err(mut e) = validate_config(&self.config) {
            errors.append(&mut e);
        }
        if let Err(mut e) = validate_roster(roster) {
            errors.append(&mut e);
        }
        if !errors.is_empty() {
            return Err(GenerateError::InvalidInput(errors));
        }

        Ok(self.run(
            &roster.shift_keys(),
            &roster.requirements(),
            &roster.employees,
        ))
    }

    fn run(
        &self,
        shifts: &[ShiftKey],
        requirements: &HashMap<ShiftKey, u32>,
        employees: &[Employee],
    ) -> GenerationOutcome {
        let started = Instant::now();
        let deadline = self
            .config
            .time_limit
            .and_then(|limit| started.checked_add(limit));

        let mut candidates = Vec::with_capacity(shifts.len());
        let mut infeasible = Vec::new();

        for shift in shifts {
            let required = requirements.get(shift).copied().unwrap_or_default();
            let shift_candidates = ShiftCandidates::for_shift(shift, required as usize, employees);
            debug!(
                shift = %shift,
                required,
                available = shift_candidates.available.len(),
                "collected available employees"
            );

            if shift_candidates.is_infeasible() {
                warn!(
                    shift = %shift,
                    required,
                    available = shift_candidates.available.len(),
                    "not enough available employees for shift"
                );
                infeasible.push(InfeasibleShift {
                    shift: shift.clone(),
                    required,
                    available: shift_candidates.available.len(),
                });
            }
            candidates.push(shift_candidates);
        }

        if !infeasible.is_empty() {
            return GenerationOutcome::infeasible(infeasible);
        }

        let result = Search::new(
            shifts,
            &candidates,
            employees,
            self.config.max_options,
            deadline,
        )
        .run();

        let stop_reason = match result.end {
            SearchEnd::Exhausted => StopReason::Exhausted,
            SearchEnd::CapReached => StopReason::CapReached,
            SearchEnd::DeadlineExceeded => {
                warn!(
                    found = result.schedules.len(),
                    explored = result.explored,
                    "schedule search hit its time limit"
                );
                StopReason::DeadlineExceeded
            }
        };

        info!(
            shifts = shifts.len(),
            employees = employees.len(),
            found = result.schedules.len(),
            explored = result.explored,
            elapsed_ms = started.elapsed().as_millis() as u64,
            ?stop_reason,
            "schedule generation finished"
        );

        GenerationOutcome {
            schedules: result.schedules,
            infeasible: Vec::new(),
            stop_reason,
            explored: result.explored,
        }
    }
}

/// Generates up to `cap` valid schedules with default settings otherwise.
///
/// Shorthand for `ScheduleGenerator::new().with_max_options(cap).generate(..)`.
pub fn generate(
    shifts: &[ShiftKey],
    requirements: &HashMap<ShiftKey, u32>,
    employees: &[Employee],
    cap: usize,
) -> Result<GenerationOutcome, GenerateError> {
    ScheduleGenerator::new()
        .with_max_options(cap)
        .generate(shifts, requirements, employees)
}
