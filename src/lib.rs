//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Assigns employees to the shifts of a week so that every shift gets
//! exactly its required headcount from the employees available for it,
//! and nobody works two shifts on the same day. Returns a small, capped
//! set of such schedules in a reproducible order for a caller to choose
//! from.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ShiftKey`, `Shift`, `Employee`, `Roster`,
//!   `Schedule`, `ShiftAssignment`, `DoubleBooking`
//! - **`validation`**: Input integrity checks (duplicate shifts/employees,
//!   requirements, time ranges)
//! - **`generator`**: Candidate enumeration, capped search, settings, and
//!   workload KPIs
//! - **`error`**: Error type for the generator API
//!
//! # Scope
//!
//! The generator finds *valid* schedules, not optimal ones: there is no
//! scoring for fairness, cost, or hour balance, and the result is
//! truncated at the configured number of options. Rendering the options
//! is left to the consumer.
//!
//! # Logging
//!
//! Emits `tracing` events; install a subscriber to see them.

pub mod error;
pub mod generator;
pub mod models;
pub mod validation;

pub use error::GenerateError;
pub use generator::{generate, GenerationOutcome, GeneratorConfig, ScheduleGenerator};
