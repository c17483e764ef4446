//! Shift rostering domain models.
//!
//! Provides the data types for describing a week of shifts, the employees
//! who may staff them, and the schedules produced by the generator.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `ShiftKey` | Day of week × time-of-day label ("Mon Morning") |
//! | `Shift` | Shift with working hours and required headcount |
//! | `Employee` | Named employee with the shifts they can work |
//! | `Roster` | All shifts and employees for one run |
//! | `Schedule` | Shift → employees assignment for the week |

mod employee;
mod roster;
mod schedule;
mod shift;

pub use employee::Employee;
pub use roster::Roster;
pub use schedule::{DoubleBooking, Schedule, ShiftAssignment};
pub use shift::{ParseShiftKeyError, Shift, ShiftKey};
