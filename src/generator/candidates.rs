//! Per-shift candidate enumeration.
//!
//! A candidate for a shift is a group of exactly `required` employees,
//! all available for that shift. Groups are produced lazily as index
//! combinations in lexicographic order over the employee list.

use crate::models::{Employee, ShiftKey};

/// Lexicographic k-combinations of `0..n`.
///
/// Yields every strictly increasing index vector of length `k`.
/// `k = 0` yields a single empty combination; `k > n` yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Creates the iterator over `k`-subsets of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost position that can still be incremented.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Candidate groups for one shift.
///
/// Only the available employees are collected up front; groups are
/// produced on demand by [`ShiftCandidates::groups`].
#[derive(Debug, Clone)]
pub struct ShiftCandidates {
    /// Indices (into the employee list) of employees available for the shift.
    pub available: Vec<usize>,
    /// Group size.
    pub required: usize,
}

impl ShiftCandidates {
    /// Collects the employees available for a shift.
    pub fn for_shift(shift: &ShiftKey, required: usize, employees: &[Employee]) -> Self {
        let available = employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_available_for(shift))
            .map(|(i, _)| i)
            .collect();

        Self {
            available,
            required,
        }
    }

    /// Whether fewer employees are available than required.
    pub fn is_infeasible(&self) -> bool {
        self.available.len() < self.required
    }

    /// Candidate groups, as employee indices, in enumeration order.
    pub fn groups(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        Combinations::new(self.available.len(), self.required)
            .map(move |combo| combo.into_iter().map(|c| self.available[c]).collect())
    }
}
