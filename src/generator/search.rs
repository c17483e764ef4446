//! Depth-first search across shifts.
//!
//! # Algorithm
//!
//! Walks the Cartesian product of per-shift candidate groups in
//! lexicographic order: shifts in declared order, the last shift varying
//! fastest, groups in enumeration order. A group is skipped as soon as one
//! of its members already works another shift on the same day, which
//! removes exactly the product entries that would fail the daily
//! no-double-booking check. The valid schedules therefore come out in the
//! same order a filtered product would produce them.
//!
//! Groups are drawn from each shift's iterator only when the search
//! reaches that depth. Every group drawn counts as a step toward the
//! deadline poll, including groups that are pruned right away.
//!
//! The search stops once `cap` schedules are found or the deadline passes.
//!
//! # Complexity
//! Worst case O(∏ C(a_i, r_i)) over shifts i with a_i available
//! employees and requirement r_i.

use chrono::Weekday;
use std::collections::HashSet;
use std::ops::ControlFlow;
use std::time::Instant;

use super::candidates::ShiftCandidates;
use crate::models::{Employee, Schedule, ShiftAssignment, ShiftKey};

// Deadline is polled once per this many search steps.
const DEADLINE_POLL_INTERVAL: u64 = 64;

/// Why the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchEnd {
    Exhausted,
    CapReached,
    DeadlineExceeded,
}

/// Result of a search run.
#[derive(Debug)]
pub(crate) struct SearchResult {
    pub schedules: Vec<Schedule>,
    pub end: SearchEnd,
    pub explored: u64,
}

pub(crate) struct Search<'a> {
    shifts: &'a [ShiftKey],
    candidates: &'a [ShiftCandidates],
    employees: &'a [Employee],
    cap: usize,
    deadline: Option<Instant>,
    busy: HashSet<(Weekday, usize)>,
    chosen: Vec<Vec<usize>>,
    found: Vec<Schedule>,
    explored: u64,
    steps: u64,
}

impl<'a> Search<'a> {
    /// Prepares a search. `candidates[i]` describes the groups of `shifts[i]`.
    pub fn new(
        shifts: &'a [ShiftKey],
        candidates: &'a [ShiftCandidates],
        employees: &'a [Employee],
        cap: usize,
        deadline: Option<Instant>,
    ) -> Self {
        Self {
            shifts,
            candidates,
            employees,
            cap,
            deadline,
            busy: HashSet::new(),
            chosen: Vec::with_capacity(shifts.len()),
            found: Vec::new(),
            explored: 0,
            steps: 0,
        }
    }

    pub fn run(mut self) -> SearchResult {
        let end = match self.descend(0) {
            ControlFlow::Break(end) => end,
            ControlFlow::Continue(()) => SearchEnd::Exhausted,
        };

        SearchResult {
            schedules: self.found,
            end,
            explored: self.explored,
        }
    }

    fn descend(&mut self, depth: usize) -> ControlFlow<SearchEnd> {
        if depth == 0 && self.deadline_passed() {
            return ControlFlow::Break(SearchEnd::DeadlineExceeded);
        }
        self.explored += 1;

        if depth == self.shifts.len() {
            self.found.push(self.build_schedule());
            return if self.found.len() >= self.cap {
                ControlFlow::Break(SearchEnd::CapReached)
            } else {
                ControlFlow::Continue(())
            };
        }

        let day = self.shifts[depth].day;
        let candidates = self.candidates;
        for group in candidates[depth].groups() {
            if self.deadline_passed() {
                return ControlFlow::Break(SearchEnd::DeadlineExceeded);
            }
            if group.iter().any(|&e| self.busy.contains(&(day, e))) {
                continue;
            }

            for &e in &group {
                self.busy.insert((day, e));
            }
            self.chosen.push(group);

            let flow = self.descend(depth + 1);

            if let Some(group) = self.chosen.pop() {
                for e in group {
                    self.busy.remove(&(day, e));
                }
            }

            if let ControlFlow::Break(end) = flow {
                return ControlFlow::Break(end);
            }
        }

        ControlFlow::Continue(())
    }

    fn deadline_passed(&mut self) -> bool {
        let due = self.steps % DEADLINE_POLL_INTERVAL == 0;
        self.steps += 1;
        due && self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn build_schedule(&self) -> Schedule {
        let mut schedule = Schedule::new();
        for (shift, group) in self.shifts.iter().zip(&self.chosen) {
            let employees = group
                .iter()
                .map(|&e| self.employees[e].name.clone())
                .collect();
            schedule.add_assignment(ShiftAssignment::new(shift.clone(), employees));
        }
        schedule
    }
}
