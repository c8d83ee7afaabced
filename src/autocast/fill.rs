//! Phase 1: randomized base fill.
//!
//! # Algorithm
//!
//! 1. Collect ids already present in any row.
//! 2. Candidates = roster − assigned − released, in roster order.
//! 3. Shuffle candidates uniformly (Fisher–Yates).
//! 4. Walk rows in order; each empty row takes the next candidate as
//!    its sole occupant.
//! 5. Deal leftover candidates round-robin across stackable rows, one
//!    per row per round. With no stackable rows the leftovers stay
//!    unplaced.
//!
//! # Complexity
//! O(p + r) where p = roster size, r = rows.

use std::collections::{BTreeSet, HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::models::{assigned_ids, AssignmentRow, CatalogIndex, Performer};

/// What the base fill did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Empty rows that received a sole occupant.
    pub filled_rows: usize,
    /// Leftover candidates appended to stackable rows.
    pub stacked_placements: usize,
    /// Candidates no row could take, in shuffled order.
    pub unplaced: Vec<String>,
}

/// Candidates for the base fill: roster − assigned − released.
///
/// Roster order is kept; repeated roster ids appear once.
pub fn unassigned_candidates(
    rows: &[AssignmentRow],
    roster: &[Performer],
    released: &BTreeSet<String>,
) -> Vec<String> {
    let assigned = assigned_ids(rows);
    let mut seen = HashSet::new();
    roster
        .iter()
        .map(|p| p.id.as_str())
        .filter(|id| !assigned.contains(id) && !released.contains(*id))
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Runs the base fill in place.
///
/// Never removes or reorders occupants already present; only empty rows
/// and stackable rows gain performers.
pub fn base_fill<R: Rng + ?Sized>(
    rows: &mut [AssignmentRow],
    roster: &[Performer],
    released: &BTreeSet<String>,
    index: &CatalogIndex<'_>,
    rng: &mut R,
) -> FillReport {
    let mut candidates = unassigned_candidates(rows, roster, released);
    candidates.shuffle(rng);
    let mut queue: VecDeque<String> = candidates.into();
    let mut report = FillReport::default();

    for row in rows.iter_mut() {
        if !row.is_empty() {
            continue;
        }
        let Some(candidate) = queue.pop_front() else {
            break;
        };
        trace!(row = %row.id, performer = %candidate, "fill empty row");
        row.performers.push(candidate);
        report.filled_rows += 1;
    }

    if !queue.is_empty() {
        let stackable: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| index.is_stackable(row))
            .map(|(i, _)| i)
            .collect();

        if stackable.is_empty() {
            report.unplaced = queue.into_iter().collect();
        } else {
            for (turn, candidate) in queue.into_iter().enumerate() {
                let row = &mut rows[stackable[turn % stackable.len()]];
                trace!(row = %row.id, performer = %candidate, "stack overflow candidate");
                if row.add_performer(&candidate) {
                    report.stacked_placements += 1;
                }
            }
        }
    }

    debug!(
        filled = report.filled_rows,
        stacked = report.stacked_placements,
        unplaced = report.unplaced.len(),
        "base fill complete"
    );
    report
}
