//! Phase 2: bounded compliance repair.
//!
//! # Algorithm
//!
//! For each non-released roster performer, in roster order, up to
//! `max_iterations` times:
//! 1. Re-evaluate compliance against the performer's current rows.
//! 2. Stop if compliant.
//! 3. Scan stackable rows in row order, skipping rows that already hold
//!    the performer, and take the first whose effective scenes resolve
//!    at least one outstanding rule.
//! 4. Append the performer to that row, or stop if none qualifies.
//!
//! First match, not best match: the row resolving the most rules at once
//! is not searched for.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace};

use crate::compliance::ComplianceEvaluator;
use crate::models::{AssignmentRow, CatalogIndex, Performer};

/// A performer appended to a stackable row during repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairPlacement {
    /// Performer added.
    pub performer_id: String,
    /// Row that received them.
    pub row_id: String,
}

/// What the repair pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Placements in the order they were made.
    pub placements: Vec<RepairPlacement>,
    /// Performers still non-compliant afterwards, in roster order.
    pub non_compliant: Vec<String>,
}

impl RepairReport {
    /// Number of placements made for one performer.
    pub fn placements_for(&self, performer_id: &str) -> usize {
        self.placements
            .iter()
            .filter(|p| p.performer_id == performer_id)
            .count()
    }
}

/// Runs the repair pass in place.
pub fn repair(
    rows: &mut [AssignmentRow],
    roster: &[Performer],
    released: &BTreeSet<String>,
    index: &CatalogIndex<'_>,
    evaluator: &ComplianceEvaluator,
    max_iterations: usize,
) -> RepairReport {
    let stackable: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| index.is_stackable(row))
        .map(|(i, _)| i)
        .collect();

    let mut report = RepairReport::default();
    let mut visited = HashSet::new();

    for performer in roster {
        let id = performer.id.as_str();
        if released.contains(id) || !visited.insert(id) {
            continue;
        }

        for _ in 0..max_iterations {
            let status = evaluator.evaluate_performer(id, rows, index);
            if status.is_compliant() {
                break;
            }

            let target = stackable.iter().copied().find(|&i| {
                let row = &rows[i];
                !row.contains(id) && evaluator.would_resolve(&status, &index.effective_scenes(row))
            });

            let Some(i) = target else {
                trace!(performer = id, "no stackable row resolves remaining rules");
                break;
            };

            let row = &mut rows[i];
            row.performers.push(id.to_string());
            trace!(performer = id, row = %row.id, "repair placement");
            report.placements.push(RepairPlacement {
                performer_id: id.to_string(),
                row_id: row.id.clone(),
            });
        }

        if !evaluator.evaluate_performer(id, rows, index).is_compliant() {
            report.non_compliant.push(id.to_string());
        }
    }

    debug!(
        placements = report.placements.len(),
        non_compliant = report.non_compliant.len(),
        "compliance repair complete"
    );
    report
}
