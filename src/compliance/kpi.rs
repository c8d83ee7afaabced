//! Casting completeness metrics.
//!
//! The engine reports incompleteness only through data shape: performers
//! left out of every row, or left non-compliant. `CastingKpi` re-runs the
//! evaluator over a row snapshot and collects both.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Considered | Roster minus released performers |
//! | Assigned | Considered performers in at least one row |
//! | Compliant | Considered performers meeting every rule |
//! | Compliance Rate | Compliant / Considered (1.0 when empty) |

use std::collections::{BTreeMap, BTreeSet};

use super::{ComplianceEvaluator, ComplianceRule};
use crate::models::{assigned_ids, AssignmentRow, Catalog, CatalogIndex};

/// Completeness indicators for a cast.
#[derive(Debug, Clone)]
pub struct CastingKpi {
    /// Performers considered (not released).
    pub considered: usize,
    /// Considered performers holding at least one row.
    pub assigned: usize,
    /// Considered performers holding no row, in roster order.
    pub unassigned: Vec<String>,
    /// Considered performers meeting every rule.
    pub compliant: usize,
    /// Unmet rules per non-compliant performer.
    pub unmet_by_performer: BTreeMap<String, Vec<ComplianceRule>>,
    /// Fraction of considered performers who are compliant (0.0..1.0).
    pub compliance_rate: f64,
}

impl CastingKpi {
    /// Computes indicators over the catalog's own rows.
    pub fn calculate(
        catalog: &Catalog,
        released: &BTreeSet<String>,
        evaluator: &ComplianceEvaluator,
    ) -> Self {
        Self::calculate_rows(catalog, &catalog.rows, released, evaluator)
    }

    /// Computes indicators over `rows`, resolving references in `catalog`.
    ///
    /// Use this on the rows returned by an auto-cast run.
    pub fn calculate_rows(
        catalog: &Catalog,
        rows: &[AssignmentRow],
        released: &BTreeSet<String>,
        evaluator: &ComplianceEvaluator,
    ) -> Self {
        let index: CatalogIndex<'_> = catalog.index();
        let assigned_set = assigned_ids(rows);

        let mut considered = 0;
        let mut assigned = 0;
        let mut unassigned = Vec::new();
        let mut compliant = 0;
        let mut unmet_by_performer = BTreeMap::new();

        for performer in &catalog.performers {
            if released.contains(&performer.id) {
                continue;
            }
            considered += 1;

            if assigned_set.contains(performer.id.as_str()) {
                assigned += 1;
            } else {
                unassigned.push(performer.id.clone());
            }

            let status = evaluator.evaluate_performer(&performer.id, rows, &index);
            if status.is_compliant() {
                compliant += 1;
            } else {
                unmet_by_performer.insert(performer.id.clone(), status.unmet());
            }
        }

        let compliance_rate = if considered == 0 {
            1.0
        } else {
            compliant as f64 / considered as f64
        };

        Self {
            considered,
            assigned,
            unassigned,
            compliant,
            unmet_by_performer,
            compliance_rate,
        }
    }

    /// Whether every considered performer is assigned and compliant.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty() && self.compliant == self.considered
    }
}
