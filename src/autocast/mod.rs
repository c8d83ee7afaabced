//! Two-phase auto-cast allocation.
//!
//! Fills empty assignment rows from the unassigned roster, then repairs
//! non-compliant performers by stacking them into ensemble rows.
//!
//! # Phases
//!
//! - **Base fill** ([`base_fill`]): randomized. Shuffles the unassigned
//!   roster, gives each empty row one performer, and deals leftovers
//!   round-robin across stackable rows.
//! - **Repair** ([`repair`]): deterministic. Walks the roster and adds
//!   each non-compliant performer to the first stackable row that fixes
//!   an outstanding rule, for a bounded number of iterations.
//!
//! Rows are never added, removed or reordered, and existing occupants
//! are never displaced. The engine cannot fail; anything it could not
//! achieve shows up in [`CastSummary`] and in the returned rows.

mod fill;
mod repair;

pub use fill::{base_fill, unassigned_candidates, FillReport};
pub use repair::{repair, RepairPlacement, RepairReport};

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::compliance::ComplianceEvaluator;
use crate::config::{AutoCastConfig, EngineConfig};
use crate::models::{AssignmentRow, Catalog};

/// Input container for an auto-cast run.
#[derive(Debug, Clone, Default)]
pub struct CastRequest {
    /// Catalog snapshot; its rows are the starting assignment.
    pub catalog: Catalog,
    /// Performer ids excluded from allocation for this run.
    pub released: BTreeSet<String>,
}

impl CastRequest {
    /// Creates a request with nobody released.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            released: BTreeSet::new(),
        }
    }

    /// Releases a performer from this run.
    pub fn with_released(mut self, performer_id: impl Into<String>) -> Self {
        self.released.insert(performer_id.into());
        self
    }
}

/// Summary of an auto-cast run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastSummary {
    /// Empty rows given a sole occupant in the base fill.
    pub filled_rows: usize,
    /// Leftover candidates stacked into ensemble rows in the base fill.
    pub stacked_placements: usize,
    /// Candidates the base fill could not place anywhere.
    pub unplaced: Vec<String>,
    /// Repair-phase placements, in order.
    pub repairs: Vec<RepairPlacement>,
    /// Performers still non-compliant after repair.
    pub non_compliant: Vec<String>,
}

impl CastSummary {
    /// Whether every considered performer ended placed and compliant.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty() && self.non_compliant.is_empty()
    }
}

/// Result of an auto-cast run.
#[derive(Debug, Clone)]
pub struct CastOutcome {
    /// Updated rows, same ids and order as the input.
    pub rows: Vec<AssignmentRow>,
    /// What happened.
    pub summary: CastSummary,
}

/// Randomized greedy allocator with bounded compliance repair.
///
/// # Example
///
/// ```
/// use u_casting::autocast::{AutoCaster, CastRequest};
/// use u_casting::models::{AssignmentRow, BlueprintRole, Catalog, Performer};
///
/// let catalog = Catalog::new()
///     .with_performer(Performer::new("P1", "Alice"))
///     .with_performer(Performer::new("P2", "Bob"))
///     .with_role(BlueprintRole::new("R1", "Lead"))
///     .with_role(BlueprintRole::ensemble("R2", "Chorus"))
///     .with_row(AssignmentRow::new("A1", "R1"))
///     .with_row(AssignmentRow::new("A2", "R2"));
///
/// let outcome = AutoCaster::new().cast_seeded(&CastRequest::new(catalog), 42);
/// assert_eq!(outcome.rows[0].performers.len(), 1);
/// assert_eq!(outcome.rows[1].performers.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutoCaster {
    evaluator: ComplianceEvaluator,
    config: AutoCastConfig,
}

impl AutoCaster {
    /// Creates an auto-caster with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an auto-caster from an engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            evaluator: ComplianceEvaluator::new(config.compliance.clone()),
            config: config.autocast.clone(),
        }
    }

    /// Sets the compliance evaluator used by the repair phase.
    pub fn with_evaluator(mut self, evaluator: ComplianceEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Sets the auto-cast settings.
    pub fn with_config(mut self, config: AutoCastConfig) -> Self {
        self.config = config;
        self
    }

    /// The compliance evaluator in use.
    pub fn evaluator(&self) -> &ComplianceEvaluator {
        &self.evaluator
    }

    /// Runs both phases with the caller's random source.
    ///
    /// Production callers pass `&mut rand::rng()`; tests pass a seeded RNG.
    pub fn cast<R: Rng + ?Sized>(&self, request: &CastRequest, rng: &mut R) -> CastOutcome {
        let catalog = &request.catalog;
        let index = catalog.index();
        let mut rows = catalog.rows.clone();

        let fill = base_fill(
            &mut rows,
            &catalog.performers,
            &request.released,
            &index,
            rng,
        );
        let repaired = repair(
            &mut rows,
            &catalog.performers,
            &request.released,
            &index,
            &self.evaluator,
            self.config.max_repair_iterations,
        );

        let summary = CastSummary {
            filled_rows: fill.filled_rows,
            stacked_placements: fill.stacked_placements,
            unplaced: fill.unplaced,
            repairs: repaired.placements,
            non_compliant: repaired.non_compliant,
        };

        info!(
            rows = rows.len(),
            filled = summary.filled_rows,
            stacked = summary.stacked_placements,
            repairs = summary.repairs.len(),
            unplaced = summary.unplaced.len(),
            non_compliant = summary.non_compliant.len(),
            "auto-cast complete"
        );

        CastOutcome { rows, summary }
    }

    /// Runs both phases with a reproducible seed.
    pub fn cast_seeded(&self, request: &CastRequest, seed: u64) -> CastOutcome {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.cast(request, &mut rng)
    }
}
