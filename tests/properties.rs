//! Property-based tests for the casting engine.
//!
//! Verifies the structural guarantees that must hold for any catalog and
//! any random seed:
//! - No performer is listed twice in one row
//! - Base fill places everyone when capacity allows
//! - Repair is bounded per performer
//! - Base fill is a no-op on a fully assigned cast
//! - Matrix cells agree with a brute-force incidence check
//! - Pair constraints are symmetric

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_casting::autocast::{base_fill, unassigned_candidates, AutoCaster, CastRequest};
use u_casting::config::DEFAULT_MAX_REPAIR_ITERATIONS;
use u_casting::conflicts::{CellState, ConflictMatrix};
use u_casting::models::{AssignmentRow, BlueprintRole, Catalog, Performer, Scene, Slot};
use u_casting::staffing::{Severity, StaffingEngine};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

const SCENES: [(&str, &str); 4] = [
    ("S0", "Act 1"),
    ("S1", "Act 1"),
    ("S2", "Act 2"),
    ("S3", "Act 2"),
];

#[derive(Debug, Clone)]
struct RoleSpec {
    stackable: bool,
    scenes: Vec<usize>,
    occupant: Option<usize>,
}

fn role_strategy() -> impl Strategy<Value = RoleSpec> {
    (
        any::<bool>(),
        prop::collection::vec(0usize..SCENES.len(), 0..4),
        prop::option::of(0usize..12),
    )
        .prop_map(|(stackable, scenes, occupant)| RoleSpec {
            stackable,
            scenes,
            occupant,
        })
}

fn case_strategy() -> impl Strategy<Value = (Catalog, BTreeSet<String>)> {
    (
        0usize..12,
        prop::collection::vec(role_strategy(), 0..8),
        prop::collection::vec(any::<bool>(), 12),
        prop::collection::vec(any::<bool>(), 12),
    )
        .prop_map(|(n_performers, roles, released_mask, conflict_mask)| {
            let mut catalog = Catalog::new();
            for (id, act) in SCENES {
                catalog = catalog.with_scene(Scene::new(id, id, act));
            }
            for i in 0..n_performers {
                let mut p = Performer::new(format!("P{i}"), format!("Performer {i:02}"));
                if conflict_mask[i] {
                    p = p.with_conflict("Unavailable 6/1");
                }
                catalog = catalog.with_performer(p);
            }
            for (i, spec) in roles.iter().enumerate() {
                let scenes = spec.scenes.iter().map(|s| SCENES[*s].0.to_string()).collect();
                catalog = catalog.with_role(
                    BlueprintRole::new(format!("R{i}"), format!("Role {i}"))
                        .with_stackable(spec.stackable)
                        .with_scenes(scenes),
                );
                let mut row = AssignmentRow::new(format!("A{i}"), format!("R{i}"));
                if let Some(k) = spec.occupant.filter(|k| *k < n_performers) {
                    row = row.with_performer(format!("P{k}"));
                }
                catalog = catalog.with_row(row);
            }
            let released: BTreeSet<String> = (0..n_performers)
                .filter(|i| released_mask[*i])
                .map(|i| format!("P{i}"))
                .collect();
            (catalog, released)
        })
}

fn has_duplicate_occupant(row: &AssignmentRow) -> bool {
    let mut seen = HashSet::new();
    row.performers.iter().any(|p| !seen.insert(p))
}

// =============================================================================
// AUTO-CAST PROPERTIES
// =============================================================================

mod autocast_properties {
    use super::*;

    proptest! {
        /// No performer id appears twice in one output row.
        #[test]
        fn no_duplicate_occupancy((catalog, released) in case_strategy(), seed in any::<u64>()) {
            let request = CastRequest { catalog, released };
            let outcome = AutoCaster::new().cast_seeded(&request, seed);
            for row in &outcome.rows {
                prop_assert!(!has_duplicate_occupant(row), "row {} has a duplicate", row.id);
            }
        }

        /// Rows keep their ids and order, and existing occupants stay first.
        #[test]
        fn rows_only_grow((catalog, released) in case_strategy(), seed in any::<u64>()) {
            let request = CastRequest { catalog, released };
            let outcome = AutoCaster::new().cast_seeded(&request, seed);
            prop_assert_eq!(outcome.rows.len(), request.catalog.rows.len());
            for (before, after) in request.catalog.rows.iter().zip(&outcome.rows) {
                prop_assert_eq!(&before.id, &after.id);
                prop_assert!(after.performers.starts_with(&before.performers));
            }
        }

        /// Released performers are never placed.
        #[test]
        fn released_never_placed((catalog, released) in case_strategy(), seed in any::<u64>()) {
            let request = CastRequest { catalog, released };
            let outcome = AutoCaster::new().cast_seeded(&request, seed);
            for row in &outcome.rows {
                for (before_idx, id) in row.performers.iter().enumerate() {
                    let was_there = request
                        .catalog
                        .rows
                        .iter()
                        .find(|r| r.id == row.id)
                        .is_some_and(|r| before_idx < r.performers.len());
                    prop_assert!(was_there || !request.released.contains(id));
                }
            }
        }

        /// With enough capacity, base fill leaves nobody unassigned.
        #[test]
        fn base_fill_saturates((catalog, released) in case_strategy(), seed in any::<u64>()) {
            let index = catalog.index();
            let candidates = unassigned_candidates(&catalog.rows, &catalog.performers, &released);
            let empty_rows = catalog.rows.iter().filter(|r| r.is_empty()).count();
            let any_stackable = catalog.rows.iter().any(|r| index.is_stackable(r));

            let mut rows = catalog.rows.clone();
            let report = base_fill(
                &mut rows,
                &catalog.performers,
                &released,
                &index,
                &mut SmallRng::seed_from_u64(seed),
            );

            if any_stackable || candidates.len() <= empty_rows {
                prop_assert!(report.unplaced.is_empty());
                for p in &catalog.performers {
                    if !released.contains(&p.id) {
                        prop_assert!(rows.iter().any(|r| r.contains(&p.id)), "{} unplaced", p.id);
                    }
                }
            } else {
                prop_assert_eq!(report.unplaced.len(), candidates.len() - empty_rows);
            }
        }

        /// Repair places each performer at most the configured number of times.
        #[test]
        fn repair_is_bounded((catalog, released) in case_strategy(), seed in any::<u64>()) {
            let request = CastRequest { catalog, released };
            let outcome = AutoCaster::new().cast_seeded(&request, seed);
            for p in &request.catalog.performers {
                let placements = outcome
                    .summary
                    .repairs
                    .iter()
                    .filter(|r| r.performer_id == p.id)
                    .count();
                prop_assert!(placements <= DEFAULT_MAX_REPAIR_ITERATIONS);
            }
        }

        /// Base fill changes nothing when every row is filled and everyone is placed.
        #[test]
        fn base_fill_noop_when_fully_assigned(
            n in 1usize..8,
            stackable in prop::collection::vec(any::<bool>(), 8),
            seed in any::<u64>(),
        ) {
            let mut catalog = Catalog::new();
            for i in 0..n {
                catalog = catalog
                    .with_performer(Performer::new(format!("P{i}"), format!("Performer {i}")))
                    .with_role(
                        BlueprintRole::new(format!("R{i}"), format!("Role {i}"))
                            .with_stackable(stackable[i]),
                    )
                    .with_row(
                        AssignmentRow::new(format!("A{i}"), format!("R{i}"))
                            .with_performer(format!("P{i}")),
                    );
            }

            let mut rows = catalog.rows.clone();
            let report = base_fill(
                &mut rows,
                &catalog.performers,
                &BTreeSet::new(),
                &catalog.index(),
                &mut SmallRng::seed_from_u64(seed),
            );
            prop_assert_eq!(rows, catalog.rows.clone());
            prop_assert_eq!(report.filled_rows, 0);
            prop_assert_eq!(report.stacked_placements, 0);
        }
    }
}

// =============================================================================
// CONFLICT MATRIX PROPERTIES
// =============================================================================

mod matrix_properties {
    use super::*;

    proptest! {
        /// Each cell matches a direct scan of rows and effective scenes.
        #[test]
        fn cells_match_incidence((catalog, _released) in case_strategy()) {
            let matrix = ConflictMatrix::build(&catalog);
            let index = catalog.index();

            for (scene_id, _) in SCENES {
                for p in &catalog.performers {
                    let present = catalog.rows.iter().any(|row| {
                        row.contains(&p.id)
                            && index.effective_scene_ids(row).iter().any(|s| s == scene_id)
                    });
                    let expected = match (present, p.has_conflicts()) {
                        (false, _) => CellState::Absent,
                        (true, true) => CellState::Flagged,
                        (true, false) => CellState::Clear,
                    };
                    prop_assert_eq!(matrix.cell(scene_id, &p.id), expected);
                }
            }
        }

        /// Columns are exactly the present performers, sorted by name.
        #[test]
        fn columns_present_and_sorted((catalog, _released) in case_strategy()) {
            let matrix = ConflictMatrix::build(&catalog);
            let names: Vec<&str> = matrix.performers().iter().map(|p| p.name.as_str()).collect();
            let mut sorted = names.clone();
            sorted.sort_by_key(|n| n.to_lowercase());
            prop_assert_eq!(&names, &sorted);

            for p in matrix.performers() {
                prop_assert!(SCENES
                    .iter()
                    .any(|(s, _)| matrix.cell(s, &p.id) != CellState::Absent));
            }
        }
    }
}

// =============================================================================
// STAFFING PROPERTIES
// =============================================================================

mod staffing_properties {
    use super::*;

    proptest! {
        /// A constraint declared on either side reds out both placements.
        #[test]
        fn constraint_symmetry(declared_by_a in any::<bool>(), also_b in any::<bool>()) {
            let mut a = Performer::new("A", "Avery").with_eligible_role("Crew");
            let mut b = Performer::new("B", "Blake").with_eligible_role("Crew");
            if declared_by_a || also_b {
                a = a.with_constraint("B");
            }
            if !declared_by_a || also_b {
                b = b.with_constraint("A");
            }
            let roster = vec![a, b];
            let engine = StaffingEngine::standard();

            let a_first = vec![
                Slot::new("X1", "Show", "Crew", "Fall").with_occupant("A"),
                Slot::new("X2", "Show", "Crew", "Fall"),
            ];
            let b_first = vec![
                Slot::new("X1", "Show", "Crew", "Fall").with_occupant("B"),
                Slot::new("X2", "Show", "Crew", "Fall"),
            ];

            let b_next_to_a = engine
                .evaluate_on_board(&roster[1], "X2", &a_first, &roster)
                .unwrap();
            let a_next_to_b = engine
                .evaluate_on_board(&roster[0], "X2", &b_first, &roster)
                .unwrap();
            prop_assert_eq!(b_next_to_a.severity, Severity::Red);
            prop_assert_eq!(a_next_to_b.severity, Severity::Red);
        }
    }
}
