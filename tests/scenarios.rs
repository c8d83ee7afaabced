//! End-to-end casting scenarios.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_casting::autocast::{base_fill, repair, AutoCaster, CastRequest};
use u_casting::compliance::{CastingKpi, ComplianceEvaluator};
use u_casting::conflicts::{CellState, ConflictMatrix};
use u_casting::models::{AssignmentRow, BlueprintRole, Catalog, Performer, Scene, Slot};
use u_casting::staffing::{Severity, StaffingEngine};

fn total_assigned(rows: &[AssignmentRow]) -> usize {
    rows.iter().map(|r| r.performers.len()).sum()
}

#[test]
fn lead_and_chorus_absorb_three_performers() {
    let catalog = Catalog::new()
        .with_performer(Performer::new("alice", "Alice"))
        .with_performer(Performer::new("bob", "Bob"))
        .with_performer(Performer::new("carol", "Carol"))
        .with_role(BlueprintRole::new("lead", "Lead"))
        .with_role(BlueprintRole::ensemble("chorus", "Chorus"))
        .with_row(AssignmentRow::new("row-lead", "lead"))
        .with_row(AssignmentRow::new("row-chorus", "chorus"));

    for seed in 0..20 {
        let mut rows = catalog.rows.clone();
        let mut rng = SmallRng::seed_from_u64(seed);
        base_fill(
            &mut rows,
            &catalog.performers,
            &BTreeSet::new(),
            &catalog.index(),
            &mut rng,
        );

        assert_eq!(rows[0].performers.len(), 1);
        assert_eq!(rows[1].performers.len(), 2);
        assert_eq!(total_assigned(&rows), 3);
    }
}

#[test]
fn repair_adds_dana_to_stackable_role() {
    let catalog = Catalog::new()
        .with_performer(Performer::new("dana", "Dana"))
        .with_scene(Scene::new("S1", "Opening", "Act 1").with_order(1))
        .with_scene(Scene::new("S2", "Finale", "Act 2").with_order(2))
        .with_role(BlueprintRole::new("X", "Soloist").with_scene("S1"))
        .with_role(BlueprintRole::ensemble("Y", "Ensemble").with_scene("S1").with_scene("S2"))
        .with_row(AssignmentRow::new("row-x", "X").with_performer("dana"))
        .with_row(AssignmentRow::new("row-y", "Y"));
    let index = catalog.index();
    let evaluator = ComplianceEvaluator::default();

    let mut rows = catalog.rows.clone();
    let report = repair(&mut rows, &catalog.performers, &BTreeSet::new(), &index, &evaluator, 3);

    assert!(rows[1].contains("dana"));
    assert_eq!(report.placements_for("dana"), 1);

    let status = evaluator.evaluate_performer("dana", &rows, &index);
    assert!(status.has_act_one);
    assert!(status.has_act_two);
    // Two distinct scenes still fall short of the default minimum of three.
    assert!(!status.has_min_scenes);
    assert_eq!(report.non_compliant, vec!["dana"]);
}

#[test]
fn leftovers_stay_unassigned_without_stackable_rows() {
    let mut catalog = Catalog::new()
        .with_role(BlueprintRole::new("R1", "Lead"))
        .with_role(BlueprintRole::new("R2", "Villain"))
        .with_role(BlueprintRole::new("R3", "Sidekick"))
        .with_row(AssignmentRow::new("A1", "R1"))
        .with_row(AssignmentRow::new("A2", "R2"))
        .with_row(AssignmentRow::new("A3", "R3"));
    for i in 0..5 {
        catalog = catalog.with_performer(Performer::new(format!("P{i}"), format!("Performer {i}")));
    }
    let request = CastRequest::new(catalog);

    let outcome = AutoCaster::new().cast_seeded(&request, 17);

    assert_eq!(outcome.summary.filled_rows, 3);
    assert_eq!(outcome.summary.unplaced.len(), 2);
    assert!(outcome.rows.iter().all(|r| r.performers.len() == 1));
    assert_eq!(total_assigned(&outcome.rows), 3);

    let kpi = CastingKpi::calculate_rows(
        &request.catalog,
        &outcome.rows,
        &request.released,
        AutoCaster::new().evaluator(),
    );
    assert_eq!(kpi.unassigned.len(), 2);
    assert!(!kpi.is_complete());
}

#[test]
fn eve_conflicts_with_frank_in_every_sibling_slot() {
    let roster = vec![
        Performer::new("eve", "Eve")
            .with_eligible_role("Designer")
            .with_constraint("frank"),
        Performer::new("frank", "Frank").with_eligible_role("Director"),
    ];
    let slots = vec![
        Slot::new("s1", "Spring Show", "Director", "Spring").with_occupant("frank"),
        Slot::new("s2", "Spring Show", "Designer", "Spring"),
        Slot::new("s3", "Spring Show", "Music Director", "Spring"),
        Slot::new("s4", "Spring Show", "Stage Manager", "Spring"),
    ];
    let engine = StaffingEngine::standard();

    for slot_id in ["s2", "s3", "s4"] {
        let verdict = engine
            .evaluate_on_board(&roster[0], slot_id, &slots, &roster)
            .unwrap();
        assert_eq!(verdict.severity, Severity::Red, "slot {slot_id}");
        assert!(verdict.reasons.iter().any(|r| r.contains("Frank")));
    }
}

#[test]
fn matrix_reflects_auto_cast_result() {
    let catalog = Catalog::new()
        .with_performer(Performer::new("P1", "Alice").with_conflict("Tech week 5/2"))
        .with_performer(Performer::new("P2", "Bob"))
        .with_scene(Scene::new("S1", "Opening", "Act 1").with_order(1))
        .with_scene(Scene::new("S2", "Finale", "Act 2").with_order(2))
        .with_role(BlueprintRole::ensemble("R1", "Chorus").with_scene("S1").with_scene("S2"))
        .with_row(AssignmentRow::new("A1", "R1"));
    let request = CastRequest::new(catalog);

    let before = ConflictMatrix::build(&request.catalog);
    assert!(before.performers().is_empty());

    let outcome = AutoCaster::new().cast_seeded(&request, 2);
    let after = ConflictMatrix::build_rows(&request.catalog, &outcome.rows);

    assert_eq!(after.performers().len(), 2);
    assert_eq!(after.cell("S1", "P1"), CellState::Flagged);
    assert_eq!(after.cell("S2", "P2"), CellState::Clear);
}
