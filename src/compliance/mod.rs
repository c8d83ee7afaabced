//! Coverage-rule compliance.
//!
//! Decides whether a performer's rows cover both acts and enough distinct
//! scenes, and summarizes completeness across a whole cast.
//!
//! # Usage
//!
//! ```
//! use u_casting::compliance::ComplianceEvaluator;
//! use u_casting::models::{AssignmentRow, BlueprintRole, Catalog, Scene};
//!
//! let catalog = Catalog::new()
//!     .with_scene(Scene::new("S1", "Opening", "Act 1"))
//!     .with_scene(Scene::new("S2", "Ballad", "Act 1"))
//!     .with_scene(Scene::new("S3", "Finale", "Act 2"))
//!     .with_role(BlueprintRole::new("R1", "Lead").with_scenes(vec![
//!         "S1".into(), "S2".into(), "S3".into(),
//!     ]))
//!     .with_row(AssignmentRow::new("A1", "R1").with_performer("P1"));
//!
//! let evaluator = ComplianceEvaluator::default();
//! let status = evaluator.evaluate_performer("P1", &catalog.rows, &catalog.index());
//! assert!(status.is_compliant());
//! ```

mod evaluator;
mod kpi;

pub use evaluator::{ComplianceEvaluator, ComplianceRule, ComplianceStatus};
pub use kpi::CastingKpi;
