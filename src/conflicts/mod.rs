//! Scene × performer conflict reporting.
//!
//! Builds a display-ready incidence grid from any assignment-row
//! snapshot, before or after auto-cast, and filters it for display.
//!
//! # Usage
//!
//! ```
//! use u_casting::conflicts::{CellState, ConflictMatrix, MatrixFilter};
//! use u_casting::models::{AssignmentRow, BlueprintRole, Catalog, Performer, Scene};
//!
//! let catalog = Catalog::new()
//!     .with_performer(Performer::new("P1", "Alice").with_conflict("Out of town 4/2"))
//!     .with_scene(Scene::new("S1", "Opening", "Act 1"))
//!     .with_role(BlueprintRole::new("R1", "Lead").with_scene("S1"))
//!     .with_row(AssignmentRow::new("A1", "R1").with_performer("P1"));
//!
//! let matrix = ConflictMatrix::build(&catalog);
//! assert_eq!(matrix.cell("S1", "P1"), CellState::Flagged);
//!
//! let view = MatrixFilter::new().with_hide_clear(true).apply(&matrix);
//! assert_eq!(view.cell("S1", "P1"), Some(CellState::Flagged));
//! ```

mod matrix;
mod view;

pub use matrix::{CellState, ConflictMatrix, MatrixPerformer, MatrixScene};
pub use view::{MatrixFilter, MatrixView};
