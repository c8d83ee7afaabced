//! Casting domain models.
//!
//! Provides the data types the engine reads and mutates. Reference data
//! (performers, roles, scenes) is owned by the surrounding application
//! and read-only here; assignment rows are the only entity the engine
//! changes, and only their performer lists.
//!
//! # Domain Mappings
//!
//! | u-casting | Theatre | Dance | Film |
//! |-----------|---------|-------|------|
//! | Performer | Actor / Crew | Dancer | Cast member |
//! | BlueprintRole | Role | Part | Character |
//! | Scene | Scene / Number | Piece | Scene |
//! | AssignmentRow | Cast list entry | Casting sheet line | Call sheet line |
//! | Slot | Production staff post | Rehearsal lead | Crew position |

mod assignment;
mod catalog;
mod performer;
mod role;
mod scene;
mod slot;

pub use assignment::AssignmentRow;
pub use catalog::{assigned_ids, Catalog, CatalogIndex};
pub use performer::{Availability, Performer};
pub use role::BlueprintRole;
pub use scene::{Act, Scene};
pub use slot::Slot;
