//! Casting assignment and conflict resolution for the U-Engine ecosystem.
//!
//! Assigns performers to production roles under coverage rules, and
//! reports schedule and interpersonal conflicts over any assignment
//! snapshot. All operations are synchronous and pure apart from the
//! data they return; persistence belongs to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Performer`, `BlueprintRole`, `Scene`,
//!   `AssignmentRow`, `Catalog`, `Slot`
//! - **`compliance`**: Coverage rules (Act 1, Act 2, minimum scenes) and
//!   cast-wide completeness KPIs
//! - **`autocast`**: Randomized base fill plus bounded compliance repair
//! - **`conflicts`**: Scene × performer conflict matrix and view filters
//! - **`staffing`**: Availability / eligibility / pair-constraint rule engine
//! - **`config`**: Named engine settings with JSON loading
//! - **`validation`**: Advisory catalog integrity checks
//!
//! # Failure Model
//!
//! Engine operations never return errors. Incomplete results (performers
//! left unplaced or non-compliant) are visible in the returned data; use
//! [`compliance::CastingKpi`] to detect them. [`Error`] is raised only by
//! configuration loading.

pub mod autocast;
pub mod compliance;
pub mod config;
pub mod conflicts;
mod error;
pub mod models;
pub mod staffing;
pub mod validation;

pub use error::{Error, Result};
