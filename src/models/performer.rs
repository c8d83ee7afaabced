//! Performer model.
//!
//! A performer is anyone the engine can place: cast members filling
//! blueprint roles, and staff filling production slots. The same type
//! serves both; cast use grading attributes, staff use role eligibility,
//! availability and pair constraints.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A person who can be assigned to roles or slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performer {
    /// Unique performer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text conflict descriptors (not tied to a scene or date).
    pub conflicts: Vec<String>,
    /// Role labels this performer may fill (staff only).
    pub eligible_roles: BTreeSet<String>,
    /// Grading attributes (cast only).
    pub attributes: HashMap<String, String>,
    /// Ids of performers this one must not be co-scheduled with.
    pub constraints: BTreeSet<String>,
    /// Availability markings keyed by period (e.g. season or week).
    pub availability: HashMap<String, Availability>,
}

/// Availability marking for a period.
///
/// Periods with no marking are treated as [`Availability::Available`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    /// Free for the period.
    #[default]
    Available,
    /// May be free; placement warrants a warning.
    Tentative,
    /// Not free for the period.
    Unavailable,
}

impl Performer {
    /// Creates a performer with no conflicts, constraints or markings.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            conflicts: Vec::new(),
            eligible_roles: BTreeSet::new(),
            attributes: HashMap::new(),
            constraints: BTreeSet::new(),
            availability: HashMap::new(),
        }
    }

    /// Adds a conflict descriptor.
    pub fn with_conflict(mut self, descriptor: impl Into<String>) -> Self {
        self.conflicts.push(descriptor.into());
        self
    }

    /// Adds an eligible role label.
    pub fn with_eligible_role(mut self, role: impl Into<String>) -> Self {
        self.eligible_roles.insert(role.into());
        self
    }

    /// Adds a grading attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Declares a constraint against another performer id.
    pub fn with_constraint(mut self, other_id: impl Into<String>) -> Self {
        self.constraints.insert(other_id.into());
        self
    }

    /// Marks availability for a period.
    pub fn with_availability(mut self, period: impl Into<String>, status: Availability) -> Self {
        self.availability.insert(period.into(), status);
        self
    }

    /// Whether any conflict descriptor carries text.
    ///
    /// Blank descriptors are ignored.
    pub fn has_conflicts(&self) -> bool {
        self.conflicts.iter().any(|c| !c.trim().is_empty())
    }

    /// Non-blank conflict descriptors, trimmed.
    pub fn conflict_descriptors(&self) -> impl Iterator<Item = &str> {
        self.conflicts
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }

    /// Availability for a period (unmarked periods are available).
    pub fn availability_for(&self, period: &str) -> Availability {
        self.availability.get(period).copied().unwrap_or_default()
    }

    /// Whether this performer may fill the given role label.
    ///
    /// Comparison ignores case and surrounding whitespace.
    pub fn is_eligible_for(&self, role_label: &str) -> bool {
        let wanted = role_label.trim();
        self.eligible_roles
            .iter()
            .any(|r| r.trim().eq_ignore_ascii_case(wanted))
    }

    /// Whether a constraint links this performer and `other`, from either side.
    pub fn is_constrained_with(&self, other: &Performer) -> bool {
        self.constraints.contains(&other.id) || other.constraints.contains(&self.id)
    }
}
