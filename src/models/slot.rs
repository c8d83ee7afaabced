//! Staffing slot model.

use serde::{Deserialize, Serialize};

/// A staff position for one period of a production.
///
/// Slots sharing a `group` are siblings: their occupants are checked
/// against each other for pair constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique slot identifier.
    pub id: String,
    /// Grouping key (typically the production).
    pub group: String,
    /// Role label the occupant must be eligible for.
    pub role_label: String,
    /// Seasonal or time-period key used for availability.
    pub period: String,
    /// Current occupant, if any.
    pub occupant: Option<String>,
}

impl Slot {
    /// Creates an open slot.
    pub fn new(
        id: impl Into<String>,
        group: impl Into<String>,
        role_label: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            role_label: role_label.into(),
            period: period.into(),
            occupant: None,
        }
    }

    /// Places an occupant.
    pub fn with_occupant(mut self, performer_id: impl Into<String>) -> Self {
        self.occupant = Some(performer_id.into());
        self
    }

    /// Whether `other` is a different slot in the same group.
    pub fn is_sibling_of(&self, other: &Slot) -> bool {
        self.id != other.id && self.group == other.group
    }
}
