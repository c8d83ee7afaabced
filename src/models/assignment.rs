//! Assignment row model.
//!
//! An assignment row binds one blueprint role to zero or more performers
//! for a single production. Rows are created externally, once per
//! (role, production); the engine only ever changes their performer lists.

use serde::{Deserialize, Serialize};

/// A production-scoped binding of a blueprint role to performers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    /// Unique row identifier.
    pub id: String,
    /// Blueprint role this row casts.
    pub role_id: String,
    /// Assigned performer ids, in placement order.
    pub performers: Vec<String>,
    /// Per-row scene set. `None` falls back to the role's default scenes.
    pub scene_override: Option<Vec<String>>,
}

impl AssignmentRow {
    /// Creates an empty row for a role.
    pub fn new(id: impl Into<String>, role_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role_id: role_id.into(),
            performers: Vec::new(),
            scene_override: None,
        }
    }

    /// Adds an occupant.
    pub fn with_performer(mut self, performer_id: impl Into<String>) -> Self {
        self.performers.push(performer_id.into());
        self
    }

    /// Overrides the role's default scene set for this row.
    pub fn with_scene_override(mut self, scene_ids: Vec<String>) -> Self {
        self.scene_override = Some(scene_ids);
        self
    }

    /// Whether the row has no occupants.
    pub fn is_empty(&self) -> bool {
        self.performers.is_empty()
    }

    /// Whether the performer already occupies this row.
    pub fn contains(&self, performer_id: &str) -> bool {
        self.performers.iter().any(|p| p == performer_id)
    }

    /// Appends a performer unless already present.
    ///
    /// Returns `true` if the performer was added.
    pub fn add_performer(&mut self, performer_id: &str) -> bool {
        if self.contains(performer_id) {
            return false;
        }
        self.performers.push(performer_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_performer_rejects_duplicates() {
        let mut row = AssignmentRow::new("A1", "R1");
        assert!(row.is_empty());
        assert!(row.add_performer("P1"));
        assert!(!row.add_performer("P1"));
        assert!(row.add_performer("P2"));
        assert_eq!(row.performers, vec!["P1", "P2"]);
    }

    #[test]
    fn test_scene_override() {
        let row = AssignmentRow::new("A1", "R1").with_scene_override(vec!["S9".into()]);
        assert_eq!(row.scene_override.as_deref(), Some(&["S9".to_string()][..]));
    }
}
