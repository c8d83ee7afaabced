//! Blueprint role model.

use serde::{Deserialize, Serialize};

/// A reusable role template, independent of any one production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintRole {
    /// Unique role identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the role may hold more than one performer (ensemble).
    pub stackable: bool,
    /// Scenes this role appears in unless a row overrides them.
    pub default_scenes: Vec<String>,
}

impl BlueprintRole {
    /// Creates a single-occupant role.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stackable: false,
            default_scenes: Vec::new(),
        }
    }

    /// Creates an ensemble role.
    pub fn ensemble(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name).with_stackable(true)
    }

    /// Sets the stackable flag.
    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Adds a default scene reference.
    pub fn with_scene(mut self, scene_id: impl Into<String>) -> Self {
        self.default_scenes.push(scene_id.into());
        self
    }

    /// Replaces the default scene references.
    pub fn with_scenes(mut self, scene_ids: Vec<String>) -> Self {
        self.default_scenes = scene_ids;
        self
    }
}
