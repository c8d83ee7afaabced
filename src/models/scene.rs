//! Scene model.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A scene of the production.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Act tag ("Act 1", "Act 2", or freeform).
    pub act: Act,
    /// Running-order key. Lower sorts first.
    pub order: i32,
}

/// Categorical act tag of a scene.
///
/// Tags are kept verbatim. Act membership is decided by substring
/// markers (see [`crate::config::ComplianceConfig`]), so "Act 1",
/// "1" and "Act 1 (Prologue)" all belong to the first act.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Act(pub String);

impl Act {
    /// Creates an act tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag.
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Whether the tag contains `marker`. An empty marker never matches.
    pub fn matches(&self, marker: &str) -> bool {
        !marker.is_empty() && self.0.contains(marker)
    }
}

impl From<&str> for Act {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl Scene {
    /// Creates a scene.
    pub fn new(id: impl Into<String>, name: impl Into<String>, act: impl Into<Act>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            act: act.into(),
            order: 0,
        }
    }

    /// Sets the running-order key.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Running order, ties broken by id.
    pub fn running_order(&self, other: &Scene) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.id.cmp(&other.id))
    }
}
