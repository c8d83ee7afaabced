//! Catalog snapshot and lookup index.
//!
//! The catalog is the read-only snapshot a caller hands the engine:
//! performers, blueprint roles, scenes and the current assignment rows.
//! [`CatalogIndex`] resolves ids against the reference data. Unknown ids
//! resolve to nothing instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::{AssignmentRow, BlueprintRole, Performer, Scene};

/// A snapshot of catalog data for one engine invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Performer roster, in roster order.
    pub performers: Vec<Performer>,
    /// Blueprint roles.
    pub roles: Vec<BlueprintRole>,
    /// Scenes.
    pub scenes: Vec<Scene>,
    /// Assignment rows, in row order.
    pub rows: Vec<AssignmentRow>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a performer.
    pub fn with_performer(mut self, performer: Performer) -> Self {
        self.performers.push(performer);
        self
    }

    /// Adds a blueprint role.
    pub fn with_role(mut self, role: BlueprintRole) -> Self {
        self.roles.push(role);
        self
    }

    /// Adds a scene.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Adds an assignment row.
    pub fn with_row(mut self, row: AssignmentRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Builds a lookup index over the reference data.
    pub fn index(&self) -> CatalogIndex<'_> {
        CatalogIndex::new(&self.performers, &self.roles, &self.scenes)
    }

    /// Ids of every performer occupying at least one row.
    pub fn assigned_ids(&self) -> BTreeSet<&str> {
        assigned_ids(&self.rows)
    }
}

/// Ids of every performer occupying at least one of `rows`.
pub fn assigned_ids(rows: &[AssignmentRow]) -> BTreeSet<&str> {
    rows.iter()
        .flat_map(|r| r.performers.iter().map(String::as_str))
        .collect()
}

/// Id lookup over performers, roles and scenes.
///
/// Rows are deliberately not indexed: the auto-caster mutates them while
/// the index stays borrowed.
#[derive(Debug, Clone)]
pub struct CatalogIndex<'a> {
    performers: HashMap<&'a str, &'a Performer>,
    roles: HashMap<&'a str, &'a BlueprintRole>,
    scenes: HashMap<&'a str, &'a Scene>,
}

impl<'a> CatalogIndex<'a> {
    /// Indexes the given reference data. Later duplicates win.
    pub fn new(
        performers: &'a [Performer],
        roles: &'a [BlueprintRole],
        scenes: &'a [Scene],
    ) -> Self {
        Self {
            performers: performers.iter().map(|p| (p.id.as_str(), p)).collect(),
            roles: roles.iter().map(|r| (r.id.as_str(), r)).collect(),
            scenes: scenes.iter().map(|s| (s.id.as_str(), s)).collect(),
        }
    }

    /// Looks up a performer.
    pub fn performer(&self, id: &str) -> Option<&'a Performer> {
        self.performers.get(id).copied()
    }

    /// Looks up a blueprint role.
    pub fn role(&self, id: &str) -> Option<&'a BlueprintRole> {
        self.roles.get(id).copied()
    }

    /// Looks up a scene.
    pub fn scene(&self, id: &str) -> Option<&'a Scene> {
        self.scenes.get(id).copied()
    }

    /// Whether the row's role is stackable. Unknown roles are not.
    pub fn is_stackable(&self, row: &AssignmentRow) -> bool {
        self.role(&row.role_id).is_some_and(|r| r.stackable)
    }

    /// Scene ids in effect for a row: its override, else the role default.
    ///
    /// A row with no override and an unknown role has no scenes.
    pub fn effective_scene_ids<'r>(&self, row: &'r AssignmentRow) -> &'r [String]
    where
        'a: 'r,
    {
        match &row.scene_override {
            Some(ids) => ids,
            None => self
                .role(&row.role_id)
                .map(|r| r.default_scenes.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Resolved scenes in effect for a row, deduplicated, unknown ids skipped.
    pub fn effective_scenes(&self, row: &AssignmentRow) -> Vec<&'a Scene> {
        let mut seen = BTreeSet::new();
        self.effective_scene_ids(row)
            .iter()
            .filter_map(|id| self.scene(id))
            .filter(|s| seen.insert(s.id.as_str()))
            .collect()
    }
}
