//! Scene × performer conflict matrix.
//!
//! # Algorithm
//!
//! 1. For each assignment row, resolve its effective scenes (override,
//!    else role default) and record every occupant as present in each.
//! 2. Columns are the performers present in at least one scene, sorted
//!    by display name; rows are all catalog scenes in running order.
//! 3. A present cell is *flagged* when the performer carries any
//!    non-blank conflict descriptor, else *clear*.
//!
//! # Limitation
//! Flagging is performer-level, not temporal: a descriptor flags every
//! scene the performer is in, whether or not its text names that scene
//! or date.
//!
//! # Complexity
//! O(r · s · k) where r = rows, s = scenes per row, k = occupants per row.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{AssignmentRow, Catalog};
use crate::staffing::Severity;

/// State of one (scene, performer) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Performer is in no role covering this scene.
    Absent,
    /// Present, with no conflicts on record.
    Clear,
    /// Present, with at least one conflict on record.
    Flagged,
}

impl CellState {
    /// Severity on the shared escalation scale. Absent cells have none.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Absent => None,
            Self::Clear => Some(Severity::Green),
            Self::Flagged => Some(Severity::Red),
        }
    }

    /// Whether the performer appears in the scene.
    pub fn is_present(self) -> bool {
        self != Self::Absent
    }
}

/// A scene heading in the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixScene {
    /// Scene identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Act label, used for grouping.
    pub act: String,
    /// Running order within the show.
    pub order: i32,
}

/// A performer column in the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixPerformer {
    pub id: String,
    pub name: String,
    /// Non-blank conflict descriptors, used as reason strings.
    pub conflicts: Vec<String>,
}

impl MatrixPerformer {
    /// Whether this performer's present cells are flagged.
    pub fn is_flagged(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Display-ready conflict grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictMatrix {
    scenes: Vec<MatrixScene>,
    performers: Vec<MatrixPerformer>,
    /// scene id → ids of performers present.
    incidence: HashMap<String, BTreeSet<String>>,
}

impl ConflictMatrix {
    /// Builds the matrix from the catalog's own rows.
    pub fn build(catalog: &Catalog) -> Self {
        Self::build_rows(catalog, &catalog.rows)
    }

    /// Builds the matrix from `rows`, resolving references in `catalog`.
    ///
    /// Unknown roles, scenes and performers contribute nothing.
    pub fn build_rows(catalog: &Catalog, rows: &[AssignmentRow]) -> Self {
        let index = catalog.index();
        let mut incidence: HashMap<String, BTreeSet<String>> = HashMap::new();

        for row in rows {
            let scenes = index.effective_scenes(row);
            for performer_id in &row.performers {
                if index.performer(performer_id).is_none() {
                    continue;
                }
                for scene in &scenes {
                    incidence
                        .entry(scene.id.clone())
                        .or_default()
                        .insert(performer_id.clone());
                }
            }
        }

        let mut seen_scenes = BTreeSet::new();
        let mut scenes: Vec<_> = catalog
            .scenes
            .iter()
            .filter(|s| seen_scenes.insert(s.id.as_str()))
            .collect();
        scenes.sort_by(|a, b| a.running_order(b));
        let scenes: Vec<MatrixScene> = scenes
            .into_iter()
            .map(|s| MatrixScene {
                id: s.id.clone(),
                name: s.name.clone(),
                act: s.act.tag().to_string(),
                order: s.order,
            })
            .collect();

        let present: BTreeSet<&str> = incidence
            .values()
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect();
        let mut performers: Vec<MatrixPerformer> = present
            .into_iter()
            .filter_map(|id| index.performer(id))
            .map(|p| MatrixPerformer {
                id: p.id.clone(),
                name: p.name.clone(),
                conflicts: p.conflict_descriptors().map(str::to_string).collect(),
            })
            .collect();
        performers.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });

        debug!(
            scenes = scenes.len(),
            performers = performers.len(),
            "conflict matrix built"
        );

        Self {
            scenes,
            performers,
            incidence,
        }
    }

    /// Scene headings in running order.
    pub fn scenes(&self) -> &[MatrixScene] {
        &self.scenes
    }

    /// Performer columns in display-name order.
    pub fn performers(&self) -> &[MatrixPerformer] {
        &self.performers
    }

    /// Looks up a performer column.
    pub fn performer(&self, performer_id: &str) -> Option<&MatrixPerformer> {
        self.performers.iter().find(|p| p.id == performer_id)
    }

    /// State of a cell. Unknown ids are absent.
    pub fn cell(&self, scene_id: &str, performer_id: &str) -> CellState {
        let present = self
            .incidence
            .get(scene_id)
            .is_some_and(|ids| ids.contains(performer_id));
        if !present {
            return CellState::Absent;
        }
        match self.performer(performer_id) {
            Some(p) if p.is_flagged() => CellState::Flagged,
            _ => CellState::Clear,
        }
    }

    /// Reason strings for a performer's flagged cells.
    pub fn reasons(&self, performer_id: &str) -> &[String] {
        self.performer(performer_id)
            .map(|p| p.conflicts.as_slice())
            .unwrap_or(&[])
    }

    /// Ids of performers present in a scene.
    pub fn scene_cast(&self, scene_id: &str) -> Vec<&str> {
        self.incidence
            .get(scene_id)
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Full grid, one row per scene, one column per performer.
    pub fn grid(&self) -> Vec<Vec<CellState>> {
        self.scenes
            .iter()
            .map(|s| {
                self.performers
                    .iter()
                    .map(|p| self.cell(&s.id, &p.id))
                    .collect()
            })
            .collect()
    }

    /// Number of flagged cells.
    pub fn flagged_count(&self) -> usize {
        self.grid()
            .iter()
            .flatten()
            .filter(|c| **c == CellState::Flagged)
            .count()
    }
}
