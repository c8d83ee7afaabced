//! View-level filtering over a built matrix.
//!
//! Filters never change matrix contents: they only choose which columns
//! are shown and whether clear cells are rendered.

use serde::{Deserialize, Serialize};

use super::{CellState, ConflictMatrix, MatrixPerformer, MatrixScene};

/// Presentation filter for a conflict matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixFilter {
    /// Case-insensitive substring matched against performer names.
    pub name_query: Option<String>,
    /// Suppress cells whose state is clear.
    pub hide_clear: bool,
}

impl MatrixFilter {
    /// Creates a filter that shows everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts columns to names containing `query`.
    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = Some(query.into());
        self
    }

    /// Sets whether clear cells are suppressed.
    pub fn with_hide_clear(mut self, hide: bool) -> Self {
        self.hide_clear = hide;
        self
    }

    fn admits(&self, performer: &MatrixPerformer) -> bool {
        match self.name_query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => performer.name.to_lowercase().contains(&q.to_lowercase()),
        }
    }

    /// Applies the filter to a matrix.
    pub fn apply<'m>(&self, matrix: &'m ConflictMatrix) -> MatrixView<'m> {
        MatrixView {
            matrix,
            performers: matrix.performers().iter().filter(|p| self.admits(p)).collect(),
            hide_clear: self.hide_clear,
        }
    }
}

/// A filtered, borrowed view of a conflict matrix.
#[derive(Debug, Clone)]
pub struct MatrixView<'m> {
    matrix: &'m ConflictMatrix,
    performers: Vec<&'m MatrixPerformer>,
    hide_clear: bool,
}

impl<'m> MatrixView<'m> {
    /// All scene headings (filters never hide scenes).
    pub fn scenes(&self) -> &'m [MatrixScene] {
        self.matrix.scenes()
    }

    /// Visible performer columns.
    pub fn performers(&self) -> &[&'m MatrixPerformer] {
        &self.performers
    }

    /// Cell as displayed. `None` when the column is filtered out or the
    /// cell is a suppressed clear cell.
    pub fn cell(&self, scene_id: &str, performer_id: &str) -> Option<CellState> {
        if !self.performers.iter().any(|p| p.id == performer_id) {
            return None;
        }
        match self.matrix.cell(scene_id, performer_id) {
            CellState::Clear if self.hide_clear => None,
            state => Some(state),
        }
    }

    /// The underlying, unfiltered matrix.
    pub fn matrix(&self) -> &'m ConflictMatrix {
        self.matrix
    }
}
