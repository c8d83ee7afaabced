//! Coverage-rule evaluation for a single performer.
//!
//! # Rules
//!
//! A performer is compliant when the union of the effective scenes of
//! all their rows:
//! 1. contains a first-act scene,
//! 2. contains a second-act scene,
//! 3. has at least `min_scenes` distinct scenes.
//!
//! Act membership is a substring match of the configured marker against
//! the scene's act tag. Unknown roles and scenes contribute nothing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::config::ComplianceConfig;
use crate::models::{AssignmentRow, CatalogIndex, Scene};

/// A single coverage rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplianceRule {
    /// At least one first-act scene.
    ActOne,
    /// At least one second-act scene.
    ActTwo,
    /// Minimum distinct scene count.
    MinScenes,
}

impl fmt::Display for ComplianceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActOne => f.write_str("missing Act 1 scene"),
            Self::ActTwo => f.write_str("missing Act 2 scene"),
            Self::MinScenes => f.write_str("too few scenes"),
        }
    }
}

/// Coverage of one performer's scene universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    /// A first-act scene is covered.
    pub has_act_one: bool,
    /// A second-act scene is covered.
    pub has_act_two: bool,
    /// The distinct scene count meets the minimum.
    pub has_min_scenes: bool,
    /// Distinct scenes covered.
    pub scene_count: usize,
}

impl ComplianceStatus {
    /// Whether every rule holds.
    pub fn is_compliant(&self) -> bool {
        self.has_act_one && self.has_act_two && self.has_min_scenes
    }

    /// Rules not yet satisfied, in rule order.
    pub fn unmet(&self) -> Vec<ComplianceRule> {
        let mut unmet = Vec::new();
        if !self.has_act_one {
            unmet.push(ComplianceRule::ActOne);
        }
        if !self.has_act_two {
            unmet.push(ComplianceRule::ActTwo);
        }
        if !self.has_min_scenes {
            unmet.push(ComplianceRule::MinScenes);
        }
        unmet
    }
}

/// Evaluates performers against the configured coverage rules.
///
/// Pure: no side effects, no errors.
#[derive(Debug, Clone, Default)]
pub struct ComplianceEvaluator {
    config: ComplianceConfig,
}

impl ComplianceEvaluator {
    /// Creates an evaluator for the given rules.
    pub fn new(config: ComplianceConfig) -> Self {
        Self { config }
    }

    /// The rules in use.
    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    /// Evaluates an arbitrary scene collection. Duplicates count once.
    pub fn evaluate_scenes<'s>(
        &self,
        scenes: impl IntoIterator<Item = &'s Scene>,
    ) -> ComplianceStatus {
        let mut seen = BTreeSet::new();
        let mut has_act_one = false;
        let mut has_act_two = false;

        for scene in scenes {
            if !seen.insert(scene.id.as_str()) {
                continue;
            }
            has_act_one |= scene.act.matches(&self.config.act_one_marker);
            has_act_two |= scene.act.matches(&self.config.act_two_marker);
        }

        ComplianceStatus {
            has_act_one,
            has_act_two,
            has_min_scenes: seen.len() >= self.config.min_scenes,
            scene_count: seen.len(),
        }
    }

    /// Evaluates the union of effective scenes over the given rows.
    pub fn evaluate_rows<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r AssignmentRow>,
        index: &CatalogIndex<'_>,
    ) -> ComplianceStatus {
        let scenes: Vec<&Scene> = rows
            .into_iter()
            .flat_map(|row| index.effective_scenes(row))
            .collect();
        self.evaluate_scenes(scenes)
    }

    /// Evaluates a performer against their current rows within `rows`.
    pub fn evaluate_performer(
        &self,
        performer_id: &str,
        rows: &[AssignmentRow],
        index: &CatalogIndex<'_>,
    ) -> ComplianceStatus {
        self.evaluate_rows(rows.iter().filter(|r| r.contains(performer_id)), index)
    }

    /// Whether adding `scenes` would resolve at least one outstanding rule.
    ///
    /// Act rules are resolved by a scene of the missing act. When only the
    /// scene count is outstanding, any non-empty scene set qualifies.
    pub fn would_resolve(&self, status: &ComplianceStatus, scenes: &[&Scene]) -> bool {
        if !status.has_act_one
            && scenes
                .iter()
                .any(|s| s.act.matches(&self.config.act_one_marker))
        {
            return true;
        }
        if !status.has_act_two
            && scenes
                .iter()
                .any(|s| s.act.matches(&self.config.act_two_marker))
        {
            return true;
        }
        let only_min_scenes = status.has_act_one && status.has_act_two && !status.has_min_scenes;
        only_min_scenes && !scenes.is_empty()
    }
}
