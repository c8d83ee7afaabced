//! Engine configuration.
//!
//! Every tunable the engine uses lives here with its production default.
//! Configurations deserialize from JSON; missing fields take defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default minimum number of distinct scenes for compliance.
pub const DEFAULT_MIN_SCENES: usize = 3;
/// Default repair iterations per performer in the auto-cast repair phase.
pub const DEFAULT_MAX_REPAIR_ITERATIONS: usize = 3;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Coverage rules.
    pub compliance: ComplianceConfig,
    /// Allocation settings.
    pub autocast: AutoCastConfig,
}

/// Coverage rules a performer must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Minimum distinct scenes across all of a performer's rows.
    pub min_scenes: usize,
    /// Substring identifying first-act scenes in an act tag.
    pub act_one_marker: String,
    /// Substring identifying second-act scenes in an act tag.
    pub act_two_marker: String,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            min_scenes: DEFAULT_MIN_SCENES,
            act_one_marker: "1".to_string(),
            act_two_marker: "2".to_string(),
        }
    }
}

/// Auto-cast settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoCastConfig {
    /// Upper bound on repair iterations per performer. Zero disables repair.
    pub max_repair_iterations: usize,
}

impl Default for AutoCastConfig {
    fn default() -> Self {
        Self {
            max_repair_iterations: DEFAULT_MAX_REPAIR_ITERATIONS,
        }
    }
}

impl ComplianceConfig {
    /// Sets the minimum scene count.
    pub fn with_min_scenes(mut self, min_scenes: usize) -> Self {
        self.min_scenes = min_scenes;
        self
    }

    /// Sets the act markers.
    pub fn with_act_markers(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.act_one_marker = one.into();
        self.act_two_marker = two.into();
        self
    }
}

impl AutoCastConfig {
    /// Sets the repair iteration budget.
    pub fn with_max_repair_iterations(mut self, iterations: usize) -> Self {
        self.max_repair_iterations = iterations;
        self
    }
}

impl EngineConfig {
    /// Sets the compliance rules.
    pub fn with_compliance(mut self, compliance: ComplianceConfig) -> Self {
        self.compliance = compliance;
        self
    }

    /// Sets the auto-cast settings.
    pub fn with_autocast(mut self, autocast: AutoCastConfig) -> Self {
        self.autocast = autocast;
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the engine cannot use.
    pub fn validate(&self) -> Result<()> {
        let c = &self.compliance;
        if c.min_scenes == 0 {
            return Err(Error::InvalidConfig(
                "compliance.min_scenes must be at least 1".into(),
            ));
        }
        if c.act_one_marker.is_empty() || c.act_two_marker.is_empty() {
            return Err(Error::InvalidConfig("act markers must not be empty".into()));
        }
        if c.act_one_marker == c.act_two_marker {
            return Err(Error::InvalidConfig(format!(
                "act markers must differ (both are '{}')",
                c.act_one_marker
            )));
        }
        Ok(())
    }
}
