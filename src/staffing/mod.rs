//! Staff placement rules.
//!
//! Evaluates whether a candidate may fill a production slot, producing a
//! traffic-light [`Severity`] and the reasons behind it. Rules run in
//! order; severity only ever escalates.
//!
//! # Standard Rules
//!
//! 1. [`rules::AvailabilityRule`]: unavailable → RED, tentative → YELLOW.
//! 2. [`rules::RoleEligibilityRule`]: not eligible for the role → YELLOW.
//! 3. [`rules::PairConstraintRule`]: constraint with a sibling occupant
//!    (declared on either side) → RED.
//!
//! # Usage
//!
//! ```
//! use u_casting::models::{Performer, Slot};
//! use u_casting::staffing::{Severity, SlotContext, StaffingEngine};
//!
//! let eve = Performer::new("E", "Eve").with_eligible_role("Director").with_constraint("F");
//! let frank = Performer::new("F", "Frank");
//! let slot = Slot::new("X1", "Show", "Director", "Fall");
//!
//! let engine = StaffingEngine::standard();
//! let verdict = engine.evaluate(&eve, &SlotContext::new(&slot, vec![&frank]));
//! assert_eq!(verdict.severity, Severity::Red);
//! ```

mod engine;
pub mod rules;

pub use engine::{SlotVerdict, StaffingEngine};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::{Performer, Slot};

/// Escalation level. Ordered: `Green < Yellow < Red`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Green,
    Yellow,
    Red,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => f.write_str("GREEN"),
            Self::Yellow => f.write_str("YELLOW"),
            Self::Red => f.write_str("RED"),
        }
    }
}

/// Outcome of evaluating one candidate for one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Highest severity reached.
    pub severity: Severity,
    /// Reasons, in rule-evaluation order.
    pub reasons: Vec<String>,
}

impl Verdict {
    /// A green verdict with no reasons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises severity to at least `level` and records `reason`.
    ///
    /// Never lowers severity.
    pub fn escalate(&mut self, level: Severity, reason: impl Into<String>) {
        self.severity = self.severity.max(level);
        self.reasons.push(reason.into());
    }

    /// Whether no rule objected.
    pub fn is_clear(&self) -> bool {
        self.severity == Severity::Green
    }
}

/// The slot being filled and the performers already placed beside it.
#[derive(Debug, Clone)]
pub struct SlotContext<'a> {
    /// Target slot.
    pub slot: &'a Slot,
    /// Occupants of sibling slots in the same group.
    pub siblings: Vec<&'a Performer>,
}

impl<'a> SlotContext<'a> {
    /// Creates a context.
    pub fn new(slot: &'a Slot, siblings: Vec<&'a Performer>) -> Self {
        Self { slot, siblings }
    }
}

/// A placement rule.
///
/// Rules append to the verdict; they must not lower its severity.
pub trait StaffingRule: Send + Sync + Debug {
    /// Rule name (e.g., "AVAILABILITY").
    fn name(&self) -> &'static str;

    /// Evaluates the candidate and escalates the verdict as needed.
    fn apply(&self, candidate: &Performer, context: &SlotContext<'_>, verdict: &mut Verdict);

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
