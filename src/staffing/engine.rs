//! Rule engine for staff placement.
//!
//! Runs an ordered chain of [`StaffingRule`]s against a candidate and
//! folds their escalations into one [`Verdict`]. Board helpers derive
//! sibling occupants from a slot list.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::rules::{AvailabilityRule, PairConstraintRule, RoleEligibilityRule};
use super::{SlotContext, StaffingRule, Verdict};
use crate::models::{Performer, Slot};

/// Verdict for the occupant of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotVerdict {
    /// Slot that was evaluated.
    pub slot_id: String,
    /// Occupant the verdict applies to.
    pub performer_id: String,
    /// Combined outcome of the rule chain.
    pub verdict: Verdict,
}

/// An ordered chain of staffing rules.
///
/// # Example
/// ```
/// use u_casting::staffing::StaffingEngine;
/// use u_casting::staffing::rules;
///
/// let engine = StaffingEngine::new()
///     .with_rule(rules::AvailabilityRule)
///     .with_rule(rules::PairConstraintRule);
/// assert_eq!(engine.rule_names(), vec!["AVAILABILITY", "PAIR_CONSTRAINT"]);
/// ```
#[derive(Clone)]
pub struct StaffingEngine {
    rules: Vec<Arc<dyn StaffingRule>>,
}

impl StaffingEngine {
    /// Creates an engine with no rules (every verdict is green).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates an engine with the standard rule chain.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(AvailabilityRule)
            .with_rule(RoleEligibilityRule)
            .with_rule(PairConstraintRule)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: StaffingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Human-readable rule descriptions, in evaluation order.
    pub fn rule_descriptions(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.description()).collect()
    }

    /// Evaluates a candidate against an explicit context.
    pub fn evaluate(&self, candidate: &Performer, context: &SlotContext<'_>) -> Verdict {
        let mut verdict = Verdict::new();
        for rule in &self.rules {
            rule.apply(candidate, context, &mut verdict);
        }
        trace!(
            candidate = %candidate.id,
            slot = %context.slot.id,
            severity = %verdict.severity,
            "staffing verdict"
        );
        verdict
    }

    /// Evaluates a candidate for a slot on a board.
    ///
    /// Siblings are the occupants of other slots in the same group,
    /// excluding the candidate. Occupant ids missing from `roster` are
    /// skipped. Returns `None` if `slot_id` is not on the board.
    pub fn evaluate_on_board(
        &self,
        candidate: &Performer,
        slot_id: &str,
        slots: &[Slot],
        roster: &[Performer],
    ) -> Option<Verdict> {
        let slot = slots.iter().find(|s| s.id == slot_id)?;
        let siblings = sibling_occupants(slot, slots, roster, &candidate.id);
        Some(self.evaluate(candidate, &SlotContext::new(slot, siblings)))
    }

    /// Evaluates every occupied slot's occupant in place.
    ///
    /// Slots whose occupant is not in `roster` are skipped.
    pub fn evaluate_board(&self, slots: &[Slot], roster: &[Performer]) -> Vec<SlotVerdict> {
        slots
            .iter()
            .filter_map(|slot| {
                let occupant_id = slot.occupant.as_deref()?;
                let occupant = roster.iter().find(|p| p.id == occupant_id)?;
                let siblings = sibling_occupants(slot, slots, roster, occupant_id);
                Some(SlotVerdict {
                    slot_id: slot.id.clone(),
                    performer_id: occupant.id.clone(),
                    verdict: self.evaluate(occupant, &SlotContext::new(slot, siblings)),
                })
            })
            .collect()
    }
}

fn sibling_occupants<'a>(
    slot: &Slot,
    slots: &[Slot],
    roster: &'a [Performer],
    exclude_id: &str,
) -> Vec<&'a Performer> {
    let mut seen = HashSet::new();
    slots
        .iter()
        .filter(|other| slot.is_sibling_of(other))
        .filter_map(|other| other.occupant.as_deref())
        .filter(|id| *id != exclude_id && seen.insert(*id))
        .filter_map(|id| roster.iter().find(|p| p.id == id))
        .collect()
}

impl Default for StaffingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for StaffingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaffingEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
