//! Built-in staffing rules.
//!
//! # Precedence
//! Rules are applied in the order the engine holds them. The standard
//! chain is availability, then role eligibility, then pair constraints,
//! and reasons accumulate in that order.

use super::{Severity, SlotContext, StaffingRule, Verdict};
use crate::models::{Availability, Performer};

/// Availability for the slot's period.
///
/// Unavailable escalates to RED, tentative to YELLOW. Unmarked periods
/// count as available.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityRule;

impl StaffingRule for AvailabilityRule {
    fn name(&self) -> &'static str {
        "AVAILABILITY"
    }

    fn apply(&self, candidate: &Performer, context: &SlotContext<'_>, verdict: &mut Verdict) {
        let period = &context.slot.period;
        match candidate.availability_for(period) {
            Availability::Unavailable => verdict.escalate(
                Severity::Red,
                format!("{} is unavailable for {}", candidate.name, period),
            ),
            Availability::Tentative => verdict.escalate(
                Severity::Yellow,
                format!("{} is tentative for {}", candidate.name, period),
            ),
            Availability::Available => {}
        }
    }

    fn description(&self) -> &'static str {
        "Period availability"
    }
}

/// Role eligibility.
///
/// A candidate not listed for the slot's role escalates to YELLOW.
#[derive(Debug, Clone, Copy)]
pub struct RoleEligibilityRule;

impl StaffingRule for RoleEligibilityRule {
    fn name(&self) -> &'static str {
        "ROLE_ELIGIBILITY"
    }

    fn apply(&self, candidate: &Performer, context: &SlotContext<'_>, verdict: &mut Verdict) {
        let role = &context.slot.role_label;
        if !candidate.is_eligible_for(role) {
            verdict.escalate(
                Severity::Yellow,
                format!("{} is not eligible for {}", candidate.name, role),
            );
        }
    }

    fn description(&self) -> &'static str {
        "Declared role eligibility"
    }
}

/// Interpersonal constraints against sibling occupants.
///
/// Checked from both sides: a constraint declared by either performer
/// escalates to RED and names the other party.
#[derive(Debug, Clone, Copy)]
pub struct PairConstraintRule;

impl StaffingRule for PairConstraintRule {
    fn name(&self) -> &'static str {
        "PAIR_CONSTRAINT"
    }

    fn apply(&self, candidate: &Performer, context: &SlotContext<'_>, verdict: &mut Verdict) {
        for sibling in &context.siblings {
            if sibling.id == candidate.id {
                continue;
            }
            if candidate.is_constrained_with(sibling) {
                verdict.escalate(
                    Severity::Red,
                    format!("Constraint conflict with {}", sibling.name),
                );
            }
        }
    }

    fn description(&self) -> &'static str {
        "Must not be co-scheduled"
    }
}
