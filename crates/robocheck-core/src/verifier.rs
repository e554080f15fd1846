//! Sequence verification: replay a list of actions from a fresh world.
//!
//! Every run builds its own world and battery gauge from [`WorldConfig`],
//! so runs never see each other's effects. Each entry is normalized (trimmed,
//! lowercased) and passed through the [`Validator`]. Rejected steps are
//! recorded and the run carries on with the next entry.
//!
//! Battery drain applies only to valid steps, per
//! [`robocheck_rules::costs`].

use chrono::Utc;
use robocheck_rules::{Validator, ValidationOutcome, costs, missing_preconditions};
use robocheck_types::{
    Fact, RunId, SequenceVerdict, StepReport, StepVerdict, VerificationReport,
};
use robocheck_world::{BatteryGauge, WorldState};
use tracing::{info, warn};

use crate::config::{ConfigError, WorldConfig};
use crate::sequence::{SequenceEntry, normalize_action};

/// Reason attached to a valid step.
pub const REASON_VALID: &str = "All preconditions satisfied.";
/// Reason attached to an unknown action.
pub const REASON_INVALID_ACTION: &str = "Action is not defined in the rule base.";
/// Reason attached to a non-string entry.
pub const REASON_INVALID_FORMAT: &str = "Action value must be a string.";

/// Replays sequences against a configured starting world.
#[derive(Debug, Clone)]
pub struct SequenceVerifier {
    initial_world: WorldState,
    starting_gauge: BatteryGauge,
}

impl SequenceVerifier {
    /// Build a verifier from world configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::World`] if the configured world is
    /// inconsistent.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            initial_world: config.initial_world()?,
            starting_gauge: config.starting_gauge()?,
        })
    }

    /// Verify a list of plain action identifiers.
    pub fn verify_actions<S: AsRef<str>>(&self, actions: &[S]) -> VerificationReport {
        let entries: Vec<SequenceEntry> = actions
            .iter()
            .map(|action| SequenceEntry::from(action.as_ref()))
            .collect();
        self.verify(&entries)
    }

    /// Verify a sequence of entries from a fresh world.
    pub fn verify(&self, entries: &[SequenceEntry]) -> VerificationReport {
        let run_id = RunId::new();
        let mut validator = Validator::with_world(self.initial_world.clone());
        let mut gauge = self.starting_gauge;
        let mut steps = Vec::with_capacity(entries.len());
        let mut battery_history = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let step = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
            let report = match entry {
                SequenceEntry::Action(raw) => {
                    run_action(&mut validator, &mut gauge, step, &normalize_action(raw))
                }
                SequenceEntry::Malformed(raw) => {
                    warn!(%run_id, step, entry = raw.as_str(), "Non-string sequence entry");
                    StepReport {
                        step,
                        action: raw.clone(),
                        result: StepVerdict::InvalidFormat,
                        reason: String::from(REASON_INVALID_FORMAT),
                        battery: gauge.level(),
                        missing: Vec::new(),
                    }
                }
            };
            battery_history.push(report.battery);
            steps.push(report);
        }

        let summary = if steps.iter().all(|step| step.result == StepVerdict::Valid) {
            SequenceVerdict::Valid
        } else {
            SequenceVerdict::Invalid
        };

        info!(
            %run_id,
            steps = steps.len(),
            summary = summary.as_str(),
            final_battery = gauge.level(),
            "Sequence verified"
        );

        VerificationReport {
            run_id,
            verified_at: Utc::now(),
            validation: steps,
            summary,
            final_state: validator.world().snapshot(),
            final_battery: gauge.level(),
            battery_history,
        }
    }
}

impl Default for SequenceVerifier {
    fn default() -> Self {
        Self {
            initial_world: WorldState::new(),
            starting_gauge: BatteryGauge::full(),
        }
    }
}

/// Validate one normalized action and build its step record.
fn run_action(
    validator: &mut Validator,
    gauge: &mut BatteryGauge,
    step: u32,
    action: &str,
) -> StepReport {
    // Diagnostics are read before validation so they describe the world the
    // check actually saw.
    let missing = robocheck_rules::resolve(action)
        .map(|action_type| missing_preconditions(action_type, validator.world()))
        .unwrap_or_default();

    let outcome = validator.validate_detailed(action);
    if let ValidationOutcome::Applied(action_type) = outcome {
        gauge.drain(costs::battery_drain(action_type));
    }

    let reason = match outcome {
        ValidationOutcome::Applied(_) => String::from(REASON_VALID),
        ValidationOutcome::InvalidAction => String::from(REASON_INVALID_ACTION),
        ValidationOutcome::PreconditionFailed { .. } => missing_reason(&missing),
    };
    let missing = if matches!(outcome, ValidationOutcome::PreconditionFailed { .. }) {
        missing
    } else {
        Vec::new()
    };

    StepReport {
        step,
        action: action.to_owned(),
        result: StepVerdict::from(outcome.status()),
        reason,
        battery: gauge.level(),
        missing,
    }
}

/// Human-readable list of absent preconditions.
fn missing_reason(missing: &[Fact]) -> String {
    if missing.is_empty() {
        return String::from("One or more preconditions are not satisfied.");
    }
    let names: Vec<&str> = missing.iter().map(|fact| fact.as_str()).collect();
    format!("Missing preconditions: {}", names.join(", "))
}
