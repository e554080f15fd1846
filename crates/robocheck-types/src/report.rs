//! Report types produced by sequence verification.
//!
//! Field names mirror the JSON document front ends already consume:
//! `validation`, `summary`, `final_state`, `final_battery`,
//! `battery_history`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Fact, SequenceVerdict, StepVerdict};
use crate::ids::RunId;

/// Outcome of one entry in a verified sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StepReport {
    /// 1-based position in the sequence.
    pub step: u32,
    /// The normalized action identifier (or the raw JSON text of a
    /// malformed entry).
    pub action: String,
    /// Verdict for this step.
    pub result: StepVerdict,
    /// Human-readable explanation of the verdict.
    pub reason: String,
    /// Battery percentage after this step.
    pub battery: u32,
    /// Preconditions that were absent, in table order. Empty unless the
    /// verdict is `PreconditionFailed`; always present in JSON.
    pub missing: Vec<Fact>,
}

/// Full report for one sequence verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VerificationReport {
    /// Identifier of this run.
    pub run_id: RunId,
    /// When the run finished.
    pub verified_at: DateTime<Utc>,
    /// One entry per submitted action, in order.
    pub validation: Vec<StepReport>,
    /// Overall verdict.
    pub summary: SequenceVerdict,
    /// Facts holding after the last step, in [`Fact`] declaration order.
    pub final_state: Vec<Fact>,
    /// Battery percentage after the last step.
    pub final_battery: u32,
    /// Battery percentage after each step.
    pub battery_history: Vec<u32>,
}

impl VerificationReport {
    /// Whether every step was valid.
    pub const fn is_valid(&self) -> bool {
        matches!(self.summary, SequenceVerdict::Valid)
    }

    /// Number of steps that were not valid.
    pub fn rejected_count(&self) -> usize {
        self.validation
            .iter()
            .filter(|step| step.result != StepVerdict::Valid)
            .count()
    }
}
