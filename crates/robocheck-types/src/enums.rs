//! Enumeration types shared across the workspace.
//!
//! Actions and facts are closed sets. Their string forms are the identifiers
//! callers send (`"moveforward"`, `"powered_on"`), so every enum here carries
//! an explicit `as_str` and a matching [`FromStr`] implementation.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Failure to parse an identifier into one of the closed enum sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} identifier: {value:?}")]
pub struct UnknownIdentifier {
    /// Which identifier family was being parsed (`"action"` or `"fact"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// An operation the robot may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ActionType {
    // --- Power ---
    /// Switch the robot on.
    PowerOn,
    /// Switch the robot off.
    PowerOff,

    // --- Sensing ---
    /// Scan the surroundings.
    ScanArea,
    /// Report the battery state.
    CheckBattery,

    // --- Motion ---
    /// Drive forward one step.
    MoveForward,
    /// Rotate left in place.
    TurnLeft,
    /// Rotate right in place.
    TurnRight,
    /// Halt all motion.
    Stop,

    // --- Manipulation ---
    /// Grab the detected object.
    PickObject,
    /// Let go of the held object.
    ReleaseObject,
}

impl ActionType {
    /// Every known action, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::PowerOn,
        Self::PowerOff,
        Self::ScanArea,
        Self::CheckBattery,
        Self::MoveForward,
        Self::TurnLeft,
        Self::TurnRight,
        Self::PickObject,
        Self::ReleaseObject,
        Self::Stop,
    ];

    /// The wire identifier for this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerOn => "poweron",
            Self::PowerOff => "poweroff",
            Self::ScanArea => "scanarea",
            Self::CheckBattery => "checkbattery",
            Self::MoveForward => "moveforward",
            Self::TurnLeft => "turnleft",
            Self::TurnRight => "turnright",
            Self::Stop => "stop",
            Self::PickObject => "pickobject",
            Self::ReleaseObject => "releaseobject",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = UnknownIdentifier;

    /// Exact, case-sensitive match against the wire identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownIdentifier {
                kind: "action",
                value: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Facts
// ---------------------------------------------------------------------------

/// A proposition that may currently hold in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Fact {
    /// The robot is switched on.
    PoweredOn,
    /// The robot is switched off.
    PoweredOff,
    /// The surroundings have been scanned.
    Scanned,
    /// The battery is fully charged.
    BatteryFull,
    /// The battery has been drawn down by motion.
    BatteryLow,
    /// An object is within reach.
    ObjectDetected,
    /// The gripper holds an object.
    HoldingObject,
}

impl Fact {
    /// Every fact the rule tables refer to.
    pub const ALL: [Self; 7] = [
        Self::PoweredOn,
        Self::PoweredOff,
        Self::Scanned,
        Self::BatteryFull,
        Self::BatteryLow,
        Self::ObjectDetected,
        Self::HoldingObject,
    ];

    /// The wire identifier for this fact.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PoweredOn => "powered_on",
            Self::PoweredOff => "powered_off",
            Self::Scanned => "scanned",
            Self::BatteryFull => "battery_full",
            Self::BatteryLow => "battery_low",
            Self::ObjectDetected => "object_detected",
            Self::HoldingObject => "holding_object",
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fact {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fact| fact.as_str() == s)
            .ok_or_else(|| UnknownIdentifier {
                kind: "fact",
                value: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of validating a single action against the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ValidationStatus {
    /// The action was permitted and its effects applied.
    Valid,
    /// The action is known but a required fact is absent.
    PreconditionFailed,
    /// The identifier is not in the action registry.
    InvalidAction,
}

impl ValidationStatus {
    /// The literal status tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::PreconditionFailed => "precondition_failed",
            Self::InvalidAction => "invalid_action",
        }
    }

    /// Whether the action was accepted.
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-step verdict inside a sequence report.
///
/// Extends [`ValidationStatus`] with `InvalidFormat` for request entries
/// that are not strings at all and therefore never reach the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum StepVerdict {
    /// See [`ValidationStatus::Valid`].
    Valid,
    /// See [`ValidationStatus::PreconditionFailed`].
    PreconditionFailed,
    /// See [`ValidationStatus::InvalidAction`].
    InvalidAction,
    /// The entry was not a string.
    InvalidFormat,
}

impl StepVerdict {
    /// The literal verdict tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::PreconditionFailed => "precondition_failed",
            Self::InvalidAction => "invalid_action",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

impl From<ValidationStatus> for StepVerdict {
    fn from(status: ValidationStatus) -> Self {
        match status {
            ValidationStatus::Valid => Self::Valid,
            ValidationStatus::PreconditionFailed => Self::PreconditionFailed,
            ValidationStatus::InvalidAction => Self::InvalidAction,
        }
    }
}

impl fmt::Display for StepVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall verdict for a verified sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SequenceVerdict {
    /// Every step was valid.
    #[serde(rename = "VALID SEQUENCE")]
    Valid,
    /// At least one step was rejected.
    #[serde(rename = "INVALID SEQUENCE")]
    Invalid,
}

impl SequenceVerdict {
    /// Human-readable summary line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID SEQUENCE",
            Self::Invalid => "INVALID SEQUENCE",
        }
    }
}

impl fmt::Display for SequenceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
