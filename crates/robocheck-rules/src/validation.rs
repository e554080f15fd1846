//! The validation pipeline.
//!
//! Two stages run in order, and the first failure wins:
//! 1. Registry -- is the identifier a known action?
//! 2. Preconditions -- does every required fact hold?
//!
//! Neither stage mutates the world. Each returns `Ok` on success or a
//! [`Rejection`] describing why the action was refused.

use robocheck_types::{ActionType, Fact, ValidationStatus};
use robocheck_world::WorldState;

use crate::preconditions;
use crate::registry;

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The identifier is not in the registry.
    UnknownAction,
    /// A required fact was absent.
    MissingPrecondition {
        /// The rejected action.
        action: ActionType,
        /// The first absent fact in table order.
        fact: Fact,
    },
}

impl Rejection {
    /// The status reported to callers for this rejection.
    pub const fn status(self) -> ValidationStatus {
        match self {
            Self::UnknownAction => ValidationStatus::InvalidAction,
            Self::MissingPrecondition { .. } => ValidationStatus::PreconditionFailed,
        }
    }
}

/// Run the pipeline without applying any effects.
///
/// Returns the resolved action when every stage passes.
pub fn check_action(action: &str, world: &WorldState) -> Result<ActionType, Rejection> {
    // Stage 1: Registry
    let action_type = validate_registry(action)?;

    // Stage 2: Preconditions
    validate_preconditions(action_type, world)?;

    Ok(action_type)
}

/// Stage 1: the identifier must name a registered action.
fn validate_registry(action: &str) -> Result<ActionType, Rejection> {
    registry::resolve(action).ok_or(Rejection::UnknownAction)
}

/// Stage 2: every precondition must hold, checked in table order.
fn validate_preconditions(action: ActionType, world: &WorldState) -> Result<(), Rejection> {
    match preconditions::first_unmet(action, world) {
        Some(fact) => Err(Rejection::MissingPrecondition { action, fact }),
        None => Ok(()),
    }
}
