//! The validator: check an action, then apply its effects.
//!
//! [`Validator`] owns one [`WorldState`]. Each call to
//! [`Validator::validate`] runs the pipeline in [`crate::validation`] and,
//! only if every stage passes, applies the transition rule before returning.
//! Rejected calls never touch the world.

use robocheck_types::{ActionType, Fact, ValidationStatus};
use robocheck_world::WorldState;
use tracing::debug;

use crate::transitions;
use crate::validation::{self, Rejection};

/// Detailed result of one validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The action passed and its effects were applied.
    Applied(ActionType),
    /// The action is known but `fact` (the first absent one) blocked it.
    PreconditionFailed {
        /// The rejected action.
        action: ActionType,
        /// The first absent precondition in table order.
        fact: Fact,
    },
    /// The identifier is not a registered action.
    InvalidAction,
}

impl ValidationOutcome {
    /// Project onto the three caller-visible status tags.
    pub const fn status(self) -> ValidationStatus {
        match self {
            Self::Applied(_) => ValidationStatus::Valid,
            Self::PreconditionFailed { .. } => ValidationStatus::PreconditionFailed,
            Self::InvalidAction => ValidationStatus::InvalidAction,
        }
    }

    /// The resolved action, if the identifier was known.
    pub const fn action(self) -> Option<ActionType> {
        match self {
            Self::Applied(action) | Self::PreconditionFailed { action, .. } => Some(action),
            Self::InvalidAction => None,
        }
    }
}

impl From<Rejection> for ValidationOutcome {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::UnknownAction => Self::InvalidAction,
            Rejection::MissingPrecondition { action, fact } => {
                Self::PreconditionFailed { action, fact }
            }
        }
    }
}

/// Validates actions against, and applies them to, an owned world.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    world: WorldState,
    starting_world: WorldState,
}

impl Validator {
    /// A validator over a fresh world holding the initial facts.
    pub fn new() -> Self {
        Self::with_world(WorldState::new())
    }

    /// A validator over the given world. [`Validator::reset`] returns here.
    pub fn with_world(world: WorldState) -> Self {
        Self {
            starting_world: world.clone(),
            world,
        }
    }

    /// Validate `action` and apply it if permitted.
    pub fn validate(&mut self, action: &str) -> ValidationStatus {
        self.validate_detailed(action).status()
    }

    /// Like [`Validator::validate`], but also reports which fact blocked a
    /// rejected action.
    pub fn validate_detailed(&mut self, action: &str) -> ValidationOutcome {
        let outcome = match validation::check_action(action, &self.world) {
            Ok(action_type) => {
                transitions::apply_transition(action_type, &mut self.world);
                ValidationOutcome::Applied(action_type)
            }
            Err(rejection) => ValidationOutcome::from(rejection),
        };

        match outcome {
            ValidationOutcome::PreconditionFailed { fact, .. } => {
                debug!(action, status = %outcome.status(), missing = %fact, "Action validated");
            }
            ValidationOutcome::Applied(_) | ValidationOutcome::InvalidAction => {
                debug!(action, status = %outcome.status(), "Action validated");
            }
        }

        outcome
    }

    /// Read-only view of the world.
    pub const fn world(&self) -> &WorldState {
        &self.world
    }

    /// Consume the validator, returning its world.
    pub fn into_world(self) -> WorldState {
        self.world
    }

    /// Restore the world this validator was built with.
    pub fn reset(&mut self) {
        self.world.clone_from(&self.starting_world);
    }
}
