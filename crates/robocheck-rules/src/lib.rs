//! Rule engine for the Robocheck action validator.
//!
//! Given an action identifier, the engine checks that the action is
//! registered, that every precondition fact holds in the world, and only
//! then applies the action's transition rule. The three outcomes are plain
//! values ([`ValidationStatus`]); nothing here returns an error.
//!
//! ```text
//! caller --> registry --> preconditions --> transitions --> status
//!                              |                 |
//!                              +--- WorldState --+
//! ```
//!
//! # Modules
//!
//! - [`costs`] -- Battery drain per successful action.
//! - [`preconditions`] -- Action -> ordered required facts.
//! - [`registry`] -- The closed set of known actions.
//! - [`shared`] -- [`SharedValidator`], mutex-serialized access.
//! - [`transitions`] -- Effects applied after a successful check.
//! - [`validation`] -- The two-stage check pipeline.
//! - [`validator`] -- [`Validator`], the entry point owning a world.
//!
//! [`ValidationStatus`]: robocheck_types::ValidationStatus

pub mod costs;
pub mod preconditions;
pub mod registry;
pub mod shared;
pub mod transitions;
pub mod validation;
pub mod validator;

// Re-export primary types at crate root.
pub use costs::battery_drain;
pub use preconditions::{first_unmet, missing_preconditions, preconditions_of};
pub use registry::{CatalogEntry, catalog, is_known, resolve};
pub use shared::SharedValidator;
pub use transitions::{TransitionRule, apply_transition};
pub use validation::{Rejection, check_action};
pub use validator::{ValidationOutcome, Validator};
