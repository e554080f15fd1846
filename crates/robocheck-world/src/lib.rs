//! World state for the Robocheck action validator.
//!
//! This crate models what is true about the robot: a set of facts and a
//! numeric battery gauge. It knows nothing about actions; the rules crate
//! reads and mutates these types.
//!
//! # Modules
//!
//! - [`battery`] -- [`BatteryGauge`], a saturating charge percentage.
//! - [`error`] -- Error types for world construction.
//! - [`world_state`] -- [`WorldState`], the set of currently-true facts.

pub mod battery;
pub mod error;
pub mod world_state;

// Re-export primary types at crate root.
pub use battery::{BatteryGauge, FULL_CHARGE};
pub use error::WorldError;
pub use world_state::{INITIAL_FACTS, WorldState};
