//! Shared type definitions for the Robocheck action validator.
//!
//! This crate is the single source of truth for the identifiers and report
//! shapes exchanged between the engine and its front ends. Types flow to
//! `TypeScript` via `ts-rs` for any UI that renders verification reports.
//!
//! # Modules
//!
//! - [`enums`] -- Actions, facts, and validation outcomes
//! - [`ids`] -- Type-safe UUID wrappers
//! - [`report`] -- Step and sequence verification reports

pub mod enums;
pub mod ids;
pub mod report;

// Re-export all public types at crate root for convenience.
pub use enums::{
    ActionType, Fact, SequenceVerdict, StepVerdict, UnknownIdentifier, ValidationStatus,
};
pub use ids::RunId;
pub use report::{StepReport, VerificationReport};
