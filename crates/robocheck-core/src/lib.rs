//! Configuration and sequence verification for Robocheck.
//!
//! This crate sits between the rule engine and front ends. It loads the
//! YAML configuration, reads and writes action sequences, and replays a
//! sequence from a fresh world to produce a [`VerificationReport`].
//!
//! # Modules
//!
//! - [`config`] -- [`VerifierConfig`] and its YAML loader
//! - [`sequence`] -- Sequence text files and `{"actions": [...]}` requests
//! - [`verifier`] -- [`SequenceVerifier`], step-by-step replay with battery drain
//!
//! [`VerificationReport`]: robocheck_types::VerificationReport

pub mod config;
pub mod sequence;
pub mod verifier;

// Re-export primary types at crate root for convenience.
pub use config::{ConfigError, LogFormat, LoggingConfig, VerifierConfig, WorldConfig};
pub use sequence::{
    SequenceEntry, SequenceError, load_sequence, normalize_action, parse_request,
    parse_sequence, save_sequence,
};
pub use verifier::SequenceVerifier;
