//! Error types for the `robocheck-world` crate.

use robocheck_types::Fact;

/// Errors that can occur when constructing world state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Two mutually exclusive facts were supplied together.
    #[error("contradictory facts: {first} and {second} cannot hold at the same time")]
    ContradictoryFacts {
        /// The first fact of the pair.
        first: Fact,
        /// The second fact of the pair.
        second: Fact,
    },

    /// A battery level outside `0..=100` was requested.
    #[error("battery level {0} is out of range (0--100)")]
    BatteryOutOfRange(u32),
}
