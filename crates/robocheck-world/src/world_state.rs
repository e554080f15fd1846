//! The mutable set of facts currently true about the robot's world.
//!
//! [`WorldState`] stores facts in a [`BTreeSet`], so membership is unique and
//! iteration follows [`Fact`] declaration order. Re-adding a present fact or
//! removing an absent one is a no-op.

use std::collections::BTreeSet;

use robocheck_types::Fact;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Facts holding when a world is first created.
pub const INITIAL_FACTS: [Fact; 3] = [Fact::PoweredOff, Fact::BatteryFull, Fact::ObjectDetected];

/// Pairs of facts that may never be supplied together at construction.
const EXCLUSIVE_PAIRS: [(Fact, Fact); 1] = [(Fact::PoweredOn, Fact::PoweredOff)];

/// The set of currently-true facts.
///
/// Deserialization goes through [`WorldState::from_facts`], so a document
/// holding both power facts is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorldState")]
pub struct WorldState {
    facts: BTreeSet<Fact>,
}

/// Unchecked wire shape of [`WorldState`].
#[derive(Deserialize)]
struct RawWorldState {
    facts: Vec<Fact>,
}

impl TryFrom<RawWorldState> for WorldState {
    type Error = WorldError;

    fn try_from(raw: RawWorldState) -> Result<Self, Self::Error> {
        Self::from_facts(raw.facts)
    }
}

impl WorldState {
    /// Create a world holding [`INITIAL_FACTS`].
    pub fn new() -> Self {
        Self {
            facts: INITIAL_FACTS.into_iter().collect(),
        }
    }

    /// Create a world holding no facts at all.
    pub const fn empty() -> Self {
        Self {
            facts: BTreeSet::new(),
        }
    }

    /// Create a world from an explicit fact list.
    ///
    /// Duplicates collapse. Rejects lists holding both power facts.
    pub fn from_facts<I>(facts: I) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = Fact>,
    {
        let facts: BTreeSet<Fact> = facts.into_iter().collect();
        for (first, second) in EXCLUSIVE_PAIRS {
            if facts.contains(&first) && facts.contains(&second) {
                return Err(WorldError::ContradictoryFacts { first, second });
            }
        }
        Ok(Self { facts })
    }

    /// Whether `fact` currently holds.
    pub fn holds(&self, fact: Fact) -> bool {
        self.facts.contains(&fact)
    }

    /// Assert `fact`. Returns `true` if it was newly added.
    pub fn assert_fact(&mut self, fact: Fact) -> bool {
        self.facts.insert(fact)
    }

    /// Retract `fact`. Returns `true` if it was present.
    pub fn retract(&mut self, fact: Fact) -> bool {
        self.facts.remove(&fact)
    }

    /// Iterate over the current facts in declaration order.
    pub fn facts(&self) -> impl Iterator<Item = Fact> + '_ {
        self.facts.iter().copied()
    }

    /// Sorted copy of the current facts.
    pub fn snapshot(&self) -> Vec<Fact> {
        self.facts().collect()
    }

    /// Number of facts currently holding.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether no facts hold.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for WorldState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        f.write_str("{")?;
        for fact in &self.facts {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(fact.as_str())?;
            first = false;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_holds_initial_facts() {
        let world = WorldState::new();
        assert_eq!(world.len(), 3);
        assert!(world.holds(Fact::PoweredOff));
        assert!(world.holds(Fact::BatteryFull));
        assert!(world.holds(Fact::ObjectDetected));
        assert!(!world.holds(Fact::PoweredOn));
    }

    #[test]
    fn empty_world_has_no_facts() {
        let world = WorldState::empty();
        assert!(world.is_empty());
        assert_eq!(world.len(), 0);
        assert!(!WorldState::new().is_empty());
    }

    #[test]
    fn asserting_twice_keeps_one_entry() {
        let mut world = WorldState::empty();
        assert!(world.assert_fact(Fact::Scanned));
        assert!(!world.assert_fact(Fact::Scanned));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn retracting_absent_fact_is_noop() {
        let mut world = WorldState::new();
        let before = world.clone();
        assert!(!world.retract(Fact::HoldingObject));
        assert_eq!(world, before);
    }

    #[test]
    fn from_facts_collapses_duplicates() {
        let world = WorldState::from_facts([Fact::Scanned, Fact::Scanned, Fact::PoweredOn]);
        assert_eq!(world.map(|w| w.len()), Ok(2));
    }

    #[test]
    fn from_facts_rejects_both_power_facts() {
        let result = WorldState::from_facts([Fact::PoweredOff, Fact::PoweredOn]);
        assert_eq!(
            result,
            Err(WorldError::ContradictoryFacts {
                first: Fact::PoweredOn,
                second: Fact::PoweredOff,
            })
        );
    }

    #[test]
    fn battery_pair_is_not_checked_at_construction() {
        let result = WorldState::from_facts([Fact::BatteryFull, Fact::BatteryLow]);
        assert!(result.is_ok());
    }

    #[test]
    fn display_lists_facts_in_declaration_order() {
        let world = WorldState::new();
        assert_eq!(world.to_string(), "{powered_off, battery_full, object_detected}");
    }

    #[test]
    fn serializes_as_fact_list() {
        let json = serde_json::to_string(&WorldState::new()).unwrap_or_default();
        assert_eq!(
            json,
            r#"{"facts":["powered_off","battery_full","object_detected"]}"#
        );
    }

    #[test]
    fn deserializes_consistent_fact_list() {
        let world: Result<WorldState, _> =
            serde_json::from_str(r#"{"facts":["object_detected","powered_off","battery_full"]}"#);
        assert_eq!(world.ok(), Some(WorldState::new()));
    }

    #[test]
    fn deserializing_both_power_facts_is_rejected() {
        let world: Result<WorldState, _> =
            serde_json::from_str(r#"{"facts":["powered_on","powered_off"]}"#);
        let message = world.err().map(|err| err.to_string()).unwrap_or_default();
        assert!(message.contains("contradictory facts"), "{message}");
    }
}
