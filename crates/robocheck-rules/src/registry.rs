//! The closed set of actions the validator recognises.
//!
//! Lookups take raw caller input. Matching is exact: `"PowerOn"` and
//! `" poweron"` are unknown. Normalizing user input is the caller's job.

use robocheck_types::{ActionType, Fact};

use crate::costs;
use crate::preconditions;

/// One row of the action catalog, for listings and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The action.
    pub action: ActionType,
    /// Facts that must hold, in table order.
    pub preconditions: &'static [Fact],
    /// Battery percentage drained when the action succeeds.
    pub battery_cost: u32,
}

/// Resolve a raw identifier to a known action.
pub fn resolve(action: &str) -> Option<ActionType> {
    action.parse().ok()
}

/// Whether `action` names a registered action.
pub fn is_known(action: &str) -> bool {
    resolve(action).is_some()
}

/// All registered actions in catalog order.
pub fn known_actions() -> impl Iterator<Item = ActionType> {
    ActionType::ALL.into_iter()
}

/// The full catalog: every action with its preconditions and cost.
pub fn catalog() -> Vec<CatalogEntry> {
    known_actions()
        .map(|action| CatalogEntry {
            action,
            preconditions: preconditions::preconditions_of(action),
            battery_cost: costs::battery_drain(action),
        })
        .collect()
}
