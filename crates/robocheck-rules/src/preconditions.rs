//! The precondition table: which facts each action requires.
//!
//! Every listed fact must hold (logical AND). Table order only matters for
//! failure reporting: [`first_unmet`] stops at the earliest absent fact.

use robocheck_types::{ActionType, Fact};
use robocheck_world::WorldState;

/// Return the required facts for an action, in declared order.
///
/// | action | preconditions |
/// |---|---|
/// | poweron | `powered_off` |
/// | poweroff | `powered_on` |
/// | scanarea | `powered_on` |
/// | checkbattery | `powered_on` |
/// | moveforward | `powered_on`, `scanned` |
/// | turnleft | `powered_on`, `scanned` |
/// | turnright | `powered_on`, `scanned` |
/// | pickobject | `powered_on`, `scanned`, `object_detected` |
/// | releaseobject | `powered_on`, `holding_object` |
/// | stop | `powered_on` |
#[allow(clippy::match_same_arms)] // One arm per action keeps the table readable.
pub const fn preconditions_of(action: ActionType) -> &'static [Fact] {
    match action {
        ActionType::PowerOn => &[Fact::PoweredOff],
        ActionType::PowerOff => &[Fact::PoweredOn],
        ActionType::ScanArea => &[Fact::PoweredOn],
        ActionType::CheckBattery => &[Fact::PoweredOn],
        ActionType::MoveForward => &[Fact::PoweredOn, Fact::Scanned],
        ActionType::TurnLeft => &[Fact::PoweredOn, Fact::Scanned],
        ActionType::TurnRight => &[Fact::PoweredOn, Fact::Scanned],
        ActionType::PickObject => &[Fact::PoweredOn, Fact::Scanned, Fact::ObjectDetected],
        ActionType::ReleaseObject => &[Fact::PoweredOn, Fact::HoldingObject],
        ActionType::Stop => &[Fact::PoweredOn],
    }
}

/// The first required fact, in table order, that does not hold.
pub fn first_unmet(action: ActionType, world: &WorldState) -> Option<Fact> {
    for &fact in preconditions_of(action) {
        if !world.holds(fact) {
            return Some(fact);
        }
    }
    None
}

/// Every required fact that does not hold, in table order.
pub fn missing_preconditions(action: ActionType, world: &WorldState) -> Vec<Fact> {
    preconditions_of(action)
        .iter()
        .copied()
        .filter(|&fact| !world.holds(fact))
        .collect()
}
