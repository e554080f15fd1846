//! Transition rules: the effects of an action that passed validation.
//!
//! Each rule assumes preconditions were already checked. Rules that replace
//! one fact with another retract the old fact before asserting the new one,
//! which keeps `powered_on`/`powered_off` mutually exclusive.
//!
//! | action | effect |
//! |---|---|
//! | poweron | retract `powered_off`, assert `powered_on` |
//! | poweroff | retract `powered_on`, assert `powered_off` |
//! | scanarea | assert `scanned` |
//! | moveforward | retract `battery_full`, assert `battery_low` |
//! | pickobject | assert `holding_object` |
//! | releaseobject | retract `holding_object` |
//! | others | no change |

use robocheck_types::{ActionType, Fact};
use robocheck_world::WorldState;

/// A rule mutating world state after a successful action.
pub type TransitionRule = fn(&mut WorldState);

/// Look up the rule for an action.
#[allow(clippy::match_same_arms)] // Explicit default arms document which actions are inert.
pub fn rule_for(action: ActionType) -> TransitionRule {
    match action {
        ActionType::PowerOn => power_on,
        ActionType::PowerOff => power_off,
        ActionType::ScanArea => scan_area,
        ActionType::MoveForward => move_forward,
        ActionType::PickObject => pick_object,
        ActionType::ReleaseObject => release_object,
        ActionType::TurnLeft => no_effect,
        ActionType::TurnRight => no_effect,
        ActionType::CheckBattery => no_effect,
        ActionType::Stop => no_effect,
    }
}

/// Apply the rule for `action` to `world`.
pub fn apply_transition(action: ActionType, world: &mut WorldState) {
    rule_for(action)(world);
    tracing::trace!(action = %action, world = %world, "Transition applied");
}

fn power_on(world: &mut WorldState) {
    world.retract(Fact::PoweredOff);
    world.assert_fact(Fact::PoweredOn);
}

fn power_off(world: &mut WorldState) {
    world.retract(Fact::PoweredOn);
    world.assert_fact(Fact::PoweredOff);
}

fn scan_area(world: &mut WorldState) {
    world.assert_fact(Fact::Scanned);
}

fn move_forward(world: &mut WorldState) {
    world.retract(Fact::BatteryFull);
    world.assert_fact(Fact::BatteryLow);
}

fn pick_object(world: &mut WorldState) {
    world.assert_fact(Fact::HoldingObject);
}

fn release_object(world: &mut WorldState) {
    world.retract(Fact::HoldingObject);
}

const fn no_effect(_world: &mut WorldState) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn powered_world() -> WorldState {
        WorldState::from_facts([
            Fact::PoweredOn,
            Fact::Scanned,
            Fact::BatteryFull,
            Fact::ObjectDetected,
        ])
        .unwrap_or_default()
    }

    #[test]
    fn power_on_swaps_power_facts() {
        let mut world = WorldState::new();
        apply_transition(ActionType::PowerOn, &mut world);
        assert!(world.holds(Fact::PoweredOn));
        assert!(!world.holds(Fact::PoweredOff));
    }

    #[test]
    fn power_off_swaps_power_facts() {
        let mut world = powered_world();
        apply_transition(ActionType::PowerOff, &mut world);
        assert!(world.holds(Fact::PoweredOff));
        assert!(!world.holds(Fact::PoweredOn));
    }

    #[test]
    fn move_forward_drains_battery_fact() {
        let mut world = powered_world();
        apply_transition(ActionType::MoveForward, &mut world);
        assert!(world.holds(Fact::BatteryLow));
        assert!(!world.holds(Fact::BatteryFull));
    }

    #[test]
    fn move_forward_is_idempotent_on_membership() {
        let mut world = powered_world();
        apply_transition(ActionType::MoveForward, &mut world);
        let once = world.clone();
        apply_transition(ActionType::MoveForward, &mut world);
        assert_eq!(world, once);
    }

    #[test]
    fn pick_then_release_restores_world() {
        let mut world = powered_world();
        let before = world.clone();
        apply_transition(ActionType::PickObject, &mut world);
        assert!(world.holds(Fact::HoldingObject));
        apply_transition(ActionType::ReleaseObject, &mut world);
        assert_eq!(world, before);
    }

    #[test]
    fn scanned_is_never_removed() {
        let mut world = powered_world();
        for action in ActionType::ALL {
            apply_transition(action, &mut world);
        }
        assert!(world.holds(Fact::Scanned));
    }

    #[test]
    fn inert_actions_leave_world_alone() {
        for action in [
            ActionType::TurnLeft,
            ActionType::TurnRight,
            ActionType::CheckBattery,
            ActionType::Stop,
        ] {
            let mut world = powered_world();
            let before = world.clone();
            apply_transition(action, &mut world);
            assert_eq!(world, before, "{action} should not change the world");
        }
    }
}
