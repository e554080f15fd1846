//! Battery drain per action.
//!
//! Only successful actions drain the battery. Values are whole percentage
//! points:
//! - Motion (`moveforward`, `turnleft`, `turnright`): 20
//! - Sensing and manipulation (`scanarea`, `pickobject`, `releaseobject`): 10
//! - Everything else: 0

use robocheck_types::ActionType;

/// Battery percentage consumed by a successful action.
#[allow(clippy::match_same_arms)] // One arm per action keeps the table readable.
pub const fn battery_drain(action: ActionType) -> u32 {
    match action {
        ActionType::MoveForward => 20,
        ActionType::TurnLeft => 20,
        ActionType::TurnRight => 20,
        ActionType::ScanArea => 10,
        ActionType::PickObject => 10,
        ActionType::ReleaseObject => 10,
        ActionType::PowerOn => 0,
        ActionType::PowerOff => 0,
        ActionType::CheckBattery => 0,
        ActionType::Stop => 0,
    }
}
