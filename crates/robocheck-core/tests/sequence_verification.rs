//! Integration tests for sequence verification, sequence files, and
//! configuration loading.

#![allow(clippy::unwrap_used)]

use robocheck_core::{
    SequenceEntry, SequenceError, SequenceVerifier, VerifierConfig, load_sequence,
    parse_request, save_sequence,
};
use robocheck_types::{Fact, SequenceVerdict, StepVerdict};
use serde_json::Value;

#[test]
fn power_on_then_scan_is_valid() {
    let report = SequenceVerifier::default().verify_actions(&["poweron", "scanarea"]);
    assert_eq!(report.summary, SequenceVerdict::Valid);
    assert_eq!(report.battery_history, vec![100, 90]);
    assert_eq!(
        report.final_state,
        vec![
            Fact::PoweredOn,
            Fact::Scanned,
            Fact::BatteryFull,
            Fact::ObjectDetected,
        ]
    );
}

#[test]
fn battery_drains_only_on_valid_steps_and_floors_at_zero() {
    let actions = [
        "poweron",
        "moveforward",
        "scanarea",
        "moveforward",
        "turnleft",
        "turnright",
        "pickobject",
        "releaseobject",
        "releaseobject",
        "moveforward",
        "checkbattery",
        "stop",
        "poweroff",
    ];
    let report = SequenceVerifier::default().verify_actions(&actions);

    assert_eq!(
        report.battery_history,
        vec![100, 100, 90, 70, 50, 30, 20, 10, 10, 0, 0, 0, 0]
    );
    assert_eq!(report.final_battery, 0);

    let verdicts: Vec<StepVerdict> = report.validation.iter().map(|s| s.result).collect();
    assert_eq!(verdicts.get(1), Some(&StepVerdict::PreconditionFailed));
    assert_eq!(verdicts.get(8), Some(&StepVerdict::PreconditionFailed));
    assert_eq!(report.rejected_count(), 2);
    assert_eq!(report.summary, SequenceVerdict::Invalid);

    assert_eq!(
        report.final_state,
        vec![
            Fact::PoweredOff,
            Fact::Scanned,
            Fact::BatteryLow,
            Fact::ObjectDetected,
        ]
    );
}

#[test]
fn each_run_starts_from_a_fresh_world() {
    let verifier = SequenceVerifier::default();
    let first = verifier.verify_actions(&["poweron"]);
    let second = verifier.verify_actions(&["poweron"]);
    assert_eq!(first.summary, SequenceVerdict::Valid);
    assert_eq!(second.summary, SequenceVerdict::Valid);
    assert_ne!(first.run_id, second.run_id);
}

#[test]
fn unknown_actions_are_reported_in_place() {
    let report = SequenceVerifier::default().verify_actions(&["poweron", "Dance", "scanarea"]);
    let step = report.validation.get(1).unwrap();
    assert_eq!(step.step, 2);
    assert_eq!(step.action, "dance");
    assert_eq!(step.result, StepVerdict::InvalidAction);
    assert_eq!(step.reason, "Action is not defined in the rule base.");
    assert_eq!(
        report.validation.get(2).map(|s| s.result),
        Some(StepVerdict::Valid)
    );
}

#[test]
fn json_request_to_json_report() {
    let entries = parse_request(r#"{"actions": ["poweron", {"bad": true}, "releaseobject"]}"#)
        .unwrap();
    let report = SequenceVerifier::default().verify(&entries);
    let json: Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"], "INVALID SEQUENCE");
    assert_eq!(json["validation"][0]["result"], "valid");
    assert_eq!(json["validation"][0]["reason"], "All preconditions satisfied.");
    assert_eq!(json["validation"][1]["result"], "invalid_format");
    assert_eq!(json["validation"][1]["action"], r#"{"bad":true}"#);
    assert_eq!(json["validation"][2]["result"], "precondition_failed");
    assert_eq!(
        json["validation"][2]["reason"],
        "Missing preconditions: holding_object"
    );
    assert_eq!(json["final_state"][0], "powered_on");
    assert_eq!(json["battery_history"], serde_json::json!([100, 100, 100]));
}

#[test]
fn configured_world_is_used_for_every_run() {
    let yaml = "world:\n  initial_facts: [powered_on, scanned]\n  starting_battery: 30\n";
    let config = VerifierConfig::parse(yaml).unwrap();
    let verifier = SequenceVerifier::new(&config.world).unwrap();

    let report = verifier.verify_actions(&["moveforward", "turnleft"]);
    assert_eq!(report.summary, SequenceVerdict::Valid);
    assert_eq!(report.battery_history, vec![10, 0]);
    // No battery_full to retract; battery_low is still asserted.
    assert_eq!(
        report.final_state,
        vec![Fact::PoweredOn, Fact::Scanned, Fact::BatteryLow]
    );
}

#[test]
fn sequence_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walk.txt");

    save_sequence(&path, &["poweron", "scanarea", "moveforward"]).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "poweron\nscanarea\nmoveforward\n");

    let loaded = load_sequence(&path).unwrap();
    assert_eq!(loaded, vec!["poweron", "scanarea", "moveforward"]);

    let report = SequenceVerifier::default().verify_actions(&loaded);
    assert!(report.is_valid());
}

#[test]
fn saving_an_empty_sequence_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    let empty: [&str; 0] = [];
    assert!(matches!(save_sequence(&path, &empty), Err(SequenceError::Empty)));
    assert!(!path.exists());
}

#[test]
fn config_file_is_loaded_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("robocheck.yaml");
    std::fs::write(&path, "world:\n  starting_battery: 55\n").unwrap();

    let config = VerifierConfig::from_file(&path).unwrap();
    assert_eq!(config.world.starting_battery, 55);

    let verifier = SequenceVerifier::new(&config.world).unwrap();
    let report = verifier.verify(&[SequenceEntry::from("poweron")]);
    assert_eq!(report.final_battery, 55);
}
