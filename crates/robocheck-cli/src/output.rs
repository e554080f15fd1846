//! Plain-text rendering for terminal output.

use std::fmt::Write as _;

use robocheck_rules::CatalogEntry;
use robocheck_types::VerificationReport;

/// Render a verification report as a fixed-width table plus summary lines.
pub fn render_report(report: &VerificationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<14} {:<20} {:>7}  {}",
        "step", "action", "result", "battery", "reason"
    );
    for step in &report.validation {
        let _ = writeln!(
            out,
            "{:>4}  {:<14} {:<20} {:>6}%  {}",
            step.step,
            step.action,
            step.result.as_str(),
            step.battery,
            step.reason
        );
    }
    out.push('\n');
    let _ = writeln!(out, "{}", report.summary);
    let _ = writeln!(out, "Final world state: {}", fact_list(report));
    let _ = writeln!(out, "Battery: {}%", report.final_battery);
    out
}

/// Render the action catalog.
pub fn render_catalog(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:>4}  {}", "action", "cost", "preconditions");
    for entry in entries {
        let required: Vec<&str> = entry.preconditions.iter().map(|fact| fact.as_str()).collect();
        let _ = writeln!(
            out,
            "{:<14} {:>3}%  {}",
            entry.action.as_str(),
            entry.battery_cost,
            required.join(", ")
        );
    }
    out
}

fn fact_list(report: &VerificationReport) -> String {
    if report.final_state.is_empty() {
        return String::from("(none)");
    }
    let names: Vec<&str> = report.final_state.iter().map(|fact| fact.as_str()).collect();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use robocheck_core::SequenceVerifier;

    use super::*;

    #[test]
    fn report_table_has_one_row_per_step() {
        let report = SequenceVerifier::default().verify_actions(&["poweron", "fly"]);
        let text = render_report(&report);
        assert!(text.contains("poweron"));
        assert!(text.contains("invalid_action"));
        assert!(text.contains("INVALID SEQUENCE"));
        assert!(text.contains("Final world state: powered_on, battery_full, object_detected"));
        assert!(text.contains("Battery: 100%"));
    }

    #[test]
    fn catalog_lists_every_action() {
        let text = render_catalog(&robocheck_rules::catalog());
        assert_eq!(text.lines().count(), 11);
        assert!(text.contains("powered_on, scanned, object_detected"));
    }
}
