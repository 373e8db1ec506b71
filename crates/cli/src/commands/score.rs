use serde::Serialize;

use sitequote_core::{ConfidenceSignals, ConfidenceTier};

#[derive(Debug, Serialize)]
struct ScoreReport {
    score: u8,
    tier: ConfidenceTier,
    message: &'static str,
    signals: ConfidenceSignals,
}

pub fn run(
    project: bool,
    line_specs: bool,
    delivery_window: bool,
    access_notes: bool,
    profile_complete: bool,
) -> String {
    let signals = ConfidenceSignals {
        has_project: project,
        has_detailed_line_specs: line_specs,
        has_delivery_window: delivery_window,
        has_access_notes: access_notes,
        profile_complete,
    };

    let report = ScoreReport {
        score: signals.score(),
        tier: signals.tier(),
        message: signals.tier().description(),
        signals,
    };

    serde_json::to_string_pretty(&report)
        .unwrap_or_else(|error| format!("score serialization failed: {error}"))
}
