//! Completeness-confidence scoring for a draft.
//!
//! The score is display-only: it picks a tier and message for the review
//! step and never gates submission.

use serde::{Deserialize, Serialize};

use crate::domain::rfq::RfqDraft;

/// Points contributed by each completeness signal.
pub const SIGNAL_WEIGHT: u8 = 20;

/// Five independent completeness signals, each worth [`SIGNAL_WEIGHT`]
/// points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceSignals {
    pub has_project: bool,
    pub has_detailed_line_specs: bool,
    pub has_delivery_window: bool,
    pub has_access_notes: bool,
    pub profile_complete: bool,
}

impl ConfidenceSignals {
    /// Derive the draft-side signals. `profile_complete` comes from the
    /// account, not the draft, so the caller supplies it.
    pub fn from_draft(draft: &RfqDraft, profile_complete: bool) -> Self {
        let has_detailed_line_specs = !draft.lines.is_empty()
            && draft
                .lines
                .iter()
                .any(|line| line.spec_notes.as_deref().is_some_and(|notes| !notes.trim().is_empty()));

        let window = draft.delivery_window.as_ref();
        let has_delivery_window =
            window.is_some_and(|w| w.start_date.is_some() || w.end_date.is_some());
        let has_access_notes = window
            .and_then(|w| w.access_notes.as_deref())
            .is_some_and(|notes| !notes.trim().is_empty());

        Self {
            has_project: draft.project_id.is_some(),
            has_detailed_line_specs,
            has_delivery_window,
            has_access_notes,
            profile_complete,
        }
    }

    /// Weighted sum in 0..=100, always a multiple of [`SIGNAL_WEIGHT`].
    pub fn score(&self) -> u8 {
        [
            self.has_project,
            self.has_detailed_line_specs,
            self.has_delivery_window,
            self.has_access_notes,
            self.profile_complete,
        ]
        .iter()
        .filter(|signal| **signal)
        .count() as u8
            * SIGNAL_WEIGHT
    }

    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_score(self.score())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ConfidenceTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ConfidenceTier::Excellent
        } else if score >= 60 {
            ConfidenceTier::Good
        } else if score >= 40 {
            ConfidenceTier::Fair
        } else {
            ConfidenceTier::NeedsWork
        }
    }

    /// Human-readable message shown next to the score.
    pub fn description(&self) -> &'static str {
        match self {
            ConfidenceTier::Excellent => "Suppliers have everything they need to quote accurately",
            ConfidenceTier::Good => "A solid request; a few more details would sharpen quotes",
            ConfidenceTier::Fair => "Usable, but expect clarifying questions from suppliers",
            ConfidenceTier::NeedsWork => "Add more detail to get meaningful quotes",
        }
    }
}
