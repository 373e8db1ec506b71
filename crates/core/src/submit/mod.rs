//! Full-draft validation and submission payload assembly.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::rfq::{DeliveryPreference, RfqDraft};
use crate::errors::DomainError;

/// Full-draft validity check, independent of which wizard step is current.
/// Returns the failed requirements; an empty list means the draft may be
/// submitted. These strings double as inline field-level messages.
pub fn validate_draft(draft: &RfqDraft) -> Vec<String> {
    let mut failed = Vec::new();

    if draft.lines.is_empty() {
        failed.push("at least one line item is required".to_owned());
    }
    for (index, line) in draft.lines.iter().enumerate() {
        let row = index + 1;
        if line.description.trim().is_empty() {
            failed.push(format!("line {row}: description is required"));
        }
        if line.quantity <= 0.0 {
            failed.push(format!("line {row}: quantity must be greater than zero"));
        }
    }

    if !draft.has_preselected_supplier() && draft.selected_supplier_ids.is_empty() {
        failed.push("at least one supplier must be selected".to_owned());
    }

    failed
}

pub fn draft_is_valid(draft: &RfqDraft) -> bool {
    validate_draft(draft).is_empty()
}

/// A line as sent over the wire. Client-only fields (`id`, `sku_id`,
/// `base_price`) are stripped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PayloadLine {
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_notes: Option<String>,
}

/// The `POST /rfqs` request body. Optional fields are omitted entirely when
/// absent rather than serialized as null.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RfqPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub title: String,
    pub lines: Vec<PayloadLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_window_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_window_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_location_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_location_lng: Option<f64>,
    pub delivery_preference: DeliveryPreference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub supplier_ids: Vec<String>,
}

impl RfqPayload {
    /// Assemble the atomic submission payload from a validated draft.
    /// Validation is re-run here so an invalid draft can never produce a
    /// payload, regardless of how the caller reached the review step.
    ///
    /// `today` feeds the default title, keeping assembly deterministic for
    /// callers that pin the date.
    pub fn assemble(draft: &RfqDraft, today: NaiveDate) -> Result<Self, DomainError> {
        let failed = validate_draft(draft);
        if !failed.is_empty() {
            return Err(DomainError::DraftInvalid { failed });
        }

        let title = if draft.title.trim().is_empty() {
            format!("RFQ - {}", today.format("%Y-%m-%d"))
        } else {
            draft.title.trim().to_owned()
        };

        let window = draft.delivery_window.as_ref();
        // Window dates widen to fixed working-day instants on the wire.
        let preferred_window_start =
            window.and_then(|w| w.start_date).map(|date| format!("{date}T08:00:00Z"));
        let preferred_window_end =
            window.and_then(|w| w.end_date).map(|date| format!("{date}T17:00:00Z"));

        Ok(Self {
            project_id: draft.project_id.as_ref().map(|id| id.0.clone()),
            title,
            lines: draft
                .lines
                .iter()
                .map(|line| PayloadLine {
                    description: line.description.clone(),
                    quantity: line.quantity,
                    unit: line.unit.clone(),
                    spec_notes: line.spec_notes.clone(),
                })
                .collect(),
            preferred_window_start,
            preferred_window_end,
            delivery_location_lat: draft.delivery_location.map(|c| c.latitude),
            delivery_location_lng: draft.delivery_location.map(|c| c.longitude),
            delivery_preference: draft.delivery_preference,
            additional_notes: draft.additional_notes.clone(),
            supplier_ids: draft.selected_supplier_ids.iter().map(|id| id.0.clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_draft, RfqPayload};
    use crate::domain::project::ProjectId;
    use crate::domain::rfq::{DeliveryWindow, LinePatch, RfqDraft, TimeSlot};
    use crate::domain::supplier::SupplierId;
    use crate::errors::DomainError;
    use chrono::NaiveDate;

    fn valid_open_draft() -> RfqDraft {
        let mut draft = RfqDraft::new();
        let id = draft.add_line();
        draft.update_line(
            id,
            LinePatch {
                description: Some("M250 Concrete".to_owned()),
                quantity: Some(5.0),
                unit: Some("m3".to_owned()),
                ..LinePatch::default()
            },
        );
        draft.select_supplier(SupplierId("s1".to_owned()));
        draft
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn empty_draft_reports_line_and_supplier_requirements() {
        let failed = validate_draft(&RfqDraft::new());
        assert!(failed.iter().any(|f| f.contains("line item")));
        assert!(failed.iter().any(|f| f.contains("supplier")));
    }

    #[test]
    fn preselected_supplier_satisfies_the_supplier_requirement() {
        let mut draft = RfqDraft::with_preselected_supplier(SupplierId("s-fixed".to_owned()));
        let id = draft.add_line();
        draft.update_line(
            id,
            LinePatch { description: Some("Bricks".to_owned()), ..LinePatch::default() },
        );

        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn per_line_failures_name_the_row() {
        let mut draft = RfqDraft::new();
        draft.add_line();
        let failed = validate_draft(&draft);

        assert!(failed.iter().any(|f| f == "line 1: description is required"));
    }

    #[test]
    fn invalid_draft_never_assembles() {
        let error = RfqPayload::assemble(&RfqDraft::new(), today())
            .expect_err("empty draft must not produce a payload");
        assert!(matches!(error, DomainError::DraftInvalid { .. }));
    }

    #[test]
    fn blank_title_defaults_to_dated_rfq() {
        let payload = RfqPayload::assemble(&valid_open_draft(), today()).expect("valid draft");
        assert_eq!(payload.title, "RFQ - 2026-08-30");
    }

    #[test]
    fn explicit_title_is_kept() {
        let mut draft = valid_open_draft();
        draft.title = "  Foundation pour, phase 2  ".to_owned();
        let payload = RfqPayload::assemble(&draft, today()).expect("valid draft");
        assert_eq!(payload.title, "Foundation pour, phase 2");
    }

    #[test]
    fn window_dates_expand_to_fixed_instants() {
        let mut draft = valid_open_draft();
        draft.delivery_window = Some(DeliveryWindow {
            start_date: NaiveDate::from_ymd_opt(2026, 9, 14),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 18),
            time_slot: TimeSlot::Morning,
            access_notes: None,
        });

        let payload = RfqPayload::assemble(&draft, today()).expect("valid draft");
        assert_eq!(payload.preferred_window_start.as_deref(), Some("2026-09-14T08:00:00Z"));
        assert_eq!(payload.preferred_window_end.as_deref(), Some("2026-09-18T17:00:00Z"));
    }

    #[test]
    fn absent_optionals_are_omitted_from_the_wire_shape() {
        let payload = RfqPayload::assemble(&valid_open_draft(), today()).expect("valid draft");
        let value = serde_json::to_value(&payload).expect("serializable");
        let object = value.as_object().expect("object");

        for absent in [
            "project_id",
            "preferred_window_start",
            "preferred_window_end",
            "delivery_location_lat",
            "delivery_location_lng",
            "additional_notes",
        ] {
            assert!(!object.contains_key(absent), "{absent} should be omitted");
        }
        assert_eq!(object["delivery_preference"], "delivery");
    }

    #[test]
    fn client_only_line_fields_are_stripped() {
        let payload = RfqPayload::assemble(&valid_open_draft(), today()).expect("valid draft");
        let value = serde_json::to_value(&payload).expect("serializable");
        let line = value["lines"][0].as_object().expect("line object");

        assert!(!line.contains_key("id"));
        assert!(!line.contains_key("sku_id"));
        assert!(!line.contains_key("base_price"));
        assert_eq!(line["description"], "M250 Concrete");
        assert_eq!(line["quantity"], 5.0);
        assert_eq!(line["unit"], "m3");
    }

    #[test]
    fn single_line_scenario_round_trip() {
        let mut draft = valid_open_draft();
        draft.project_id = Some(ProjectId("p-77".to_owned()));

        let payload = RfqPayload::assemble(&draft, today()).expect("valid draft");
        assert_eq!(payload.lines.len(), 1);
        assert_eq!(payload.supplier_ids, vec!["s1".to_owned()]);
        assert_eq!(payload.project_id.as_deref(), Some("p-77"));
        assert!(payload.preferred_window_start.is_none());
    }
}
