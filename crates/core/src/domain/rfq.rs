use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::{Sku, SkuId};
use crate::domain::project::ProjectId;
use crate::domain::supplier::SupplierId;
use crate::geo::Coordinates;

/// Soft cap on line items. Crossing it surfaces a warning but never blocks
/// an add.
pub const LINE_SOFT_CAP: usize = 50;

/// Hard cap on supplier selection, enforced at selection time.
pub const MAX_SELECTED_SUPPLIERS: usize = 5;

pub const DEFAULT_UNIT: &str = "unit";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub Uuid);

impl LineId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    #[default]
    Flexible,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryPreference {
    #[default]
    Delivery,
    Pickup,
    Both,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub time_slot: TimeSlot,
    pub access_notes: Option<String>,
}

/// A single requested material. `id` and `base_price` are client-side only
/// and never serialized into the submission payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineId,
    pub sku_id: Option<SkuId>,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub spec_notes: Option<String>,
    pub base_price: Option<Decimal>,
}

impl LineItem {
    /// A line counts toward step eligibility only when it names a material
    /// and requests a positive quantity.
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty() && self.quantity > 0.0
    }
}

/// Partial update for a line item. Unset fields leave the line untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePatch {
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub spec_notes: Option<Option<String>>,
}

/// Coerce raw quantity input to a usable number. Non-numeric and negative
/// input both collapse to `0.0`, which deliberately leaves the line invalid
/// for the step-eligibility check instead of raising an input error.
pub fn parse_quantity(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// The in-memory, unsubmitted state of an RFQ being composed. Owned by one
/// wizard session and discarded on successful submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RfqDraft {
    pub project_id: Option<ProjectId>,
    pub title: String,
    pub lines: Vec<LineItem>,
    pub delivery_window: Option<DeliveryWindow>,
    pub delivery_location: Option<Coordinates>,
    pub delivery_preference: DeliveryPreference,
    pub additional_notes: Option<String>,
    pub selected_supplier_ids: Vec<SupplierId>,
    preselected_supplier: Option<SupplierId>,
}

impl RfqDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft with the supplier fixed before the wizard opened (entry
    /// from a product page). The selection is pinned: the preselected
    /// supplier cannot be removed, though alternatives may still be added.
    pub fn with_preselected_supplier(supplier_id: SupplierId) -> Self {
        Self {
            selected_supplier_ids: vec![supplier_id.clone()],
            preselected_supplier: Some(supplier_id),
            ..Self::default()
        }
    }

    pub fn preselected_supplier(&self) -> Option<&SupplierId> {
        self.preselected_supplier.as_ref()
    }

    pub fn has_preselected_supplier(&self) -> bool {
        self.preselected_supplier.is_some()
    }

    /// Append a fresh line with default quantity 1 and a generated id. No
    /// validation happens here; invalid lines are caught at step advance.
    pub fn add_line(&mut self) -> LineId {
        let id = LineId::generate();
        self.lines.push(LineItem {
            id,
            sku_id: None,
            description: String::new(),
            quantity: 1.0,
            unit: DEFAULT_UNIT.to_owned(),
            spec_notes: None,
            base_price: None,
        });
        id
    }

    /// Append a line seeded from a catalog SKU lookup.
    pub fn add_line_from_sku(&mut self, sku: &Sku) -> LineId {
        let id = LineId::generate();
        self.lines.push(LineItem {
            id,
            sku_id: Some(sku.id.clone()),
            description: sku.name.clone(),
            quantity: 1.0,
            unit: sku.unit.clone(),
            spec_notes: None,
            base_price: sku.base_price,
        });
        id
    }

    /// Merge partial fields into the matching line. Returns `false` (no-op)
    /// when the id is unknown.
    pub fn update_line(&mut self, id: LineId, patch: LinePatch) -> bool {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return false;
        };

        if let Some(description) = patch.description {
            line.description = description;
        }
        if let Some(quantity) = patch.quantity {
            line.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            line.unit = unit;
        }
        if let Some(spec_notes) = patch.spec_notes {
            line.spec_notes = spec_notes;
        }
        true
    }

    /// Delete the matching line, preserving the order of the remainder.
    pub fn remove_line(&mut self, id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() < before
    }

    /// Soft-cap signal for the line list; callers surface a warning, never a
    /// hard block.
    pub fn over_line_cap(&self) -> bool {
        self.lines.len() > LINE_SOFT_CAP
    }

    /// Add a supplier to the selection. Rejects duplicates and anything past
    /// the five-supplier cap.
    pub fn select_supplier(&mut self, id: SupplierId) -> bool {
        if self.selected_supplier_ids.contains(&id)
            || self.selected_supplier_ids.len() >= MAX_SELECTED_SUPPLIERS
        {
            return false;
        }
        self.selected_supplier_ids.push(id);
        true
    }

    /// Remove a supplier from the selection. The preselected supplier is
    /// pinned and cannot be deselected.
    pub fn deselect_supplier(&mut self, id: &SupplierId) -> bool {
        if self.preselected_supplier.as_ref() == Some(id) {
            return false;
        }
        let before = self.selected_supplier_ids.len();
        self.selected_supplier_ids.retain(|selected| selected != id);
        self.selected_supplier_ids.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_quantity, LinePatch, RfqDraft, DEFAULT_UNIT, LINE_SOFT_CAP, MAX_SELECTED_SUPPLIERS,
    };
    use crate::domain::catalog::{Sku, SkuId};
    use crate::domain::supplier::SupplierId;
    use rust_decimal::Decimal;

    #[test]
    fn add_line_uses_editor_defaults() {
        let mut draft = RfqDraft::new();
        let id = draft.add_line();

        let line = &draft.lines[0];
        assert_eq!(line.id, id);
        assert_eq!(line.quantity, 1.0);
        assert_eq!(line.unit, DEFAULT_UNIT);
        assert!(line.description.is_empty());
        assert!(!line.is_valid(), "blank description must leave the line invalid");
    }

    #[test]
    fn add_line_from_sku_seeds_fields() {
        let mut draft = RfqDraft::new();
        let sku = Sku {
            id: SkuId("sku-cement-42".to_owned()),
            name: "Portland Cement 42.5".to_owned(),
            unit: "bag".to_owned(),
            category: Some("cement".to_owned()),
            base_price: Some(Decimal::new(1250, 2)),
        };
        draft.add_line_from_sku(&sku);

        let line = &draft.lines[0];
        assert_eq!(line.description, "Portland Cement 42.5");
        assert_eq!(line.unit, "bag");
        assert_eq!(line.sku_id.as_ref(), Some(&sku.id));
        assert!(line.is_valid());
    }

    #[test]
    fn editor_sequence_preserves_order_and_latest_updates() {
        let mut draft = RfqDraft::new();
        let first = draft.add_line();
        let second = draft.add_line();
        let third = draft.add_line();

        draft.update_line(
            second,
            LinePatch { description: Some("Rebar 12mm".to_owned()), ..LinePatch::default() },
        );
        draft.update_line(second, LinePatch { quantity: Some(40.0), ..LinePatch::default() });
        draft.remove_line(first);

        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].id, second);
        assert_eq!(draft.lines[0].description, "Rebar 12mm");
        assert_eq!(draft.lines[0].quantity, 40.0);
        assert_eq!(draft.lines[1].id, third);
    }

    #[test]
    fn update_of_unknown_line_is_a_noop() {
        let mut draft = RfqDraft::new();
        let id = draft.add_line();
        draft.remove_line(id);

        let applied = draft.update_line(
            id,
            LinePatch { description: Some("ghost".to_owned()), ..LinePatch::default() },
        );

        assert!(!applied);
        assert!(draft.lines.is_empty());
    }

    #[test]
    fn spec_notes_patch_can_set_and_clear() {
        let mut draft = RfqDraft::new();
        let id = draft.add_line();

        draft.update_line(
            id,
            LinePatch {
                spec_notes: Some(Some("C25/30, pumped".to_owned())),
                ..LinePatch::default()
            },
        );
        assert_eq!(draft.lines[0].spec_notes.as_deref(), Some("C25/30, pumped"));

        draft.update_line(id, LinePatch { spec_notes: Some(None), ..LinePatch::default() });
        assert_eq!(draft.lines[0].spec_notes, None);
    }

    #[test]
    fn quantity_input_coercion() {
        assert_eq!(parse_quantity("2.5"), 2.5);
        assert_eq!(parse_quantity(" 40 "), 40.0);
        assert_eq!(parse_quantity("-5"), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("NaN"), 0.0);
    }

    #[test]
    fn negative_quantity_leaves_line_invalid() {
        let mut draft = RfqDraft::new();
        let id = draft.add_line();
        draft.update_line(
            id,
            LinePatch {
                description: Some("M250 Concrete".to_owned()),
                quantity: Some(parse_quantity("-5")),
                ..LinePatch::default()
            },
        );

        assert!(!draft.lines[0].is_valid());
    }

    #[test]
    fn line_cap_is_soft() {
        let mut draft = RfqDraft::new();
        for _ in 0..=LINE_SOFT_CAP {
            draft.add_line();
        }

        assert_eq!(draft.lines.len(), LINE_SOFT_CAP + 1, "cap never blocks an add");
        assert!(draft.over_line_cap());
    }

    #[test]
    fn supplier_selection_enforces_cap_and_uniqueness() {
        let mut draft = RfqDraft::new();
        for n in 0..MAX_SELECTED_SUPPLIERS {
            assert!(draft.select_supplier(SupplierId(format!("s{n}"))));
        }

        assert!(!draft.select_supplier(SupplierId("s0".to_owned())), "duplicate");
        assert!(!draft.select_supplier(SupplierId("s9".to_owned())), "over cap");
        assert_eq!(draft.selected_supplier_ids.len(), MAX_SELECTED_SUPPLIERS);
    }

    #[test]
    fn preselected_supplier_is_pinned() {
        let pinned = SupplierId("s-pinned".to_owned());
        let mut draft = RfqDraft::with_preselected_supplier(pinned.clone());

        assert!(draft.has_preselected_supplier());
        assert_eq!(draft.selected_supplier_ids, vec![pinned.clone()]);
        assert!(!draft.deselect_supplier(&pinned), "pinned supplier cannot be removed");

        let alternative = SupplierId("s-alt".to_owned());
        assert!(draft.select_supplier(alternative.clone()));
        assert!(draft.deselect_supplier(&alternative), "alternatives remain editable");
        assert_eq!(draft.selected_supplier_ids, vec![pinned]);
    }
}
