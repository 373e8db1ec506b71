use crate::domain::rfq::{LineItem, RfqDraft};
use crate::wizard::steps::{StepSequence, WizardStep};

/// One live wizard session over a draft: a fixed step sequence plus the
/// current position. Navigation is total and never errors; ineligible or
/// out-of-range moves are no-ops, matching a disabled navigation control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardSession {
    sequence: StepSequence,
    position: usize,
}

impl WizardSession {
    pub fn start(sequence: StepSequence) -> Self {
        Self { sequence, position: 0 }
    }

    /// Start a session whose sequence matches the draft's entry mode.
    pub fn for_draft(draft: &RfqDraft) -> Self {
        Self::start(StepSequence::for_entry(draft.has_preselected_supplier()))
    }

    pub fn sequence(&self) -> StepSequence {
        self.sequence
    }

    pub fn current_step(&self) -> WizardStep {
        self.sequence.steps()[self.position]
    }

    /// 1-based position, for "step N of M" display.
    pub fn step_number(&self) -> usize {
        self.position + 1
    }

    pub fn is_terminal(&self) -> bool {
        self.position + 1 == self.sequence.len()
    }

    /// Forward-eligibility for the current step. The Review step is terminal:
    /// submit replaces "next", so it is never advance-eligible.
    pub fn can_advance(&self, draft: &RfqDraft) -> bool {
        match self.current_step() {
            WizardStep::Items => {
                !draft.lines.is_empty() && draft.lines.iter().all(LineItem::is_valid)
            }
            WizardStep::Delivery => true,
            WizardStep::Suppliers => !draft.selected_supplier_ids.is_empty(),
            WizardStep::Review => false,
        }
    }

    /// Move one position forward in the sequence when eligible. Because the
    /// skipped Suppliers step does not exist in the Direct sequence, "next"
    /// from Delivery lands straight on Review there.
    pub fn next(&mut self, draft: &RfqDraft) -> WizardStep {
        if self.can_advance(draft) && !self.is_terminal() {
            self.position += 1;
        }
        self.current_step()
    }

    /// Move one position backward; never below the first step.
    pub fn previous(&mut self) -> WizardStep {
        self.position = self.position.saturating_sub(1);
        self.current_step()
    }
}

#[cfg(test)]
mod tests {
    use super::WizardSession;
    use crate::domain::rfq::{LinePatch, RfqDraft};
    use crate::domain::supplier::SupplierId;
    use crate::wizard::steps::{StepSequence, WizardStep};

    fn draft_with_valid_line(preselected: bool) -> RfqDraft {
        let mut draft = if preselected {
            RfqDraft::with_preselected_supplier(SupplierId("s-fixed".to_owned()))
        } else {
            RfqDraft::new()
        };
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
        draft
    }

    #[test]
    fn session_for_preselected_draft_uses_direct_sequence() {
        let draft = draft_with_valid_line(true);
        let session = WizardSession::for_draft(&draft);

        assert_eq!(session.sequence(), StepSequence::Direct);
        assert_eq!(session.current_step(), WizardStep::Items);
        assert_eq!(session.step_number(), 1);
    }

    #[test]
    fn direct_sequence_skips_suppliers_both_directions() {
        let draft = draft_with_valid_line(true);
        let mut session = WizardSession::for_draft(&draft);

        assert_eq!(session.next(&draft), WizardStep::Delivery);
        assert_eq!(session.next(&draft), WizardStep::Review, "delivery jumps straight to review");

        assert_eq!(session.previous(), WizardStep::Delivery, "previous mirrors the skip");
        assert_eq!(session.previous(), WizardStep::Items);
    }

    #[test]
    fn open_sequence_walks_through_suppliers() {
        let mut draft = draft_with_valid_line(false);
        draft.select_supplier(SupplierId("s1".to_owned()));
        let mut session = WizardSession::for_draft(&draft);

        assert_eq!(session.next(&draft), WizardStep::Delivery);
        assert_eq!(session.next(&draft), WizardStep::Suppliers);
        assert_eq!(session.next(&draft), WizardStep::Review);
        assert!(session.is_terminal());
    }

    #[test]
    fn items_step_blocks_until_all_lines_valid() {
        let mut draft = RfqDraft::new();
        let mut session = WizardSession::for_draft(&draft);

        assert!(!session.can_advance(&draft), "no lines");
        let id = draft.add_line();
        assert!(!session.can_advance(&draft), "blank description");
        assert_eq!(session.next(&draft), WizardStep::Items, "ineligible next is a no-op");

        draft.update_line(
            id,
            LinePatch { description: Some("Sand".to_owned()), ..LinePatch::default() },
        );
        assert!(session.can_advance(&draft));
    }

    #[test]
    fn populated_but_zero_quantity_line_blocks_items_step() {
        let mut draft = RfqDraft::new();
        let id = draft.add_line();
        draft.update_line(
            id,
            LinePatch {
                description: Some("Gravel".to_owned()),
                quantity: Some(crate::domain::rfq::parse_quantity("-5")),
                ..LinePatch::default()
            },
        );

        let session = WizardSession::for_draft(&draft);
        assert!(!session.can_advance(&draft));
    }

    #[test]
    fn suppliers_step_requires_a_selection() {
        let mut draft = draft_with_valid_line(false);
        let mut session = WizardSession::for_draft(&draft);
        session.next(&draft);
        session.next(&draft);
        assert_eq!(session.current_step(), WizardStep::Suppliers);

        assert!(!session.can_advance(&draft));
        assert_eq!(session.next(&draft), WizardStep::Suppliers);

        draft.select_supplier(SupplierId("s1".to_owned()));
        assert!(session.can_advance(&draft));
        assert_eq!(session.next(&draft), WizardStep::Review);
    }

    #[test]
    fn navigation_is_clamped_at_both_ends() {
        let draft = draft_with_valid_line(true);
        let mut session = WizardSession::for_draft(&draft);

        assert_eq!(session.previous(), WizardStep::Items, "cannot go below step one");

        session.next(&draft);
        session.next(&draft);
        assert!(session.is_terminal());
        assert_eq!(session.next(&draft), WizardStep::Review, "terminal next is a no-op");
        assert_eq!(session.step_number(), 3);
    }

    #[test]
    fn review_step_is_never_advance_eligible() {
        let draft = draft_with_valid_line(true);
        let mut session = WizardSession::for_draft(&draft);
        session.next(&draft);
        session.next(&draft);

        assert_eq!(session.current_step(), WizardStep::Review);
        assert!(!session.can_advance(&draft));
    }
}
