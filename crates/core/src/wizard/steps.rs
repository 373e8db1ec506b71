use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Items,
    Delivery,
    Suppliers,
    Review,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Items => "Line items",
            WizardStep::Delivery => "Delivery details",
            WizardStep::Suppliers => "Choose suppliers",
            WizardStep::Review => "Review and submit",
        }
    }
}

/// The two possible step sequences, fixed at wizard entry. `Direct` applies
/// when a supplier was preselected from a product page: the supplier-choice
/// step does not exist in that sequence, it is not merely hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepSequence {
    Direct,
    Open,
}

const DIRECT_STEPS: [WizardStep; 3] = [WizardStep::Items, WizardStep::Delivery, WizardStep::Review];
const OPEN_STEPS: [WizardStep; 4] =
    [WizardStep::Items, WizardStep::Delivery, WizardStep::Suppliers, WizardStep::Review];

impl StepSequence {
    /// Choose the sequence for a new session. Computed exactly once per
    /// session; recomputing mid-flow would invalidate the current position.
    pub fn for_entry(supplier_preselected: bool) -> Self {
        if supplier_preselected {
            StepSequence::Direct
        } else {
            StepSequence::Open
        }
    }

    pub fn steps(&self) -> &'static [WizardStep] {
        match self {
            StepSequence::Direct => &DIRECT_STEPS,
            StepSequence::Open => &OPEN_STEPS,
        }
    }

    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, step: WizardStep) -> bool {
        self.steps().contains(&step)
    }

    pub fn position(&self, step: WizardStep) -> Option<usize> {
        self.steps().iter().position(|candidate| *candidate == step)
    }
}
