mod session;
mod steps;

pub use session::WizardSession;
pub use steps::{StepSequence, WizardStep};
