pub mod config;
pub mod domain;
pub mod errors;
pub mod geo;
pub mod scoring;
pub mod submit;
pub mod wizard;

pub use domain::catalog::{Sku, SkuId};
pub use domain::project::{Project, ProjectId};
pub use domain::rfq::{
    parse_quantity, DeliveryPreference, DeliveryWindow, LineId, LineItem, LinePatch, RfqDraft,
    TimeSlot,
};
pub use domain::supplier::{Supplier, SupplierId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use geo::{haversine_km, rank_by_distance, Coordinates, RankedSupplier};
pub use scoring::{ConfidenceSignals, ConfidenceTier};
pub use submit::{draft_is_valid, validate_draft, PayloadLine, RfqPayload};
pub use wizard::{StepSequence, WizardSession, WizardStep};
