use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use sitequote_core::{validate_draft, RfqDraft, RfqPayload};

use crate::backend::{ApiError, RfqBackend, RfqReceipt};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("draft failed validation: {0:?}")]
    Invalid(Vec<String>),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "Complete the highlighted fields before submitting.",
            Self::Api(error) => error.user_message(),
        }
    }
}

/// Submit a draft from the review step. Full-draft validity is recomputed
/// here; an invalid draft returns the failed requirements without touching
/// the network. On any failure the draft is left unchanged so the caller can
/// retry by re-invoking. There is no automatic retry.
pub async fn submit_draft<B: RfqBackend>(
    backend: &B,
    draft: &RfqDraft,
) -> Result<RfqReceipt, SubmitError> {
    let failed = validate_draft(draft);
    if !failed.is_empty() {
        warn!(?failed, "rfq submission blocked by validation");
        return Err(SubmitError::Invalid(failed));
    }

    let payload = RfqPayload::assemble(draft, Utc::now().date_naive())
        .map_err(|error| match error {
            sitequote_core::DomainError::DraftInvalid { failed } => SubmitError::Invalid(failed),
            other => SubmitError::Invalid(vec![other.to_string()]),
        })?;

    let receipt = backend.create_rfq(&payload).await?;
    info!(rfq_id = %receipt.id, suppliers = payload.supplier_ids.len(), "rfq draft submitted");
    Ok(receipt)
}
