use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use sitequote_core::{Project, RfqPayload, Sku, SkuId, Supplier};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authenticated: no bearer token is configured")]
    Unauthenticated,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing notification text. Transport and server failures collapse
    /// into one retryable message; the draft is always retained by callers.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Sign in to submit a request for quotes.",
            Self::Transport(_) | Self::Status { .. } => {
                "The request could not be sent. Check your connection and try again."
            }
            Self::Decode(_) => "The server response could not be read. Please try again.",
        }
    }
}

/// Acknowledgement returned by `POST /rfqs`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RfqReceipt {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierFilter {
    pub category: Option<String>,
    pub verified_only: bool,
}

impl SupplierFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if self.verified_only {
            pairs.push(("verified", "true".to_string()));
        }
        pairs
    }
}

/// The REST backend as the wizard sees it. Everything here is an independent,
/// idempotent read except `create_rfq`, which is atomic from the client's
/// perspective.
#[async_trait]
pub trait RfqBackend: Send + Sync {
    async fn create_rfq(&self, payload: &RfqPayload) -> Result<RfqReceipt, ApiError>;
    async fn list_suppliers(&self, filter: &SupplierFilter) -> Result<Vec<Supplier>, ApiError>;
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;
    async fn lookup_sku(&self, id: &SkuId) -> Result<Sku, ApiError>;
}

/// Degraded SKU lookup for wizard entry from a product page: a failed lookup
/// logs a diagnostic and yields `None`, so the wizard still opens with an
/// empty line list instead of blocking.
pub async fn lookup_sku_or_none<B: RfqBackend>(backend: &B, id: &SkuId) -> Option<Sku> {
    match backend.lookup_sku(id).await {
        Ok(sku) => Some(sku),
        Err(error) => {
            tracing::warn!(sku_id = %id.0, %error, "sku lookup failed; entering wizard without a seeded line");
            None
        }
    }
}
