use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use sitequote_core::config::ApiConfig;
use sitequote_core::{Project, RfqPayload, Sku, SkuId, Supplier};

use crate::backend::{ApiError, RfqBackend, RfqReceipt, SupplierFilter};

const ERROR_BODY_EXCERPT: usize = 200;

/// `reqwest`-backed implementation of [`RfqBackend`]. The bearer token is
/// attached to every request when configured; reads work unauthenticated,
/// submission does not.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    bearer_token: Option<SecretString>,
}

impl HttpBackend {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client =
            Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail: String = body.chars().take(ERROR_BODY_EXCERPT).collect();
            warn!(status = status.as_u16(), %detail, "api request rejected");
            return Err(ApiError::Status { status: status.as_u16(), detail });
        }

        response.json::<T>().await.map_err(|error| ApiError::Decode(error.to_string()))
    }
}

#[async_trait]
impl RfqBackend for HttpBackend {
    async fn create_rfq(&self, payload: &RfqPayload) -> Result<RfqReceipt, ApiError> {
        if self.bearer_token.is_none() {
            // Surfaced before any bytes leave the client; the UI routes this
            // to the sign-in affordance.
            warn!("rfq submission attempted without a bearer token");
            return Err(ApiError::Unauthenticated);
        }

        let url = self.endpoint("rfqs");
        debug!(%url, lines = payload.lines.len(), "submitting rfq");

        let response = self.authorize(self.client.post(&url)).json(payload).send().await?;
        let receipt: RfqReceipt = Self::read_json(response).await?;

        tracing::info!(rfq_id = %receipt.id, "rfq submitted");
        Ok(receipt)
    }

    async fn list_suppliers(&self, filter: &SupplierFilter) -> Result<Vec<Supplier>, ApiError> {
        let url = self.endpoint("suppliers");
        let request = self.authorize(self.client.get(&url)).query(&filter.query_pairs());
        Self::read_json(request.send().await?).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let url = self.endpoint("projects");
        Self::read_json(self.authorize(self.client.get(&url)).send().await?).await
    }

    async fn lookup_sku(&self, id: &SkuId) -> Result<Sku, ApiError> {
        let url = self.endpoint(&format!("skus/{}", id.0));
        Self::read_json(self.authorize(self.client.get(&url)).send().await?).await
    }
}
