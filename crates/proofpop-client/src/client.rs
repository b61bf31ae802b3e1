use std::time::Duration;

use proofpop_core::payload::{AttributionEvent, WidgetPayload};
use reqwest::Client;
use serde::Serialize;

use crate::endpoint::modal_url;
use crate::error::ClientError;

/// HTTP client for the modal service.
///
/// Wraps `reqwest` with explicit timeouts and a descriptive `User-Agent`.
/// One instance per page load; cheap to clone (the inner `reqwest::Client`
/// is an `Arc` around its connection pool), which is how the fire-and-forget
/// attribution send moves into a spawned task.
#[derive(Clone)]
pub struct ModalClient {
    client: Client,
    base_url: String,
}

/// Wire body of the attribution POST. Field names are the service's, not
/// ours: `store_name` is the shop domain, `product_id_to` the product the
/// overlay advertised, `product_id_from` the product page it was shown on.
#[derive(Debug, Serialize)]
struct AttributionBody<'a> {
    store_name: &'a str,
    product_id_to: i64,
    product_id_from: i64,
}

impl ModalClient {
    /// Creates a `ModalClient` against `base_url` (see
    /// [`crate::endpoint::resolve_base_url`]; tests point this at a mock
    /// server).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// Fetches the widget configuration for one shop+product pair.
    ///
    /// Returns `Ok(None)` when the service answers with an empty or `null`
    /// body, which is its way of saying "nothing to show" — callers treat it
    /// like a validation rejection, not an error.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ClientError::Http`] — network or TLS failure, or timeout.
    /// - [`ClientError::Deserialize`] — non-empty body that is not a valid
    ///   `WidgetPayload`.
    pub async fn fetch_widget_config(
        &self,
        shop_domain: &str,
        product_id: i64,
    ) -> Result<Option<WidgetPayload>, ClientError> {
        let url = modal_url(&self.base_url, shop_domain, product_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        let payload = serde_json::from_str::<WidgetPayload>(trimmed).map_err(|e| {
            ClientError::Deserialize {
                context: format!("widget config for {shop_domain}/{product_id}"),
                source: e,
            }
        })?;
        Ok(Some(payload))
    }

    /// Sends one attribution record to the modal endpoint of the page the
    /// shopper is on. The response body is ignored.
    ///
    /// This is the single-attempt primitive; the caller decides what
    /// best-effort means (the widget spawns it and logs failures).
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ClientError::Http`] — network or TLS failure, or timeout.
    pub async fn report_attribution(&self, event: &AttributionEvent) -> Result<(), ClientError> {
        let url = modal_url(&self.base_url, &event.shop_domain, event.product_id_viewed);
        let body = AttributionBody {
            store_name: &event.shop_domain,
            product_id_to: event.product_id_shown,
            product_id_from: event.product_id_viewed,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        tracing::debug!(
            shop_domain = %event.shop_domain,
            product_id_shown = event.product_id_shown,
            product_id_viewed = event.product_id_viewed,
            "attribution recorded"
        );
        Ok(())
    }
}
