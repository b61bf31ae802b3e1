//! Page-load orchestration: fetch, gate, paint, arm.
//!
//! One [`WidgetController`] exists per page load and walks a one-way state
//! machine: `Idle → Fetching → {Rejected, Rendered} → Dismissed`. Every
//! failure on the way to `Rendered` — network, malformed body, validation —
//! lands in `Rejected` with a `debug!` diagnostic and no visible change; the
//! shopper never sees a broken widget, only no widget.

use chrono::{DateTime, Utc};
use proofpop_client::{resolve_base_url, ClientError, ModalClient};
use proofpop_core::payload::{AttributionEvent, PageType, ViewerContext};
use proofpop_core::text::compose_widget_text;
use proofpop_core::validate::validate;

use crate::render::{RenderAdapter, WidgetRenderer};

const FETCH_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "proofpop-widget/0.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Fetching,
    /// Terminal: the payload was unusable (or the fetch failed); nothing was
    /// painted and nothing will be.
    Rejected,
    Rendered,
    /// Terminal: the shopper closed the overlay.
    Dismissed,
}

/// Drives the widget for one page load.
pub struct WidgetController<A: RenderAdapter> {
    client: ModalClient,
    renderer: WidgetRenderer<A>,
    viewer: ViewerContext,
    state: ControllerState,
    /// Attribution event bound to the rendered payload; armed on render,
    /// disarmed on dismissal.
    armed: Option<AttributionEvent>,
}

impl<A: RenderAdapter> WidgetController<A> {
    /// Builds a controller whose endpoint is resolved from the page URL via
    /// the staging allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn from_page(adapter: A, viewer: ViewerContext) -> Result<Self, ClientError> {
        let base_url = resolve_base_url(&viewer.page_url);
        let client = ModalClient::new(base_url, FETCH_TIMEOUT_SECS, USER_AGENT)?;
        Ok(Self::new(client, adapter, viewer))
    }

    /// Builds a controller against an explicit client. Test seam and the
    /// demo binary's `--base-url` override.
    pub fn new(client: ModalClient, adapter: A, viewer: ViewerContext) -> Self {
        Self {
            client,
            renderer: WidgetRenderer::new(adapter),
            viewer,
            state: ControllerState::Idle,
            armed: None,
        }
    }

    /// Runs the page-load sequence once: product-page check, fetch, gate,
    /// paint, arm. Safe to call again, but only the first call does work;
    /// later calls return the current state unchanged.
    ///
    /// `now` is the clock reading used for relative-time text; injected so
    /// tests are deterministic.
    pub async fn run(&mut self, now: DateTime<Utc>) -> ControllerState {
        if self.state != ControllerState::Idle {
            return self.state;
        }
        if self.viewer.page_type != PageType::Product {
            tracing::debug!(page_url = %self.viewer.page_url, "not a product page; widget stays idle");
            return self.state;
        }

        self.state = ControllerState::Fetching;
        let fetched = self
            .client
            .fetch_widget_config(&self.viewer.shop_domain, self.viewer.current_product_id)
            .await;

        let payload = match fetched {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                tracing::debug!("modal service returned an empty config; nothing to render");
                self.state = ControllerState::Rejected;
                return self.state;
            }
            Err(err) => {
                tracing::debug!(error = %err, "widget config fetch failed; nothing to render");
                self.state = ControllerState::Rejected;
                return self.state;
            }
        };

        if !validate(&payload) {
            self.state = ControllerState::Rejected;
            return self.state;
        }

        // A validated payload can still fail composition when the order
        // timestamp is ahead of the shopper's clock.
        let Some(text) = compose_widget_text(&payload, now) else {
            tracing::debug!("widget text could not be derived; nothing to render");
            self.state = ControllerState::Rejected;
            return self.state;
        };

        match self.renderer.render(&payload, &text, &self.viewer) {
            Ok(()) => {
                self.armed = Some(AttributionEvent {
                    shop_domain: self.viewer.shop_domain.clone(),
                    product_id_shown: payload.product_id,
                    product_id_viewed: self.viewer.current_product_id,
                });
                self.state = ControllerState::Rendered;
            }
            Err(err) => {
                tracing::debug!(error = %err, "render refused; treating as rejected");
                self.state = ControllerState::Rejected;
            }
        }
        self.state
    }

    /// Reports a click on the overlay's product-name or image slot.
    ///
    /// Spawns exactly one best-effort attribution POST per call; failures
    /// are logged at `warn!` and never surfaced, retried, or allowed to
    /// affect the overlay. The returned handle exists so tests can await
    /// delivery — production callers drop it.
    pub fn handle_click(&self) -> Option<tokio::task::JoinHandle<()>> {
        if self.state != ControllerState::Rendered {
            return None;
        }
        let event = self.armed.clone()?;
        let client = self.client.clone();
        Some(tokio::spawn(async move {
            if let Err(err) = client.report_attribution(&event).await {
                tracing::warn!(error = %err, "attribution report failed");
            }
        }))
    }

    /// Dismisses the overlay. Terminal: no re-fetch or re-render happens for
    /// the rest of the page's lifetime, and clicks no longer report.
    pub fn dismiss(&mut self) {
        if self.state == ControllerState::Rendered {
            self.renderer.dismiss();
            self.armed = None;
            self.state = ControllerState::Dismissed;
        }
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn renderer(&self) -> &WidgetRenderer<A> {
        &self.renderer
    }
}
