//! Wire types for the modal configuration endpoint.
//!
//! ## Observed shape from the modal service
//!
//! ### `social_setting`
//! A plain string, `"latest"` or `"purchase"`. The service has historically
//! emitted other values during experiments; anything unrecognized maps to
//! [`DisplayMode::Unknown`] so the validator can reject it instead of the
//! renderer guessing a narrative.
//!
//! ### Mode-specific fields
//! For `latest` the service includes `first_name`, `last_name`, and
//! `processed_at` only when a qualifying order exists inside the look-back
//! window; otherwise the fields are `null` or omitted entirely. For
//! `purchase` the aggregate count arrives as `last_order_qty`, but older
//! service versions used `qty_from_look_back` — the deserializer accepts
//! both names.
//!
//! ### `processed_at`
//! RFC 3339 timestamp with a zone offset, e.g. `"2017-11-29T16:41:00-05:00"`.
//!
//! ### `look_back`
//! The merchant-configured scan window, in hours.
//!
//! Every display/link field is `#[serde(default)]` so a sparse body still
//! deserializes; missing fields surface as validation rejections rather than
//! parse errors.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Which narrative the widget shows: the single most recent purchaser, or an
/// aggregate purchase count over the look-back window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Latest,
    Purchase,
    /// Any value the deserializer does not recognize, including an absent
    /// field. Always rejected by validation.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Screen corner the overlay anchors to. Only the horizontal side differs;
/// the overlay always sits along the bottom edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum OverlayLocation {
    #[default]
    #[serde(rename = "lower-left")]
    LowerLeft,
    #[serde(rename = "lower-right")]
    LowerRight,
}

/// Per-shop widget configuration plus the activity snapshot for one product,
/// as returned by `GET /api/modal/{shop}/{product_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetPayload {
    #[serde(rename = "social_setting", default)]
    pub display_mode: DisplayMode,

    /// Product the widget advertises. May differ from the product being
    /// viewed when the merchant's scope setting allows related products.
    pub product_id: i64,

    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub main_image_url: Option<String>,

    /// Storefront domain used to build the product link, e.g.
    /// `"acme.myshopify.com"`.
    #[serde(rename = "store_name", default)]
    pub store_domain: Option<String>,

    /// URL slug of the advertised product.
    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub location: OverlayLocation,

    /// Server-side scan window, in hours.
    #[serde(rename = "look_back", default)]
    pub look_back_hours: u32,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// When the most recent qualifying order was processed. Absent when no
    /// order fell inside the look-back window.
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,

    /// Number of units sold inside the look-back window.
    #[serde(rename = "last_order_qty", alias = "qty_from_look_back", default)]
    pub last_order_qty: Option<u32>,
}

impl WidgetPayload {
    /// Canonical storefront URL for the advertised product, when both the
    /// store domain and handle are present.
    #[must_use]
    pub fn product_link(&self) -> Option<String> {
        let domain = self.store_domain.as_deref()?;
        let handle = self.handle.as_deref()?;
        Some(format!("https://{domain}/products/{handle}"))
    }

    /// `true` when the advertised product is not the one being viewed, i.e.
    /// the overlay should link out to the advertised product's page.
    #[must_use]
    pub fn advertises_other_product(&self, viewed_product_id: i64) -> bool {
        self.product_id != viewed_product_id
    }
}

/// Kind of page the host storefront reports itself as. The widget only ever
/// activates on product pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Product,
    Other,
}

/// Who is browsing what. Supplied by the host page at load time and
/// immutable for the page's lifetime.
#[derive(Debug, Clone)]
pub struct ViewerContext {
    pub shop_domain: String,
    pub current_product_id: i64,
    /// Full URL of the current page; drives staging-vs-production endpoint
    /// selection.
    pub page_url: String,
    pub page_type: PageType,
}

/// A click-through record linking the product shown in the overlay to the
/// product the shopper was viewing. Built at click time; sent exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionEvent {
    pub shop_domain: String,
    pub product_id_shown: i64,
    pub product_id_viewed: i64,
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
