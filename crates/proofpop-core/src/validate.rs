//! Render-safety gate for fetched payloads.
//!
//! The modal service answers even when nothing is worth showing — no
//! qualifying order in the look-back window, attribution data scrubbed, a
//! product with no name. Those payloads are the common case, not errors: the
//! widget simply stays invisible. [`validate`] is the single predicate the
//! controller consults before any rendering work happens; a rejected payload
//! never reaches the renderer, so no partial overlay can appear.

use crate::payload::{DisplayMode, WidgetPayload};

fn present(field: Option<&str>) -> bool {
    field.is_some_and(|s| !s.is_empty())
}

/// Returns `true` when `payload` carries everything its display mode needs
/// to render. Pure: no network, no rendering, only `debug!` diagnostics on
/// the rejection paths.
#[must_use]
pub fn validate(payload: &WidgetPayload) -> bool {
    if !present(payload.product_name.as_deref()) {
        tracing::debug!(product_id = payload.product_id, "rejecting payload: no product name");
        return false;
    }

    match payload.display_mode {
        DisplayMode::Latest => {
            if payload.processed_at.is_none() {
                tracing::debug!(
                    product_id = payload.product_id,
                    "rejecting payload: no order inside the look-back window"
                );
                return false;
            }
            if !present(payload.first_name.as_deref()) || !present(payload.last_name.as_deref()) {
                tracing::debug!(
                    product_id = payload.product_id,
                    "rejecting payload: purchaser name missing from order"
                );
                return false;
            }
            true
        }
        DisplayMode::Purchase => {
            if payload.last_order_qty.unwrap_or(0) == 0 {
                tracing::debug!(
                    product_id = payload.product_id,
                    "rejecting payload: nothing sold inside the look-back window"
                );
                return false;
            }
            true
        }
        DisplayMode::Unknown => {
            tracing::debug!(
                product_id = payload.product_id,
                "rejecting payload: unrecognized display mode"
            );
            false
        }
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
