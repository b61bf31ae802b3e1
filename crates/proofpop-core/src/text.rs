//! Narrative text for the overlay's three text slots.

use chrono::{DateTime, Utc};

use crate::payload::{DisplayMode, WidgetPayload};
use crate::timefmt;

/// The three shopper-visible strings of a rendered overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetText {
    /// "Ann Lee purchased a" or "5 people purchased".
    pub headline: String,
    pub product_name: String,
    /// "2 hours ago" or "Past 3 days".
    pub timestamp: String,
}

/// Derives all three text slots from a validated payload.
///
/// Returns `None` when a field the display mode requires is missing or when
/// the order timestamp lies in the future; callers treat `None` as a
/// rejection. On a payload that passed [`crate::validate::validate`] the
/// only remaining `None` source is clock skew.
#[must_use]
pub fn compose_widget_text(payload: &WidgetPayload, now: DateTime<Utc>) -> Option<WidgetText> {
    let product_name = payload.product_name.clone()?;
    let (headline, timestamp) = match payload.display_mode {
        DisplayMode::Latest => {
            let first = payload.first_name.as_deref()?;
            let last = payload.last_name.as_deref()?;
            let timestamp = timefmt::ago_text(payload.processed_at?, now)?;
            (format!("{first} {last} purchased a"), timestamp)
        }
        DisplayMode::Purchase => {
            let qty = payload.last_order_qty?;
            let headline = if qty == 1 {
                "1 person purchased".to_owned()
            } else {
                format!("{qty} people purchased")
            };
            (headline, timefmt::past_window_text(payload.look_back_hours))
        }
        DisplayMode::Unknown => return None,
    };

    Some(WidgetText {
        headline,
        product_name,
        timestamp,
    })
}
