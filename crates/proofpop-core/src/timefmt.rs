//! Coarsened relative-time formatting.
//!
//! The modal service hands the widget raw time spans (an order timestamp, a
//! look-back window in hours); everything the shopper sees goes through
//! [`RelativeTime::from_days`], which picks the largest unit that keeps the
//! amount at least 1 and floors it.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Unit label pluralized for `amount`: `"minute"` for 1, `"minutes"`
    /// otherwise, and so on.
    #[must_use]
    pub fn label(self, amount: u64) -> &'static str {
        match (self, amount) {
            (TimeUnit::Minutes, 1) => "minute",
            (TimeUnit::Minutes, _) => "minutes",
            (TimeUnit::Hours, 1) => "hour",
            (TimeUnit::Hours, _) => "hours",
            (TimeUnit::Days, 1) => "day",
            (TimeUnit::Days, _) => "days",
        }
    }
}

/// A duration coarsened to a single amount/unit pair, e.g. "12 hours".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub amount: u64,
    pub unit: TimeUnit,
}

impl RelativeTime {
    /// Converts a non-negative fractional day count into the coarsest unit
    /// with a floored amount:
    ///
    /// - under one hour → minutes
    /// - under one day → hours
    /// - otherwise → days
    ///
    /// Callers guarantee `days` is non-negative and finite; the payload-level
    /// guards in [`crate::text`] reject skewed timestamps before they reach
    /// this conversion.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_days(days: f64) -> Self {
        if days * 24.0 < 1.0 {
            Self {
                amount: (days * 24.0 * 60.0).floor() as u64,
                unit: TimeUnit::Minutes,
            }
        } else if days < 1.0 {
            Self {
                amount: (days * 24.0).floor() as u64,
                unit: TimeUnit::Hours,
            }
        } else {
            Self {
                amount: days.floor() as u64,
                unit: TimeUnit::Days,
            }
        }
    }

    /// The unit label, singularized when the amount is exactly 1.
    #[must_use]
    pub fn unit_label(&self) -> &'static str {
        self.unit.label(self.amount)
    }
}

impl std::fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit_label())
    }
}

/// "N units ago" phrasing for the single-purchaser narrative.
///
/// Returns `None` when `processed_at` is in the future relative to `now`
/// (clock skew between the shopper's machine and the order timestamp); the
/// caller treats that as a rejected payload rather than showing a misleading
/// time.
#[must_use]
pub fn ago_text(processed_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let delta = now.signed_duration_since(processed_at);
    if delta < chrono::Duration::zero() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let days = delta.num_milliseconds() as f64 / 86_400_000.0;
    Some(format!("{} ago", RelativeTime::from_days(days)))
}

/// "Past N units" phrasing for the aggregate-count narrative, derived from
/// the look-back window. Reads "Past hour" (no amount) when the floored
/// amount is exactly 1.
#[must_use]
pub fn past_window_text(look_back_hours: u32) -> String {
    let relative = RelativeTime::from_days(f64::from(look_back_hours) / 24.0);
    if relative.amount == 1 {
        format!("Past {}", relative.unit_label())
    } else {
        format!("Past {relative}")
    }
}

#[cfg(test)]
#[path = "timefmt_test.rs"]
mod tests;
