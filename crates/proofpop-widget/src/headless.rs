//! Recording render adapter for tests and the demo binary.

use proofpop_core::payload::OverlayLocation;

use crate::render::{RenderAdapter, TextSlot, EDGE_OFFSET_PCT};

/// Everything the headless adapter knows about one overlay it was asked to
/// build. Overlays are never discarded, so tests can assert on the full
/// history including removed ones.
#[derive(Debug, Default)]
pub struct HeadlessOverlay {
    pub location: Option<OverlayLocation>,
    pub headline: Option<String>,
    pub product_name: Option<String>,
    pub timestamp: Option<String>,
    pub image_url: Option<String>,
    /// Link wrapping the image and product-name slots, when set.
    pub link: Option<String>,
    pub visible: bool,
    pub removed: bool,
}

impl HeadlessOverlay {
    /// CSS-ish anchor description, e.g. `"bottom: 2%; left: 2%"`. Defaults
    /// to the lower-left anchor when no position was applied.
    #[must_use]
    pub fn anchor(&self) -> String {
        let side = match self.location.unwrap_or_default() {
            OverlayLocation::LowerLeft => "left",
            OverlayLocation::LowerRight => "right",
        };
        format!("bottom: {EDGE_OFFSET_PCT}%; {side}: {EDGE_OFFSET_PCT}%")
    }
}

/// A [`RenderAdapter`] that records every operation instead of touching a
/// real presentation layer. Fades complete instantly: `fade_in` lands on
/// visible, `fade_out` on hidden.
#[derive(Debug, Default)]
pub struct HeadlessAdapter {
    pub overlays: Vec<HeadlessOverlay>,
}

impl HeadlessAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays that have been created and not yet removed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.overlays.iter().filter(|o| !o.removed).count()
    }

    /// The most recently created overlay, if any.
    #[must_use]
    pub fn last_overlay(&self) -> Option<&HeadlessOverlay> {
        self.overlays.last()
    }
}

impl RenderAdapter for HeadlessAdapter {
    type Handle = usize;

    fn create_overlay(&mut self) -> usize {
        self.overlays.push(HeadlessOverlay::default());
        self.overlays.len() - 1
    }

    fn set_position(&mut self, overlay: &usize, location: OverlayLocation) {
        self.overlays[*overlay].location = Some(location);
    }

    fn set_text(&mut self, overlay: &usize, slot: TextSlot, text: &str) {
        let record = &mut self.overlays[*overlay];
        let target = match slot {
            TextSlot::Headline => &mut record.headline,
            TextSlot::ProductName => &mut record.product_name,
            TextSlot::Timestamp => &mut record.timestamp,
        };
        *target = Some(text.to_owned());
    }

    fn set_image(&mut self, overlay: &usize, image_url: &str) {
        self.overlays[*overlay].image_url = Some(image_url.to_owned());
    }

    fn set_link(&mut self, overlay: &usize, href: &str) {
        self.overlays[*overlay].link = Some(href.to_owned());
    }

    fn fade_in(&mut self, overlay: &usize, _duration_ms: u64) {
        self.overlays[*overlay].visible = true;
    }

    fn fade_out(&mut self, overlay: &usize, _duration_ms: u64) {
        self.overlays[*overlay].visible = false;
    }

    fn remove(&mut self, overlay: &usize) {
        self.overlays[*overlay].removed = true;
    }
}
