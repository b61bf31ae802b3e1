//! Overlay construction behind a pluggable adapter.
//!
//! [`WidgetRenderer`] owns the what — slots, link policy, positioning, the
//! one-live-overlay rule — while a [`RenderAdapter`] owns the how (a real
//! DOM in the storefront, a recording stub in tests). The renderer never
//! touches presentation machinery directly, which is what makes the link and
//! idempotency policies testable headlessly.

use proofpop_core::payload::{OverlayLocation, ViewerContext, WidgetPayload};
use proofpop_core::text::WidgetText;

use crate::error::WidgetError;

/// Overlay card geometry, from the shipped stylesheet.
pub const OVERLAY_WIDTH_PX: u32 = 350;
pub const OVERLAY_HEIGHT_PX: u32 = 70;
/// Offset from the bottom edge and from the anchored side, in percent of the
/// viewport.
pub const EDGE_OFFSET_PCT: u32 = 2;
pub const FADE_IN_MS: u64 = 2500;
pub const FADE_OUT_MS: u64 = 800;

/// The overlay's three text slots. The image slot is separate because it
/// carries a URL, not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Headline,
    ProductName,
    Timestamp,
}

/// Presentation backend for the overlay.
///
/// One overlay at a time; handles returned by [`create_overlay`] stay valid
/// until [`remove`]. `fade_in`/`fade_out` are cosmetic — an implementation
/// may complete them instantly as long as the final visibility state is
/// honored.
///
/// [`create_overlay`]: RenderAdapter::create_overlay
/// [`remove`]: RenderAdapter::remove
pub trait RenderAdapter {
    type Handle;

    fn create_overlay(&mut self) -> Self::Handle;
    fn set_position(&mut self, overlay: &Self::Handle, location: OverlayLocation);
    fn set_text(&mut self, overlay: &Self::Handle, slot: TextSlot, text: &str);
    fn set_image(&mut self, overlay: &Self::Handle, image_url: &str);
    /// Wraps the image and product-name slots in a link to `href`.
    fn set_link(&mut self, overlay: &Self::Handle, href: &str);
    fn fade_in(&mut self, overlay: &Self::Handle, duration_ms: u64);
    fn fade_out(&mut self, overlay: &Self::Handle, duration_ms: u64);
    fn remove(&mut self, overlay: &Self::Handle);
}

struct LiveOverlay<H> {
    handle: H,
    location: OverlayLocation,
}

/// Builds and owns the overlay for one page load.
pub struct WidgetRenderer<A: RenderAdapter> {
    adapter: A,
    live: Option<LiveOverlay<A::Handle>>,
}

impl<A: RenderAdapter> WidgetRenderer<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            live: None,
        }
    }

    /// Paints the overlay from a validated payload and its derived text.
    ///
    /// The product-name and image slots become a link to the advertised
    /// product's page only when that product differs from the one being
    /// viewed; on the product's own page the overlay is inert.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::AlreadyRendered`] if an overlay is already
    /// live. Callers must dismiss before rendering again.
    pub fn render(
        &mut self,
        payload: &WidgetPayload,
        text: &WidgetText,
        viewer: &ViewerContext,
    ) -> Result<(), WidgetError> {
        if self.live.is_some() {
            return Err(WidgetError::AlreadyRendered);
        }

        let overlay = self.adapter.create_overlay();
        self.adapter.set_position(&overlay, payload.location);
        if let Some(image_url) = payload.main_image_url.as_deref() {
            self.adapter.set_image(&overlay, image_url);
        }
        self.adapter.set_text(&overlay, TextSlot::Headline, &text.headline);
        self.adapter
            .set_text(&overlay, TextSlot::ProductName, &text.product_name);
        self.adapter
            .set_text(&overlay, TextSlot::Timestamp, &text.timestamp);

        if payload.advertises_other_product(viewer.current_product_id) {
            if let Some(href) = payload.product_link() {
                self.adapter.set_link(&overlay, &href);
            }
        }

        self.adapter.fade_in(&overlay, FADE_IN_MS);
        self.live = Some(LiveOverlay {
            handle: overlay,
            location: payload.location,
        });
        Ok(())
    }

    /// Fades out and removes the live overlay. No-op when nothing is live.
    pub fn dismiss(&mut self) {
        if let Some(overlay) = self.live.take() {
            self.adapter.fade_out(&overlay.handle, FADE_OUT_MS);
            self.adapter.remove(&overlay.handle);
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Resolved location of the live overlay, if one exists.
    #[must_use]
    pub fn live_location(&self) -> Option<OverlayLocation> {
        self.live.as_ref().map(|overlay| overlay.location)
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
