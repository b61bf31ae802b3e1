use proofpop_core::payload::{DisplayMode, OverlayLocation, PageType};

use super::*;
use crate::headless::HeadlessAdapter;

fn payload(product_id: i64, location: OverlayLocation) -> WidgetPayload {
    WidgetPayload {
        display_mode: DisplayMode::Purchase,
        product_id,
        product_name: Some("Blue Shirt".to_owned()),
        main_image_url: Some("https://cdn.example.com/blue-shirt.jpg".to_owned()),
        store_domain: Some("acme.myshopify.com".to_owned()),
        handle: Some("blue-shirt".to_owned()),
        location,
        look_back_hours: 72,
        first_name: None,
        last_name: None,
        processed_at: None,
        last_order_qty: Some(5),
    }
}

fn text() -> WidgetText {
    WidgetText {
        headline: "5 people purchased".to_owned(),
        product_name: "Blue Shirt".to_owned(),
        timestamp: "Past 3 days".to_owned(),
    }
}

fn viewer(current_product_id: i64) -> ViewerContext {
    ViewerContext {
        shop_domain: "acme.myshopify.com".to_owned(),
        current_product_id,
        page_url: "https://acme.myshopify.com/products/blue-shirt".to_owned(),
        page_type: PageType::Product,
    }
}

#[test]
fn render_fills_all_four_slots() {
    let mut renderer = WidgetRenderer::new(HeadlessAdapter::new());
    renderer
        .render(&payload(42, OverlayLocation::LowerLeft), &text(), &viewer(42))
        .expect("first render should succeed");

    let overlay = renderer.adapter().last_overlay().expect("one overlay");
    assert_eq!(overlay.headline.as_deref(), Some("5 people purchased"));
    assert_eq!(overlay.product_name.as_deref(), Some("Blue Shirt"));
    assert_eq!(overlay.timestamp.as_deref(), Some("Past 3 days"));
    assert_eq!(
        overlay.image_url.as_deref(),
        Some("https://cdn.example.com/blue-shirt.jpg")
    );
    assert!(overlay.visible, "overlay should end up visible after fade-in");
}

#[test]
fn same_product_gets_no_link() {
    let mut renderer = WidgetRenderer::new(HeadlessAdapter::new());
    renderer
        .render(&payload(42, OverlayLocation::LowerLeft), &text(), &viewer(42))
        .expect("render should succeed");

    let overlay = renderer.adapter().last_overlay().expect("one overlay");
    assert!(overlay.link.is_none(), "own product page must not link out");
}

#[test]
fn different_product_links_to_its_page() {
    let mut renderer = WidgetRenderer::new(HeadlessAdapter::new());
    renderer
        .render(&payload(7, OverlayLocation::LowerLeft), &text(), &viewer(42))
        .expect("render should succeed");

    let overlay = renderer.adapter().last_overlay().expect("one overlay");
    assert_eq!(
        overlay.link.as_deref(),
        Some("https://acme.myshopify.com/products/blue-shirt")
    );
}

#[test]
fn different_product_without_handle_stays_unlinked() {
    let mut renderer = WidgetRenderer::new(HeadlessAdapter::new());
    let p = WidgetPayload {
        handle: None,
        ..payload(7, OverlayLocation::LowerLeft)
    };
    renderer
        .render(&p, &text(), &viewer(42))
        .expect("render should succeed");

    let overlay = renderer.adapter().last_overlay().expect("one overlay");
    assert!(overlay.link.is_none());
}

#[test]
fn second_render_without_dismiss_is_refused() {
    let mut renderer = WidgetRenderer::new(HeadlessAdapter::new());
    let p = payload(42, OverlayLocation::LowerLeft);
    renderer
        .render(&p, &text(), &viewer(42))
        .expect("first render should succeed");

    let second = renderer.render(&p, &text(), &viewer(42));
    assert_eq!(second, Err(WidgetError::AlreadyRendered));
    assert_eq!(
        renderer.adapter().live_count(),
        1,
        "exactly one overlay must exist after a refused second render"
    );
}

#[test]
fn locations_yield_different_anchors() {
    let mut left = WidgetRenderer::new(HeadlessAdapter::new());
    left.render(&payload(42, OverlayLocation::LowerLeft), &text(), &viewer(42))
        .expect("render should succeed");

    let mut right = WidgetRenderer::new(HeadlessAdapter::new());
    right
        .render(&payload(42, OverlayLocation::LowerRight), &text(), &viewer(42))
        .expect("render should succeed");

    let left_anchor = left.adapter().last_overlay().unwrap().anchor();
    let right_anchor = right.adapter().last_overlay().unwrap().anchor();
    assert_eq!(left_anchor, "bottom: 2%; left: 2%");
    assert_eq!(right_anchor, "bottom: 2%; right: 2%");
    assert_ne!(left_anchor, right_anchor);

    assert_eq!(left.live_location(), Some(OverlayLocation::LowerLeft));
    assert_eq!(right.live_location(), Some(OverlayLocation::LowerRight));
}

#[test]
fn dismiss_hides_and_removes_the_overlay() {
    let mut renderer = WidgetRenderer::new(HeadlessAdapter::new());
    renderer
        .render(&payload(42, OverlayLocation::LowerLeft), &text(), &viewer(42))
        .expect("render should succeed");
    assert!(renderer.is_live());

    renderer.dismiss();
    assert!(!renderer.is_live());
    let overlay = renderer.adapter().last_overlay().expect("one overlay");
    assert!(!overlay.visible, "dismiss should fade the overlay out");
    assert!(overlay.removed, "dismiss should remove the overlay");
}

#[test]
fn dismiss_without_a_live_overlay_is_a_no_op() {
    let mut renderer: WidgetRenderer<HeadlessAdapter> = WidgetRenderer::new(HeadlessAdapter::new());
    renderer.dismiss();
    assert!(renderer.adapter().overlays.is_empty());
}
