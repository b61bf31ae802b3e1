//! Modal-service endpoint selection and URL building.
//!
//! The widget ships in a single script for every store, so staging traffic is
//! identified by a fixed allow-list of development-store markers in the page
//! URL rather than by configuration. This is a deployment convenience, not a
//! security boundary.

pub const PRODUCTION_BASE_URL: &str = "https://socialproof-samurai.herokuapp.com";
pub const STAGING_BASE_URL: &str = "https://protected-reef-37693.herokuapp.com";

/// Development stores whose pages should talk to the staging deployment.
const STAGING_MARKERS: [&str; 3] = [
    "michael-john-devs",
    "ellie-designer-clothing",
    "new-store-qa",
];

/// Picks the modal-service base URL for the page at `page_url`.
#[must_use]
pub fn resolve_base_url(page_url: &str) -> &'static str {
    if STAGING_MARKERS.iter().any(|marker| page_url.contains(marker)) {
        STAGING_BASE_URL
    } else {
        PRODUCTION_BASE_URL
    }
}

/// Builds the modal endpoint URL for one shop+product pair. The same URL
/// serves both the config fetch (GET) and the attribution report (POST).
#[must_use]
pub fn modal_url(base_url: &str, shop_domain: &str, product_id: i64) -> String {
    format!(
        "{}/api/modal/{shop_domain}/{product_id}",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_the_default() {
        assert_eq!(
            resolve_base_url("https://acme.myshopify.com/products/blue-shirt"),
            PRODUCTION_BASE_URL
        );
    }

    #[test]
    fn each_staging_marker_selects_staging() {
        for marker in ["michael-john-devs", "ellie-designer-clothing", "new-store-qa"] {
            let page_url = format!("https://{marker}.myshopify.com/products/test");
            assert_eq!(resolve_base_url(&page_url), STAGING_BASE_URL, "{marker}");
        }
    }

    #[test]
    fn marker_anywhere_in_the_url_counts() {
        assert_eq!(
            resolve_base_url("https://shop.example.com/collections/new-store-qa"),
            STAGING_BASE_URL
        );
    }

    #[test]
    fn modal_url_joins_shop_and_product() {
        assert_eq!(
            modal_url(PRODUCTION_BASE_URL, "acme.myshopify.com", 42),
            "https://socialproof-samurai.herokuapp.com/api/modal/acme.myshopify.com/42"
        );
    }

    #[test]
    fn modal_url_strips_trailing_slash() {
        assert_eq!(
            modal_url("http://127.0.0.1:9000/", "acme.myshopify.com", 42),
            "http://127.0.0.1:9000/api/modal/acme.myshopify.com/42"
        );
    }
}
