//! Headless demo driver: runs one page-load cycle of the widget against a
//! real or local modal service and prints what a shopper would see.

use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use proofpop_client::{resolve_base_url, ModalClient};
use proofpop_core::payload::{PageType, ViewerContext};
use proofpop_widget::render::{OVERLAY_HEIGHT_PX, OVERLAY_WIDTH_PX};
use proofpop_widget::{ControllerState, HeadlessAdapter, WidgetController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PageKind {
    Product,
    Other,
}

#[derive(Debug, Parser)]
#[command(name = "proofpop")]
#[command(about = "Render a store's social-proof overlay headlessly")]
struct Cli {
    /// Shop domain, e.g. acme.myshopify.com
    #[arg(long)]
    shop: String,

    /// Product id of the page being "viewed"
    #[arg(long)]
    product_id: i64,

    /// Page URL; drives staging-vs-production endpoint selection.
    /// Defaults to the shop's product page.
    #[arg(long)]
    page_url: Option<String>,

    /// Page type as the host storefront would report it
    #[arg(long, value_enum, default_value_t = PageKind::Product)]
    page_type: PageKind,

    /// Override the modal-service base URL (e.g. a local mock)
    #[arg(long)]
    base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let page_url = cli
        .page_url
        .unwrap_or_else(|| format!("https://{}/products/{}", cli.shop, cli.product_id));
    let viewer = ViewerContext {
        shop_domain: cli.shop,
        current_product_id: cli.product_id,
        page_url,
        page_type: match cli.page_type {
            PageKind::Product => PageType::Product,
            PageKind::Other => PageType::Other,
        },
    };

    let base_url = match cli.base_url.as_deref() {
        Some(base) => base,
        None => resolve_base_url(&viewer.page_url),
    };
    tracing::info!(base_url, "using modal service");

    let client = ModalClient::new(base_url, cli.timeout_secs, "proofpop-cli/0.1")?;
    let mut controller = WidgetController::new(client, HeadlessAdapter::new(), viewer);

    match controller.run(Utc::now()).await {
        ControllerState::Rendered => {
            let overlay = controller
                .renderer()
                .adapter()
                .last_overlay()
                .expect("rendered state implies an overlay");
            println!(
                "overlay {OVERLAY_WIDTH_PX}x{OVERLAY_HEIGHT_PX}px @ {}",
                overlay.anchor()
            );
            if let Some(image_url) = &overlay.image_url {
                println!("  [image] {image_url}");
            }
            for line in [&overlay.headline, &overlay.product_name, &overlay.timestamp] {
                if let Some(line) = line {
                    println!("  {line}");
                }
            }
            if let Some(link) = &overlay.link {
                println!("  -> {link}");
            }
        }
        ControllerState::Idle => println!("not a product page; nothing to do"),
        state => println!("no overlay ({state:?})"),
    }

    Ok(())
}
