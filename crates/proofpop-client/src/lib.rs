pub mod client;
pub mod endpoint;
pub mod error;

pub use client::ModalClient;
pub use endpoint::{resolve_base_url, PRODUCTION_BASE_URL, STAGING_BASE_URL};
pub use error::ClientError;
