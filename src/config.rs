use clap::Parser;
use reqwest::Url;
use std::time::Duration;

/// Endpoints and runtime knobs for the storefront client.
///
/// Every flag falls back to an environment variable, and a `.env` file in the
/// working directory is read before parsing.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront_admin", version, about = "Coffee storefront menu and image admin")]
pub struct Config {
    /// Base URL of the product API (`/products` and `/docs` live under it)
    #[arg(long, env = "STOREFRONT_API_URL", default_value = "http://localhost:9090")]
    pub api_url: Url,

    /// Endpoint that accepts multipart product image uploads
    #[arg(
        long,
        env = "STOREFRONT_UPLOAD_URL",
        default_value = "http://localhost:9091/images"
    )]
    pub upload_url: Url,

    /// Upper bound for any single request, in milliseconds
    #[arg(
        long,
        env = "STOREFRONT_REQUEST_TIMEOUT_MS",
        default_value_t = 10_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_ms: u64,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, env = "STOREFRONT_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
