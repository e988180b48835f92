//! Desktop client for the coffee storefront: browse the menu in a chosen
//! currency and upload product images.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod upload;
pub mod utils;

pub use app::Storefront;
pub use config::Config;
pub use error::{ApiError, AppError};
