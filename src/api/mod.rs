mod client;
mod types;

pub use client::StorefrontClient;
pub use types::{Currency, GenericError, Product};
