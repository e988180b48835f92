use crate::api::{Currency, Product};
use crate::error::ApiError;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListingStatus {
    /// No fetch has completed yet.
    #[default]
    NotLoaded,
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one dispatched fetch. Only the latest ticket may update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub currency: Currency,
}

/// Products shown on the menu screen and the currency they are priced in.
#[derive(Debug, Default)]
pub struct ProductList {
    currency: Currency,
    products: Vec<Product>,
    status: ListingStatus,
    generation: u64,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListingStatus::Loading
    }

    /// Starts a new fetch for the current currency, superseding any other.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = ListingStatus::Loading;
        FetchTicket {
            generation: self.generation,
            currency: self.currency,
        }
    }

    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    pub fn select_currency(&mut self, currency: Currency) -> FetchTicket {
        info!(from = %self.currency, to = %currency, "Currency changed");
        self.currency = currency;
        self.begin_fetch()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Applies a fetch result. Returns `false` if the result was stale and
    /// discarded.
    pub fn apply(&mut self, generation: u64, result: Result<Vec<Product>, ApiError>) -> bool {
        if !self.is_current(generation) {
            debug!(generation, latest = self.generation, "Discarding stale product list");
            return false;
        }

        match result {
            Ok(products) => {
                self.products = products;
                self.status = ListingStatus::Ready;
            }
            Err(e) => {
                error!(error = %e, currency = %self.currency, "Failed to fetch products");
                self.status = ListingStatus::Failed(e.to_string());
            }
        }
        true
    }

    pub fn rows(&self) -> impl Iterator<Item = [String; 3]> + '_ {
        self.products.iter().map(Product::cells)
    }
}
