use serde::Deserialize;
use std::fmt;

/// A product as served by `GET /products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub sku: String,
}

impl Product {
    /// Table cells in display order: name, price, sku.
    pub fn cells(&self) -> [String; 3] {
        [self.name.clone(), self.price.to_string(), self.sku.clone()]
    }
}

/// Error body returned by the product API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GenericError {
    pub message: String,
}

/// Currencies the listing can be priced in. EUR is the API's base currency
/// and is never sent as a query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Jpy];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
        }
    }

    pub fn is_default(self) -> bool {
        self == Currency::default()
    }

    /// Value for the `currency` query parameter, if one should be sent.
    pub fn query_value(self) -> Option<&'static str> {
        if self.is_default() {
            None
        } else {
            Some(self.code())
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
