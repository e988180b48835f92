mod list;

pub use list::{FetchTicket, ListingStatus, ProductList};
