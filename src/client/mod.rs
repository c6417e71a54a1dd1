mod client_error;
mod remote;
mod service;

pub use client_error::ServiceError;
pub use remote::HttpListingsService;
pub use service::{Credentials, ListingsService};

#[cfg(test)]
pub(crate) use remote::{listings_url, parse_base_url, scrape_url};
