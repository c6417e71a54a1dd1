use crate::client::ServiceError;
use crate::domain::Record;
use serde::Serialize;
use std::fmt;

/// Login the remote scraper uses against the listings site.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The remote landlords service: listing retrieval and scrape triggering.
///
/// Implementations block the calling thread until the service answers.
pub trait ListingsService: Send + Sync {
    /// `GET /landlords`. An empty `city` means no filter.
    fn list_records(&self, city: &str) -> Result<Vec<Record>, ServiceError>;

    /// `POST /landlords/run-scrape`. Returns once the service reports completion.
    fn run_scrape(&self, credentials: &Credentials) -> Result<(), ServiceError>;
}
