pub mod controller;
pub mod scrape;
pub mod state;

pub use controller::{ListingsVm, ScrapeOutcome, ViewController};
pub use scrape::ScrapeStatus;
pub use state::{FetchOutcome, FetchPolicy, ViewState};
