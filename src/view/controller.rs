use crate::client::{Credentials, ListingsService, ServiceError};
use crate::domain::{find_group, group_by_date, DateGroup, DisclosureState, Record, RecordId};
use crate::spreadsheets::{build_rows, export_file_name, ExportError, SpreadsheetSink};
use crate::view::scrape::ScrapeStatus;
use crate::view::state::{FetchOutcome, FetchPolicy, FetchTicket, ViewState};
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutcome {
    /// Scrape succeeded; carries the result of the follow-up refresh.
    Completed(FetchOutcome),
    Failed(ServiceError),
    AlreadyRunning,
}

/// Owned copy of what the listings page renders.
#[derive(Debug, Clone)]
pub struct ListingsVm {
    pub city: String,
    pub username: String,
    pub show_setup: bool,
    pub scraping: bool,
    pub records: Vec<Record>,
    pub disclosure: DisclosureState,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl ListingsVm {
    pub fn groups(&self) -> Vec<DateGroup<'_>> {
        group_by_date(&self.records)
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.disclosure.is_expanded(id)
    }
}

/// Top-level orchestrator: filter, record set, disclosure, scrape and export.
///
/// The state lock is only held for transitions, never across a call to the
/// listings service.
pub struct ViewController<S> {
    service: S,
    state: Mutex<ViewState>,
}

impl<S: ListingsService> ViewController<S> {
    pub fn new(service: S, policy: FetchPolicy) -> Self {
        Self {
            service,
            state: Mutex::new(ViewState::new(policy)),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn city(&self) -> String {
        self.state().city().to_string()
    }

    pub fn scrape_status(&self) -> ScrapeStatus {
        self.state().scrape().status()
    }

    /// Changes the city filter and re-syncs with the service.
    pub fn set_city(&self, city: impl Into<String>) -> FetchOutcome {
        let ticket = self.state().set_city(city.into());
        match ticket {
            Some(ticket) => self.fetch(ticket),
            None => FetchOutcome::Unchanged,
        }
    }

    /// Re-fetches the current filter.
    pub fn refresh(&self) -> FetchOutcome {
        let ticket = self.state().begin_fetch();
        self.fetch(ticket)
    }

    fn fetch(&self, ticket: FetchTicket) -> FetchOutcome {
        tracing::debug!(seq = ticket.seq, city = %ticket.city, "fetching listings");

        let result = self.service.list_records(&ticket.city);
        let outcome = self.state().complete_fetch(&ticket, result);

        match &outcome {
            FetchOutcome::Applied { count } => {
                tracing::info!(seq = ticket.seq, city = %ticket.city, count, "listings updated");
            }
            FetchOutcome::Retained(e) => {
                tracing::warn!(seq = ticket.seq, city = %ticket.city, error = %e, "error fetching listings, keeping previous set");
            }
            FetchOutcome::Superseded => {
                tracing::debug!(seq = ticket.seq, city = %ticket.city, "discarding stale listings response");
            }
            FetchOutcome::Unchanged => {}
        }

        outcome
    }

    pub fn toggle_details(&self, id: &RecordId) -> bool {
        self.state().toggle_details(id)
    }

    pub fn toggle_setup(&self) -> bool {
        self.state().toggle_setup()
    }

    /// Captures `credentials`, asks the service to scrape, and refreshes the
    /// record set if that worked.
    pub fn run_scrape(&self, credentials: Credentials) -> ScrapeOutcome {
        let begun = {
            let mut state = self.state();
            let scrape = state.scrape_mut();
            if !scrape.is_running() {
                scrape.capture(credentials);
            }
            scrape.begin()
        };

        let credentials = match begun {
            Ok(c) => c,
            Err(e) => {
                tracing::info!("{e}, ignoring trigger");
                return ScrapeOutcome::AlreadyRunning;
            }
        };

        tracing::info!(username = %credentials.username, "starting scrape");
        let result = self.service.run_scrape(&credentials);
        self.state().scrape_mut().finish();

        match result {
            Ok(()) => {
                tracing::info!("scrape complete, refreshing listings");
                ScrapeOutcome::Completed(self.refresh())
            }
            Err(e) => {
                tracing::warn!(error = %e, "error running scrape");
                ScrapeOutcome::Failed(e)
            }
        }
    }

    pub fn snapshot(&self) -> ListingsVm {
        let state = self.state();
        ListingsVm {
            city: state.city().to_string(),
            username: state.scrape().credentials().username.clone(),
            show_setup: state.show_setup(),
            scraping: state.scrape().is_running(),
            records: state.records().to_vec(),
            disclosure: state.disclosure().clone(),
            last_synced_at: state.last_synced_at(),
        }
    }

    /// Builds and emits the spreadsheet for one date group of the current
    /// record set. `Ok(None)` when no record has that key.
    pub fn export_group<K: SpreadsheetSink>(
        &self,
        date_key: &str,
        sink: &K,
    ) -> Result<Option<K::Output>, ExportError> {
        let rows = {
            let state = self.state();
            match find_group(state.records(), date_key) {
                Some(group) => build_rows(&group),
                None => return Ok(None),
            }
        };

        let file_name = export_file_name(date_key);
        tracing::debug!(date_key, rows = rows.len(), file_name = %file_name, "exporting group");
        sink.emit(&rows, &file_name).map(Some)
    }
}
