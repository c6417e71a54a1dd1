// src/view/state.rs

use crate::client::ServiceError;
use crate::domain::{DisclosureState, Record, RecordId};
use crate::view::scrape::ScrapeController;
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// How overlapping fetches are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Every successful completion replaces the record set, in completion
    /// order. Two quick filter changes can leave the older filter's results
    /// on screen.
    #[default]
    LastCompletionWins,

    /// Only apply a completion issued for the current filter, and never one
    /// older than the last applied fetch.
    SupersedeStale,
}

impl FromStr for FetchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-completion" | "last_completion" | "last" => Ok(FetchPolicy::LastCompletionWins),
            "supersede" | "supersede-stale" | "supersede_stale" => Ok(FetchPolicy::SupersedeStale),
            other => Err(format!(
                "unknown fetch policy '{other}' (expected 'last-completion' or 'supersede')"
            )),
        }
    }
}

/// Identifies one outgoing fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The record set was replaced.
    Applied { count: usize },
    /// The fetch failed; the previous record set is still shown.
    Retained(ServiceError),
    /// A newer fetch made this one irrelevant.
    Superseded,
    /// The filter did not change, nothing was requested.
    Unchanged,
}

/// Everything the operator console shows, owned in one place.
#[derive(Debug, Default)]
pub struct ViewState {
    city: String,
    records: Vec<Record>,
    disclosure: DisclosureState,
    scrape: ScrapeController,
    show_setup: bool,
    policy: FetchPolicy,
    issued_seq: u64,
    applied_seq: u64,
    last_synced_at: Option<DateTime<Utc>>,
}

impl ViewState {
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn disclosure(&self) -> &DisclosureState {
        &self.disclosure
    }

    pub fn scrape(&self) -> &ScrapeController {
        &self.scrape
    }

    pub fn scrape_mut(&mut self) -> &mut ScrapeController {
        &mut self.scrape
    }

    pub fn show_setup(&self) -> bool {
        self.show_setup
    }

    pub fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Filter change. Returns the fetch to issue, or `None` if the value is
    /// the same as before.
    pub fn set_city(&mut self, city: String) -> Option<FetchTicket> {
        if city == self.city {
            return None;
        }
        self.city = city;
        Some(self.begin_fetch())
    }

    /// Issues a fetch for the current filter.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        FetchTicket {
            seq: self.issued_seq,
            city: self.city.clone(),
        }
    }

    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Record>, ServiceError>,
    ) -> FetchOutcome {
        let records = match result {
            Ok(records) => records,
            Err(e) => return FetchOutcome::Retained(e),
        };

        if self.policy == FetchPolicy::SupersedeStale
            && (ticket.city != self.city || ticket.seq < self.applied_seq)
        {
            return FetchOutcome::Superseded;
        }

        let count = records.len();
        self.records = records;
        self.applied_seq = self.applied_seq.max(ticket.seq);
        self.last_synced_at = Some(Utc::now());
        FetchOutcome::Applied { count }
    }

    pub fn toggle_details(&mut self, id: &RecordId) -> bool {
        self.disclosure.toggle(id)
    }

    pub fn toggle_setup(&mut self) -> bool {
        self.show_setup = !self.show_setup;
        self.show_setup
    }
}
