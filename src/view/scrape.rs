use crate::client::Credentials;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapeStatus {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a scrape is already running")]
pub struct AlreadyRunning;

/// Trigger-scrape workflow: `Idle -> Running -> Idle`.
///
/// There is no failed state. A failed run goes straight back to `Idle` so the
/// operator can retry.
#[derive(Debug, Clone, Default)]
pub struct ScrapeController {
    status: ScrapeStatus,
    credentials: Credentials,
}

impl ScrapeController {
    pub fn status(&self) -> ScrapeStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == ScrapeStatus::Running
    }

    /// Last credentials the operator entered.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn capture(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Moves to `Running` and hands back the credentials to send.
    pub fn begin(&mut self) -> Result<Credentials, AlreadyRunning> {
        if self.is_running() {
            return Err(AlreadyRunning);
        }
        self.status = ScrapeStatus::Running;
        Ok(self.credentials.clone())
    }

    /// Back to `Idle`, on success and failure alike.
    pub fn finish(&mut self) {
        self.status = ScrapeStatus::Idle;
    }
}
