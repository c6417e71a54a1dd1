use crate::client::{Credentials, ListingsService, ServiceError};
use crate::domain::{Record, RecordId};
use crate::errors::{ResultResp, ServerError};
use crate::spreadsheets::{ExportError, ExportRow, SpreadsheetSink};
use crate::view::{FetchPolicy, ViewController};
use astra::Response;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Mutex;

/// In-memory listings service with scripted answers per city.
/// Cities without a script answer with an empty list.
#[derive(Default)]
pub struct MockService {
    listings: Mutex<HashMap<String, Result<Vec<Record>, ServiceError>>>,
    scrape_error: Mutex<Option<ServiceError>>,
    list_calls: Mutex<Vec<String>>,
    scrape_calls: Mutex<Vec<Credentials>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listings(self, city: &str, records: Vec<Record>) -> Self {
        self.set_listings(city, records);
        self
    }

    pub fn set_listings(&self, city: &str, records: Vec<Record>) {
        self.listings
            .lock()
            .unwrap()
            .insert(city.to_string(), Ok(records));
    }

    pub fn fail_listings(&self, city: &str, err: ServiceError) {
        self.listings
            .lock()
            .unwrap()
            .insert(city.to_string(), Err(err));
    }

    pub fn fail_scrape(&self, err: ServiceError) {
        *self.scrape_error.lock().unwrap() = Some(err);
    }

    pub fn list_calls(&self) -> Vec<String> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn scrape_calls(&self) -> Vec<Credentials> {
        self.scrape_calls.lock().unwrap().clone()
    }
}

impl ListingsService for MockService {
    fn list_records(&self, city: &str) -> Result<Vec<Record>, ServiceError> {
        self.list_calls.lock().unwrap().push(city.to_string());
        self.listings
            .lock()
            .unwrap()
            .get(city)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn run_scrape(&self, credentials: &Credentials) -> Result<(), ServiceError> {
        self.scrape_calls.lock().unwrap().push(credentials.clone());
        match self.scrape_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Keeps whatever it was asked to emit.
#[derive(Default)]
pub struct RecordingSink {
    pub emitted: RefCell<Vec<(String, Vec<ExportRow>)>>,
}

impl SpreadsheetSink for RecordingSink {
    type Output = usize;

    fn emit(&self, rows: &[ExportRow], file_name: &str) -> Result<usize, ExportError> {
        self.emitted
            .borrow_mut()
            .push((file_name.to_string(), rows.to_vec()));
        Ok(rows.len())
    }
}

pub fn record(id: &str, date: Option<&str>, city: &str) -> Record {
    Record {
        id: RecordId::new(id),
        date: date.map(str::to_string),
        city: city.to_string(),
        phone: None,
        email: None,
        location: None,
        details: None,
    }
}

/// The three-record fixture: two on 2024-01-05, one undated.
pub fn sample_records() -> Vec<Record> {
    vec![
        record("1", Some("2024-01-05T00:00:00Z"), "Springfield"),
        record("2", Some("2024-01-05T08:00:00Z"), "Shelbyville"),
        record("3", None, "Capital City"),
    ]
}

/// Controller whose initial (empty) filter fetch has already run.
pub fn loaded_view(service: MockService) -> ViewController<MockService> {
    let view = ViewController::new(service, FetchPolicy::default());
    view.refresh();
    view
}

pub fn read_body(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body()
        .reader()
        .read_to_end(&mut body)
        .expect("failed to read response body");
    body
}

pub fn read_body_string(resp: Response) -> String {
    String::from_utf8(read_body(resp)).expect("response body was not utf-8")
}

pub fn expect_err(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(e) => e,
    }
}
