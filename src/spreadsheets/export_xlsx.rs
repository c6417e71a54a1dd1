use crate::domain::DateGroup;
use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;
use thiserror::Error;

pub const SHEET_NAME: &str = "Listings";
pub const XLSX_EXT: &str = "xlsx";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {what}: {source}")]
    Write {
        what: String,
        #[source]
        source: XlsxError,
    },

    #[error("Failed to save workbook: {0}")]
    Save(#[source] XlsxError),
}

/// One spreadsheet row. The column set is fixed here and does not follow
/// [`crate::domain::Record`]'s field names, so the fetch schema can change
/// without touching the export layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRow {
    pub date: String,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
}

impl ExportRow {
    pub const HEADERS: [&'static str; 6] = ["Date", "City", "Phone", "Email", "Location", "Details"];

    /// Cell values in [`ExportRow::HEADERS`] order. `None` means an empty cell.
    pub fn cells(&self) -> [Option<&str>; 6] {
        [
            Some(self.date.as_str()),
            Some(self.city.as_str()),
            self.phone.as_deref(),
            self.email.as_deref(),
            self.location.as_deref(),
            self.details.as_deref(),
        ]
    }
}

pub fn build_rows(group: &DateGroup<'_>) -> Vec<ExportRow> {
    group
        .records
        .iter()
        .map(|record| ExportRow {
            // Recomputed from the record so a row stands on its own.
            date: record.date_key().to_string(),
            city: record.city.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            location: record.location.clone(),
            details: record.details.clone(),
        })
        .collect()
}

pub fn export_file_name(date_key: &str) -> String {
    format!("{date_key}_listings.{XLSX_EXT}")
}

/// A finished spreadsheet, ready to hand to the browser.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Whatever turns rows into a file.
pub trait SpreadsheetSink {
    type Output;

    fn emit(&self, rows: &[ExportRow], file_name: &str) -> Result<Self::Output, ExportError>;
}

/// Single-sheet `.xlsx` workbook held in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSink;

impl SpreadsheetSink for XlsxSink {
    type Output = ExportFile;

    fn emit(&self, rows: &[ExportRow], file_name: &str) -> Result<ExportFile, ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| write_err("sheet name", e))?;

        // Headers
        for (col, header) in ExportRow::HEADERS.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, *header)
                .map_err(|e| write_err(&format!("header '{header}'"), e))?;
        }

        // Rows
        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;

            for (col, cell) in row.cells().iter().enumerate() {
                let Some(value) = cell else { continue };
                worksheet
                    .write_string(r, col as u16, *value)
                    .map_err(|e| write_err(&format!("row {r} column {}", ExportRow::HEADERS[col]), e))?;
            }
        }

        let bytes = workbook.save_to_buffer().map_err(ExportError::Save)?;

        Ok(ExportFile {
            file_name: file_name.to_string(),
            bytes,
        })
    }
}

fn write_err(what: &str, source: XlsxError) -> ExportError {
    ExportError::Write {
        what: what.to_string(),
        source,
    }
}
