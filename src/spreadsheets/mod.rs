pub mod export_xlsx;

pub use export_xlsx::{
    build_rows, export_file_name, ExportError, ExportFile, ExportRow, SpreadsheetSink, XlsxSink,
    SHEET_NAME, XLSX_EXT,
};
