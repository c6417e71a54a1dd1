// responses/xlsx.rs
use crate::errors::{ResultResp, ServerError};
use crate::spreadsheets::ExportFile;
use astra::{Body, ResponseBuilder};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Return XLSX file as a download
pub fn xlsx_response(file: ExportFile) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_CONTENT_TYPE)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", header_safe(&file.file_name)),
        )
        .body(Body::from(file.bytes))
        .map_err(|_| ServerError::InternalError)?; // Convert any builder error

    Ok(resp)
}

/// File names come from service data. Anything that would break the quoted
/// header value becomes `_`.
fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c == ' ' || c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect()
}
