// errors.rs
use crate::spreadsheets::ExportError;
use astra::Response;
use thiserror::Error;

/// Errors surfaced to the operator's browser, either from request handling
/// (routing, bad input) or from the export layer.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Spreadsheet Error: {0}")]
    Export(#[from] ExportError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Export(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
