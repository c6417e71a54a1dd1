pub mod errors;
pub mod html;
pub mod xlsx;

pub use errors::error_response;
pub use html::{html_response, redirect_response};
pub use xlsx::{xlsx_response, XLSX_CONTENT_TYPE};
