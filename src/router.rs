use crate::client::{Credentials, ListingsService};
use crate::domain::RecordId;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect_response, xlsx_response};
use crate::spreadsheets::XlsxSink;
use crate::templates::pages::listings_page;
use crate::view::ViewController;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

pub fn handle<S: ListingsService>(req: Request, view: &ViewController<S>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(listings_page(&view.snapshot())),

        ("POST", "/city") => {
            let form = read_form(req)?;
            let city = form.get("city").cloned().unwrap_or_default();
            view.set_city(city);
            redirect_response("/")
        }

        ("POST", "/setup/toggle") => {
            view.toggle_setup();
            redirect_response("/")
        }

        ("POST", "/listings/toggle") => {
            let form = read_form(req)?;
            let id = required(&form, "id")?;
            view.toggle_details(&RecordId::new(id));
            redirect_response("/")
        }

        ("POST", "/scrape") => {
            let form = read_form(req)?;
            let credentials = Credentials::new(
                form.get("username").cloned().unwrap_or_default(),
                form.get("password").cloned().unwrap_or_default(),
            );

            // Failures were already logged; the page simply shows the
            // previous listings again.
            let outcome = view.run_scrape(credentials);
            tracing::debug!(?outcome, "scrape handled");
            redirect_response("/")
        }

        ("GET", "/export") => {
            let query = parse_query(&req);
            let date_key = required(&query, "date")?;

            match view.export_group(date_key, &XlsxSink)? {
                Some(file) => xlsx_response(file),
                None => Err(ServerError::NotFound),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ServerError> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing '{key}'")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}
