use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    expect_err, loaded_view, read_body_string, record, sample_records, MockService,
};
use astra::Body;
use http::{Method, Request};

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_lists_groups_in_fetch_order() {
    let view = loaded_view(MockService::new().with_listings("", sample_records()));

    let resp = handle(get("/"), &view).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body_string(resp);
    assert!(body.contains("SchoolProp Listings"));

    let first = body.find("Download Excel for 2024-01-05").expect("dated group");
    let second = body.find("Download Excel for Unknown Date").expect("undated group");
    assert!(first < second, "groups should render in first-seen order");

    let springfield = body.find("Springfield").unwrap();
    let shelbyville = body.find("Shelbyville").unwrap();
    assert!(springfield < shelbyville);

    // Collapsed by default.
    assert!(body.contains("View Details"));
    assert!(!body.contains("Hide Details"));
}

#[test]
fn toggle_reveals_details_with_placeholders() {
    let mut with_phone = record("p1", Some("2024-02-01T09:00:00Z"), "Springfield");
    with_phone.phone = Some("555-0100".into());
    with_phone.email = Some(String::new());
    let view = loaded_view(MockService::new().with_listings("", vec![with_phone]));

    let resp = handle(post_form("/listings/toggle", "id=p1"), &view).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap().to_str().unwrap(), "/");

    let body = read_body_string(handle(get("/"), &view).unwrap());
    assert!(body.contains("Hide Details"));
    assert!(body.contains("<th>S.No.</th>"));
    assert!(body.contains("<td>555-0100</td>"));
    // email (empty), location, details and the name column
    assert_eq!(body.matches("<td>-</td>").count(), 4);

    // Second toggle collapses again.
    handle(post_form("/listings/toggle", "id=p1"), &view).unwrap();
    let body = read_body_string(handle(get("/"), &view).unwrap());
    assert!(!body.contains("<th>S.No.</th>"));
}

#[test]
fn toggle_without_id_is_bad_request() {
    let view = loaded_view(MockService::new());

    let err = expect_err(handle(post_form("/listings/toggle", ""), &view));
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn city_form_refetches_with_filter() {
    let service = MockService::new()
        .with_listings("", sample_records())
        .with_listings("Capital City", vec![record("3", None, "Capital City")]);
    let view = loaded_view(service);

    let resp = handle(post_form("/city", "city=Capital+City"), &view).expect("Handler failed");
    assert_eq!(resp.status(), 302);

    assert_eq!(view.city(), "Capital City");
    assert_eq!(view.service().list_calls(), vec!["", "Capital City"]);

    let body = read_body_string(handle(get("/"), &view).unwrap());
    assert!(!body.contains("Springfield"));
    assert!(body.contains("Download Excel for Unknown Date"));
}

#[test]
fn city_filter_is_sent_as_typed() {
    let view = loaded_view(MockService::new().with_listings("", sample_records()));

    handle(post_form("/city", "city=+Springfield+"), &view).expect("Handler failed");

    assert_eq!(view.city(), " Springfield ");
    assert_eq!(view.service().list_calls(), vec!["", " Springfield "]);
}

#[test]
fn setup_panel_is_hidden_until_toggled() {
    let view = loaded_view(MockService::new());

    let body = read_body_string(handle(get("/"), &view).unwrap());
    assert!(body.contains("Show Setup"));
    assert!(!body.contains("Run Scrape"));

    handle(post_form("/setup/toggle", ""), &view).unwrap();

    let body = read_body_string(handle(get("/"), &view).unwrap());
    assert!(body.contains("Hide Setup"));
    assert!(body.contains("Run Scrape"));
    assert!(body.contains("name=\"password\""));
}

#[test]
fn unknown_route_is_not_found() {
    let view = loaded_view(MockService::new());

    let err = expect_err(handle(get("/admin"), &view));
    assert!(matches!(err, ServerError::NotFound));
}
