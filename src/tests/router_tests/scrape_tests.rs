use crate::client::{Credentials, ServiceError};
use crate::router::handle;
use crate::tests::utils::{loaded_view, read_body_string, record, sample_records, MockService};
use crate::view::ScrapeStatus;
use astra::Body;
use http::{Method, Request};

fn scrape_request(form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/scrape")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

#[test]
fn scrape_forwards_credentials_and_refreshes() {
    let view = loaded_view(MockService::new().with_listings("", sample_records()));
    view.service()
        .set_listings("", vec![record("new", Some("2024-06-01T00:00:00Z"), "Ogdenville")]);

    let resp = handle(scrape_request("username=agent&password=s3cret%21"), &view)
        .expect("Handler failed");
    assert_eq!(resp.status(), 302);

    assert_eq!(
        view.service().scrape_calls(),
        vec![Credentials::new("agent", "s3cret!")]
    );
    assert_eq!(view.service().list_calls().len(), 2);

    view.toggle_setup();
    let page = handle(
        Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap(),
        &view,
    )
    .unwrap();
    let body = read_body_string(page);
    assert!(body.contains("Ogdenville"));
    assert!(body.contains("value=\"agent\""));
    assert!(!body.contains("s3cret"));
}

#[test]
fn failed_scrape_still_redirects_and_keeps_listings() {
    let service = MockService::new().with_listings("", sample_records());
    service.fail_scrape(ServiceError::Network("timed out".into()));
    let view = loaded_view(service);

    let resp = handle(scrape_request("username=a&password=b"), &view).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(view.scrape_status(), ScrapeStatus::Idle);
    assert_eq!(view.service().list_calls(), vec![""]);
    assert_eq!(view.snapshot().records.len(), 3);
}
