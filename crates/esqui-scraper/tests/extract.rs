//! Integration tests for `ResortClient::extract`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made.

use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use esqui_core::ResortSlug;
use esqui_scraper::{Outcome, ResortClient, StatusRecord};

const TEST_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

fn slug(raw: &str) -> ResortSlug {
    ResortSlug::parse(raw).expect("valid slug")
}

/// 5-second timeout, browser UA, base URL pointing at the mock server.
fn test_client(server: &MockServer) -> ResortClient {
    ResortClient::new(&format!("{}/estacion-esqui", server.uri()), 5, TEST_UA)
        .expect("failed to build test ResortClient")
}

fn resort_page(lifts: &str, km: &str, snow: &str) -> String {
    format!(
        r#"<html><body>
        <span>Remontes abiertos <strong class="fuentemega">{lifts}</strong><em>/20</em></span>
        <span>Kilómetros esquiables <strong class="fuentemega">{km}</strong><em>/110</em></span>
        <span>Nieve <strong class="fuentemega">{snow}</strong><em>cm</em></span>
        </body></html>"#
    )
}

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

fn assert_error_record(record: &StatusRecord) {
    assert!(!record.is_success(), "expected error record, got: {record:?}");
    let message = record.error_message().expect("error message");
    assert!(!message.is_empty());
    assert!(record.measurements().is_none());
}

// ---------------------------------------------------------------------------
// Success paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extract_returns_all_measurements_from_well_formed_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estacion-esqui/sierra-nevada/"))
        .respond_with(html_response(resort_page("12", "85", "140")))
        .expect(1)
        .mount(&server)
        .await;

    let record = test_client(&server).extract(&slug("sierra-nevada")).await;

    assert!(record.is_success(), "expected success, got: {record:?}");
    assert_eq!(record.name, "Sierra Nevada");
    let m = record.measurements().expect("measurements");
    assert_eq!(m.lifts.as_ref().unwrap().to_string(), "12/20");
    assert_eq!(m.track_km.as_ref().unwrap().to_string(), "85/110");
    assert_eq!(m.snow_depth.as_ref().unwrap().to_string(), "140 cm");
}

#[tokio::test]
async fn extract_sends_browser_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estacion-esqui/formigal/"))
        .and(header("user-agent", TEST_UA))
        .respond_with(html_response(resort_page("1", "2", "3")))
        .expect(1)
        .mount(&server)
        .await;

    let record = test_client(&server).extract(&slug("formigal")).await;
    assert!(record.is_success(), "expected success, got: {record:?}");
}

#[tokio::test]
async fn extract_partial_page_is_still_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estacion-esqui/candanchu/"))
        .respond_with(html_response(
            r#"<html><body><span>Nieve <strong class="fuentemega">45</strong><em>cm</em></span></body></html>"#
                .to_string(),
        ))
        .mount(&server)
        .await;

    let record = test_client(&server).extract(&slug("candanchu")).await;

    assert!(record.is_success());
    let m = record.measurements().unwrap();
    assert!(m.lifts.is_none());
    assert!(m.track_km.is_none());
    assert_eq!(m.snow_depth.as_ref().unwrap().to_string(), "45 cm");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["estado"], "success");
    assert!(json["remontes"].is_null());
    assert!(json["kilometros"].is_null());
    assert_eq!(json["nieve"], "45 cm");
}

#[tokio::test]
async fn extract_page_without_markers_is_success_with_no_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estacion-esqui/jaca-astun/"))
        .respond_with(html_response("<html><body><p>Temporada cerrada</p></body></html>".to_string()))
        .mount(&server)
        .await;

    let record = test_client(&server).extract(&slug("jaca-astun")).await;

    assert!(record.is_success());
    assert_eq!(record.name, "Jaca Astun");
    assert!(record.measurements().unwrap().is_empty());
}

#[tokio::test]
async fn extract_is_idempotent_apart_from_timestamp() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estacion-esqui/baqueira-beret/"))
        .respond_with(html_response(resort_page("30", "150", "90")))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let first = client.extract(&slug("baqueira-beret")).await;
    let second = client.extract(&slug("baqueira-beret")).await;

    assert!(second.timestamp >= first.timestamp);
    assert_eq!(first.slug, second.slug);
    assert_eq!(first.name, second.name);
    assert_eq!(first.outcome, second.outcome);
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extract_not_found_yields_connection_error_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estacion-esqui/unknown-resort-xyz/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let record = test_client(&server)
        .extract(&slug("unknown-resort-xyz"))
        .await;

    assert_error_record(&record);
    assert_eq!(record.name, "Unknown Resort Xyz");
    let message = record.error_message().unwrap();
    assert!(
        message.starts_with("Error de conexión:"),
        "expected connection error, got: {message}"
    );
    assert!(message.contains("not found"));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["estado"], "error");
    let obj = json.as_object().unwrap();
    for key in ["remontes", "kilometros", "nieve"] {
        assert!(!obj.contains_key(key), "{key} should be absent");
    }
}

#[tokio::test]
async fn extract_server_error_yields_error_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let record = test_client(&server).extract(&slug("formigal")).await;

    assert_error_record(&record);
    let message = record.error_message().unwrap();
    assert!(message.contains("503"), "expected status in message: {message}");
}

#[tokio::test]
async fn extract_timeout_yields_error_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_response(resort_page("1", "1", "1")).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = ResortClient::new(&server.uri(), 1, TEST_UA).expect("client");
    let record = client.extract(&slug("formigal")).await;

    assert_error_record(&record);
    assert!(record
        .error_message()
        .unwrap()
        .starts_with("Error de conexión:"));
}

#[tokio::test]
async fn extract_unreachable_host_yields_error_record() {
    // Bind then drop a listener so the port is known to refuse connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = ResortClient::new(&format!("http://{addr}"), 2, TEST_UA).expect("client");
    let record = client.extract(&slug("sierra-nevada")).await;

    assert_error_record(&record);
    assert!(matches!(record.outcome, Outcome::Error { .. }));
    assert!(record
        .error_message()
        .unwrap()
        .starts_with("Error de conexión:"));
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extract_all_preserves_order_and_isolates_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estacion-esqui/formigal/"))
        .respond_with(html_response(resort_page("10", "100", "50")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/estacion-esqui/missing/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let slugs = [slug("missing"), slug("formigal")];
    let records = test_client(&server).extract_all(&slugs).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].slug.as_str(), "missing");
    assert!(!records[0].is_success());
    assert_eq!(records[1].slug.as_str(), "formigal");
    assert!(records[1].is_success());
}
