use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use stockdata_api::{Client, HistoryQuery};
use stockdata_server::{app, AppState, STOCK_ROUTE};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UPSTREAM_PATH: &str = "/v7/finance/download/NVDA";

const EXAMPLE_BODY: &str = "Date,Open,High,Low,Close,Adj Close,Volume\n\
2024-01-02,48.25,49.10,47.90,48.75,48.75,200000000\n\
2024-01-03,48.80,50.00,48.50,49.95,49.95,210000000";

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("server crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> String {
    let path = workspace_root()
        .join("stockdata_api/tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e))
}

fn router_for(uri: &str) -> Router {
    let client = Client::with_base_url(uri).unwrap();
    app(AppState::new(client, HistoryQuery::default()))
}

async fn mount_body(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let resp = router.oneshot(request).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get_quotes() -> Request<Body> {
    Request::builder()
        .uri(STOCK_ROUTE)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn returns_example_rows_as_json() {
    let server = MockServer::start().await;
    mount_body(&server, EXAMPLE_BODY).await;

    let (status, headers, body) = send(router_for(&server.uri()), get_quotes()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        body,
        concat!(
            r#"[{"date":"2024-01-02","open":"48.25","high":"49.10","low":"47.90","close":"48.75","adjClose":"48.75","volume":"200000000"},"#,
            r#"{"date":"2024-01-03","open":"48.80","high":"50.00","low":"48.50","close":"49.95","adjClose":"49.95","volume":"210000000"}]"#
        )
    );
}

#[tokio::test]
async fn requests_full_daily_history_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .and(query_param("period1", "0"))
        .and(query_param("period2", "9999999999"))
        .and(query_param("interval", "1d"))
        .and(query_param("events", "history"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("nvda_history.csv")))
        .expect(1)
        .mount(&server)
        .await;

    let (status, _, body) = send(router_for(&server.uri()), get_quotes()).await;

    assert_eq!(status, StatusCode::OK);
    let rows: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["date"], "2024-01-02");
    assert_eq!(rows[3]["adjClose"], "49.085175");
}

#[tokio::test]
async fn header_only_returns_empty_array() {
    let server = MockServer::start().await;
    mount_body(&server, "Date,Open,High,Low,Close,Adj Close,Volume\n").await;

    let (status, _, body) = send(router_for(&server.uri()), get_quotes()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn short_row_omits_missing_fields() {
    let server = MockServer::start().await;
    mount_body(&server, "Date,Open,High,Low,Close,Adj Close,Volume\n2024-01-02,48.25,49.10").await;

    let (status, _, body) = send(router_for(&server.uri()), get_quotes()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"[{"date":"2024-01-02","open":"48.25","high":"49.10"}]"#);
}

#[tokio::test]
async fn upstream_error_status_returns_generic_500() {
    for upstream_status in [400, 401, 404, 429, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .respond_with(ResponseTemplate::new(upstream_status).set_body_string("upstream says no"))
            .mount(&server)
            .await;

        let (status, headers, body) = send(router_for(&server.uri()), get_quotes()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "upstream {}", upstream_status);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body, "Error fetching stock data");
    }
}

#[tokio::test]
async fn unreachable_upstream_returns_generic_500() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, _, body) = send(router_for(&format!("http://{}", addr)), get_quotes()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error fetching stock data");
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let server = MockServer::start().await;
    mount_body(&server, EXAMPLE_BODY).await;

    let request = Request::builder()
        .uri(STOCK_ROUTE)
        .header(header::ORIGIN, "https://some-dashboard.example")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(router_for(&server.uri()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn preflight_is_answered() {
    let server = MockServer::start().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(STOCK_ROUTE)
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(router_for(&server.uri()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn repeated_calls_are_identical() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(EXAMPLE_BODY))
        .expect(2)
        .mount(&server)
        .await;

    let router = router_for(&server.uri());
    let (_, _, first) = send(router.clone(), get_quotes()).await;
    let (_, _, second) = send(router, get_quotes()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn other_paths_are_not_found() {
    let server = MockServer::start().await;

    let request = Request::builder()
        .uri("/amd-stock")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(router_for(&server.uri()), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
