//! Live-feed client behavior against a local echo server: session priming,
//! header shape, JSON pointer extraction, CSV decoding and error
//! propagation.

use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use nsekit_market_tools::error::MarketToolsError;
use nsekit_market_tools::feed::{FeedCall, MarketFeed as _, Payload};
use nsekit_market_tools::nse::NseFeed;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

#[derive(Default)]
struct ServerState {
    home_hits: AtomicUsize,
}

async fn spawn_server(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (format!("http://{addr}"), handle)
}

fn feed_for(base: &str) -> NseFeed {
    NseFeed::with_bases(
        format!("{base}/api"),
        base.to_string(),
        base.to_string(),
        base.to_string(),
    )
    .expect("client")
}

#[tokio::test]
async fn json_routes_prime_the_session_and_extract_the_data_pointer() {
    let state = Arc::new(ServerState::default());

    async fn home(State(state): State<Arc<ServerState>>) -> &'static str {
        state.home_hits.fetch_add(1, Ordering::SeqCst);
        "<html>NSE</html>"
    }

    async fn turnover(headers: HeaderMap) -> axum::Json<Value> {
        // The client must look like a browser: UA and referer present.
        assert!(headers.get("user-agent").is_some());
        assert!(headers.get("referer").is_some());
        axum::Json(json!({
            "data": [ { "segment": "Equity", "turnover": 1234.5 } ],
            "timestamp": "ignored"
        }))
    }

    let app = Router::new()
        .route("/", get(home))
        .route("/api/market-turnover", get(turnover))
        .with_state(Arc::clone(&state));
    let (base, server) = spawn_server(app).await;

    let feed = feed_for(&base);
    let payload = feed
        .fetch(FeedCall::new("nse_live_market_turnover"))
        .await
        .expect("fetch");
    assert_eq!(
        payload,
        Payload::Value(json!([ { "segment": "Equity", "turnover": 1234.5 } ]))
    );

    // Second fetch reuses the primed session.
    feed.fetch(FeedCall::new("nse_live_market_turnover"))
        .await
        .expect("fetch again");
    assert_eq!(state.home_hits.load(Ordering::SeqCst), 1);

    server.abort();
}

#[tokio::test]
async fn archive_routes_decode_csv_into_tables() {
    async fn nifty50() -> &'static str {
        "Company Name,Industry,Symbol,Series\nTata Consultancy Services Ltd.,IT,TCS,EQ\n"
    }

    let app = Router::new()
        .route("/", get(|| async { "NSE" }))
        .route("/content/indices/ind_nifty50list.csv", get(nifty50));
    let (base, server) = spawn_server(app).await;

    let payload = feed_for(&base)
        .fetch(FeedCall::new("nse_6m_nifty_50"))
        .await
        .expect("fetch");
    let Payload::Table(table) = payload else {
        panic!("expected a table");
    };
    assert_eq!(table.columns[2], "Symbol");
    assert_eq!(table.rows[0][2], json!("TCS"));

    server.abort();
}

#[tokio::test]
async fn upstream_failures_surface_with_status_and_body() {
    async fn missing() -> (axum::http::StatusCode, &'static str) {
        (axum::http::StatusCode::NOT_FOUND, "no such report")
    }

    let app = Router::new()
        .route("/", get(|| async { "NSE" }))
        .route("/api/market-turnover", get(missing));
    let (base, server) = spawn_server(app).await;

    let err = feed_for(&base)
        .fetch(FeedCall::new("nse_live_market_turnover"))
        .await
        .expect_err("404");
    match err {
        MarketToolsError::Upstream { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such report");
        }
        other => panic!("unexpected error: {other}"),
    }

    server.abort();
}

#[tokio::test]
async fn unknown_operations_are_rejected_before_any_request() {
    // No server at all: an unknown op must fail without touching the network.
    let feed = NseFeed::with_bases(
        "http://127.0.0.1:1/api",
        "http://127.0.0.1:1",
        "http://127.0.0.1:1",
        "http://127.0.0.1:1",
    )
    .expect("client");

    let err = feed
        .fetch(FeedCall::new("no_such_operation"))
        .await
        .expect_err("unknown op");
    assert!(matches!(err, MarketToolsError::UnknownOp(_)));
}
