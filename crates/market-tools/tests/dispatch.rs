//! Facade dispatch against a recording stub feed: parameter forwarding
//! fidelity, shaping policies, and the shared throttle.

use async_trait::async_trait;
use nsekit_market_tools::error::{MarketToolsError, Result};
use nsekit_market_tools::feed::{FeedCall, MarketFeed, Payload, Table};
use nsekit_market_tools::source::NseToolSource;
use nsekit_market_tools::throttle::CallGate;
use parking_lot::Mutex;
use rmcp::model::JsonObject;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

struct RecordingFeed {
    calls: Mutex<Vec<FeedCall>>,
    response: Payload,
}

impl RecordingFeed {
    fn new(response: Payload) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response,
        })
    }

    fn only_call(&self) -> FeedCall {
        let calls = self.calls.lock();
        assert_eq!(calls.len(), 1, "expected exactly one feed call");
        calls[0].clone()
    }
}

#[async_trait]
impl MarketFeed for RecordingFeed {
    async fn fetch(&self, call: FeedCall) -> Result<Payload> {
        self.calls.lock().push(call);
        Ok(self.response.clone())
    }
}

fn source(feed: Arc<RecordingFeed>) -> NseToolSource {
    NseToolSource::new(feed, CallGate::new(Duration::ZERO)).expect("valid catalog")
}

fn args(value: Value) -> JsonObject {
    value.as_object().expect("object literal").clone()
}

#[tokio::test]
async fn parameters_are_forwarded_verbatim() {
    let feed = RecordingFeed::new(Payload::Value(json!([])));
    let out = source(Arc::clone(&feed))
        .call_tool(
            "equity_price_history",
            args(json!({ "symbol": "TCS", "period": "1Y" })),
        )
        .await
        .expect("call");
    assert_eq!(out, json!([]));

    let call = feed.only_call();
    assert_eq!(call.op, "cm_hist_security_wise_data");
    assert_eq!(call.params.get("symbol"), Some(&json!("TCS")));
    assert_eq!(call.params.get("period"), Some(&json!("1Y")));
    // Unset optional dates stay absent — not empty strings.
    assert!(!call.params.contains_key("from_date"));
    assert!(!call.params.contains_key("to_date"));
}

#[tokio::test]
async fn documented_defaults_are_applied() {
    let feed = RecordingFeed::new(Payload::Value(json!({})));
    source(Arc::clone(&feed))
        .call_tool("market_live_status", JsonObject::new())
        .await
        .expect("call");

    let call = feed.only_call();
    assert_eq!(call.op, "nse_market_status");
    assert_eq!(call.params.get("mode"), Some(&json!("Market Status")));
}

#[tokio::test]
async fn selector_params_choose_the_operation_and_are_consumed() {
    let feed = RecordingFeed::new(Payload::Value(json!([])));
    let src = source(Arc::clone(&feed));

    src.call_tool("most_active_equities", JsonObject::new())
        .await
        .expect("call");
    let call = feed.only_call();
    assert_eq!(call.op, "cm_live_most_active_equity_by_value");
    assert!(call.params.is_empty());

    feed.calls.lock().clear();
    src.call_tool("most_active_equities", args(json!({ "by": "volume" })))
        .await
        .expect("call");
    let call = feed.only_call();
    assert_eq!(call.op, "cm_live_most_active_equity_by_vol");
    assert!(call.params.is_empty());
}

#[tokio::test]
async fn flag_params_materialize_as_their_fixed_string() {
    let feed = RecordingFeed::new(Payload::Value(json!({})));
    let src = source(Arc::clone(&feed));

    src.call_tool(
        "fno_live_option_chain",
        args(json!({ "symbol": "NIFTY", "expiry": "28-Oct-2025", "compact": true })),
    )
    .await
    .expect("call");
    let call = feed.only_call();
    assert_eq!(call.op, "fno_live_option_chain");
    assert_eq!(call.params.get("symbol"), Some(&json!("NIFTY")));
    // Tool-surface `expiry` reaches the feed under its upstream name.
    assert_eq!(call.params.get("expiry_date"), Some(&json!("28-Oct-2025")));
    assert_eq!(call.params.get("oi_mode"), Some(&json!("compact")));

    feed.calls.lock().clear();
    src.call_tool("fno_live_option_chain", args(json!({ "symbol": "NIFTY" })))
        .await
        .expect("call");
    let call = feed.only_call();
    assert!(!call.params.contains_key("oi_mode"));
}

#[tokio::test]
async fn tabular_results_become_ordered_records() {
    let feed = RecordingFeed::new(Payload::Table(Table {
        columns: vec!["symbol".into(), "price".into()],
        rows: vec![
            vec![json!("TCS"), json!(4100.5)],
            vec![json!("INFY"), json!(1500.0)],
        ],
    }));
    let out = source(feed)
        .call_tool("indices_live_data", JsonObject::new())
        .await
        .expect("call");
    assert_eq!(
        out,
        json!([
            { "symbol": "TCS", "price": 4100.5 },
            { "symbol": "INFY", "price": 1500.0 }
        ])
    );
}

#[tokio::test]
async fn non_tabular_results_pass_through_unchanged() {
    let feed = RecordingFeed::new(Payload::Value(json!(true)));
    let out = source(feed)
        .call_tool("market_is_open", JsonObject::new())
        .await
        .expect("call");
    assert_eq!(out, json!(true));

    let feed = RecordingFeed::new(Payload::Value(json!({ "status": "open" })));
    let out = source(feed)
        .call_tool("market_live_status", JsonObject::new())
        .await
        .expect("call");
    assert_eq!(out, json!({ "status": "open" }));
}

#[tokio::test]
async fn list_only_wraps_symbols_in_the_universe_envelope() {
    let feed = RecordingFeed::new(Payload::Value(json!(["TCS", "INFY", "RELIANCE"])));
    let src = source(feed);

    let out = src
        .call_tool("list_of_nifty50_stocks", args(json!({ "list_only": true })))
        .await
        .expect("call");
    assert_eq!(
        out,
        json!({
            "index": "NIFTY 50",
            "count": 3,
            "symbols": ["TCS", "INFY", "RELIANCE"]
        })
    );
}

#[tokio::test]
async fn fno_universe_envelope_uppercases_the_mode() {
    let feed = RecordingFeed::new(Payload::Value(json!(["TCS", "INFY"])));
    let out = source(feed)
        .call_tool("list_of_fno_stocks", args(json!({ "list_only": true })))
        .await
        .expect("call");
    assert_eq!(
        out,
        json!({
            "name": "F&O STOCKS",
            "count": 2,
            "symbols": ["TCS", "INFY"]
        })
    );
}

#[tokio::test]
async fn all_stocks_list_only_returns_a_bare_array() {
    let feed = RecordingFeed::new(Payload::Value(json!(["TCS", "INFY"])));
    let out = source(feed)
        .call_tool("list_of_all_nse_stocks", args(json!({ "list_only": true })))
        .await
        .expect("call");
    assert_eq!(out, json!(["TCS", "INFY"]));
}

#[tokio::test]
async fn list_only_unset_returns_the_full_payload() {
    let feed = RecordingFeed::new(Payload::Table(Table {
        columns: vec!["Symbol".into(), "Weight".into()],
        rows: vec![vec![json!("TCS"), json!(4.1)]],
    }));
    let out = source(feed)
        .call_tool("list_of_nifty50_stocks", JsonObject::new())
        .await
        .expect("call");
    assert_eq!(out, json!([{ "Symbol": "TCS", "Weight": 4.1 }]));
}

#[tokio::test]
async fn feed_errors_propagate_unmodified() {
    struct FailingFeed;

    #[async_trait]
    impl MarketFeed for FailingFeed {
        async fn fetch(&self, _call: FeedCall) -> Result<Payload> {
            Err(MarketToolsError::Upstream {
                status: 503,
                body: "upstream down".to_string(),
            })
        }
    }

    let src = NseToolSource::new(Arc::new(FailingFeed), CallGate::new(Duration::ZERO))
        .expect("valid catalog");
    let err = src
        .call_tool("indices_live_data", JsonObject::new())
        .await
        .expect_err("feed failure");
    assert!(matches!(err, MarketToolsError::Upstream { status: 503, .. }));
}

#[tokio::test(start_paused = true)]
async fn calls_share_one_gate_across_tools() {
    let interval = Duration::from_millis(350);
    let feed = RecordingFeed::new(Payload::Value(json!({})));
    let src = NseToolSource::new(feed, CallGate::new(interval)).expect("valid catalog");

    let before = tokio::time::Instant::now();
    src.call_tool("market_live_turnover", JsonObject::new())
        .await
        .expect("first call");
    src.call_tool("currency_reference_rates", JsonObject::new())
        .await
        .expect("second call");
    assert!(before.elapsed() >= interval);
}
