//! The production [`MarketFeed`]: a thin reqwest client over NSE's public
//! JSON API and CSV archives.
//!
//! Each feed operation is bound declaratively to one route (host, path
//! template, query mapping, decode mode). The client adds nothing beyond
//! that: no caching, no retry, no batching — one GET per call, errors
//! surface as-is.
//!
//! NSE refuses bare programmatic clients, so the client sends browser-like
//! headers and primes its cookie jar against the NSE home page before the
//! first call (and again when the jar goes stale).

use crate::error::{MarketToolsError, Result};
use crate::feed::{FeedCall, MarketFeed, Payload, Table};
use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};
use rmcp::model::JsonObject;
use serde_json::Value;
use std::time::{Duration, Instant};
use url::Url;

const NSE_API_BASE: &str = "https://www.nseindia.com/api";
const NSE_ARCHIVES_BASE: &str = "https://nsearchives.nseindia.com";
const SEBI_BASE: &str = "https://www.sebi.gov.in";
const NSE_HOME: &str = "https://www.nseindia.com";

/// How long primed session cookies are trusted before re-priming.
const SESSION_TTL: Duration = Duration::from_secs(300);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Upstream error bodies are clipped to this many characters.
const ERROR_BODY_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy)]
enum Host {
    Api,
    Archives,
    Sebi,
}

#[derive(Debug, Clone, Copy)]
enum Decode {
    Json,
    Csv,
    /// Raw body as a JSON string (endpoints with no machine format).
    Text,
}

/// How a `{date}` path placeholder is rendered from the `DD-MM-YYYY` /
/// `DD-MM-YY` tool parameter.
#[derive(Debug, Clone, Copy)]
enum DateToken {
    Ddmmyyyy,
    Ddmmyy,
}

/// Small client-side projections for the boolean convenience operations.
#[derive(Debug, Clone, Copy)]
enum Project {
    /// `marketState` entry for the requested segment -> is it open?
    MarketOpen,
    /// Holiday list -> does it contain the requested (or today's) date?
    IsHoliday,
}

#[derive(Debug, Clone, Copy)]
struct Route {
    host: Host,
    path: &'static str,
    /// Query pairs always sent.
    fixed: &'static [(&'static str, &'static str)],
    /// `(query key, feed param name)` pairs serialized from the call params.
    query: &'static [(&'static str, &'static str)],
    /// JSON pointer applied to the decoded body.
    pointer: Option<&'static str>,
    date: Option<DateToken>,
    decode: Decode,
    project: Option<Project>,
}

impl Route {
    const fn new(host: Host, path: &'static str) -> Self {
        Self {
            host,
            path,
            fixed: &[],
            query: &[],
            pointer: None,
            date: None,
            decode: Decode::Json,
            project: None,
        }
    }

    const fn api(path: &'static str) -> Self {
        Self::new(Host::Api, path)
    }

    const fn archives(path: &'static str) -> Self {
        let mut route = Self::new(Host::Archives, path);
        route.decode = Decode::Csv;
        route
    }

    const fn sebi(path: &'static str) -> Self {
        let mut route = Self::new(Host::Sebi, path);
        route.decode = Decode::Text;
        route
    }

    /// NSE "Next API" dispatcher endpoint (used by the nseindia.com front
    /// end for charts and statistics pages).
    const fn next_api(fixed: &'static [(&'static str, &'static str)]) -> Self {
        let mut route = Self::new(Host::Api, "/NextApi/apiClient");
        route.fixed = fixed;
        route
    }

    const fn q(mut self, pairs: &'static [(&'static str, &'static str)]) -> Self {
        self.query = pairs;
        self
    }

    const fn with_fixed(mut self, pairs: &'static [(&'static str, &'static str)]) -> Self {
        self.fixed = pairs;
        self
    }

    const fn ptr(mut self, pointer: &'static str) -> Self {
        self.pointer = Some(pointer);
        self
    }

    const fn dated(mut self, token: DateToken) -> Self {
        self.date = Some(token);
        self
    }

    const fn project(mut self, projection: Project) -> Self {
        self.project = Some(projection);
        self
    }
}

use self::DateToken::{Ddmmyy, Ddmmyyyy};
use self::Project::{IsHoliday, MarketOpen};

/// Operation -> route bindings, grouped like the catalog.
#[rustfmt::skip]
static ROUTES: &[(&str, Route)] = &[
    // Market status, calendar, pre-open.
    ("nse_market_status",             Route::api("/marketStatus")),
    ("nse_is_market_open",            Route::api("/marketStatus").ptr("/marketState").project(MarketOpen)),
    ("nse_trading_holidays",          Route::api("/holiday-master").with_fixed(&[("type", "trading")]).ptr("/CM")),
    ("nse_clearing_holidays",         Route::api("/holiday-master").with_fixed(&[("type", "clearing")]).ptr("/CM")),
    ("is_nse_trading_holiday",        Route::api("/holiday-master").with_fixed(&[("type", "trading")]).ptr("/CM").project(IsHoliday)),
    ("is_nse_clearing_holiday",       Route::api("/holiday-master").with_fixed(&[("type", "clearing")]).ptr("/CM").project(IsHoliday)),
    ("nse_live_market_turnover",      Route::api("/market-turnover").ptr("/data")),
    ("nse_reference_rates",           Route::api("/refrates")),
    ("cm_live_gift_nifty",            Route::api("/giftnifty")),
    ("cm_live_market_statistics",     Route::next_api(&[("functionName", "getMarketStatistics")]).ptr("/data")),
    ("pre_market_nifty_info",         Route::api("/market-data-pre-open").q(&[("key", "index_name")]).ptr("/data")),
    ("pre_market_all_nse_adv_dec_info", Route::api("/market-data-pre-open").with_fixed(&[("key", "ALL")]).ptr("/data")),
    ("pre_market_info",               Route::api("/market-data-pre-open").q(&[("key", "category")]).ptr("/data")),
    ("pre_market_derivatives_info",   Route::api("/market-data-pre-open").with_fixed(&[("key", "FO")]).ptr("/data")),

    // Indices.
    ("list_of_indices",               Route::api("/index-names")),
    ("index_live_all_indices_data",   Route::api("/allIndices").ptr("/data")),
    ("index_live_indices_stocks_data", Route::api("/equity-stockIndices").q(&[("index", "index_name")]).ptr("/data")),
    ("nse_6m_nifty_50",               Route::archives("/content/indices/ind_nifty50list.csv")),
    ("nse_6m_nifty_500",              Route::archives("/content/indices/ind_nifty500list.csv")),
    ("index_live_nifty_50_returns",   Route::next_api(&[("functionName", "getIndexReturns"), ("index", "NIFTY 50")]).ptr("/data")),
    ("index_live_contribution",       Route::next_api(&[("functionName", "getIndexContribution")]).q(&[("index", "index"), ("mode", "mode")]).ptr("/data")),
    ("index_eod_bhav_copy",           Route::archives("/content/indices/ind_close_all_{date}.csv").dated(Ddmmyyyy)),
    ("index_pe_pb_div_historical_data", Route::api("/historical/indicesHistory").with_fixed(&[("series", "pe-pb-div")]).q(&[("indexType", "index"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("index_historical_data",         Route::api("/historical/indicesHistory").q(&[("indexType", "index"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("india_vix_historical_data",     Route::api("/historical/vixhistory").q(&[("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),

    // Equity live + universe.
    ("nse_eod_equity_full_list",      Route::archives("/content/equities/EQUITY_L.csv")),
    ("cm_live_equity_price_info",     Route::api("/quote-equity").q(&[("symbol", "symbol")])),
    ("cm_live_equity_info",           Route::api("/equity-meta-info").q(&[("symbol", "symbol")])),
    ("cm_live_most_active_equity_by_value", Route::api("/live-analysis-most-active-securities").with_fixed(&[("index", "value")]).ptr("/data")),
    ("cm_live_most_active_equity_by_vol",   Route::api("/live-analysis-most-active-securities").with_fixed(&[("index", "volume")]).ptr("/data")),
    ("cm_live_volume_spurts",         Route::api("/live-analysis-volume-gainers").ptr("/data")),
    ("cm_live_52week_high",           Route::api("/live-analysis-data-52weekhighstock").ptr("/data")),
    ("cm_live_52week_low",            Route::api("/live-analysis-data-52weeklowstock").ptr("/data")),
    ("cm_live_block_deal",            Route::api("/block-deal").ptr("/data")),
    ("cm_hist_security_wise_data",    Route::api("/historical/cm/equity").q(&[("symbol", "symbol"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),

    // Corporate filings + IPO.
    ("cm_live_hist_insider_trading",  Route::api("/corporates-pit").with_fixed(&[("index", "equities")]).q(&[("symbol", "symbol"), ("from_date", "start_date"), ("to_date", "end_date"), ("period", "period")]).ptr("/data")),
    ("cm_live_hist_corporate_action", Route::api("/corporates-corporateActions").with_fixed(&[("index", "equities")]).q(&[("symbol", "symbol"), ("from_date", "start_date"), ("to_date", "end_date"), ("period", "period"), ("purpose", "purpose")])),
    ("cm_live_hist_board_meetings",   Route::api("/corporate-board-meetings").with_fixed(&[("index", "equities")]).q(&[("symbol", "symbol"), ("from_date", "start_date"), ("to_date", "end_date")])),
    ("cm_live_hist_corporate_announcement", Route::api("/corporate-announcements").with_fixed(&[("index", "equities")]).q(&[("symbol", "symbol"), ("from_date", "from_date"), ("to_date", "to_date")])),
    ("cm_live_today_event_calendar",  Route::api("/event-calendar").q(&[("from_date", "date_from"), ("to_date", "date_to")])),
    ("cm_live_upcoming_event_calendar", Route::api("/event-calendar")),
    ("cm_live_hist_shareholder_meetings", Route::api("/shareholder-meetings").with_fixed(&[("index", "equities")]).q(&[("symbol", "symbol"), ("from_date", "from_date"), ("to_date", "to_date")])),
    ("cm_live_hist_qualified_institutional_placement", Route::api("/corporate-further-issues").with_fixed(&[("issueType", "QIP")]).q(&[("stage", "stage"), ("symbol", "period_or_symbol"), ("from_date", "from_date"), ("to_date", "to_date")]).ptr("/data")),
    ("cm_live_hist_preferential_issue", Route::api("/corporate-further-issues").with_fixed(&[("issueType", "PREF")]).q(&[("stage", "stage"), ("symbol", "period_or_symbol"), ("from_date", "from_date"), ("to_date", "to_date")]).ptr("/data")),
    ("cm_live_hist_right_issue",      Route::api("/corporate-further-issues").with_fixed(&[("issueType", "RI")]).q(&[("stage", "stage"), ("symbol", "period_or_symbol"), ("from_date", "from_date"), ("to_date", "to_date")]).ptr("/data")),
    ("cm_live_voting_results",        Route::api("/corporate-voting-results").ptr("/data")),
    ("cm_live_qtly_shareholding_patterns", Route::api("/corporate-share-holdings-master").ptr("/data")),
    ("cm_live_hist_annual_reports",   Route::api("/annual-reports").with_fixed(&[("index", "equities")]).q(&[("symbol", "symbol"), ("from_date", "from_date"), ("to_date", "to_date")])),
    ("ipo_current",                   Route::api("/ipo-current-issue")),
    ("ipo_preopen",                   Route::api("/special-preopen-listing").ptr("/data")),
    ("ipo_tracker_summary",           Route::next_api(&[("functionName", "getIpoTracker")]).q(&[("board", "board")]).ptr("/data")),

    // Equity EOD + statistics.
    ("cm_eod_fii_dii_activity",       Route::api("/fiidiiTradeReact").q(&[("exchange", "exchange")])),
    ("cm_eod_market_activity_report", Route::archives("/archives/equities/mkt/MA{date}.csv").dated(Ddmmyy)),
    ("cm_eod_bhavcopy_with_delivery", Route::archives("/products/content/sec_bhavdata_full_{date}.csv").dated(Ddmmyyyy)),
    ("cm_eod_equity_bhavcopy",        Route::archives("/products/content/sec_bhavdata_full_{date}.csv").dated(Ddmmyyyy)),
    ("cm_eod_52_week_high_low",       Route::archives("/content/CM_52_wk_High_low_{date}.csv").dated(Ddmmyyyy)),
    ("cm_eod_bulk_deal",              Route::api("/snapshot-capital-market-largedeal").ptr("/BULK_DEALS_DATA")),
    ("cm_eod_block_deal",             Route::api("/snapshot-capital-market-largedeal").ptr("/BLOCK_DEALS_DATA")),
    ("cm_eod_shortselling",           Route::archives("/archives/equities/shortSelling/shortselling_{date}.csv").dated(Ddmmyyyy)),
    ("cm_eod_surveillance_indicator", Route::archives("/archives/equities/surveillance/surveillance_{date}.csv").dated(Ddmmyy)),
    ("cm_eod_series_change",          Route::archives("/content/equities/series_change.csv")),
    ("cm_eod_eq_band_changes",        Route::archives("/content/equities/eq_band_changes_{date}.csv").dated(Ddmmyyyy)),
    ("cm_eod_eq_price_band",          Route::archives("/content/equities/sec_list_{date}.csv").dated(Ddmmyyyy)),
    ("cm_hist_eq_price_band",         Route::api("/historical/priceband").q(&[("symbol", "symbol"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("cm_eod_pe_ratio",               Route::archives("/archives/equities/mkt/PE_{date}.csv").dated(Ddmmyy)),
    ("cm_eod_mcap",                   Route::archives("/archives/equities/mkt/MCAP_{date}.csv").dated(Ddmmyy)),
    ("cm_eod_eq_name_change",         Route::archives("/content/equities/namechange.csv")),
    ("cm_eod_eq_symbol_change",       Route::archives("/content/equities/symbolchange.csv")),
    ("cm_hist_bulk_deals",            Route::api("/historical/bulk-deals").q(&[("symbol", "symbol"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("cm_hist_block_deals",           Route::api("/historical/block-deals").q(&[("symbol", "symbol"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("cm_hist_short_selling",         Route::api("/historical/short-selling").q(&[("symbol", "symbol"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("cm_dmy_biz_growth",             Route::next_api(&[("functionName", "getBusinessGrowth"), ("segment", "CM")]).q(&[("mode", "mode"), ("month", "month"), ("year", "year")]).ptr("/data")),
    ("cm_monthly_settlement_report",  Route::next_api(&[("functionName", "getMonthlySettlement"), ("segment", "CM")]).q(&[("period", "period"), ("fromYear", "from_year"), ("toYear", "to_year")]).ptr("/data")),
    ("cm_monthly_most_active_equity", Route::next_api(&[("functionName", "getMostActiveMonthly")]).ptr("/data")),
    ("historical_advances_decline",   Route::next_api(&[("functionName", "getAdvanceDecline")]).q(&[("mode", "mode"), ("month", "month"), ("year", "year")]).ptr("/data")),

    // F&O.
    ("nse_eom_fno_full_list",         Route::archives("/content/fo/fo_mktlots.csv")),
    ("fno_live_option_chain",         Route::api("/option-chain-v3").q(&[("symbol", "symbol"), ("expiry", "expiry_date"), ("oi_mode", "oi_mode")])),
    ("fno_expiry_dates",              Route::api("/option-chain-contract-info").q(&[("symbol", "symbol"), ("filter", "filter_type")]).ptr("/expiryDates")),
    ("fno_live_most_active",          Route::api("/live-analysis-most-active-contracts").q(&[("contract", "contract_type"), ("option", "option_type"), ("sort", "sort_by")]).ptr("/data")),
    ("fno_live_futures_data",         Route::api("/quote-derivative").q(&[("symbol", "symbol")])),
    ("fno_live_top_20_derivatives_contracts", Route::api("/liveEquity-derivatives").q(&[("index", "category")]).ptr("/data")),
    ("fno_live_most_active_futures_contracts", Route::api("/liveEquity-derivatives").with_fixed(&[("index", "futures")]).q(&[("sort", "by")]).ptr("/data")),
    ("fno_live_most_active_contracts_by_oi",   Route::api("/liveEquity-derivatives").with_fixed(&[("index", "oi")]).ptr("/data")),
    ("fno_live_most_active_contracts_by_volume", Route::api("/liveEquity-derivatives").with_fixed(&[("index", "volume")]).ptr("/data")),
    ("fno_live_most_active_options_contracts_by_volume", Route::api("/liveEquity-derivatives").with_fixed(&[("index", "options")]).ptr("/data")),
    ("fno_live_most_active_underlying", Route::api("/live-analysis-most-active-underlying").ptr("/data")),
    ("fno_live_change_in_oi",         Route::api("/live-analysis-oi-spurts/underlyings").ptr("/data")),
    ("fno_live_oi_vs_price",          Route::api("/live-analysis-oi-spurts/underlyings-price-vs-oi").ptr("/data")),
    ("fno_live_active_contracts",     Route::api("/snapshot-derivatives-equity").q(&[("symbol", "symbol"), ("expiry", "expiry_date")]).ptr("/data")),
    ("fno_eod_bhav_copy",             Route::archives("/content/fo/fo_bhavcopy_{date}.csv").dated(Ddmmyyyy)),
    ("fno_eod_fii_stats",             Route::archives("/content/fo/fii_stats_{date}.csv").dated(Ddmmyyyy)),
    ("fno_eod_top10_fut",             Route::next_api(&[("functionName", "getTopContracts"), ("segment", "FUT")]).q(&[("date", "date")])),
    ("fno_eod_top20_opt",             Route::next_api(&[("functionName", "getTopContracts"), ("segment", "OPT")]).q(&[("date", "date")])),
    ("fno_eod_sec_ban",               Route::archives("/archives/fo/sec_ban/fo_secban_{date}.csv").dated(Ddmmyyyy)),
    ("fno_eod_mwpl",                  Route::archives("/archives/nsccl/mwpl/mwpl_{date}.csv").dated(Ddmmyyyy)),
    ("fno_eod_combine_oi",            Route::archives("/archives/nsccl/mwpl/combineoi_{date}.csv").dated(Ddmmyyyy)),
    ("fno_eod_participant_wise_oi",   Route::archives("/content/nsccl/fao_participant_oi_{date}.csv").dated(Ddmmyyyy)),
    ("fno_eod_participant_wise_vol",  Route::archives("/content/nsccl/fao_participant_vol_{date}.csv").dated(Ddmmyyyy)),
    ("future_price_volume_data",      Route::api("/historical/foCPV").q(&[("symbol", "symbol"), ("instrumentType", "instrument"), ("expiryDate", "expiry"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("option_price_volume_data",      Route::api("/historical/foCPV").q(&[("symbol", "symbol"), ("instrumentType", "instrument"), ("strikePrice", "strike"), ("optionType", "option_type"), ("expiryDate", "expiry"), ("from", "from_date"), ("to", "to_date"), ("period", "period")]).ptr("/data")),
    ("fno_eom_lot_size",              Route::archives("/content/fo/fo_mktlots.csv")),
    ("fno_dmy_biz_growth",            Route::next_api(&[("functionName", "getBusinessGrowth"), ("segment", "FO")]).q(&[("mode", "mode"), ("month", "month"), ("year", "year")]).ptr("/data")),
    ("fno_monthly_settlement_report", Route::next_api(&[("functionName", "getMonthlySettlement"), ("segment", "FO")]).q(&[("period", "period"), ("fromYear", "from_year"), ("toYear", "to_year")]).ptr("/data")),
    ("symbol_full_fno_live_data",     Route::api("/quote-derivative").q(&[("symbol", "symbol")])),
    ("symbol_most_active_by_oi",      Route::next_api(&[("functionName", "getMostActiveByOI")]).q(&[("symbol", "symbol"), ("type", "type_mode")]).ptr("/data")),
    ("fno_contract_chart_data",       Route::next_api(&[("functionName", "getGraphChart")]).q(&[("identifier", "identifier")])),

    // Regulatory, charts, misc.
    ("nse_live_hist_circulars",       Route::api("/circulars").q(&[("from_date", "from_date"), ("to_date", "to_date"), ("dept", "department")]).ptr("/data")),
    ("nse_live_hist_press_releases",  Route::api("/press-release").q(&[("from_date", "from_date"), ("to_date", "to_date"), ("dept", "department")])),
    ("sebi_circulars",                Route::sebi("/sebiweb/ajax/home/getnewslistinfo.jsp").q(&[("fromDate", "from_date"), ("toDate", "to_date"), ("period", "period")])),
    ("sebi_data",                     Route::sebi("/sebiweb/home/HomeAction.do").with_fixed(&[("doListing", "yes"), ("sid", "1"), ("ssid", "7"), ("smid", "0")]).q(&[("pno", "page")])),
    ("nifty_chart",                   Route::next_api(&[("functionName", "getGraphChart"), ("index", "NIFTY 50")]).q(&[("timeframe", "timeframe")])),
    ("stock_chart",                   Route::next_api(&[("functionName", "getGraphChart")]).q(&[("symbol", "symbol"), ("timeframe", "timeframe")])),
    ("state_wise_registered_investors", Route::next_api(&[("functionName", "getRegisteredInvestors")])),
    ("quarterly_financial_results",   Route::api("/results-comparision").q(&[("symbol", "symbol")])),
];

fn route_for(op: &str) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|(name, _)| *name == op)
        .map(|(_, route)| route)
}

/// The production NSE feed client.
pub struct NseFeed {
    client: Client,
    api_base: String,
    archives_base: String,
    sebi_base: String,
    home: String,
    primed_at: Mutex<Option<Instant>>,
}

impl NseFeed {
    /// Build a client against the real NSE endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_bases(NSE_API_BASE, NSE_ARCHIVES_BASE, SEBI_BASE, NSE_HOME)
    }

    /// Build a client against explicit base URLs (tests point these at a
    /// local server).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_bases(
        api_base: impl Into<String>,
        archives_base: impl Into<String>,
        sebi_base: impl Into<String>,
        home: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            archives_base: archives_base.into(),
            sebi_base: sebi_base.into(),
            home: home.into(),
            primed_at: Mutex::new(None),
        })
    }

    /// Prime the cookie jar with a browser-like visit to the NSE home page.
    /// Concurrent primes are harmless; the jar just refreshes twice.
    async fn ensure_session(&self) -> Result<()> {
        let stale = {
            let primed = self.primed_at.lock();
            primed.is_none_or(|t| t.elapsed() > SESSION_TTL)
        };
        if !stale {
            return Ok(());
        }

        tracing::debug!(home = %self.home, "priming NSE session cookies");
        let response = self.client.get(&self.home).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketToolsError::Upstream {
                status: status.as_u16(),
                body: "session priming failed".to_string(),
            });
        }

        *self.primed_at.lock() = Some(Instant::now());
        Ok(())
    }

    fn build_url(&self, route: &Route, params: &JsonObject) -> Result<Url> {
        let base = match route.host {
            Host::Api => &self.api_base,
            Host::Archives => &self.archives_base,
            Host::Sebi => &self.sebi_base,
        };

        let mut path = route.path.to_string();
        if path.contains("{date}") {
            let date = resolve_trade_date(params.get("date"))?;
            let token = route.date.unwrap_or(DateToken::Ddmmyyyy);
            path = path.replace("{date}", &format_archive_date(date, token));
        }

        let mut url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), path))
            .map_err(|e| MarketToolsError::Decode(format!("invalid URL: {e}")))?;

        let has_query = !route.fixed.is_empty()
            || route
                .query
                .iter()
                .any(|(_, param)| params.get(*param).is_some_and(|v| !v.is_null()));
        if has_query {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in route.fixed {
                pairs.append_pair(key, value);
            }
            for (key, param) in route.query {
                if let Some(value) = params.get(*param).filter(|v| !v.is_null()) {
                    pairs.append_pair(key, &value_to_string(value));
                }
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl MarketFeed for NseFeed {
    async fn fetch(&self, call: FeedCall) -> Result<Payload> {
        let route =
            route_for(&call.op).ok_or_else(|| MarketToolsError::UnknownOp(call.op.clone()))?;

        self.ensure_session().await?;

        let url = self.build_url(route, &call.params)?;
        tracing::debug!(op = %call.op, url = %url, "fetching");

        let response = self
            .client
            .get(url)
            .header(REFERER, self.home.as_str())
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: String = String::from_utf8_lossy(&bytes)
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            return Err(MarketToolsError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload = decode_body(route, &bytes)?;
        match route.project {
            None => Ok(payload),
            Some(projection) => apply_projection(projection, payload, &call.params),
        }
    }
}

fn decode_body(route: &Route, bytes: &[u8]) -> Result<Payload> {
    match route.decode {
        Decode::Json => {
            let mut value: Value = serde_json::from_slice(bytes)
                .map_err(|e| MarketToolsError::Decode(format!("invalid JSON: {e}")))?;
            if let Some(pointer) = route.pointer {
                value = value.pointer(pointer).cloned().unwrap_or(Value::Null);
            }
            Ok(Payload::Value(value))
        }
        Decode::Csv => decode_csv(bytes),
        Decode::Text => Ok(Payload::Value(Value::String(
            String::from_utf8_lossy(bytes).into_owned(),
        ))),
    }
}

fn decode_csv(bytes: &[u8]) -> Result<Payload> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| MarketToolsError::Decode(format!("invalid CSV header: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| MarketToolsError::Decode(format!("invalid CSV row: {e}")))?;
        rows.push(record.iter().map(infer_cell).collect());
    }

    Ok(Payload::Table(Table { columns, rows }))
}

/// CSV cells carry no type information; mirror the usual dataframe
/// inference: integer, then float, else string. Empty and "-" cells are
/// null.
fn infer_cell(raw: &str) -> Value {
    if raw.is_empty() || raw == "-" {
        return Value::Null;
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = raw.parse::<f64>() {
        return Value::from(float);
    }
    Value::String(raw.to_string())
}

fn apply_projection(projection: Project, payload: Payload, params: &JsonObject) -> Result<Payload> {
    let value = match payload {
        Payload::Value(v) => v,
        Payload::Table(_) => {
            return Err(MarketToolsError::Decode(
                "projection expects a JSON payload".to_string(),
            ));
        }
    };

    match projection {
        Project::MarketOpen => {
            let segment = params
                .get("segment")
                .and_then(Value::as_str)
                .unwrap_or("Capital Market");
            let open = value
                .as_array()
                .into_iter()
                .flatten()
                .filter(|entry| {
                    entry
                        .get("market")
                        .and_then(Value::as_str)
                        .is_some_and(|m| m.eq_ignore_ascii_case(segment))
                })
                .any(|entry| {
                    entry
                        .get("marketStatus")
                        .and_then(Value::as_str)
                        .is_some_and(|s| !s.eq_ignore_ascii_case("Closed"))
                });
            Ok(Payload::Value(Value::Bool(open)))
        }
        Project::IsHoliday => {
            let wanted = resolve_trade_date(params.get("date"))?;
            let holiday = value
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|entry| entry.get("tradingDate").and_then(Value::as_str))
                .filter_map(|raw| NaiveDate::parse_from_str(raw, "%d-%b-%Y").ok())
                .any(|d| d == wanted);
            Ok(Payload::Value(Value::Bool(holiday)))
        }
    }
}

/// Parse a `DD-MM-YYYY` or `DD-MM-YY` tool date; an omitted date means
/// "the most recent trading date", which this thin client approximates
/// with the current calendar day (a holiday 404s upstream and surfaces as
/// an error).
fn resolve_trade_date(value: Option<&Value>) -> Result<NaiveDate> {
    let Some(raw) = value.and_then(Value::as_str) else {
        return Ok(chrono::Local::now().date_naive());
    };
    NaiveDate::parse_from_str(raw, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%m-%y"))
        .map_err(|_| {
            MarketToolsError::InvalidArgument(format!(
                "date '{raw}' is not DD-MM-YYYY or DD-MM-YY"
            ))
        })
}

fn format_archive_date(date: NaiveDate, token: DateToken) -> String {
    match token {
        DateToken::Ddmmyyyy => date.format("%d%m%Y").to_string(),
        DateToken::Ddmmyy => date.format("%d%m%y").to_string(),
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, OpBinding};
    use serde_json::json;

    #[test]
    fn every_catalog_operation_has_a_route() {
        for spec in catalog::specs() {
            match spec.op {
                OpBinding::Fixed(op) => {
                    assert!(route_for(op).is_some(), "{}: no route for '{op}'", spec.name);
                }
                OpBinding::ByParam { choices, fallback, .. } => {
                    for (_, op) in choices {
                        assert!(route_for(op).is_some(), "{}: no route for '{op}'", spec.name);
                    }
                    assert!(
                        route_for(fallback).is_some(),
                        "{}: no route for fallback '{fallback}'",
                        spec.name
                    );
                }
            }
        }
    }

    #[test]
    fn build_url_substitutes_dates_and_serializes_params() {
        let feed = NseFeed::with_bases(
            "http://127.0.0.1:1/api",
            "http://127.0.0.1:1",
            "http://127.0.0.1:1",
            "http://127.0.0.1:1",
        )
        .expect("client");

        let route = route_for("cm_eod_market_activity_report").expect("route");
        let mut params = JsonObject::new();
        params.insert("date".to_string(), json!("17-10-2025"));
        let url = feed.build_url(route, &params).expect("url");
        assert_eq!(url.path(), "/archives/equities/mkt/MA171025.csv");

        let route = route_for("cm_hist_security_wise_data").expect("route");
        let mut params = JsonObject::new();
        params.insert("symbol".to_string(), json!("TCS"));
        params.insert("from_date".to_string(), json!("01-01-2025"));
        let url = feed.build_url(route, &params).expect("url");
        assert_eq!(url.path(), "/api/historical/cm/equity");
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(query.contains(&("symbol".to_string(), "TCS".to_string())));
        assert!(query.contains(&("from".to_string(), "01-01-2025".to_string())));
        // Absent optional params must not appear at all.
        assert!(query.iter().all(|(k, _)| k != "to" && k != "period"));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let err = resolve_trade_date(Some(&json!("2025/10/17"))).expect_err("bad date");
        assert!(matches!(err, MarketToolsError::InvalidArgument(_)));
    }

    #[test]
    fn csv_cells_infer_numbers_and_nulls() {
        let bytes = b"SYMBOL,CLOSE,VOLUME,REMARK\nTCS,4100.50,1200,-\nINFY,1500,900,ok\n";
        let Payload::Table(table) = decode_csv(bytes).expect("csv") else {
            panic!("expected a table");
        };
        assert_eq!(table.columns, ["SYMBOL", "CLOSE", "VOLUME", "REMARK"]);
        assert_eq!(
            table.rows[0],
            vec![json!("TCS"), json!(4100.5), json!(1200), Value::Null]
        );
        assert_eq!(
            table.rows[1],
            vec![json!("INFY"), json!(1500), json!(900), json!("ok")]
        );
    }

    #[test]
    fn market_open_projection_matches_segment() {
        let state = json!([
            { "market": "Capital Market", "marketStatus": "Open" },
            { "market": "Currency", "marketStatus": "Closed" }
        ]);

        let mut params = JsonObject::new();
        params.insert("segment".to_string(), json!("Currency"));
        let out = apply_projection(Project::MarketOpen, Payload::Value(state.clone()), &params)
            .expect("projection");
        assert_eq!(out, Payload::Value(Value::Bool(false)));

        let out = apply_projection(Project::MarketOpen, Payload::Value(state), &JsonObject::new())
            .expect("projection");
        assert_eq!(out, Payload::Value(Value::Bool(true)));
    }

    #[test]
    fn holiday_projection_compares_dates() {
        let holidays = json!([
            { "tradingDate": "26-Jan-2026", "description": "Republic Day" }
        ]);

        let mut params = JsonObject::new();
        params.insert("date".to_string(), json!("26-01-2026"));
        let out = apply_projection(Project::IsHoliday, Payload::Value(holidays.clone()), &params)
            .expect("projection");
        assert_eq!(out, Payload::Value(Value::Bool(true)));

        let mut params = JsonObject::new();
        params.insert("date".to_string(), json!("27-01-2026"));
        let out = apply_projection(Project::IsHoliday, Payload::Value(holidays), &params)
            .expect("projection");
        assert_eq!(out, Payload::Value(Value::Bool(false)));
    }
}
