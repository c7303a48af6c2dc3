//! Index reference, live and historical tools.

use super::EnvelopeLabel::Fixed as FixedLabel;
use super::OpBinding::Fixed;
use super::{
    Shape, ToolSpec, from_date, opt_bool, opt_str, period, req_str, to_date, trade_date,
};

pub(super) static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "list_of_indices",
        description: "All 150+ NSE indices, grouped (derivatives-eligible, broad market, sectoral, thematic, strategy, others).",
        category: "Index_Reference",
        op: Fixed("list_of_indices"),
        params: &[],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "indices_live_data",
        description: "Live values for all NSE indices: open, high, low, last, variation, %change, year high/low, PE, PB, dividend yield, advances/declines.",
        category: "Index_Live",
        op: Fixed("index_live_all_indices_data"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "index_live_constituents",
        description: "Stocks of any NSE index with live data: price, change, volume, value, proximity to 52-week high/low, 30d/365d change, free-float market cap. Use \"SECURITIES IN F&O\" for the F&O universe.",
        category: "Index_Live",
        op: Fixed("index_live_indices_stocks_data"),
        params: &[
            req_str(
                "index_name",
                "Index name, e.g. \"NIFTY 50\", \"NIFTY AUTO\", \"SECURITIES IN F&O\" (see list_of_indices)",
            ),
            opt_bool("list_only", "Return only the constituent symbols"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "list_of_nifty50_stocks",
        description: "Latest Nifty 50 constituents with sector and weight.",
        category: "Index_Reference",
        op: Fixed("nse_6m_nifty_50"),
        params: &[opt_bool("list_only", "Return only the symbols")],
        shape: Shape::SymbolList {
            flag: "list_only",
            envelope: Some(("index", FixedLabel("NIFTY 50"))),
        },
    },
    ToolSpec {
        name: "list_of_nifty500_stocks",
        description: "Full Nifty 500 constituent list.",
        category: "Index_Reference",
        op: Fixed("nse_6m_nifty_500"),
        params: &[opt_bool("list_only", "Return only the symbols")],
        shape: Shape::SymbolList {
            flag: "list_only",
            envelope: Some(("index", FixedLabel("NIFTY 500"))),
        },
    },
    ToolSpec {
        name: "nifty50_past_returns",
        description: "Nifty 50 returns summary across timeframes (1W to 5Y).",
        category: "Index_Live",
        op: Fixed("index_live_nifty_50_returns"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "index_live_contribution",
        description: "Stock-wise points contribution to the movement of NIFTY 50 or a given index.",
        category: "Index_Live",
        op: Fixed("index_live_contribution"),
        params: &[
            opt_str("index", "Index name, e.g. \"NIFTY 50\", \"NIFTY BANK\", \"NIFTY IT\""),
            opt_str(
                "mode",
                "\"First Five\" for the top 5 upward/downward movers | \"Full\" for all constituents",
            ),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "index_eod_bhavcopy",
        description: "End-of-day bhavcopy for all indices on a given date.",
        category: "Index_EOD",
        op: Fixed("index_eod_bhav_copy"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "index_pe_pb_div_historical_data",
        description: "Historical P/E, P/B and dividend yield for any index.",
        category: "Index_Historical",
        op: Fixed("index_pe_pb_div_historical_data"),
        params: &[
            req_str("index", "Index name, e.g. \"NIFTY 50\", \"NIFTY BANK\""),
            period(),
            from_date(),
            to_date(),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "index_price_history",
        description: "Historical OHLC plus turnover for any index.",
        category: "Historical",
        op: Fixed("index_historical_data"),
        params: &[
            req_str("index", "Index name, e.g. \"NIFTY 50\", \"NIFTY BANK\""),
            period(),
            from_date(),
            to_date(),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "india_vix",
        description: "Historical India VIX time series.",
        category: "India_VIX_Historical",
        op: Fixed("india_vix_historical_data"),
        params: &[period(), from_date(), to_date()],
        shape: Shape::Records,
    },
];
