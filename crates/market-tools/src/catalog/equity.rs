//! Equity live data and the listed-universe reference tools.

use super::OpBinding::{ByParam, Fixed};
use super::{Shape, ToolSpec, from_date, opt_bool, period, req_str, str_with_default, to_date};

pub(super) static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "list_of_all_nse_stocks",
        description: "Complete list of all NSE listed equities.",
        category: "Equity_Reference",
        op: Fixed("nse_eod_equity_full_list"),
        params: &[opt_bool("list_only", "Return only the symbols")],
        shape: Shape::SymbolList {
            flag: "list_only",
            envelope: None,
        },
    },
    ToolSpec {
        name: "equity_live_stock_quote",
        description: "Full live quote: price, change, volume, VWAP, delivery, 5-level market depth, sector/industry, buy/sell quantities, circuit limits.",
        category: "Equity_Live",
        op: Fixed("cm_live_equity_price_info"),
        params: &[req_str("symbol", "NSE symbol, e.g. \"RELIANCE\"")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_live_stock_info",
        description: "Live equity master info: face value, ISIN, sector, listing details.",
        category: "Equity_Live",
        op: Fixed("cm_live_equity_info"),
        params: &[req_str("symbol", "NSE symbol, e.g. \"RELIANCE\"")],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "most_active_equities",
        description: "Top stocks by traded value or volume.",
        category: "Equity_Live",
        op: ByParam {
            param: "by",
            choices: &[("value", "cm_live_most_active_equity_by_value")],
            fallback: "cm_live_most_active_equity_by_vol",
        },
        params: &[str_with_default("by", "value", "\"value\" or \"volume\"")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_volume_surge",
        description: "Stocks with a sudden volume surge versus their recent average.",
        category: "Equity_Live",
        op: Fixed("cm_live_volume_spurts"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_52week_high_live",
        description: "Stocks hitting a 52-week high in the live market.",
        category: "Equity_Live",
        op: Fixed("cm_live_52week_high"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_52week_low_live",
        description: "Stocks hitting a 52-week low in the live market.",
        category: "Equity_Live",
        op: Fixed("cm_live_52week_low"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_block_deals_live",
        description: "Latest block deals (live).",
        category: "Equity_Live",
        op: Fixed("cm_live_block_deal"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_price_history",
        description: "Historical OHLCV plus turnover and delivery data for any stock.",
        category: "Historical",
        op: Fixed("cm_hist_security_wise_data"),
        params: &[
            req_str("symbol", "NSE symbol, e.g. \"TCS\""),
            period(),
            from_date(),
            to_date(),
        ],
        shape: Shape::Records,
    },
];
