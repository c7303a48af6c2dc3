//! Regulatory publications, chart data and remaining reference tools.

use super::OpBinding::Fixed;
use super::{
    ParamDefault, ParamKind, ParamSpec, Shape, ToolSpec, from_date, opt_str, req_str,
    str_with_default, to_date,
};

pub(super) static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "nse_circulars",
        description: "NSE circulars, latest or for a date range.",
        category: "NSE_Historical",
        op: Fixed("nse_live_hist_circulars"),
        params: &[
            from_date(),
            to_date(),
            opt_str("department", "Optional department filter, e.g. \"NSE Listing\""),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "nse_press_releases",
        description: "NSE press releases, latest or for a date range.",
        category: "NSE_Historical",
        op: Fixed("nse_live_hist_press_releases"),
        params: &[
            from_date(),
            to_date(),
            opt_str(
                "department",
                "Optional department filter: Corporate Communications, Investor Services Cell, Member Compliance, NSE Clearing, NSE Indices, NSE Listing, Surveillance",
            ),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "sebi_circulars",
        description: "SEBI circulars, latest or for a period/date range.",
        category: "Regulatory",
        op: Fixed("sebi_circulars"),
        params: &[
            from_date(),
            to_date(),
            opt_str("period", "\"1W\" | \"1M\" | \"3M\" | \"1Y\""),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "sebi_data_pages",
        description: "Paginated SEBI circulars and orders.",
        category: "Regulatory",
        op: Fixed("sebi_data"),
        params: &[ParamSpec {
            name: "page",
            kind: ParamKind::Int,
            required: false,
            default: Some(ParamDefault::Int(1)),
            rename: None,
            doc: "Page number",
        }],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "price_chart_nifty",
        description: "Intraday or historical price chart for the NIFTY 50 index: UTC timestamp, price, and the NSE session flag (\"PO\" pre-open, \"NM\" normal market, ...).",
        category: "ChartData",
        op: Fixed("nifty_chart"),
        params: &[str_with_default(
            "timeframe",
            "1D",
            "Chart lookback: \"1D\" | \"1M\" | \"3M\" | \"6M\" | \"1Y\"",
        )],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "price_chart_stock",
        description: "Intraday or historical price chart for a stock: UTC timestamp, price, and the NSE session flag.",
        category: "ChartData",
        op: Fixed("stock_chart"),
        params: &[
            req_str("symbol", "NSE symbol, e.g. \"TCS\""),
            str_with_default(
                "timeframe",
                "1D",
                "Chart lookback: \"1D\" | \"1W\" | \"1M\" | \"1Y\"",
            ),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "investors_statewise",
        description: "NSE registered investors by state (as-on date, previous day/month/quarter, last year, last 5 years).",
        category: "Registered_Investors",
        op: Fixed("state_wise_registered_investors"),
        params: &[],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "quarterly_financial_results",
        description: "Quarterly results: total income, profit before tax, net profit/loss, EPS. Amounts are in lakhs.",
        category: "Financial_Results",
        op: Fixed("quarterly_financial_results"),
        params: &[req_str("symbol", "NSE symbol, e.g. \"TCS\"")],
        shape: Shape::Raw,
    },
];
