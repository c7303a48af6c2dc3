//! Market status, trading calendar and pre-open tools.

use super::OpBinding::Fixed;
use super::{Shape, ToolSpec, opt_bool, opt_str, str_with_default};

pub(super) static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "market_live_status",
        description: "Current market status per segment, Nifty 50 level, total market cap or Gift Nifty value.",
        category: "NSE_Live",
        op: Fixed("nse_market_status"),
        params: &[str_with_default(
            "mode",
            "Market Status",
            "\"Market Status\" | \"Nifty50\" | \"Mcap\" | \"Gift Nifty\"",
        )],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "market_is_open",
        description: "Check whether a market segment is currently open.",
        category: "NSE_Live",
        op: Fixed("nse_is_market_open"),
        params: &[str_with_default(
            "segment",
            "Capital Market",
            "\"Capital Market\" | \"Currency\" | \"Commodity\" | \"Debt\" | \"currencyfuture\"",
        )],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "market_trading_holidays_list",
        description: "All NSE trading holidays for the current year.",
        category: "NSE_Reference",
        op: Fixed("nse_trading_holidays"),
        params: &[opt_bool("list_only", "Return only the holiday dates")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "market_clearing_holidays_list",
        description: "All NSE clearing/settlement holidays for the current year.",
        category: "NSE_Reference",
        op: Fixed("nse_clearing_holidays"),
        params: &[opt_bool("list_only", "Return only the holiday dates")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "market_is_trading_holiday",
        description: "Check whether today or a given date is a trading holiday.",
        category: "NSE_Reference",
        op: Fixed("is_nse_trading_holiday"),
        params: &[opt_str("date", "Optional date, DD-MM-YYYY; omitted means today")],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "market_is_clearing_holiday",
        description: "Check whether today or a given date is a clearing holiday.",
        category: "NSE_Reference",
        op: Fixed("is_nse_clearing_holiday"),
        params: &[opt_str("date", "Optional date, DD-MM-YYYY; omitted means today")],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "market_live_turnover",
        description: "Real-time turnover across the equity, F&O, currency and commodity segments.",
        category: "NSE_Live",
        op: Fixed("nse_live_market_turnover"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "currency_reference_rates",
        description: "Official NSE USD, EUR, GBP and JPY reference rates.",
        category: "NSE_Live",
        op: Fixed("nse_reference_rates"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "gift_nifty_live",
        description: "Current Gift Nifty futures price and USDINR rate.",
        category: "NSE_Live",
        op: Fixed("cm_live_gift_nifty"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "market_live_statistics",
        description: "Live capital-market statistics: advances, declines, unchanged, 52-week highs/lows, circuit counts, market cap, registered investors.",
        category: "NSE_Live",
        op: Fixed("cm_live_market_statistics"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "preopen_index_summary",
        description: "Pre-open advance/decline summary for an index universe.",
        category: "Pre_Market",
        op: Fixed("pre_market_nifty_info"),
        params: &[str_with_default(
            "index_name",
            "NIFTY 50",
            "\"NIFTY 50\" | \"Nifty Bank\" | \"Emerge\" | \"Securities in F&O\" | \"Others\" | \"All\"",
        )],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "preopen_market_breadth",
        description: "Full NSE pre-open advance/decline breadth across all segments.",
        category: "Pre_Market",
        op: Fixed("pre_market_all_nse_adv_dec_info"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "preopen_stocks_data",
        description: "All stocks in the pre-open session with final price and change %.",
        category: "Pre_Market",
        op: Fixed("pre_market_info"),
        params: &[str_with_default(
            "category",
            "NIFTY 50",
            "\"All\" | \"NIFTY 50\" | \"Nifty Bank\" | \"Emerge\" | \"Securities in F&O\"",
        )],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "preopen_futures_data",
        description: "Index or stock futures in the pre-open session with final price and change %.",
        category: "Pre_Market",
        op: Fixed("pre_market_derivatives_info"),
        params: &[str_with_default(
            "category",
            "Index Futures",
            "\"Index Futures\" | \"Stock Futures\"",
        )],
        shape: Shape::Records,
    },
];
