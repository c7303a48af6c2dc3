//! Futures & Options tools: live chains, activity leaders, EOD reports and
//! contract histories.

use super::EnvelopeLabel::UppercaseParam;
use super::OpBinding::Fixed;
use super::{
    ParamDefault, ParamKind, ParamSpec, Shape, ToolSpec, from_date, opt_bool, opt_int, opt_str,
    period, renamed, req_str, str_with_default, to_date, trade_date,
};

pub(super) static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "list_of_fno_stocks",
        description: "All F&O-eligible stocks or indices.",
        category: "FnO_Reference",
        op: Fixed("nse_eom_fno_full_list"),
        params: &[
            str_with_default("mode", "stocks", "\"stocks\" or \"index\""),
            opt_bool("list_only", "Return only the symbols"),
        ],
        shape: Shape::SymbolList {
            flag: "list_only",
            envelope: Some(("name", UppercaseParam { param: "mode", prefix: "F&O " })),
        },
    },
    ToolSpec {
        name: "fno_live_option_chain",
        description: "Full live option chain with OI, volume, IV, PCR and max pain. Works for stocks (\"RELIANCE\") and indices (\"NIFTY\", \"BANKNIFTY\").",
        category: "FnO_Live",
        op: Fixed("fno_live_option_chain"),
        params: &[
            req_str("symbol", "Underlying, e.g. \"RELIANCE\", \"NIFTY\", \"BANKNIFTY\""),
            renamed(opt_str("expiry", "Optional expiry, DD-MMM-YYYY"), "expiry_date"),
            ParamSpec {
                name: "compact",
                kind: ParamKind::Flag("compact"),
                required: false,
                default: Some(ParamDefault::Bool(false)),
                rename: Some("oi_mode"),
                doc: "Compact OI view",
            },
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "expiry_dates",
        description: "All expiry dates for an underlying, or just the current/weekly/monthly one.",
        category: "FnO_Reference",
        op: Fixed("fno_expiry_dates"),
        params: &[
            str_with_default("symbol", "NIFTY", "Stock or index underlying"),
            opt_str("filter_type", "\"Current\" | \"Next Week\" | \"Month\" | \"All\""),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "most_active_options",
        description: "Most active call/put contracts by volume or value.",
        category: "FnO_Live",
        op: Fixed("fno_live_most_active"),
        params: &[
            str_with_default("contract_type", "Stock", "\"Stock\" or \"Index\""),
            str_with_default("option_type", "Call", "\"Call\" or \"Put\""),
            str_with_default("sort_by", "Volume", "\"Volume\" or \"Value\""),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_futures_data",
        description: "Live futures snapshot for a stock or index.",
        category: "FnO_Live",
        op: Fixed("fno_live_futures_data"),
        params: &[req_str("symbol", "Underlying, e.g. \"RELIANCE\" or \"NIFTY\"")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_top_20_stocks_contracts",
        description: "Live top-20 stock futures or stock options contracts.",
        category: "FnO_Live",
        op: Fixed("fno_live_top_20_derivatives_contracts"),
        params: &[req_str("category", "\"Stock Futures\" or \"Stock Options\"")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_most_active_futures_contracts",
        description: "Most active futures contracts by volume or value.",
        category: "FnO_Live",
        op: Fixed("fno_live_most_active_futures_contracts"),
        params: &[str_with_default("by", "Volume", "\"Volume\" or \"Value\"")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_most_active_contracts_by_oi",
        description: "Most active contracts by open interest.",
        category: "FnO_Live",
        op: Fixed("fno_live_most_active_contracts_by_oi"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_most_active_contracts_by_volume",
        description: "Most active contracts by traded volume.",
        category: "FnO_Live",
        op: Fixed("fno_live_most_active_contracts_by_volume"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_most_active_options_contracts_by_volume",
        description: "Top options contracts by traded volume.",
        category: "FnO_Live",
        op: Fixed("fno_live_most_active_options_contracts_by_volume"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_most_active_underlying",
        description: "Most active underlying stocks and indices in the derivatives segment.",
        category: "FnO_Live",
        op: Fixed("fno_live_most_active_underlying"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_change_in_oi",
        description: "Change in open interest across contracts.",
        category: "FnO_Live",
        op: Fixed("fno_live_change_in_oi"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_oi_vs_price",
        description: "Open interest versus price across contracts: long buildup, short buildup, long unwinding, short covering.",
        category: "FnO_Live",
        op: Fixed("fno_live_oi_vs_price"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_live_active_contracts",
        description: "Active option contracts for an index or stock underlying.",
        category: "FnO_Live",
        op: Fixed("fno_live_active_contracts"),
        params: &[
            str_with_default("symbol", "NIFTY", "Underlying, e.g. \"NIFTY\", \"BANKNIFTY\", \"RELIANCE\""),
            opt_str("expiry_date", "Optional expiry, DD-MM-YYYY"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_bhavcopy",
        description: "Full F&O bhavcopy (futures plus options) for a given date.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_bhav_copy"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_fii_stats",
        description: "FII activity in the F&O segment (index/stock, long/short).",
        category: "FnO_EOD",
        op: Fixed("fno_eod_fii_stats"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_eod_top10_futures",
        description: "Top 10 most active futures contracts by volume and OI.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_top10_fut"),
        params: &[trade_date()],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "fno_eod_top20_options",
        description: "Top 20 most active options contracts.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_top20_opt"),
        params: &[trade_date()],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "fno_ban_list",
        description: "Stocks in the F&O ban period.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_sec_ban"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_mwpl_data",
        description: "Market Wide Position Limits (MWPL) and usage %.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_mwpl"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_combined_oi",
        description: "Combined futures and options open interest.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_combine_oi"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_participant_wise_oi",
        description: "FII, DII, Pro and Client open interest breakdown.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_participant_wise_oi"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_participant_wise_volume",
        description: "FII, DII, Pro and Client trading-volume breakdown in F&O.",
        category: "FnO_EOD",
        op: Fixed("fno_eod_participant_wise_vol"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "futures_price_history",
        description: "Historical futures price, volume and OI.",
        category: "FnO_Historical",
        op: Fixed("future_price_volume_data"),
        params: &[
            req_str("symbol", "Underlying, e.g. \"NIFTY\", \"RELIANCE\""),
            req_str("instrument", "\"Index Futures\" or \"Stock Futures\""),
            opt_str("expiry", "Contract expiry, e.g. \"28-Nov-2025\""),
            period(),
            from_date(),
            to_date(),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "options_price_history",
        description: "Historical options price, volume, OI and IV.",
        category: "FnO_Historical",
        op: Fixed("option_price_volume_data"),
        params: &[
            req_str("symbol", "Underlying, e.g. \"NIFTY\", \"ITC\""),
            req_str("instrument", "\"Index Options\" or \"Stock Options\""),
            opt_str("strike", "Strike price, e.g. \"47000\""),
            opt_str("option_type", "\"CE\" or \"PE\""),
            opt_str("expiry", "Contract expiry, DD-MM-YYYY"),
            period(),
            from_date(),
            to_date(),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_lot_sizes",
        description: "Current F&O lot sizes, all or for one symbol.",
        category: "FnO_Reference",
        op: Fixed("fno_eom_lot_size"),
        params: &[opt_str("symbol", "Optional NSE symbol, e.g. \"TCS\"")],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_business_growth",
        description: "F&O segment turnover growth, daily, monthly or yearly.",
        category: "FnO_Stats",
        op: Fixed("fno_dmy_biz_growth"),
        params: &[
            str_with_default("mode", "monthly", "\"daily\" | \"monthly\" | \"yearly\""),
            opt_str("month", "Month abbreviation, e.g. \"OCT\""),
            opt_int("year", "Calendar year, e.g. 2025"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "fno_settlement_report",
        description: "Monthly settlement statistics (F&O) for given financial years or period.",
        category: "FnO_Stats",
        op: Fixed("fno_monthly_settlement_report"),
        params: &[
            opt_str("period", "\"1Y\", \"3Y\" or omitted for the current financial year"),
            opt_int("from_year", "Start financial year, e.g. 2024"),
            opt_int("to_year", "End financial year, e.g. 2026"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "symbol_full_fno_live_data",
        description: "Complete live F&O chain for one underlying: every futures and options contract with identifiers, last price, volume and OI.",
        category: "Symbol_FnO_Live",
        op: Fixed("symbol_full_fno_live_data"),
        params: &[req_str("symbol", "Underlying, e.g. \"NIFTY\", \"BANKNIFTY\", \"RELIANCE\"")],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "symbol_most_active_contracts_by_oi",
        description: "Top 5 most active CALLS, PUTS or combined CONTRACTS by open interest for one underlying.",
        category: "Symbol_FnO_Live",
        op: Fixed("symbol_most_active_by_oi"),
        params: &[
            req_str("symbol", "Underlying, e.g. \"NIFTY\", \"RELIANCE\""),
            req_str("type_mode", "\"CALLS\" | \"PUTS\" | \"CONTRACTS\""),
        ],
        shape: Shape::Raw,
    },
    ToolSpec {
        name: "price_chart_fno_contracts",
        description: "Intraday price chart (timestamp, price, flag) for one F&O contract by NSE identifier, e.g. \"OPTIDXNIFTY09-12-2025PE25800.00\". Identifiers come from symbol_full_fno_live_data or symbol_most_active_contracts_by_oi.",
        category: "Symbol_FnO_Live",
        op: Fixed("fno_contract_chart_data"),
        params: &[req_str("identifier", "NSE contract identifier")],
        shape: Shape::Raw,
    },
];
