//! Equity end-of-day reports, deal histories and market statistics.

use super::OpBinding::Fixed;
use super::{
    Shape, ToolSpec, from_date, opt_int, opt_str, period, str_with_default, to_date, trade_date,
    trade_date_short,
};

const fn deal_history_params() -> [super::ParamSpec; 4] {
    [
        opt_str("symbol", "Optional NSE symbol"),
        period(),
        from_date(),
        to_date(),
    ]
}

static DEAL_HISTORY_PARAMS: [super::ParamSpec; 4] = deal_history_params();

pub(super) static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "fii_dii_activity",
        description: "Latest FII/DII net buying and selling activity in the cash segment.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_fii_dii_activity"),
        params: &[opt_str(
            "exchange",
            "Omitted: combined NSE+BSE activity. \"Nse\": NSE-only activity",
        )],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "market_eod_activity_report",
        description: "Daily market activity: turnover, advances/declines, top gainers and losers.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_market_activity_report"),
        params: &[trade_date_short()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_eod_bhavcopy_delivery",
        description: "Full NSE equity bhavcopy including delivery percentage and value.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_bhavcopy_with_delivery"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_eod_bhavcopy",
        description: "Standard equity bhavcopy: closing prices, volume and trades.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_equity_bhavcopy"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_52week_high_low_eod",
        description: "Stocks that hit a 52-week high or low on a given date.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_52_week_high_low"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_bulk_deals_eod",
        description: "End-of-day bulk deals across NSE/BSE (client level).",
        category: "Equity_EOD",
        op: Fixed("cm_eod_bulk_deal"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_block_deals_eod",
        description: "End-of-day block deals (large negotiated trades).",
        category: "Equity_EOD",
        op: Fixed("cm_eod_block_deal"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_short_selling",
        description: "Short-selling disclosures for a given date.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_shortselling"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "surveillance_indicator",
        description: "Stocks under ASM/GSM/Z-category surveillance.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_surveillance_indicator"),
        params: &[trade_date_short()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_series_changes",
        description: "Recent trading-series changes (EQ -> BE, BE -> BZ and similar).",
        category: "Equity_EOD",
        op: Fixed("cm_eod_series_change"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_price_band_changes",
        description: "Stocks moved to or from price bands (2%, 5%, 10%, 20%) on a given date.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_eq_band_changes"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_price_bands",
        description: "Applicable price bands for all stocks on a given date.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_eq_price_band"),
        params: &[trade_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_price_band_history",
        description: "Historical price-band changes for one stock or all stocks.",
        category: "Equity_Historical",
        op: Fixed("cm_hist_eq_price_band"),
        params: &DEAL_HISTORY_PARAMS,
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_pe_ratio",
        description: "PE, PB and dividend yield for all listed companies.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_pe_ratio"),
        params: &[trade_date_short()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "market_cap",
        description: "Market capitalization and total shares issued for all companies.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_mcap"),
        params: &[trade_date_short()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_name_changes",
        description: "Recent corporate name changes.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_eq_name_change"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_symbol_changes",
        description: "Recent trading-symbol changes.",
        category: "Equity_EOD",
        op: Fixed("cm_eod_eq_symbol_change"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_bulk_deals_history",
        description: "Bulk-deal history by symbol, period or date range.",
        category: "Equity_Historical",
        op: Fixed("cm_hist_bulk_deals"),
        params: &DEAL_HISTORY_PARAMS,
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_block_deals_history",
        description: "Block-deal history by symbol, period or date range.",
        category: "Equity_Historical",
        op: Fixed("cm_hist_block_deals"),
        params: &DEAL_HISTORY_PARAMS,
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_short_selling_history",
        description: "Historical short-selling disclosures.",
        category: "Equity_Historical",
        op: Fixed("cm_hist_short_selling"),
        params: &DEAL_HISTORY_PARAMS,
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_market_business_growth",
        description: "NSE cash-segment business growth, daily, monthly or yearly.",
        category: "Market_Stats",
        op: Fixed("cm_dmy_biz_growth"),
        params: &[
            str_with_default("mode", "daily", "\"daily\" | \"monthly\" | \"yearly\""),
            opt_str("month", "Month abbreviation for daily mode, e.g. \"OCT\""),
            opt_int("year", "Financial year, e.g. 2025"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_market_monthly_settlement",
        description: "Monthly settlement statistics (cash market) across financial years, including the current FY up to the latest available month.",
        category: "Market_Stats",
        op: Fixed("cm_monthly_settlement_report"),
        params: &[
            opt_str("period", "\"1Y\", \"3Y\" or omitted for the current financial year"),
            opt_int("from_year", "Start financial year, e.g. 2024"),
            opt_int("to_year", "End financial year, e.g. 2026"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "monthly_most_active_equity",
        description: "Most active stocks by volume and value in the latest month.",
        category: "Market_Stats",
        op: Fixed("cm_monthly_most_active_equity"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "market_advances_declines",
        description: "Historical advances versus declines, day-wise or month-wise.",
        category: "Market_Stats",
        op: Fixed("historical_advances_decline"),
        params: &[
            str_with_default("mode", "Month_wise", "\"Day_wise\" or \"Month_wise\""),
            opt_str("month", "Month abbreviation, e.g. \"SEP\""),
            opt_int("year", "Calendar year, e.g. 2025"),
        ],
        shape: Shape::Records,
    },
];
