//! Corporate filings, event calendars and IPO tools.

use super::OpBinding::Fixed;
use super::{Shape, ToolSpec, from_date, opt_str, period, str_with_default, to_date};

const fn issue_params() -> [super::ParamSpec; 4] {
    [
        opt_str("stage", "\"In-Principle\" or \"Listing Stage\""),
        opt_str("period_or_symbol", "Shortcut period (\"1Y\") or a symbol (\"RELIANCE\")"),
        from_date(),
        to_date(),
    ]
}

static ISSUE_PARAMS: [super::ParamSpec; 4] = issue_params();

pub(super) static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "corporate_insider_trading",
        description: "Latest insider buying/selling disclosures (SAST/PIT).",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_insider_trading"),
        params: &[
            opt_str("symbol", "Optional NSE symbol"),
            period(),
            opt_str("start_date", "Start date, DD-MM-YYYY"),
            opt_str("end_date", "End date, DD-MM-YYYY"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_actions",
        description: "Dividends, bonuses, splits, rights and buybacks.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_corporate_action"),
        params: &[
            opt_str("symbol", "Optional NSE symbol"),
            period(),
            opt_str("start_date", "Start date, DD-MM-YYYY"),
            opt_str("end_date", "End date, DD-MM-YYYY"),
            opt_str("purpose", "Optional purpose filter, e.g. \"Dividend\""),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_board_meetings",
        description: "Upcoming and past board meetings.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_board_meetings"),
        params: &[
            opt_str("symbol", "Optional NSE symbol"),
            opt_str("start_date", "Start date, DD-MM-YYYY"),
            opt_str("end_date", "End date, DD-MM-YYYY"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_announcement",
        description: "Corporate announcements, all or symbol-specific.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_corporate_announcement"),
        params: &[opt_str("symbol", "Optional NSE symbol"), from_date(), to_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_today_event_calendar",
        description: "Today's (or a date range's) corporate events: AGMs, results and more.",
        category: "Corporate_Events",
        op: Fixed("cm_live_today_event_calendar"),
        params: &[
            opt_str("date_from", "Start date, DD-MM-YYYY"),
            opt_str("date_to", "End date, DD-MM-YYYY"),
        ],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_upcoming_event_calendar",
        description: "Upcoming corporate events.",
        category: "Corporate_Events",
        op: Fixed("cm_live_upcoming_event_calendar"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_shareholder_meetings",
        description: "Shareholder meeting (AGM/EGM) history.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_shareholder_meetings"),
        params: &[opt_str("symbol", "Optional NSE symbol"), from_date(), to_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_qip_history",
        description: "Qualified Institutional Placement (QIP) issues by stage, period or symbol.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_qualified_institutional_placement"),
        params: &ISSUE_PARAMS,
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_preferential_issues",
        description: "Preferential issues by stage, period or symbol.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_preferential_issue"),
        params: &ISSUE_PARAMS,
        shape: Shape::Records,
    },
    ToolSpec {
        name: "equity_rights_issues",
        description: "Rights issues by stage, period or symbol.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_right_issue"),
        params: &ISSUE_PARAMS,
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_voting_results",
        description: "Latest shareholder voting results.",
        category: "Corporate_Events",
        op: Fixed("cm_live_voting_results"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_qtly_shareholding_patterns",
        description: "Latest quarterly shareholding patterns.",
        category: "Corporate_Events",
        op: Fixed("cm_live_qtly_shareholding_patterns"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "corporate_annual_reports",
        description: "Annual report filings, all or symbol-specific.",
        category: "Corporate_Events",
        op: Fixed("cm_live_hist_annual_reports"),
        params: &[opt_str("symbol", "Optional NSE symbol"), from_date(), to_date()],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "ipo_current_list",
        description: "All open Mainboard and SME IPOs with subscription status.",
        category: "IPO",
        op: Fixed("ipo_current"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "ipo_preopen_today",
        description: "Newly listed IPOs in the special pre-open session.",
        category: "IPO",
        op: Fixed("ipo_preopen"),
        params: &[],
        shape: Shape::Records,
    },
    ToolSpec {
        name: "ipo_performance_tracker",
        description: "Year-to-date IPO listing performance and gains.",
        category: "IPO",
        op: Fixed("ipo_tracker_summary"),
        params: &[str_with_default("board", "Mainboard", "\"Mainboard\" | \"SME\"")],
        shape: Shape::Records,
    },
];
