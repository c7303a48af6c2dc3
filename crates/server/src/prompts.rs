//! Static analysis prompt templates.
//!
//! These are canned, parameterless workflows for a downstream model to
//! execute with the tool surface; they carry no logic and are returned
//! verbatim.

pub struct PromptDef {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

pub fn all() -> &'static [PromptDef] {
    PROMPTS
}

pub fn find(name: &str) -> Option<&'static PromptDef> {
    PROMPTS.iter().find(|p| p.name == name)
}

static PROMPTS: &[PromptDef] = &[
    PromptDef {
        name: "pre_market_analysis",
        description: "Generate NSE pre-market analysis",
        text: "Generate an NSE PRE-MARKET ANALYSIS.\n\n\
               Steps:\n\
               1. Check whether today is a trading holiday.\n\
               2. Analyze Gift Nifty trend and global cues.\n\
               3. Review pre-open advance and decline data.\n\
               4. Identify major gap-up and gap-down stocks.\n\
               5. Summarize NIFTY 50 and BANKNIFTY directional bias.\n\n\
               Output Format:\n\
               - Market Status\n\
               - Gift Nifty / Global Cues\n\
               - Market Breadth\n\
               - Key Movers\n\
               - Intraday Bias\n\
               - Risk Notes\n\n\
               Rules:\n\
               - Use only NseKit-MCP tools\n\
               - Do not assume prices or direction\n",
    },
    PromptDef {
        name: "market_overview",
        description: "Get comprehensive market overview",
        text: "Provide a comprehensive NSE market overview:\n\n\
               1. Current market status and time\n\
               2. Nifty 50 and Bank Nifty levels\n\
               3. Market statistics (advances, declines, 52W highs/lows)\n\
               4. Top gainers and losers\n\
               5. Most active stocks by value\n\
               6. FII/DII activity\n\
               7. India VIX level\n\n\
               Present in a clean, organized format.",
    },
    PromptDef {
        name: "analyze_option_chain",
        description: "Analyze option chain for given symbol",
        text: "Analyze the option chain for a given stock/index:\n\n\
               Steps:\n\
               1. Get the current expiry dates\n\
               2. Fetch the option chain for current expiry\n\
               3. Calculate Put-Call Ratio (PCR)\n\
               4. Identify max pain level\n\
               5. Find highest OI strikes for calls and puts\n\
               6. Analyze OI changes\n\
               7. Provide directional bias\n\n\
               Symbol will be provided by user (e.g., NIFTY, RELIANCE).\n\
               Present in a clean, organized format.",
    },
    PromptDef {
        name: "stock_deep_dive",
        description: "Perform deep analysis of a stock",
        text: "Perform comprehensive stock analysis:\n\n\
               1. Live Quote (price, volume, circuit limits)\n\
               2. Historical performance (1W, 1M, 3M, 1Y)\n\
               3. Delivery percentage analysis\n\
               4. Bulk/Block deals (if any)\n\
               5. F&O data (if applicable)\n\
               6. Corporate actions/announcements\n\
               7. Insider trading activity\n\
               8. Valuation metrics (PE, PB, Div Yield)\n\n\
               Stock symbol will be provided by user.\n\
               Present in a clean, organized format.",
    },
    PromptDef {
        name: "fno_expiry_analysis",
        description: "Analyze F&O positions before expiry",
        text: "Generate F&O EXPIRY DAY analysis:\n\n\
               1. Check if today is an expiry day\n\
               2. Get most active options by OI and volume\n\
               3. Analyze max pain levels for Nifty and BankNifty\n\
               4. Review F&O ban stocks\n\
               5. Check participant-wise OI (FII/DII positioning)\n\
               6. Identify key support and resistance from OI\n\
               7. Provide expiry day strategy notes\n\n\
               Focus on: NIFTY, BANKNIFTY, and top F&O stocks.\n\
               Present in a clean, organized format.",
    },
    PromptDef {
        name: "market_sentiment",
        description: "Gauge overall market sentiment",
        text: "Analyze current market sentiment:\n\n\
               Data to collect:\n\
               1. Advance/Decline ratio\n\
               2. India VIX trend\n\
               3. FII/DII net positions\n\
               4. Put-Call Ratio for indices\n\
               5. Stocks hitting circuits\n\
               6. Volume analysis\n\
               7. Sector performance\n\n\
               Provide sentiment as: Bullish/Bearish/Neutral\n\
               Include confidence level and key factors.\n\
               Present in a clean, organized format.",
    },
    PromptDef {
        name: "daily_market_wrap",
        description: "Generate end-of-day market summary",
        text: "Generate DAILY MARKET WRAP for NSE:\n\n\
               1. Closing levels of major indices\n\
               2. Day's high/low ranges\n\
               3. Top performers and losers\n\
               4. Sectoral performance\n\
               5. Bulk and block deals\n\
               6. FII/DII net trading\n\
               7. Notable corporate actions\n\
               8. F&O highlights (OI changes, rollovers)\n\n\
               Use today's date for EOD data.\n\
               Format as a professional market report.",
    },
    PromptDef {
        name: "intraday_scanner_fno_only",
        description: "Identify high-probability NSE intraday trade setups strictly within F&O stocks",
        text: "You are a professional Indian stock market analyst running an intraday trading desk. \
               Your task is to identify high-probability intraday trade setups using ONLY F&O stocks \
               and ONLY NseKit-MCP tools, without assumptions or discretionary bias.\n\n\
               =============================\n\
               UNIVERSE DEFINITION (MANDATORY)\n\
               =============================\n\
               Use:\n\
               - index_live_constituents(\"SECURITIES IN F&O\")\n\n\
               Rule:\n\
               - From start to end, ALL analysis must be restricted to F&O stocks only.\n\
               - Non-F&O stocks must be ignored completely.\n\n\
               =============================\n\
               PROMPT 1: MARKET REGIME & RISK FILTER\n\
               =============================\n\
               Use:\n\
               - market_live_status\n\
               - india_vix\n\
               - gift_nifty_live\n\
               - market_advances_declines\n\n\
               Objective:\n\
               Determine the intraday market regime:\n\
               1) Trending\n\
               2) Range-bound\n\
               3) High-volatility risk-off\n\n\
               Output:\n\
               - Market Bias (Bullish / Bearish / Neutral)\n\
               - Volatility Condition (Low / Normal / High)\n\
               - Allowed Trading Style (Scalp / Momentum / Avoid)\n\n\
               Risk Rules:\n\
               - Rising VIX with skewed advances/declines -> reduce position size\n\
               - Flat GIFT NIFTY with low VIX -> prefer range-bound strategies\n\n\
               =============================\n\
               PROMPT 2: F&O LIQUIDITY & VOLUME FILTER (PRIMARY)\n\
               =============================\n\
               Use:\n\
               - most_active_equities\n\
               - equity_volume_surge\n\
               - market_live_turnover\n\n\
               Objective:\n\
               From the F&O universe, identify intraday candidates where:\n\
               - Stocks appear in most active equities\n\
               - Volume surge is significantly higher than recent averages\n\
               - Turnover concentration supports intraday execution\n\n\
               Output:\n\
               - Ranked list of F&O stocks based on:\n\
                 1) Volume Surge\n\
                 2) Turnover\n\
                 3) Liquidity Quality\n\n\
               Fallback Rule:\n\
               - If no suitable F&O stocks are found using volume and activity filters:\n\
                 -> Select best candidates directly from index_live_constituents(\"SECURITIES IN F&O\")\n\
                 -> Prioritize index heavyweights and consistently liquid names\n\n\
               =============================\n\
               PROMPT 3: INSTITUTIONAL FOOTPRINT (CASH MARKET)\n\
               =============================\n\
               Use:\n\
               - equity_block_deals_live\n\
               - equity_bulk_deals_eod\n\
               - fii_dii_activity\n\n\
               Objective:\n\
               Detect institutional participation in selected F&O stocks:\n\
               - Same-day block or bulk deals\n\
               - Alignment with overall FII directional activity\n\n\
               Output:\n\
               - Institutional Tag: Accumulation / Distribution / Noise\n\n\
               Rule:\n\
               - Avoid retail-only volume spikes without institutional confirmation\n\n\
               =============================\n\
               PROMPT 4: PRICE STRUCTURE & INTRADAY LEVELS\n\
               =============================\n\
               Use:\n\
               - equity_live_stock_quote\n\
               - price_chart_stock\n\
               - equity_52week_high_live\n\
               - equity_52week_low_live\n\n\
               Objective:\n\
               Evaluate intraday price structure for F&O stocks:\n\
               - Opening range breakout or breakdown\n\
               - VWAP hold or rejection\n\
               - Strength or weakness near day high / day low\n\n\
               Output:\n\
               - Trend Bias (Up / Down / Range)\n\
               - Key Levels (VWAP, Day High, Day Low)\n\n\
               =============================\n\
               PROMPT 5: FUTURES STRENGTH CONFIRMATION\n\
               =============================\n\
               Use:\n\
               - fno_live_futures_data\n\
               - fno_live_change_in_oi\n\
               - fno_participant_wise_oi\n\n\
               Objective:\n\
               Confirm futures market participation:\n\
               - Price up + OI up -> Long buildup\n\
               - Price down + OI up -> Short buildup\n\n\
               Output:\n\
               - Directional Conviction Score (0-10)\n\n\
               =============================\n\
               PROMPT 6: OPTION CHAIN BIAS (ATM FOCUS)\n\
               =============================\n\
               Use:\n\
               - fno_live_option_chain\n\
               - fno_live_most_active_contracts_by_oi\n\
               - symbol_most_active_contracts_by_oi\n\n\
               Objective:\n\
               Assess options market behavior:\n\
               - ATM Put writing -> Bullish bias\n\
               - ATM Call writing -> Bearish bias\n\
               - Detect long gamma traps via price-OI divergence\n\n\
               Output:\n\
               - Option Bias (Bullish / Bearish / Neutral)\n\
               - Trap Warning (if applicable)\n\n\
               =============================\n\
               PROMPT 7: HIGH PROBABILITY TRADE QUALIFIER\n\
               =============================\n\
               Input:\n\
               - Consolidated outputs from Prompts 1-6\n\n\
               Qualification Conditions:\n\
               - F&O stock only\n\
               - Volume expansion confirmed\n\
               - Institutional alignment present\n\
               - Price holding above/below VWAP\n\
               - Futures / options confirmation\n\
               - Market regime alignment\n\n\
               Output:\n\
               - Trade Decision (TRADE / NO TRADE)\n\
               - Direction (Long / Short)\n\
               - Confidence Score (%)\n\n\
               =============================\n\
               PROMPT 8: EXECUTION & RISK MANAGEMENT\n\
               =============================\n\
               Use:\n\
               - equity_live_stock_quote\n\n\
               Objective:\n\
               Create a disciplined intraday execution plan:\n\
               - Entry trigger based on confirmation\n\
               - Technical stop-loss\n\
               - Target with minimum Risk:Reward >= 1:1.5\n\n\
               Output:\n\
               - Entry Price\n\
               - Stop-Loss\n\
               - Target\n\
               - Position Size Suggestion\n\
               - Maximum Loss Per Trade\n\n\
               Strict Rules:\n\
               - Use ONLY NseKit-MCP tools\n\
               - Use ONLY F&O stocks throughout\n\
               - Do NOT assume direction or price\n\
               - Risk management is mandatory\n\
               - Capital preservation is priority\n",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prompt_names_are_unique_and_findable() {
        let mut seen = HashSet::new();
        for prompt in all() {
            assert!(seen.insert(prompt.name), "duplicate prompt {}", prompt.name);
            assert!(find(prompt.name).is_some());
            assert!(!prompt.text.is_empty());
        }
        assert!(find("no_such_prompt").is_none());
    }

    #[test]
    fn prompts_reference_only_cataloged_tools() {
        // The scanner prompt names tools explicitly; keep it in sync with
        // the catalog.
        let names: HashSet<&str> = nsekit_market_tools::catalog::specs()
            .map(|s| s.name)
            .collect();
        let scanner = find("intraday_scanner_fno_only").expect("scanner prompt");
        for tool in [
            "market_live_status",
            "india_vix",
            "gift_nifty_live",
            "market_advances_declines",
            "most_active_equities",
            "equity_volume_surge",
            "market_live_turnover",
            "equity_block_deals_live",
            "equity_bulk_deals_eod",
            "fii_dii_activity",
            "equity_live_stock_quote",
            "price_chart_stock",
            "fno_live_option_chain",
            "symbol_most_active_contracts_by_oi",
        ] {
            assert!(names.contains(tool), "catalog is missing {tool}");
            assert!(scanner.text.contains(tool), "scanner does not mention {tool}");
        }
    }
}
