//! Error types for the market-tools runtime.

use thiserror::Error;

/// Main error type for tool dispatch and feed retrieval.
///
/// Feed failures are propagated to the MCP caller unmodified; this layer
/// adds no retry, fallback or translation of its own.
#[derive(Debug, Error)]
pub enum MarketToolsError {
    /// Catalog validation errors (duplicate names, dangling selectors)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The requested tool is not present in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The feed has no binding for the requested operation
    #[error("Unknown feed operation: {0}")]
    UnknownOp(String),

    /// Invalid argument values the runtime cannot forward
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport-level HTTP failure (DNS, TLS, connect, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The exchange answered with a non-success status
    #[error("NSE returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The response body could not be decoded (JSON or CSV)
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type alias for market-tools operations.
pub type Result<T> = std::result::Result<T, MarketToolsError>;

impl From<reqwest::Error> for MarketToolsError {
    fn from(value: reqwest::Error) -> Self {
        // Strip the URL: it may carry query parameters we'd rather not echo
        // into tool results verbatim.
        Self::Transport(value.without_url().to_string())
    }
}
