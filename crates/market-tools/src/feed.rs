//! The boundary between the tool facade and market-data retrieval.
//!
//! Retrieval is modeled behind one narrow capability trait with a single
//! generic "invoke named operation with parameters" method, so the facade
//! and throttle can be exercised with a substitute implementation and no
//! network access.

use crate::error::Result;
use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde_json::Value;

/// A single feed invocation: the upstream operation name plus the
/// parameters forwarded (verbatim, after declarative renames/defaults)
/// from the tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedCall {
    pub op: String,
    pub params: JsonObject,
}

impl FeedCall {
    #[must_use]
    pub fn new(op: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            params: JsonObject::new(),
        }
    }
}

/// A column-ordered tabular payload (the shape of NSE CSV reports and of
/// substitute feeds in tests).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// What a feed operation produced: a table (normalized into row records by
/// the facade) or an already-structured JSON value (returned unchanged).
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Table(Table),
    Value(Value),
}

/// Narrow capability interface over exchange-data retrieval.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Fetch one operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation is unknown to this feed, or if
    /// retrieval/decoding fails. Errors propagate to the tool caller
    /// unmodified.
    async fn fetch(&self, call: FeedCall) -> Result<Payload>;
}
