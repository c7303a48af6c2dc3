//! NSE market-data tool catalog + runtime.
//!
//! This crate holds everything below the MCP transport layer:
//! - the declarative tool catalog ([`catalog`]) and its dispatch runtime
//!   ([`source`])
//! - the shared call-spacing gate ([`throttle`]) that keeps the server under
//!   NSE's informal request-rate tolerance
//! - the feed boundary ([`feed`]) and the production NSE client ([`nse`])
//! - result normalization ([`records`])
//!
//! It intentionally contains **no** transport or prompt logic; the server
//! binary wires those on top.

pub mod catalog;
pub mod error;
pub mod feed;
pub mod nse;
pub mod records;
pub mod source;
pub mod throttle;
