//! The declarative tool table.
//!
//! Every NSE data operation the server exposes is one [`ToolSpec`] entry:
//! name, documentation, parameter contract, the feed operation it forwards
//! to, and the result-shaping policy. The runtime in [`crate::source`]
//! compiles this table once at startup — there is no per-tool code.
//!
//! Entries are grouped into modules the way the exchange groups its data
//! products (market status, indices, equities, corporate filings, EOD
//! reports, derivatives, regulatory/misc).

mod corporate;
mod eod;
mod equity;
mod fno;
mod index;
mod market;
mod misc;

use serde_json::Value;

/// How a tool picks the feed operation to invoke.
#[derive(Debug, Clone, Copy)]
pub enum OpBinding {
    /// Always the same operation.
    Fixed(&'static str),
    /// A selector parameter chooses between operations. The selector is
    /// consumed by the choice and not forwarded.
    ByParam {
        param: &'static str,
        /// `(selector value, operation)` pairs; first match wins.
        choices: &'static [(&'static str, &'static str)],
        /// Operation used when no choice matches.
        fallback: &'static str,
    },
}

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Str,
    Bool,
    Int,
    /// Boolean switch that forwards a fixed string when set and nothing
    /// when unset (e.g. `compact` -> `oi_mode="compact"`).
    Flag(&'static str),
}

/// Default applied when the caller omits a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Str(&'static str),
    Bool(bool),
    Int(i64),
}

impl ParamDefault {
    pub(crate) fn to_value(self) -> Value {
        match self {
            ParamDefault::Str(s) => Value::String(s.to_string()),
            ParamDefault::Bool(b) => Value::Bool(b),
            ParamDefault::Int(i) => Value::from(i),
        }
    }
}

/// One tool parameter: surface name, type, requiredness, default, and the
/// name the feed knows it by when that differs.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<ParamDefault>,
    pub rename: Option<&'static str>,
    pub doc: &'static str,
}

/// Label for a symbol-list envelope.
#[derive(Debug, Clone, Copy)]
pub enum EnvelopeLabel {
    Fixed(&'static str),
    /// Uppercased value of a parameter with a fixed prefix
    /// (`"F&O " + mode.to_uppercase()`).
    UppercaseParam {
        param: &'static str,
        prefix: &'static str,
    },
}

/// Result shaping applied after the feed returns.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Tables become ordered row records; other payloads pass through.
    Records,
    /// Identity, for operations that answer with nested mappings (quotes,
    /// chains keyed by expiry/strike, top-N reports).
    Raw,
    /// When `flag` is set, return the symbol list — wrapped in a
    /// `{key, count, symbols}` envelope when one is configured, bare
    /// otherwise. With the flag unset this behaves like `Records`.
    SymbolList {
        flag: &'static str,
        envelope: Option<(&'static str, EnvelopeLabel)>,
    },
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub op: OpBinding,
    pub params: &'static [ParamSpec],
    pub shape: Shape,
}

/// Every tool in the catalog, in registration order.
pub fn specs() -> impl Iterator<Item = &'static ToolSpec> {
    market::TOOLS
        .iter()
        .chain(index::TOOLS)
        .chain(equity::TOOLS)
        .chain(corporate::TOOLS)
        .chain(eod::TOOLS)
        .chain(fno::TOOLS)
        .chain(misc::TOOLS)
}

// Entry shorthands. The table below would triple in size without them.

pub(crate) const fn req_str(name: &'static str, doc: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Str,
        required: true,
        default: None,
        rename: None,
        doc,
    }
}

pub(crate) const fn opt_str(name: &'static str, doc: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Str,
        required: false,
        default: None,
        rename: None,
        doc,
    }
}

pub(crate) const fn str_with_default(
    name: &'static str,
    default: &'static str,
    doc: &'static str,
) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Str,
        required: false,
        default: Some(ParamDefault::Str(default)),
        rename: None,
        doc,
    }
}

pub(crate) const fn opt_bool(name: &'static str, doc: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Bool,
        required: false,
        default: Some(ParamDefault::Bool(false)),
        rename: None,
        doc,
    }
}

pub(crate) const fn opt_int(name: &'static str, doc: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Int,
        required: false,
        default: None,
        rename: None,
        doc,
    }
}

pub(crate) const fn renamed(mut spec: ParamSpec, feed_name: &'static str) -> ParamSpec {
    spec.rename = Some(feed_name);
    spec
}

/// `DD-MM-YYYY` trade date; omitted means the most recent trading date.
pub(crate) const fn trade_date() -> ParamSpec {
    opt_str(
        "date",
        "Trade date, DD-MM-YYYY; omitted means the most recent trading date",
    )
}

/// `DD-MM-YY` trade date used by a subset of the EOD archive reports.
pub(crate) const fn trade_date_short() -> ParamSpec {
    opt_str(
        "date",
        "Trade date, DD-MM-YY (2-digit year); omitted means the most recent trading date",
    )
}

pub(crate) const fn period() -> ParamSpec {
    opt_str(
        "period",
        "Shortcut period: \"1D\",\"1W\",\"1M\",\"3M\",\"6M\",\"1Y\",\"2Y\",\"5Y\",\"10Y\",\"YTD\",\"MAX\"",
    )
}

pub(crate) const fn from_date() -> ParamSpec {
    opt_str("from_date", "Start date, DD-MM-YYYY")
}

pub(crate) const fn to_date() -> ParamSpec {
    opt_str("to_date", "End date, DD-MM-YYYY")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tool_names_are_unique() {
        let mut seen = HashSet::new();
        for spec in specs() {
            assert!(seen.insert(spec.name), "duplicate tool name {}", spec.name);
        }
        assert!(seen.len() > 100, "catalog unexpectedly small: {}", seen.len());
    }

    #[test]
    fn selector_and_flag_params_exist() {
        for spec in specs() {
            if let OpBinding::ByParam { param, .. } = spec.op {
                assert!(
                    spec.params.iter().any(|p| p.name == param),
                    "{}: selector '{param}' is not a declared parameter",
                    spec.name
                );
            }
            if let Shape::SymbolList { flag, envelope } = spec.shape {
                assert!(
                    spec.params.iter().any(|p| p.name == flag),
                    "{}: list flag '{flag}' is not a declared parameter",
                    spec.name
                );
                if let Some((_, EnvelopeLabel::UppercaseParam { param, .. })) = envelope {
                    assert!(
                        spec.params.iter().any(|p| p.name == param),
                        "{}: envelope label param '{param}' is not declared",
                        spec.name
                    );
                }
            }
        }
    }

    #[test]
    fn every_tool_is_documented_and_categorized() {
        for spec in specs() {
            assert!(!spec.description.is_empty(), "{} has no description", spec.name);
            assert!(!spec.category.is_empty(), "{} has no category", spec.name);
            for p in spec.params {
                assert!(!p.doc.is_empty(), "{}.{} has no doc", spec.name, p.name);
            }
        }
    }
}
