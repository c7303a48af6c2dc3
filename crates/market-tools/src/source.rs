//! Runtime for the declarative tool catalog.
//!
//! [`NseToolSource`] compiles the catalog once at construction (name
//! validation + input-schema generation) and then dispatches every tool
//! call through the same pipeline: build the feed call from the declared
//! parameter specs, pass the shared [`CallGate`], invoke the feed, shape
//! the result.

use crate::catalog::{
    self, EnvelopeLabel, OpBinding, ParamKind, ParamSpec, Shape, ToolSpec,
};
use crate::error::{MarketToolsError, Result};
use crate::feed::{FeedCall, MarketFeed, Payload};
use crate::records;
use crate::throttle::CallGate;
use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;

struct CompiledTool {
    spec: &'static ToolSpec,
    input_schema: Arc<JsonObject>,
}

#[derive(Clone)]
pub struct NseToolSource {
    inner: Arc<Inner>,
}

struct Inner {
    tools: Vec<CompiledTool>,
    gate: CallGate,
    feed: Arc<dyn MarketFeed>,
}

impl NseToolSource {
    /// Compile the catalog against a feed implementation.
    ///
    /// The resulting instance is immutable and safe to share across tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is invalid (duplicate tool names).
    /// Selector/flag consistency is asserted by the catalog's own tests.
    pub fn new(feed: Arc<dyn MarketFeed>, gate: CallGate) -> Result<Self> {
        let mut names: HashSet<&'static str> = HashSet::new();
        let mut tools = Vec::new();

        for spec in catalog::specs() {
            if !names.insert(spec.name) {
                return Err(MarketToolsError::Catalog(format!(
                    "duplicate tool name '{}'",
                    spec.name
                )));
            }
            tools.push(CompiledTool {
                spec,
                input_schema: Arc::new(build_input_schema(spec.params)),
            });
        }

        Ok(Self {
            inner: Arc::new(Inner { tools, gate, feed }),
        })
    }

    /// List the MCP `Tool`s exposed by the catalog.
    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        self.inner
            .tools
            .iter()
            .map(|t| {
                let mut tool = Tool::new(
                    t.spec.name,
                    t.spec.description,
                    Arc::clone(&t.input_schema),
                );
                tool.annotations = Some(fetch_annotations());
                tool
            })
            .collect()
    }

    /// Execute a tool call: throttle, forward to the feed, shape the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool name is unknown or the feed fails;
    /// feed errors are propagated unmodified.
    pub async fn call_tool(&self, tool_name: &str, arguments: JsonObject) -> Result<Value> {
        let tool = self
            .inner
            .tools
            .iter()
            .find(|t| t.spec.name == tool_name)
            .ok_or_else(|| MarketToolsError::UnknownTool(tool_name.to_string()))?;

        let call = build_call(tool.spec, &arguments);
        tracing::debug!(tool = %tool_name, op = %call.op, "dispatching feed call");

        self.inner.gate.acquire().await;
        let payload = self.inner.feed.fetch(call).await?;

        Ok(shape_result(tool.spec, &arguments, payload))
    }
}

/// Every tool is a read-only, idempotent fetch against an external system.
fn fetch_annotations() -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(true),
        destructive_hint: Some(false),
        idempotent_hint: Some(true),
        open_world_hint: Some(true),
    }
}

fn build_input_schema(params: &[ParamSpec]) -> JsonObject {
    let mut properties = JsonObject::new();
    let mut required: Vec<&str> = Vec::new();

    for param in params {
        let type_name = match param.kind {
            ParamKind::Str => "string",
            ParamKind::Bool | ParamKind::Flag(_) => "boolean",
            ParamKind::Int => "integer",
        };
        let mut prop = json!({
            "type": type_name,
            "description": param.doc,
        });
        if let Some(default) = param.default {
            prop["default"] = default.to_value();
        }
        properties.insert(param.name.to_string(), prop);

        if param.required && param.default.is_none() {
            required.push(param.name);
        }
    }

    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    schema
}

fn build_call(spec: &ToolSpec, arguments: &JsonObject) -> FeedCall {
    let mut call = FeedCall::new(select_op(spec, arguments));

    for param in spec.params {
        // A ByParam selector is consumed by the op choice.
        if let OpBinding::ByParam { param: selector, .. } = spec.op
            && param.name == selector
        {
            continue;
        }

        let value = arguments
            .get(param.name)
            .filter(|v| !v.is_null())
            .cloned()
            .or_else(|| param.default.map(|d| d.to_value()));
        let Some(value) = value else { continue };

        let key = param.rename.unwrap_or(param.name);
        match param.kind {
            ParamKind::Flag(fixed) => {
                if value.as_bool().unwrap_or(false) {
                    call.params
                        .insert(key.to_string(), Value::String(fixed.to_string()));
                }
            }
            _ => {
                call.params.insert(key.to_string(), value);
            }
        }
    }

    call
}

fn select_op(spec: &ToolSpec, arguments: &JsonObject) -> &'static str {
    match spec.op {
        OpBinding::Fixed(op) => op,
        OpBinding::ByParam {
            param,
            choices,
            fallback,
        } => {
            let selected = arguments
                .get(param)
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| param_default_str(spec, param));
            choices
                .iter()
                .find(|(value, _)| Some(*value) == selected.as_deref())
                .map_or(fallback, |(_, op)| op)
        }
    }
}

fn param_default_str(spec: &ToolSpec, name: &str) -> Option<String> {
    spec.params
        .iter()
        .find(|p| p.name == name)
        .and_then(|p| p.default)
        .map(|d| d.to_value())
        .and_then(|v| v.as_str().map(str::to_string))
}

fn shape_result(spec: &ToolSpec, arguments: &JsonObject, payload: Payload) -> Value {
    match spec.shape {
        Shape::Records => records::to_json(payload),
        // Raw payloads are already structured; a table here would only come
        // from a substitute feed, normalize it the same way.
        Shape::Raw => records::to_json(payload),
        Shape::SymbolList { flag, envelope } => {
            let flagged = arguments.get(flag).and_then(Value::as_bool).unwrap_or(false);
            if !flagged {
                return records::to_json(payload);
            }
            let symbols = records::symbols_of(payload);
            match envelope {
                None => Value::Array(symbols),
                Some((key, label)) => {
                    records::symbol_envelope(key, resolve_label(spec, label, arguments), symbols)
                }
            }
        }
    }
}

fn resolve_label(spec: &ToolSpec, label: EnvelopeLabel, arguments: &JsonObject) -> String {
    match label {
        EnvelopeLabel::Fixed(s) => s.to_string(),
        EnvelopeLabel::UppercaseParam { param, prefix } => {
            let value = arguments
                .get(param)
                .and_then(Value::as_str)
                .map(str::to_string)
                .or_else(|| param_default_str(spec, param))
                .unwrap_or_default();
            format!("{prefix}{}", value.to_uppercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Table;
    use async_trait::async_trait;
    use std::time::Duration;

    struct StaticFeed(Payload);

    #[async_trait]
    impl MarketFeed for StaticFeed {
        async fn fetch(&self, _call: FeedCall) -> Result<Payload> {
            Ok(self.0.clone())
        }
    }

    fn source_with(payload: Payload) -> NseToolSource {
        NseToolSource::new(
            Arc::new(StaticFeed(payload)),
            CallGate::new(Duration::ZERO),
        )
        .expect("valid catalog")
    }

    #[test]
    fn list_tools_builds_required_and_defaults_in_schema() {
        let source = source_with(Payload::Value(Value::Null));
        let tools = source.list_tools();

        let quote = tools
            .iter()
            .find(|t| t.name == "equity_live_stock_quote")
            .expect("equity_live_stock_quote listed");
        let required = quote
            .input_schema
            .get("required")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        assert!(required.contains(&json!("symbol")));

        let status = tools
            .iter()
            .find(|t| t.name == "market_live_status")
            .expect("market_live_status listed");
        let default_mode = status
            .input_schema
            .get("properties")
            .and_then(|p| p.get("mode"))
            .and_then(|m| m.get("default"))
            .cloned();
        assert_eq!(default_mode, Some(json!("Market Status")));
        assert!(status.input_schema.get("required").is_none());
    }

    #[test]
    fn every_tool_is_annotated_as_a_read_only_fetch() {
        let source = source_with(Payload::Value(Value::Null));
        for tool in source.list_tools() {
            let a = tool.annotations.as_ref().expect("annotations");
            assert_eq!(a.read_only_hint, Some(true));
            assert_eq!(a.destructive_hint, Some(false));
            assert_eq!(a.open_world_hint, Some(true));
        }
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected() {
        let source = source_with(Payload::Value(Value::Null));
        let err = source
            .call_tool("no_such_tool", JsonObject::new())
            .await
            .expect_err("unknown tool");
        assert!(matches!(err, MarketToolsError::UnknownTool(_)));
    }

    #[tokio::test]
    async fn tabular_payloads_become_records() {
        let source = source_with(Payload::Table(Table {
            columns: vec!["symbol".into(), "price".into()],
            rows: vec![vec![json!("TCS"), json!(4100.5)]],
        }));
        let out = source
            .call_tool("indices_live_data", JsonObject::new())
            .await
            .expect("call");
        assert_eq!(out, json!([{ "symbol": "TCS", "price": 4100.5 }]));
    }
}
