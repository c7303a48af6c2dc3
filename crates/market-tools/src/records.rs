//! Result normalization.
//!
//! Tabular payloads become ordered sequences of row objects (field order =
//! column order, sequence order = row order); scalars, mappings and
//! already-structured sequences pass through unchanged. A couple of
//! list-universe tools additionally wrap their symbol sequence in a small
//! envelope recording the universe name and count.

use crate::feed::{Payload, Table};
use serde_json::{Map, Value};

/// Convert a payload to its JSON tool-result shape.
#[must_use]
pub fn to_json(payload: Payload) -> Value {
    match payload {
        Payload::Table(table) => table_to_records(table),
        Payload::Value(v) => v,
    }
}

fn table_to_records(table: Table) -> Value {
    let Table { columns, rows } = table;
    let records = rows
        .into_iter()
        .map(|row| {
            let mut record = Map::with_capacity(columns.len());
            for (column, cell) in columns.iter().zip(row) {
                record.insert(column.clone(), cell);
            }
            Value::Object(record)
        })
        .collect();
    Value::Array(records)
}

/// Extract the plain symbol sequence from a `list_only` payload.
///
/// Feeds usually answer with a JSON array of symbols; table-shaped answers
/// contribute their first column.
#[must_use]
pub fn symbols_of(payload: Payload) -> Vec<Value> {
    match payload {
        Payload::Value(Value::Array(items)) => items,
        Payload::Value(other) => vec![other],
        Payload::Table(table) => table
            .rows
            .into_iter()
            .filter_map(|mut row| {
                if row.is_empty() {
                    None
                } else {
                    Some(row.remove(0))
                }
            })
            .collect(),
    }
}

/// Wrap a symbol sequence in the `{<key>: <label>, count, symbols}`
/// envelope used by the stock-universe tools.
#[must_use]
pub fn symbol_envelope(key: &str, label: String, symbols: Vec<Value>) -> Value {
    let mut out = Map::new();
    out.insert(key.to_string(), Value::String(label));
    out.insert("count".to_string(), Value::from(symbols.len()));
    out.insert("symbols".to_string(), Value::Array(symbols));
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_row_table() -> Table {
        Table {
            columns: vec!["symbol".to_string(), "price".to_string()],
            rows: vec![
                vec![json!("TCS"), json!(4100.5)],
                vec![json!("INFY"), json!(1500.0)],
            ],
        }
    }

    #[test]
    fn table_becomes_ordered_records() {
        let out = to_json(Payload::Table(two_row_table()));
        assert_eq!(
            out,
            json!([
                { "symbol": "TCS", "price": 4100.5 },
                { "symbol": "INFY", "price": 1500.0 }
            ])
        );

        // Field order must follow column order, not lexical order.
        let first = out[0].as_object().expect("record object");
        let keys: Vec<&String> = first.keys().collect();
        assert_eq!(keys, ["symbol", "price"]);
    }

    #[test]
    fn scalars_and_mappings_pass_through_unchanged() {
        assert_eq!(to_json(Payload::Value(json!(true))), json!(true));
        assert_eq!(
            to_json(Payload::Value(json!({ "status": "open" }))),
            json!({ "status": "open" })
        );
        assert_eq!(
            to_json(Payload::Value(json!(["a", "b"]))),
            json!(["a", "b"])
        );
    }

    #[test]
    fn envelope_records_universe_and_count() {
        let symbols = symbols_of(Payload::Value(json!(["TCS", "INFY", "RELIANCE"])));
        let out = symbol_envelope("index", "NIFTY 50".to_string(), symbols);
        assert_eq!(
            out,
            json!({
                "index": "NIFTY 50",
                "count": 3,
                "symbols": ["TCS", "INFY", "RELIANCE"]
            })
        );
    }

    #[test]
    fn symbols_of_table_takes_the_first_column() {
        let symbols = symbols_of(Payload::Table(two_row_table()));
        assert_eq!(symbols, vec![json!("TCS"), json!("INFY")]);
    }
}
