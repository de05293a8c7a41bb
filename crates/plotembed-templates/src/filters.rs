//! Custom Tera filters available to every embedding template.

use std::collections::HashMap;

use tera::{Filter, Result, Value};

/// Name the JSON filter is registered under.
pub const JSON_FILTER: &str = "json";

/// `{{ value | json }}`: serialize any value to compact JSON text.
///
/// The output is marked safe so autoescaping leaves quotes alone. Callers are
/// responsible for passing data that is embeddable where the template puts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFilter;

impl Filter for JsonFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
        serde_json::to_string(value)
            .map(Value::String)
            .map_err(|e| tera::Error::chain("json filter could not serialize value", e))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Install all custom filters into a Tera instance.
pub(crate) fn register(tera: &mut tera::Tera) {
    tera.register_filter(JSON_FILTER, JsonFilter);
}
