// Loose destructuring of nsqlookupd response envelopes
//
// Bodies look like `{"status_code":200,"status_txt":"OK","data":{...}}`, but
// the shape of `data` depends on the endpoint. Absent or empty members map to
// empty values; only unparseable JSON or wrongly typed members are errors.

use serde_json::{Map, Value};

use crate::errors::LookupError;

/// Conversion from a JSON object into a typed record.
///
/// Implementations read each field through [`LooseObject`], which ignores
/// unknown keys and yields zero values for missing ones.
pub trait FromLoose: Sized {
    fn from_loose(object: &LooseObject<'_>) -> Self;
}

/// Read-only view over a JSON object with tolerant key matching.
///
/// `broadcast_address`, `BroadcastAddress` and `broadcastAddress` all name
/// the same field.
pub struct LooseObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> LooseObject<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    fn find(&self, name: &str) -> Option<&'a Value> {
        if let Some(value) = self.map.get(name) {
            return Some(value);
        }
        let wanted = normalize_key(name);
        self.map
            .iter()
            .find(|(key, _)| normalize_key(key) == wanted)
            .map(|(_, value)| value)
    }

    /// String field; scalars are rendered as text, anything else is empty.
    pub fn string(&self, name: &str) -> String {
        match self.find(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Integer field; numeric strings are accepted, anything else is 0.
    pub fn int(&self, name: &str) -> i64 {
        match self.find(name) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn strings(&self, name: &str) -> Vec<String> {
        match self.find(name) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        }
    }

    pub fn bools(&self, name: &str) -> Vec<bool> {
        match self.find(name) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_bool).collect(),
            _ => Vec::new(),
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a body and return its `data` member.
///
/// A missing or null `data` is an empty object.
pub fn parse_data(url: &str, body: &str) -> Result<Map<String, Value>, LookupError> {
    let envelope: Value = serde_json::from_str(body)
        .map_err(|e| LookupError::malformed(url, format!("invalid JSON: {}", e)))?;

    let Value::Object(mut envelope) = envelope else {
        return Err(LookupError::malformed(url, "expected a JSON object"));
    };

    match envelope.remove("data") {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(data)) => Ok(data),
        Some(_) => Err(LookupError::malformed(url, "`data` is not an object")),
    }
}

/// List of names under `key`, in the order received.
pub fn string_list(
    url: &str,
    data: &Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, LookupError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                scalar_text(item).ok_or_else(|| {
                    LookupError::malformed(url, format!("`{}` contains a non-scalar entry", key))
                })
            })
            .collect(),
        Some(_) => Err(LookupError::malformed(url, format!("`{}` is not a list", key))),
    }
}

/// List of records under `key`, each mapped with [`FromLoose`].
pub fn object_list<T: FromLoose>(
    url: &str,
    data: &Map<String, Value>,
    key: &str,
) -> Result<Vec<T>, LookupError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(T::from_loose(&LooseObject::new(map))),
                _ => Err(LookupError::malformed(
                    url,
                    format!("`{}` contains a non-object entry", key),
                )),
            })
            .collect(),
        Some(_) => Err(LookupError::malformed(url, format!("`{}` is not a list", key))),
    }
}
