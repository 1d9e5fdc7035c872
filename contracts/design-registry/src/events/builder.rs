use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, Map, Value};
use near_sdk::{AccountId, env};

use super::PREFIX;

// --- Value conversion ---

pub(crate) trait IntoEventValue {
    fn into_event_value(self) -> Value;
}

impl IntoEventValue for &str {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for String {
    fn into_event_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoEventValue for &AccountId {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

// u64 as string: keeps indexer-side JSON parsers out of precision trouble.
impl IntoEventValue for u64 {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for Vec<String> {
    fn into_event_value(self) -> Value {
        Value::Array(self.into_iter().map(Value::String).collect())
    }
}

// --- Envelope ---

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct Envelope {
    standard: String,
    version: String,
    event: String,
    data: Vec<Map<String, Value>>,
}

pub(crate) struct EventJson {
    standard: &'static str,
    version: &'static str,
    event: &'static str,
    fields: Map<String, Value>,
}

impl EventJson {
    pub(crate) fn new(standard: &'static str, version: &'static str, event: &'static str) -> Self {
        Self {
            standard,
            version,
            event,
            fields: Map::new(),
        }
    }

    pub(crate) fn field(mut self, key: &str, value: impl IntoEventValue) -> Self {
        self.fields.insert(key.into(), value.into_event_value());
        self
    }

    pub(crate) fn field_opt(mut self, key: &str, value: Option<impl IntoEventValue>) -> Self {
        if let Some(v) = value {
            self.fields.insert(key.into(), v.into_event_value());
        }
        self
    }

    pub(crate) fn emit(self) {
        let envelope = Envelope {
            standard: self.standard.into(),
            version: self.version.into(),
            event: self.event.into(),
            data: vec![self.fields],
        };
        env::log_str(&format!(
            "{PREFIX}{}",
            serde_json::to_string(&envelope).expect("event serialization failed")
        ));
    }
}
