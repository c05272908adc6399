use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, json, Map, Value};
use near_sdk::{env, AccountId};

/// NEP-297 event emitter. The category becomes the `event` field and the
/// operation plus typed fields form the single `data` object.
pub(crate) struct EventBuilder {
    category: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub fn new(category: &'static str, operation: &'static str, actor_id: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("op".into(), Value::String(operation.to_string()));
        data.insert("actor_id".into(), Value::String(actor_id.to_string()));
        Self { category, data }
    }

    pub fn field<T: Serialize>(mut self, name: &str, value: T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.data.insert(name.to_string(), value);
        }
        self
    }

    pub fn field_opt<T: Serialize>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn emit(self) {
        let payload = json!({
            "standard": super::STANDARD,
            "version": super::VERSION,
            "event": self.category,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", super::PREFIX, payload));
    }
}
