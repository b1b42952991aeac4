use near_sdk::env;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, Map, Value};

pub(crate) const PREFIX: &str = "EVENT_JSON:";

const NEP171: &str = "nep171";
const NEP171_VERSION: &str = "1.2.0";

const ERC4907: &str = "erc4907";
const ERC4907_VERSION: &str = "1.0.0";

/// NEP-297 envelope carrying a single data object.
pub(crate) struct Nep297Event {
    standard: &'static str,
    version: &'static str,
    event: &'static str,
    data: Map<String, Value>,
}

impl Nep297Event {
    pub(crate) fn new(standard: &'static str, version: &'static str, event: &'static str) -> Self {
        Self {
            standard,
            version,
            event,
            data: Map::new(),
        }
    }

    pub(crate) fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        // Serializing plain ids and strings cannot fail.
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.data.insert(key.to_string(), value);
        self
    }

    pub(crate) fn emit(self) {
        let mut evt = Map::new();
        evt.insert("standard".into(), Value::String(self.standard.into()));
        evt.insert("version".into(), Value::String(self.version.into()));
        evt.insert("event".into(), Value::String(self.event.into()));
        evt.insert("data".into(), Value::Array(vec![Value::Object(self.data)]));
        env::log_str(&format!("{PREFIX}{}", Value::Object(evt)));
    }
}

pub(crate) fn emit_mint(owner_id: &str, token_ids: &[String]) {
    Nep297Event::new(NEP171, NEP171_VERSION, "nft_mint")
        .field("owner_id", owner_id)
        .field("token_ids", token_ids)
        .emit();
}

pub(crate) fn emit_update_user(token_id: &str, user: &str, expires: u64) {
    Nep297Event::new(ERC4907, ERC4907_VERSION, "update_user")
        .field("token_id", token_id)
        .field("user", user)
        .field("expires", expires.to_string())
        .emit();
}
