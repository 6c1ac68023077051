use super::value::{ParamValue, Payload};

/// Fluent payload accumulator.
///
/// Every `put*` takes an optional value and does nothing when it is `None`.
/// Later puts for a key overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    payload: Payload,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing payload.
    pub fn from_payload(payload: Payload) -> Self {
        Self { payload }
    }

    pub fn put_if_present<V: Into<ParamValue>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.payload.insert(key, value);
        }
        self
    }

    pub fn put_string(self, key: &str, value: Option<&str>) -> Self {
        self.put_if_present(key, value)
    }

    pub fn put_float(self, key: &str, value: Option<f64>) -> Self {
        self.put_if_present(key, value)
    }

    pub fn put_int(self, key: &str, value: Option<i64>) -> Self {
        self.put_if_present(key, value)
    }

    pub fn put_items(self, key: &str, items: Option<Vec<Payload>>) -> Self {
        self.put_if_present(key, items)
    }

    pub fn build(self) -> Payload {
        self.payload
    }
}
