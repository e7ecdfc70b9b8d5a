//! # Test Battery
//!
//! The fixed list of notification payloads sent to the server, each paired
//! with whether the server is expected to accept it.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// JSON object body of a notification request.
///
/// Keys keep the order they were added in, both on the wire and in the
/// transcript. A `None` value is encoded as `null`; a key that was never
/// added is absent from the object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fields: Vec<(String, Option<String>)>,
}

impl Payload {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a string field. Re-adding an existing key replaces its value in place.
    pub fn field(self, key: &str, value: &str) -> Self {
        self.with(key, Some(value.to_string()))
    }

    fn with(mut self, key: &str, value: Option<String>) -> Self {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value,
            None => self.fields.push((key.to_string(), value)),
        }
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
impl Payload {
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One (payload, expected outcome) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: &'static str,
    pub payload: Payload,
    pub expected_success: bool,
}

impl TestCase {
    fn accepted(name: &'static str, payload: Payload) -> Self {
        Self {
            name,
            payload,
            expected_success: true,
        }
    }

    fn rejected(name: &'static str, payload: Payload) -> Self {
        Self {
            name,
            payload,
            expected_success: false,
        }
    }
}

/// The six cases run against the server, in transcript order.
pub fn battery() -> Vec<TestCase> {
    vec![
        TestCase::accepted(
            "Valid notification with all fields",
            Payload::new()
                .field("title", "Python Test")
                .field("body", "This is a test notification from Python")
                .field("subtitle", "Test Subtitle"),
        ),
        TestCase::accepted(
            "Valid notification without subtitle",
            Payload::new()
                .field("title", "Python Test 2")
                .field("body", "This notification has no subtitle"),
        ),
        TestCase::rejected(
            "Invalid - empty title",
            Payload::new()
                .field("title", "")
                .field("body", "This should fail"),
        ),
        TestCase::rejected(
            "Invalid - missing body",
            Payload::new().field("title", "Only Title"),
        ),
        TestCase::rejected(
            "Invalid - empty body",
            Payload::new().field("title", "Test Title").field("body", ""),
        ),
        TestCase::accepted(
            "Valid with extra fields",
            Payload::new()
                .field("title", "Test with extras")
                .field("body", "This has extra fields")
                .field("subtitle", "Subtitle")
                .field("extra_field", "This will be ignored"),
        ),
    ]
}
