use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::spaced_formatter::to_spaced_vec;

/// This struct represents a structured payload exchanged between agents.
///
/// A message is an ordered mapping of string keys to JSON values. Fields keep the order in which they were inserted,
/// which is also the order they are written in when the message is packed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Map<String, Value>);

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// This method constructs a message from already decoded fields.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// This method returns the value of the `type` field, if it is a string.
    pub fn message_type(&self) -> Option<&str> {
        self.get_str("type")
    }

    /// This method returns the value of the `id` field, if it is a string.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// This method returns the body of the message, i.e. the value stored under the `message` key.
    pub fn body(&self) -> Option<&Value> {
        self.0.get("message")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// This method returns a copy of the object stored under `key` as a message.
    ///
    /// # Returns
    ///
    /// * `Some(Message)` - if the field exists and holds an object,
    /// * `None` - otherwise.
    pub fn nested(&self, key: &str) -> Option<Message> {
        match self.0.get(key) {
            Some(Value::Object(fields)) => Some(Message(fields.clone())),
            _ => None,
        }
    }

    /// This method inserts a field, returning the previous value if the key was already present.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// This method renders the message as JSON text.
    ///
    /// The output uses `", "` and `": "` as separators, e.g. `{"type": "ping"}`.
    pub fn as_json(&self) -> Result<String, anyhow::Error> {
        Ok(String::from_utf8(to_spaced_vec(self)?)?)
    }
}

impl From<Map<String, Value>> for Message {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Message> for Value {
    fn from(message: Message) -> Self {
        Value::Object(message.0)
    }
}

impl TryFrom<Value> for Message {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(anyhow::anyhow!(
                "Expected a JSON object, found {}",
                other
            )),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Message {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_json() {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}
