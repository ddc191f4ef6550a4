use serde::Serialize;
use serde_json::Value;

use super::Message;

/// This enum represents everything that can come out of unpacking a document.
///
/// Only the top-level object, or objects reached through lists alone, become `Message` values. Objects stored
/// inside a message's fields are kept as `Value::Object`; use `Message::nested` to view one of them as a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// The document (or list element) was an object.
    Message(Message),

    /// The document was an array. Object elements are converted into messages as well.
    List(Vec<Payload>),

    /// The document was a string, a number, a boolean or `null`. The value is kept as parsed.
    Scalar(Value),
}

impl Payload {
    pub fn is_message(&self) -> bool {
        matches!(self, Payload::Message(_))
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Payload::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<Message> {
        match self {
            Payload::Message(message) => Some(message),
            _ => None,
        }
    }

    /// This method returns a short name of the payload kind, used mostly for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Message(_) => "message",
            Payload::List(_) => "list",
            Payload::Scalar(_) => "scalar",
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Payload::Message(Message::from_map(fields)),
            Value::Array(items) => Payload::List(items.into_iter().map(Payload::from).collect()),
            scalar => Payload::Scalar(scalar),
        }
    }
}

impl From<Message> for Payload {
    fn from(message: Message) -> Self {
        Payload::Message(message)
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Message(message) => message.into(),
            Payload::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Payload::Scalar(value) => value,
        }
    }
}
