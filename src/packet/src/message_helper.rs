use serde_json::Value;

use super::model::{Message, Payload};

/// This is a helper function used to build a message envelope.
///
/// # Arguments
///
/// * `message_type` - The value of the `type` field.
/// * `id` - The value of the `id` field, e.g. the UI token.
/// * `body` - The value of the `message` field.
pub fn make_message(message_type: &str, id: &str, body: impl Into<Value>) -> Message {
    let mut message = Message::new();

    message.insert("type", message_type);
    message.insert("id", id);
    message.insert("message", body);

    message
}

pub fn is_message_type(payload: &Payload, message_type: &str) -> bool {
    payload
        .as_message()
        .and_then(Message::message_type)
        .map_or(false, |t| t == message_type)
}
