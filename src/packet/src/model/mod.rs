mod message;
mod payload;

pub use message::Message;
pub use payload::Payload;
