mod json_packet_serializer;
mod message_helper;
pub mod message_types;
pub mod model;
mod packet_serializer;
mod spaced_formatter;

pub use json_packet_serializer::JsonPacketSerializer;
pub use message_helper::*;
pub use packet_serializer::PacketSerializer;
