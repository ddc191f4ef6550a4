use std::marker::Send;

use serde::Serialize;

use crate::model::Payload;

/// This trait represents a strategy of turning packets into bytes and back.
///
/// Call sites should depend on this trait rather than on a concrete serializer, so that the wire format can be
/// swapped without touching them.
///
/// Neither method has a default body, so an implementation that leaves one out does not compile:
///
/// ```compile_fail
/// use courier_packet::{model::Payload, PacketSerializer};
/// use serde::Serialize;
///
/// #[derive(Clone, Copy)]
/// struct PackOnlySerializer;
///
/// impl PacketSerializer for PackOnlySerializer {
///     fn pack<P: Serialize + ?Sized>(&self, _packet: &P) -> Result<Vec<u8>, anyhow::Error> {
///         Ok(Vec::new())
///     }
/// }
/// ```
///
/// The same implementation with `unpack` added compiles fine:
///
/// ```
/// use courier_packet::{model::Payload, PacketSerializer};
/// use serde::Serialize;
///
/// #[derive(Clone, Copy)]
/// struct NullSerializer;
///
/// impl PacketSerializer for NullSerializer {
///     fn pack<P: Serialize + ?Sized>(&self, _packet: &P) -> Result<Vec<u8>, anyhow::Error> {
///         Ok(Vec::new())
///     }
///
///     fn unpack(&self, _raw: &[u8]) -> Result<Payload, anyhow::Error> {
///         Ok(Payload::Scalar(serde_json::Value::Null))
///     }
/// }
///
/// assert!(NullSerializer.unpack(b"").is_ok());
/// ```
pub trait PacketSerializer: Copy + Send + Sync {
    /// This method serializes the given packet.
    ///
    /// # Returns
    ///
    /// * `Vec<u8>` - the serialized representation of `packet`,
    /// * `anyhow::Error` - if the underlying encoder rejected the packet.
    fn pack<P: Serialize + ?Sized>(&self, packet: &P) -> Result<Vec<u8>, anyhow::Error>;

    /// This method deserializes raw bytes into a payload.
    ///
    /// Object nodes are turned into `Message` instances, everything else is returned as a generic value.
    ///
    /// # Returns
    ///
    /// * `Payload` - if `raw` is a valid document,
    /// * `anyhow::Error` - if the underlying parser failed.
    fn unpack(&self, raw: &[u8]) -> Result<Payload, anyhow::Error>;
}
