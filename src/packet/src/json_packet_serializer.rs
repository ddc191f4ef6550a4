use serde::Serialize;
use serde_json::Value;

use super::{model::Payload, spaced_formatter::to_spaced_vec, PacketSerializer};

/// This struct serializes packets as single-line JSON documents.
#[derive(Debug, Default, Copy, Clone)]
pub struct JsonPacketSerializer;

impl PacketSerializer for JsonPacketSerializer {
    fn pack<P: Serialize + ?Sized>(&self, packet: &P) -> Result<Vec<u8>, anyhow::Error> {
        Ok(to_spaced_vec(packet)?)
    }

    fn unpack(&self, raw: &[u8]) -> Result<Payload, anyhow::Error> {
        let value: Value = serde_json::from_slice(raw)?;

        Ok(Payload::from(value))
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;
    use test_case::test_case;

    use crate::{model::Message, JsonPacketSerializer, PacketSerializer};

    #[test]
    fn pack_givenPingMessage_returnsSpacedJsonBytes() -> Result<(), anyhow::Error> {
        // Arrange
        let serializer = JsonPacketSerializer::default();
        let message: Message = [("type", "ping")].into_iter().collect();

        // Act
        let result = serializer.pack(&message)?;

        // Assert
        assert_eq!(br#"{"type": "ping"}"#.to_vec(), result);

        Ok(())
    }

    #[test]
    fn unpack_givenPingDocument_returnsEqualMessage() -> Result<(), anyhow::Error> {
        // Arrange
        let serializer = JsonPacketSerializer::default();
        let expected: Message = [("type", "ping")].into_iter().collect();

        // Act
        let result = serializer.unpack(br#"{"type": "ping"}"#)?;

        // Assert
        assert_eq!(Some(&expected), result.as_message());

        Ok(())
    }

    #[test]
    fn unpack_givenPackedMessage_returnsMessageWithSameContent() -> Result<(), anyhow::Error> {
        // Arrange
        let serializer = JsonPacketSerializer::default();
        let message = Message::try_from(json!({
            "type": "urn:sovrin:agent:message_type:sovrin.org/ui/initialize",
            "id": "token",
            "message": {"name": "alice", "passphrase": "secret", "tags": [1, 2.5, "ü"]}
        }))?;

        // Act
        let result = serializer.unpack(&serializer.pack(&message)?)?;

        // Assert
        assert_eq!(Some(message), result.into_message());

        Ok(())
    }

    #[test_case(b"" ; "empty input")]
    #[test_case(b"{\"type\": " ; "truncated object")]
    #[test_case(b"{'type': 'ping'}" ; "single quotes")]
    #[test_case(b"[1, 2,]" ; "trailing comma")]
    #[test_case(b"{\"a\": 1} {\"b\": 2}" ; "two documents")]
    #[test_case(&[0xffu8, 0xfe] ; "not utf8")]
    fn unpack_givenInvalidDocument_returnsError(raw: &[u8]) {
        // Arrange
        let serializer = JsonPacketSerializer::default();

        // Act
        let result = serializer.unpack(raw);

        // Assert
        assert!(result.is_err());
    }

    #[test_case(b"[1, \"two\", null]", json!([1, "two", null]) ; "list")]
    #[test_case(b"42", json!(42) ; "number")]
    #[test_case(b"\"ping\"", json!("ping") ; "string")]
    #[test_case(b"true", json!(true) ; "boolean")]
    #[test_case(b"null", json!(null) ; "null")]
    fn unpack_givenNonObjectDocument_returnsSameContent(raw: &[u8], expected: serde_json::Value) {
        // Arrange
        let serializer = JsonPacketSerializer::default();

        // Act
        let result = serializer.unpack(raw).unwrap();

        // Assert
        assert!(!result.is_message());
        assert_eq!(expected, serde_json::Value::from(result));
    }

    #[test]
    fn pack_givenMapWithNonStringKeys_returnsError() {
        // Arrange
        let serializer = JsonPacketSerializer::default();
        let mut packet = BTreeMap::new();
        packet.insert(vec![1u8], "value");

        // Act
        let result = serializer.pack(&packet);

        // Assert
        assert!(result.is_err());
    }

    #[test_case(b"123456789012345678901234567890" ; "integer wider than u64")]
    #[test_case(b"-123456789012345678901234567890" ; "integer narrower than i64")]
    #[test_case(b"18446744073709551615" ; "u64 max")]
    #[test_case(b"-9223372036854775808" ; "i64 min")]
    #[test_case(b"-0.0" ; "negative zero")]
    #[test_case(b"0.1" ; "inexact decimal")]
    #[test_case(b"1.0715660391465826e-75" ; "tiny float")]
    #[test_case(b"1.7976931348623157e308" ; "f64 max")]
    #[test_case(br#"{"v": 123456789012345678901234567890, "w": [5e-324, -0.0]}"# ; "numbers inside message")]
    fn pack_givenUnpackedNumber_reproducesInputBytes(raw: &[u8]) {
        // Arrange
        let serializer = JsonPacketSerializer::default();

        // Act
        let result = serializer.pack(&serializer.unpack(raw).unwrap()).unwrap();

        // Assert
        assert_eq!(
            String::from_utf8_lossy(raw),
            String::from_utf8_lossy(&result)
        );
    }

    #[test]
    fn unpack_givenPackedFloatMessage_returnsBitIdenticalFloat() -> Result<(), anyhow::Error> {
        // Arrange
        let serializer = JsonPacketSerializer::default();
        let mut state = 0x9e37_79b9_7f4a_7c15u64;
        let mut values = vec![1.0715660391465826e-75, -0.0, f64::MIN_POSITIVE, f64::MAX];

        while values.len() < 20_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;

            let value = f64::from_bits(state);
            if value.is_finite() {
                values.push(value);
            }
        }

        for value in values {
            let message: Message = [("v", value)].into_iter().collect();

            // Act
            let result = serializer.unpack(&serializer.pack(&message)?)?;

            // Assert
            let unpacked = result
                .as_message()
                .and_then(|m| m.get("v"))
                .and_then(serde_json::Value::as_f64);

            assert_eq!(Some(value.to_bits()), unpacked.map(f64::to_bits), "{:e}", value);
            assert_eq!(Some(message), result.into_message());
        }

        Ok(())
    }

    #[test]
    fn pack_givenUnpackedPayload_reproducesInputBytes() -> Result<(), anyhow::Error> {
        // Arrange
        let serializer = JsonPacketSerializer::default();
        let raw = br#"[{"type": "a", "id": "1"}, 2, {"z": {"y": []}}]"#;

        // Act
        let result = serializer.pack(&serializer.unpack(raw)?)?;

        // Assert
        assert_eq!(raw.to_vec(), result);

        Ok(())
    }
}
