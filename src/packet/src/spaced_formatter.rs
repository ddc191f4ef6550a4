use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// This formatter writes single-line JSON with a space after every item and key separator.
///
/// It produces the same layout as the default output of most dynamic-language JSON encoders, e.g.
/// `{"type": "ping", "id": [1, 2]}`.
#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

pub(crate) fn to_spaced_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut writer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, SpacedFormatter);

    value.serialize(&mut serializer)?;

    Ok(writer)
}
