use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// JSON formatter matching the byte layout hosts have always received from
/// this hook: `", "` and `": "` separators, no indentation, and every
/// character outside printable ASCII escaped as `\uXXXX` (UTF-16 units,
/// lowercase hex).
///
/// Only strings, maps and sequences are laid out compatibly; float
/// formatting is serde_json's own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // serde_json has already escaped quotes, backslashes and C0 controls;
    // fragments hold everything else, including DEL and non-ASCII.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if is_printable_ascii(ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Serialize `value` as one line of JSON, newline-terminated.
pub fn to_line<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, AsciiFormatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}
