use serde_json::{Map, Value};
use std::fmt;
use std::io::Read;

/// Session metadata the host writes to stdin.
///
/// Any JSON value is accepted. Contents are only ever read for log fields.
#[derive(Debug, Clone, PartialEq)]
pub struct HookInput {
    value: Value,
}

/// Why stdin could not be used as an event
#[derive(Debug)]
pub enum DecodeFailure {
    /// No bytes, or whitespace only
    Empty,
    /// Reading stdin itself failed
    Io(std::io::Error),
    /// Not valid JSON (includes invalid UTF-8)
    Malformed(serde_json::Error),
}

impl DecodeFailure {
    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeFailure::Empty => "empty",
            DecodeFailure::Io(_) => "io",
            DecodeFailure::Malformed(_) => "malformed",
        }
    }
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFailure::Empty => write!(f, "stdin was empty"),
            DecodeFailure::Io(e) => write!(f, "failed to read stdin: {}", e),
            DecodeFailure::Malformed(e) => write!(f, "stdin is not valid JSON: {}", e),
        }
    }
}

/// Result of the best-effort decode. Both arms carry a usable event.
#[derive(Debug)]
pub enum Decoded {
    Parsed(HookInput),
    Fallback(HookInput, DecodeFailure),
}

impl Decoded {
    pub fn input(&self) -> &HookInput {
        match self {
            Decoded::Parsed(input) | Decoded::Fallback(input, _) => input,
        }
    }
}

impl HookInput {
    /// The empty mapping substituted when stdin can't be decoded
    pub fn empty() -> Self {
        Self {
            value: Value::Object(Map::new()),
        }
    }

    /// JSON type of the payload, for logs
    pub fn kind(&self) -> &'static str {
        match self.value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.str_field("session_id")
    }

    /// SessionStart source (startup, resume, clear, compact)
    pub fn source(&self) -> Option<&str> {
        self.str_field("source")
    }

    pub fn hook_event_name(&self) -> Option<&str> {
        self.str_field("hook_event_name")
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(Value::as_str)
    }
}

/// Decode raw stdin bytes, never failing.
pub fn decode(bytes: &[u8]) -> Decoded {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Decoded::Fallback(HookInput::empty(), DecodeFailure::Empty);
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => Decoded::Parsed(HookInput { value }),
        Err(e) => Decoded::Fallback(HookInput::empty(), DecodeFailure::Malformed(e)),
    }
}

/// Read a reader to end and decode it. Read errors fall back like bad JSON.
pub fn read_from<R: Read>(mut reader: R) -> (usize, Decoded) {
    let mut buffer = Vec::new();
    match reader.read_to_end(&mut buffer) {
        Ok(n) => (n, decode(&buffer)),
        Err(e) => (
            buffer.len(),
            Decoded::Fallback(HookInput::empty(), DecodeFailure::Io(e)),
        ),
    }
}
