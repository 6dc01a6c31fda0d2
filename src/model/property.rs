//! MAPI properties decoded from an `attMAPIProps` record.

use std::ops::Range;

use chrono::{DateTime, Utc};

/// OR-ed into a property type to mark an array of values.
pub const MV_FLAG: u16 = 0x1000;

/// Property type codes.
pub mod prop_type {
    pub const UNSPECIFIED: u16 = 0x0000;
    pub const NULL: u16 = 0x0001;
    pub const SHORT: u16 = 0x0002;
    pub const INT: u16 = 0x0003;
    pub const FLOAT: u16 = 0x0004;
    pub const DOUBLE: u16 = 0x0005;
    pub const CURRENCY: u16 = 0x0006;
    pub const APPTIME: u16 = 0x0007;
    pub const ERROR: u16 = 0x000a;
    pub const BOOLEAN: u16 = 0x000b;
    pub const OBJECT: u16 = 0x000d;
    pub const INT8BYTE: u16 = 0x0014;
    pub const STRING: u16 = 0x001e;
    pub const UNICODE_STRING: u16 = 0x001f;
    pub const SYSTIME: u16 = 0x0040;
    pub const CLSID: u16 = 0x0048;
    pub const BINARY: u16 = 0x0102;
}

/// Well-known property ids the decoder acts on.
pub mod prop_id {
    /// Plain-text message body.
    pub const BODY: u16 = 0x1000;
    /// HTML message body.
    pub const BODY_HTML: u16 = 0x1013;
}

/// Lowest and highest ids of named (GUID-qualified) properties.
pub const NAMED_ID_MIN: u16 = 0x8000;
pub const NAMED_ID_MAX: u16 = 0xfffe;

/// How the values of a property type are framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSize {
    /// Every value occupies exactly this many bytes (before padding).
    Fixed(usize),
    /// Every value is preceded by its own 32-bit length.
    Variable,
}

/// Value framing for a base type (multi-value flag already stripped).
///
/// Unknown types report `Fixed(0)`: their values carry no bytes.
pub fn type_size(base_type: u16) -> TypeSize {
    use prop_type::*;
    match base_type {
        SHORT | BOOLEAN => TypeSize::Fixed(2),
        INT | FLOAT | ERROR => TypeSize::Fixed(4),
        DOUBLE | APPTIME | CURRENCY | INT8BYTE | SYSTIME => TypeSize::Fixed(8),
        CLSID => TypeSize::Fixed(16),
        STRING | UNICODE_STRING | OBJECT | BINARY => TypeSize::Variable,
        _ => TypeSize::Fixed(0),
    }
}

/// `true` if `name` falls in the named-property range.
pub fn is_named(name: u16) -> bool {
    (NAMED_ID_MIN..=NAMED_ID_MAX).contains(&name)
}

/// Secondary identifier of a named property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedId {
    /// Numeric identifier (`kind == 0`).
    Id(u32),
    /// String identifier (`kind == 1`).
    Name(String),
}

/// One decoded MAPI property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Base type code, multi-value flag stripped.
    pub prop_type: u16,
    /// Whether the multi-value flag was set on the wire.
    pub multi_value: bool,
    /// Property id.
    pub name: u16,
    /// GUID of a named property, `0` otherwise.
    pub guid: u128,
    /// Secondary identifier of a named property.
    pub named_id: Option<NamedId>,
    /// All values concatenated without separators.
    pub data: Vec<u8>,
    /// Byte range of each individual value inside `data`.
    pub spans: Vec<Range<usize>>,
}

impl Property {
    pub fn is_named(&self) -> bool {
        is_named(self.name)
    }

    /// Iterate over the individual values.
    pub fn values(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.spans.iter().map(move |r| &self.data[r.clone()])
    }

    /// Short human-readable rendering of the first value, for display only.
    pub fn display_value(&self) -> String {
        let first = self.values().next().unwrap_or(&[]);
        let rendered = render_value(self.prop_type, first);
        if self.spans.len() > 1 {
            format!("{rendered} (+{} more)", self.spans.len() - 1)
        } else {
            rendered
        }
    }
}

const HEX_PREVIEW_LEN: usize = 16;

fn render_value(ty: u16, value: &[u8]) -> String {
    use prop_type::*;
    match (ty, value.len()) {
        (SHORT, 2) => i16::from_le_bytes([value[0], value[1]]).to_string(),
        (BOOLEAN, 2) => (value[0] != 0 || value[1] != 0).to_string(),
        (INT | ERROR, 4) => {
            i32::from_le_bytes([value[0], value[1], value[2], value[3]]).to_string()
        }
        (FLOAT, 4) => f32::from_le_bytes([value[0], value[1], value[2], value[3]]).to_string(),
        (DOUBLE | APPTIME, 8) => f64::from_le_bytes(le8(value)).to_string(),
        (INT8BYTE | CURRENCY, 8) => i64::from_le_bytes(le8(value)).to_string(),
        (SYSTIME, 8) => filetime_to_datetime(u64::from_le_bytes(le8(value)))
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| hex_preview(value)),
        (STRING, _) => String::from_utf8_lossy(trim_nuls(value)).into_owned(),
        (UNICODE_STRING, _) => decode_utf16le(value),
        _ => hex_preview(value),
    }
}

fn le8(value: &[u8]) -> [u8; 8] {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&value[..8]);
    buf
}

/// Seconds between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_DIFF_SECS: i64 = 11_644_473_600;

/// Convert a Windows FILETIME (100 ns ticks since 1601) to UTC.
pub fn filetime_to_datetime(ticks: u64) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(ticks / 10_000_000).ok()? - FILETIME_UNIX_DIFF_SECS;
    let nanos = (ticks % 10_000_000) as u32 * 100;
    DateTime::from_timestamp(secs, nanos)
}

/// Decode UTF-16LE text, dropping trailing NULs.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let (text, _had_errors) = encoding_rs::UTF_16LE.decode_without_bom_handling(bytes);
    text.trim_end_matches('\0').to_string()
}

fn trim_nuls(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

fn hex_preview(bytes: &[u8]) -> String {
    let mut s: String = bytes
        .iter()
        .take(HEX_PREVIEW_LEN)
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    if bytes.len() > HEX_PREVIEW_LEN {
        s.push_str(&format!(" … ({} bytes)", bytes.len()));
    }
    s
}
