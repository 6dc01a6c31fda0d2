//! Decoder for the MAPI property list carried by `attMAPIProps` records.
//!
//! ```text
//! payload  := count:u32 property*
//! property := type:u16 id:u16
//!             [id in 0x8000..=0xFFFE: guid:[16] kind:u32
//!                  kind 0: lid:u32 | kind 1: len:u32 name:[len] pad]
//!             [multi-value: values:u32]
//!             ([variable size: len:u32] value pad)*
//! ```
//!
//! Values of a multi-valued property are concatenated into a single
//! buffer; the range of each value is kept alongside it.

use tracing::{debug, trace};

use super::cursor::ByteCursor;
use crate::error::{Result, TnefError};
use crate::model::property::{
    decode_utf16le, is_named, type_size, NamedId, Property, TypeSize, MV_FLAG,
};

/// Value counts above this are checked against the bytes left in the payload.
const MAX_TRUSTED_VALUE_COUNT: u32 = 1024;

/// Decode a properties payload located at absolute offset 0.
pub fn decode_properties(payload: &[u8]) -> Result<Vec<Property>> {
    decode_properties_at(payload, 0)
}

/// Decode a properties payload that starts at absolute offset `base`
/// inside the container (used for error positions only).
pub fn decode_properties_at(payload: &[u8], base: u64) -> Result<Vec<Property>> {
    let mut cur = ByteCursor::with_base(payload, base);
    let count = cur.read_u32()?;
    debug!(count, len = payload.len(), "Decoding MAPI properties");

    let mut props = Vec::new();
    for _ in 0..count {
        // A count larger than the payload is tolerated: stop quietly at the end.
        if cur.is_at_end() {
            break;
        }
        props.push(decode_property(&mut cur)?);
    }

    if props.len() < count as usize {
        debug!(
            declared = count,
            decoded = props.len(),
            "Property payload ended before the declared count"
        );
    }
    Ok(props)
}

fn decode_property(cur: &mut ByteCursor<'_>) -> Result<Property> {
    let raw_type = cur.read_u16()?;
    let multi_flag = raw_type & MV_FLAG != 0;
    let prop_type = raw_type & !MV_FLAG;
    let size = type_size(prop_type);
    let multi_value = multi_flag || size == TypeSize::Variable;

    let name = cur.read_u16()?;
    let (guid, named_id) = if is_named(name) {
        decode_named_id(cur)?
    } else {
        (0, None)
    };

    let value_count = if multi_value { cur.read_u32()? } else { 1 };
    if value_count > MAX_TRUSTED_VALUE_COUNT && value_count as usize > cur.remaining() {
        return Err(TnefError::ImplausibleCount {
            count: value_count,
            remaining: cur.remaining() as u64,
        });
    }

    // The count is untrusted: capacity grows with the values actually read.
    let mut data = Vec::new();
    let mut spans = Vec::new();
    for _ in 0..value_count {
        let len = match size {
            TypeSize::Fixed(n) => n,
            TypeSize::Variable => cur.read_len()?,
        };
        let value = cur.take(len)?;
        let start = data.len();
        data.extend_from_slice(value);
        spans.push(start..data.len());
        cur.skip_padding(len)?;
    }

    trace!(
        name,
        prop_type,
        values = value_count,
        len = data.len(),
        "Decoded property"
    );

    Ok(Property {
        prop_type,
        multi_value: multi_flag,
        name,
        guid,
        named_id,
        data,
        spans,
    })
}

/// Read the GUID and secondary identifier of a named property.
fn decode_named_id(cur: &mut ByteCursor<'_>) -> Result<(u128, Option<NamedId>)> {
    let guid = cur.read_u128()?;
    let kind = cur.read_u32()?;
    let named_id = match kind {
        0 => Some(NamedId::Id(cur.read_u32()?)),
        1 => {
            let len = cur.read_len()?;
            let raw = cur.take(len)?;
            cur.skip_padding(len)?;
            Some(NamedId::Name(decode_utf16le(raw)))
        }
        _ => None,
    };
    Ok((guid, named_id))
}
