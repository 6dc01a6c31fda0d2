//! TNEF container reader.
//!
//! ```text
//! container := signature:u32 key:u16 record*
//! record    := level:u8 name:u16 type:u16 len:u32 payload:[len] checksum:u16
//! ```
//!
//! Records are read back to back; each one starts exactly where the
//! previous one ended. Checksums are read but never validated.

use std::path::Path;

use tracing::{debug, info, trace};

use super::cursor::ByteCursor;
use super::mapi;
use crate::error::{Result, TnefError};
use crate::model::attachment::Attachment;
use crate::model::message::DecodeResult;
use crate::model::property::prop_id;

/// Signature found in the first 4 bytes of every TNEF stream.
pub const TNEF_SIGNATURE: u32 = 0x223e_9f78;

/// Offset of the first record (signature + key).
pub const HEADER_LEN: usize = 6;

/// Bytes before a record payload: level, name, type, length.
pub const RECORD_HEADER_LEN: usize = 1 + 2 + 2 + 4;

/// Fixed bytes around a record payload: header plus checksum.
pub const RECORD_OVERHEAD: usize = RECORD_HEADER_LEN + 2;

/// Default upper bound for [`decode_file`].
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Record levels.
pub mod level {
    pub const MESSAGE: u8 = 0x01;
    pub const ATTACHMENT: u8 = 0x02;
}

/// Record (attribute) names the reader dispatches on.
pub mod attr {
    pub const ATTACH_DATA: u16 = 0x800f;
    pub const ATTACH_TITLE: u16 = 0x8010;
    pub const ATTACH_REND_DATA: u16 = 0x9002;
    pub const MAPI_PROPS: u16 = 0x9003;
}

/// One record of the container, borrowing its payload from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Message- or attachment-level.
    pub level: u8,
    /// Attribute id.
    pub name: u16,
    /// Attribute type, informational only.
    pub kind: u16,
    pub payload: &'a [u8],
    /// Trailing checksum as stored; not validated.
    pub checksum: u16,
    /// Absolute offset of the record's first byte.
    pub offset: u64,
    /// Bytes occupied by the whole record, header and checksum included.
    pub consumed_len: usize,
}

impl RawRecord<'_> {
    /// Absolute offset of the payload's first byte.
    pub fn payload_offset(&self) -> u64 {
        self.offset + RECORD_HEADER_LEN as u64
    }
}

/// Iterator over the records of a TNEF container.
///
/// Yields `Err` at most once; afterwards the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    cur: ByteCursor<'a>,
    failed: bool,
}

impl<'a> Records<'a> {
    /// Check the signature and position the reader on the first record.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut cur = ByteCursor::new(data);
        let signature = cur.read_u32().map_err(|_| TnefError::MissingMarker)?;
        if signature != TNEF_SIGNATURE {
            return Err(TnefError::MissingMarker);
        }
        let key = cur.read_u16()?;
        trace!(key, "TNEF key");
        Ok(Self { cur, failed: false })
    }

    /// Absolute position of the next record.
    pub fn position(&self) -> u64 {
        self.cur.absolute_position()
    }

    fn read_record(&mut self) -> Result<RawRecord<'a>> {
        let start = self.cur.position();
        let offset = self.cur.absolute_position();
        let level = self.cur.read_u8()?;
        let name = self.cur.read_u16()?;
        let kind = self.cur.read_u16()?;
        let len = self.cur.read_len()?;
        let payload = self.cur.take(len)?;
        let checksum = self.cur.read_u16()?;
        Ok(RawRecord {
            level,
            name,
            kind,
            payload,
            checksum,
            offset,
            consumed_len: self.cur.position() - start,
        })
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<RawRecord<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cur.is_at_end() {
            return None;
        }
        let record = self.read_record();
        self.failed = record.is_err();
        Some(record)
    }
}

/// Decode a whole TNEF container held in memory.
pub fn decode(data: &[u8]) -> Result<DecodeResult> {
    let mut result = DecodeResult::default();
    // Index into `result.attachments` of the attachment being filled in.
    let mut current: Option<usize> = None;

    for record in Records::new(data)? {
        let record = record?;
        trace!(
            offset = record.offset,
            level = record.level,
            name = record.name,
            len = record.payload.len(),
            "Record"
        );

        if record.name == attr::ATTACH_REND_DATA {
            result.attachments.push(Attachment::default());
            current = Some(result.attachments.len() - 1);
        } else if record.level == level::ATTACHMENT {
            let idx = current.ok_or(TnefError::PrecedingStateMissing {
                offset: record.offset,
            })?;
            merge_attachment_record(&mut result.attachments[idx], &record);
        } else if record.name == attr::MAPI_PROPS {
            let props = mapi::decode_properties_at(record.payload, record.payload_offset())?;
            for prop in &props {
                match prop.name {
                    prop_id::BODY => result.body = prop.data.clone(),
                    prop_id::BODY_HTML => result.body_html = prop.data.clone(),
                    _ => {}
                }
            }
            result.properties = props;
        }
    }

    debug!(
        attachments = result.attachments.len(),
        properties = result.properties.len(),
        body = result.body.len(),
        body_html = result.body_html.len(),
        "Decoded TNEF container"
    );
    Ok(result)
}

/// Apply one attachment-level record to the attachment being built.
fn merge_attachment_record(attachment: &mut Attachment, record: &RawRecord<'_>) {
    match record.name {
        attr::ATTACH_TITLE => attachment.set_title_from_bytes(record.payload),
        attr::ATTACH_DATA => attachment.data = record.payload.to_vec(),
        _ => {}
    }
}

/// Read a file into memory and decode it, refusing files over
/// [`DEFAULT_MAX_FILE_SIZE`].
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodeResult> {
    decode_file_with_limit(path, DEFAULT_MAX_FILE_SIZE)
}

/// Read a file into memory and decode it, refusing files over `limit` bytes.
pub fn decode_file_with_limit(path: impl AsRef<Path>, limit: u64) -> Result<DecodeResult> {
    let path = path.as_ref();
    let data = read_file_with_limit(path, limit)?;
    info!(path = %path.display(), size = data.len(), "Decoding TNEF file");
    decode(&data)
}

/// Read a whole file into memory, refusing files over `limit` bytes.
pub fn read_file_with_limit(path: impl AsRef<Path>, limit: u64) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TnefError::FileNotFound(path.to_path_buf()));
    }
    let size = std::fs::metadata(path)
        .map_err(|e| TnefError::io(path, e))?
        .len();
    if size > limit {
        return Err(TnefError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }
    std::fs::read(path).map_err(|e| TnefError::io(path, e))
}
