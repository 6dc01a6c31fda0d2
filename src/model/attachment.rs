//! Attachments embedded in a TNEF container.

/// A file attachment assembled from attachment-level records.
///
/// Started by an `attAttachRendData` record and filled in by the
/// title and data records that follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    /// File name, with the NUL padding of the legacy format removed.
    pub title: String,

    /// Raw file content.
    pub data: Vec<u8>,
}

impl Attachment {
    /// Set the title from a raw record payload, stripping every NUL byte.
    pub fn set_title_from_bytes(&mut self, raw: &[u8]) {
        self.title = String::from_utf8_lossy(raw).replace('\0', "");
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}
