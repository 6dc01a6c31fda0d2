//! Top-level result of decoding a TNEF container.

use super::attachment::Attachment;
use super::property::Property;

/// Everything extracted from one TNEF container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeResult {
    /// Plain-text body bytes (empty if absent).
    pub body: Vec<u8>,

    /// HTML body bytes (empty if absent).
    pub body_html: Vec<u8>,

    /// Attachments in container order.
    pub attachments: Vec<Attachment>,

    /// MAPI properties from the last `attMAPIProps` record, in encounter order.
    pub properties: Vec<Property>,
}

impl DecodeResult {
    /// First property with the given id, if any.
    pub fn property(&self, name: u16) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Body as text, lossily decoded.
    pub fn body_text(&self) -> Option<String> {
        (!self.body.is_empty()).then(|| String::from_utf8_lossy(&self.body).into_owned())
    }

    /// HTML body as text, lossily decoded.
    pub fn body_html_text(&self) -> Option<String> {
        (!self.body_html.is_empty()).then(|| String::from_utf8_lossy(&self.body_html).into_owned())
    }

    /// Total size of all attachment data.
    pub fn attachments_size(&self) -> u64 {
        self.attachments.iter().map(Attachment::size).sum()
    }
}
