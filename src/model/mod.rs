//! Core data model types: decoded message, attachments and MAPI properties.

pub mod attachment;
pub mod message;
pub mod property;
