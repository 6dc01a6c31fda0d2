//! `tnefshell` — a decoder for TNEF (`winmail.dat`) containers.
//!
//! This crate provides the core library for decoding TNEF streams into
//! their plain-text body, HTML body, attachments and MAPI properties.
//!
//! ```no_run
//! let result = tnefshell::parser::decode_file("winmail.dat")?;
//! for att in &result.attachments {
//!     println!("{} ({} bytes)", att.title, att.data.len());
//! }
//! # Ok::<(), tnefshell::error::TnefError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod names;
pub mod parser;
