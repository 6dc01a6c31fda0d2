//! TNEF decoding: the container reader, the MAPI property reader and the
//! bounds-checked cursor they share.

pub mod cursor;
pub mod mapi;
pub mod tnef;

pub use tnef::{
    decode, decode_file, decode_file_with_limit, read_file_with_limit, RawRecord, Records,
};
