//! Core definitions shared by all simplevec-* crates: the error type,
//! the `Result` alias and the index verification helpers.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
