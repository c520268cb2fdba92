//! Parsing, range arithmetic, and formatting for the `hexgen` tool.
//!
//! The binary crates stay thin: everything with an invariant worth testing
//! in isolation lives here.
//! - argument parsing (`parse`)
//! - the stepped value sequence (`range`)
//! - fixed-width hex rendering (`format`)

pub mod error;
pub mod format;
pub mod parse;
pub mod range;

pub use error::RangeError;
pub use format::hex_word;
pub use range::SteppedRange;
