//! UTF-8 strings which can be handed to C.
//!
//! [`CString`] is an owned, growable string that keeps a NUL terminator after its contents at all
//! times, [`Str`] is a borrowed view over valid UTF-8 and [`Codepoints`] iterates over either one
//! codepoint at a time. The [`utf8`] module holds the encoding and decoding routines they share.

mod codepoints;
mod cstring;
mod str;
mod tests;
pub mod utf8;

pub use codepoints::*;
pub use cstring::*;
pub use str::*;
