//! A module containing [`Slice`], a borrowed view into contiguous storage.
//!
//! [`Slice`] is also re-exported under the parent module.

mod slice;
mod tests;

pub use slice::*;
