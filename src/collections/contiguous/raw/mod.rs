//! A module containing [`RawDynArray`], the untyped growth and layout engine behind
//! [`DynArray`](super::DynArray), along with the constants that drive its growth.
//!
//! [`RawDynArray`] is also re-exported under the parent module.

mod raw_dyn_array;

pub use raw_dyn_array::*;
