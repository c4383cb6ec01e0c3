//! Contiguous collection types, revolving around [`DynArray`].
//!
//! The layering is:
//! - [`TypeInfo`]: the byte size of an element.
//! - [`RawDynArray`]: an untyped buffer that does all of the capacity arithmetic in bytes, given a
//!   [`TypeInfo`] for each call.
//! - [`DynArray`]: a typed wrapper which supplies the [`TypeInfo`] itself.
//! - [`Slice`]: a borrowed, bounds-checked view over any of the above.

pub mod dyn_array;
pub mod raw;
pub mod slice;
mod type_info;

#[doc(inline)]
pub use dyn_array::DynArray;
#[doc(inline)]
pub use raw::RawDynArray;
#[doc(inline)]
pub use slice::Slice;
pub use type_info::TypeInfo;

pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
