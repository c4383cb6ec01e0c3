//! Formatters which render values onto the end of a [`CString`](crate::string::CString).
//!
//! A formatter is anything with the shape `FnMut(&mut CString, &T)`: it appends a textual
//! representation of the value without mutating it. The integer formatters here are generic over
//! the matching [`std::fmt`] trait, so one function covers every integer width.
//!
//! # Examples
//! ```
//! # use standard_ext::{dyn_array, format, string::CString};
//! let arr = dyn_array![10_u8, 11, 12];
//! let mut f = CString::new();
//! format::dyn_array(&mut f, &arr, format::upper_hex);
//! assert_eq!(f, "{ A, B, C }");
//! ```

mod array;
mod integer;
mod tests;

pub use array::*;
pub use integer::*;
