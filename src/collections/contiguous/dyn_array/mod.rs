//! A module containing [`DynArray`] and associated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a DynArray.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used
//! for borrowed iteration.
//!
//! [`DynArray`] is also re-exported under the parent module.

mod dyn_array;
mod iter;
mod tests;

pub use dyn_array::*;
pub use iter::*;
