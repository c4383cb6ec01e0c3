use derive_more::{Display, Error};

/// An index was used which lies outside of the initialized elements of a collection or view.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index out of bounds: the length is {len} but the index is {index}")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of access.
    pub len: usize,
}

/// Growing a buffer would require a capacity (in bytes) that can't be represented by a
/// [`Layout`](std::alloc::Layout).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("capacity overflow")]
pub struct CapacityOverflow;
