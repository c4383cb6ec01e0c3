use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::slice;

use crate::collections::contiguous::TypeInfo;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A non-owning, bounds-checked view over a contiguous range of `T`, such as the contents of a
/// [`DynArray`](super::super::DynArray).
///
/// A Slice borrows the storage it was taken from for `'a`, so the storage can't be mutated (and
/// therefore can't be reallocated) while the Slice exists.
///
/// # Examples
/// ```
/// # use standard_ext::collections::contiguous::DynArray;
/// let arr: DynArray<u32> = (0..10).collect();
/// let view = arr.as_slice();
/// assert_eq!(view.len(), 10);
/// assert_eq!(*view.get(3), 3);
/// ```
///
/// Mutating the source while a view is alive doesn't compile:
/// ```compile_fail
/// # use standard_ext::collections::contiguous::DynArray;
/// let mut arr: DynArray<u32> = (0..10).collect();
/// let view = arr.as_slice();
/// arr.push(10);
/// assert_eq!(*view.get(3), 3);
/// ```
pub struct Slice<'a, T> {
    pub(crate) inner: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    /// Creates a Slice over all elements of `inner`.
    pub const fn new(inner: &'a [T]) -> Slice<'a, T> {
        Slice { inner }
    }

    /// Creates a Slice over the elements in `[begin, end)`.
    ///
    /// # Safety
    /// - `begin` and `end` must be aligned for `T` and come from the same allocation, with
    ///   `begin <= end`.
    /// - Every element in the range must be initialized and valid for reads for `'a`.
    /// - The range must not be mutated for `'a`.
    ///
    /// The length is derived from the distance between the pointers, so, like [`TypeInfo::of`],
    /// this rejects zero-sized and over-aligned `T` at compile time. Use [`Slice::new`] for those.
    ///
    /// ```compile_fail
    /// # use standard_ext::collections::contiguous::Slice;
    /// let units = [(), ()];
    /// let range = units.as_ptr_range();
    /// // SAFETY: The range comes from a live array.
    /// let view = unsafe { Slice::from_range(range.start, range.end) };
    /// ```
    pub unsafe fn from_range(begin: *const T, end: *const T) -> Slice<'a, T> {
        let len = (end.addr() - begin.addr()) / TypeInfo::of::<T>().size();

        // SAFETY: The caller guarantees that the range is valid, initialized and immutable for 'a.
        Slice { inner: unsafe { slice::from_raw_parts(begin, len) } }
    }

    /// A pointer to the first element.
    pub const fn begin(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// A pointer one past the last element. It isn't valid for reads.
    pub const fn end(&self) -> *const T {
        self.inner.as_ptr_range().end
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The size of the viewed range in bytes.
    pub const fn len_bytes(&self) -> usize {
        size_of::<T>() * self.inner.len()
    }

    /// Returns a reference to the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Slice.
    #[track_caller]
    pub fn get(&self, index: usize) -> &'a T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_get(&self, index: usize) -> Result<&'a T, IndexOutOfBounds> {
        self.inner.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.inner.len(),
        })
    }

    /// Returns the viewed range as a plain slice, keeping the full lifetime `'a`.
    pub const fn to_slice(self) -> &'a [T] {
        self.inner
    }
}

impl<'a> Slice<'a, u8> {
    /// Orders two byte ranges, first by length (shorter ranges first) and then by content.
    ///
    /// This isn't lexicographic ordering: `b"b"` sorts before `b"aa"`.
    ///
    /// # Examples
    /// ```
    /// # use standard_ext::collections::contiguous::Slice;
    /// # use std::cmp::Ordering;
    /// let short = Slice::new(b"b");
    /// let long = Slice::new(b"aa");
    /// assert_eq!(short.compare_bytes(long), Ordering::Less);
    /// assert_eq!(long.compare_bytes(Slice::new(b"ab")), Ordering::Less);
    /// ```
    pub fn compare_bytes(self, other: Slice<'_, u8>) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.inner.cmp(other.inner))
    }

    /// Returns true if both byte ranges have the same length and content.
    pub fn equals_bytes(self, other: Slice<'_, u8>) -> bool {
        self.compare_bytes(other).is_eq()
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(value: &'a [T]) -> Self {
        Slice::new(value)
    }
}

impl<T> Deref for Slice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl<T: PartialEq> PartialEq for Slice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Slice<'_, T> {}

impl<T: Debug> Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner).finish()
    }
}
