use crate::collections::contiguous::raw::MAX_ALIGN;

/// Type information required by the untyped [`RawDynArray`](super::RawDynArray): the size in
/// bytes of one logical element.
///
/// A raw buffer doesn't know what it contains, so the same `TypeInfo` has to be passed to every
/// call made on a given buffer. Prefer [`TypeInfo::of`] over [`TypeInfo::new`], so that call sites
/// name the element type they are working with.
///
/// # Examples
/// ```
/// # use standard_ext::collections::contiguous::TypeInfo;
/// assert_eq!(TypeInfo::of::<u32>(), TypeInfo::new(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    size: usize,
}

impl TypeInfo {
    /// Creates a `TypeInfo` for elements of `size` bytes.
    ///
    /// `size` must be greater than zero. This isn't checked in release builds; a zero size will
    /// cause later divisions by the size to panic.
    pub const fn new(size: usize) -> TypeInfo {
        debug_assert!(size > 0, "element size must be non-zero");
        TypeInfo { size }
    }

    /// Returns the `TypeInfo` describing `T`.
    ///
    /// Zero-sized types and types aligned to more than [`MAX_ALIGN`] bytes are rejected at compile
    /// time.
    pub const fn of<T>() -> TypeInfo {
        const {
            assert!(size_of::<T>() > 0, "zero-sized types are not supported");
            assert!(align_of::<T>() <= MAX_ALIGN, "over-aligned types are not supported");
        }
        TypeInfo::new(size_of::<T>())
    }

    /// The size of one element in bytes.
    pub const fn size(&self) -> usize {
        self.size
    }
}
