use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::ptr::{self, NonNull};

use crate::collections::contiguous::{Slice, TypeInfo};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The number of elements allocated by the first growth of an empty array.
pub const MIN_CAP: usize = 4;

/// The factor applied to the capacity (in bytes) by [`RawDynArray::grow`].
pub const GROWTH_FACTOR: usize = 2;

/// The alignment of every allocation made by a [`RawDynArray`]. Elements aligned to more than
/// this can't be stored.
pub const MAX_ALIGN: usize = 16;

#[repr(align(16))]
struct MaxAligned;

/// An untyped, exponentially growing, contiguous buffer of bytes, interpreted as a sequence of
/// fixed-size elements.
///
/// The buffer doesn't know its element type: every method that needs it takes a [`TypeInfo`]. The
/// same `TypeInfo` must be used for all calls on a given buffer. Passing another one is not
/// undefined behavior by itself, but lengths, capacities and offsets will be silently wrong and any
/// pointer produced from them is no longer valid for the real element type. Use
/// [`DynArray<T>`](super::super::DynArray) unless an untyped buffer is actually required.
///
/// All accounting is done in bytes. `len_bytes() <= cap_bytes()` always holds, nothing is
/// allocated while the capacity is zero and the capacity never shrinks until the buffer is dropped.
///
/// Every pointer returned by this type, including those from [`begin`](RawDynArray::begin),
/// [`end`](RawDynArray::end), [`push_uninit`](RawDynArray::push_uninit),
/// [`pop`](RawDynArray::pop) and [`get`](RawDynArray::get), is invalidated by the next call taking
/// `&mut self`. Growth moves the buffer.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` / `cap` | `O(1)` |
/// | `push_uninit` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `grow` | `O(n)` |
/// | `reserve_to_fit` | `O(n)`, `O(1)`** |
/// | `extend_from_raw` | `O(m)`, `O(n+m)` |
///
/// \* Amortized, growth doubles the capacity.
///
/// \** If the remaining capacity already fits the additional bytes.
///
/// # Examples
/// ```
/// # use standard_ext::collections::contiguous::{RawDynArray, TypeInfo};
/// let ty = TypeInfo::of::<u32>();
/// let mut raw = RawDynArray::new();
/// for n in 1_u32..=3 {
///     // SAFETY: The slot is initialized right away with a u32.
///     unsafe { raw.push_uninit(ty).cast::<u32>().write(n) };
/// }
/// assert_eq!(raw.len(ty), 3);
/// assert_eq!(raw.cap_bytes(), 16);
///
/// let last = raw.pop(ty).map(|slot| unsafe { slot.cast::<u32>().read() });
/// assert_eq!(last, Some(3));
/// ```
pub struct RawDynArray {
    pub(crate) ptr: NonNull<u8>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
}

impl RawDynArray {
    /// Creates an empty buffer. This doesn't allocate.
    pub const fn new() -> RawDynArray {
        RawDynArray {
            ptr: NonNull::<MaxAligned>::dangling().cast(),
            cap: 0,
            len: 0,
        }
    }

    /// The number of occupied bytes.
    pub const fn len_bytes(&self) -> usize {
        self.len
    }

    /// The number of allocated bytes.
    pub const fn cap_bytes(&self) -> usize {
        self.cap
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements described by `ty` that are stored in the buffer.
    pub const fn len(&self, ty: TypeInfo) -> usize {
        self.len / ty.size()
    }

    /// The number of elements described by `ty` that fit in the current allocation.
    pub const fn cap(&self, ty: TypeInfo) -> usize {
        self.cap / ty.size()
    }

    const fn remaining_bytes(&self) -> usize {
        self.cap - self.len
    }

    /// A pointer to the first byte of the buffer. For an unallocated buffer, this is a dangling
    /// pointer aligned to [`MAX_ALIGN`].
    pub const fn begin(&self) -> *const u8 {
        self.ptr.as_ptr().cast_const()
    }

    /// A pointer one past the last occupied byte. It isn't valid for reads.
    pub const fn end(&self) -> *const u8 {
        self.begin().wrapping_add(self.len)
    }

    pub const fn begin_mut(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    pub const fn end_mut(&mut self) -> *mut u8 {
        self.ptr.as_ptr().wrapping_add(self.len)
    }

    /// Grows the buffer exponentially. An empty buffer gets room for [`MIN_CAP`] elements of
    /// `ty`, otherwise the capacity is multiplied by [`GROWTH_FACTOR`].
    ///
    /// # Panics
    /// Panics if the new capacity overflows or exceeds [`isize::MAX`] bytes. Allocation failure
    /// aborts via [`alloc::handle_alloc_error`].
    pub fn grow(&mut self, ty: TypeInfo) {
        let new_cap = if self.cap == 0 {
            MIN_CAP.checked_mul(ty.size())
        } else {
            self.cap.checked_mul(GROWTH_FACTOR)
        };

        self.realloc(new_cap.ok_or(CapacityOverflow).throw());
    }

    /// Ensures that at least `additional` more bytes fit in the buffer. If they don't, the capacity
    /// becomes the smallest power of two greater than or equal to `cap_bytes() + additional`, so a
    /// single large extension only reallocates once.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or exceeds [`isize::MAX`] bytes.
    pub fn reserve_to_fit(&mut self, additional: usize) {
        if self.remaining_bytes() >= additional {
            return;
        }

        let new_cap = self.cap
            .checked_add(additional)
            .and_then(usize::checked_next_power_of_two)
            .ok_or(CapacityOverflow)
            .throw();

        self.realloc(new_cap);
    }

    /// Claims the slot for one more element of `ty` at the end of the buffer, growing as required,
    /// and returns a pointer to it. The pointer is aligned for any type described by `ty`, as long
    /// as every previous element was of that type.
    ///
    /// # Safety
    /// The slot counts towards the length immediately, so it has to be initialized with a valid
    /// value of the element type before the buffer is read from again.
    ///
    /// # Panics
    /// Panics if growing overflows the capacity.
    pub unsafe fn push_uninit(&mut self, ty: TypeInfo) -> NonNull<u8> {
        // A capacity produced by reserve_to_fit needn't be a multiple of the element size.
        while self.remaining_bytes() < ty.size() {
            self.grow(ty);
        }

        // SAFETY: The loop above guarantees room for one more element.
        unsafe { self.push_uninit_unchecked(ty) }
    }

    /// Like [`push_uninit`](RawDynArray::push_uninit), without checking the capacity.
    ///
    /// # Safety
    /// In addition to the requirements of `push_uninit`, at least `ty.size()` bytes of capacity
    /// must remain.
    pub unsafe fn push_uninit_unchecked(&mut self, ty: TypeInfo) -> NonNull<u8> {
        // SAFETY: len <= cap, so the offset stays within (or one past) the allocation.
        let slot = unsafe { self.ptr.add(self.len) };
        self.len += ty.size();
        slot
    }

    /// Appends a copy of the bytes in `[begin, end)`, growing with
    /// [`reserve_to_fit`](RawDynArray::reserve_to_fit) if they don't fit. The byte count doesn't
    /// need to be a multiple of any element size.
    ///
    /// # Safety
    /// - `begin` and `end` must come from the same allocation with `begin <= end`.
    /// - The whole range must be valid for reads.
    /// - The range must not overlap this buffer.
    pub unsafe fn extend_from_raw(&mut self, begin: *const u8, end: *const u8) {
        let size = end.addr() - begin.addr();
        self.reserve_to_fit(size);

        // SAFETY: Capacity has been reserved, the rest is up to the caller.
        unsafe { self.extend_from_raw_unchecked(begin, size) }
    }

    /// Appends `size` bytes from `src` without checking the capacity.
    ///
    /// # Safety
    /// All of the requirements of [`ptr::copy_nonoverlapping`] apply, and at least `size` bytes of
    /// capacity must remain.
    pub unsafe fn extend_from_raw_unchecked(&mut self, src: *const u8, size: usize) {
        // SAFETY: The destination is within the allocation because of the caller's capacity
        // guarantee. The source is valid and doesn't overlap, also by the caller's guarantee.
        unsafe {
            ptr::copy_nonoverlapping(src, self.ptr.as_ptr().add(self.len), size);
        }
        self.len += size;
    }

    /// Appends a copy of `bytes`. See [`extend_from_raw`](RawDynArray::extend_from_raw).
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) {
        let range = bytes.as_ptr_range();
        // SAFETY: The range comes from a slice, which can't alias self while it is borrowed
        // mutably.
        unsafe { self.extend_from_raw(range.start, range.end) }
    }

    /// Removes the last element of `ty` and returns a pointer to it, or [`None`] if the buffer is
    /// empty. The element isn't cleared; the pointer stays valid for reads until the next
    /// mutation. The capacity is left untouched.
    pub fn pop(&mut self, ty: TypeInfo) -> Option<NonNull<u8>> {
        self.len = self.len.checked_sub(ty.size())?;

        // SAFETY: The new length is within the allocation.
        Some(unsafe { self.ptr.add(self.len) })
    }

    /// Returns a pointer to the element of `ty` at `index`, panicking if it is out of bounds. The
    /// pointer is valid for reads and writes of the element type until the next mutation.
    ///
    /// # Panics
    /// Panics if `index >= self.len(ty)`.
    #[track_caller]
    pub fn get(&self, ty: TypeInfo, index: usize) -> NonNull<u8> {
        self.try_get(ty, index).throw()
    }

    /// Returns a pointer to the element of `ty` at `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get(&self, ty: TypeInfo, index: usize) -> Result<NonNull<u8>, IndexOutOfBounds> {
        let len = self.len(ty);
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }

        // SAFETY: index < len, so the offset is within the occupied part of the allocation.
        Ok(unsafe { self.ptr.add(index * ty.size()) })
    }

    /// Sets the length to zero, keeping the allocation. Nothing is dropped.
    pub const fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns a view over the contents of the buffer as elements of `T`.
    ///
    /// # Safety
    /// The buffer must only contain initialized values of `T`.
    pub unsafe fn as_slice<T>(&self) -> Slice<'_, T> {
        // SAFETY: begin is aligned to MAX_ALIGN and, per the caller, the buffer holds len_bytes()
        // worth of initialized T values.
        unsafe { Slice::from_range(self.begin().cast(), self.end().cast()) }
    }

    /// Moves the buffer to an allocation of `new_cap` bytes, keeping the contents.
    ///
    /// # Panics
    /// Panics if `new_cap` exceeds [`isize::MAX`].
    fn realloc(&mut self, new_cap: usize) {
        if new_cap <= self.cap {
            return;
        }

        let new_layout = Self::make_layout(new_cap);
        let raw_ptr = if self.cap == 0 {
            // SAFETY: new_cap > cap = 0, so the layout isn't zero-sized.
            unsafe { alloc::alloc(new_layout) }
        } else {
            // SAFETY: ptr was allocated by the global allocator with the layout for cap, and
            // new_cap is a valid non-zero size for MAX_ALIGN.
            unsafe { alloc::realloc(self.ptr.as_ptr(), Self::make_layout(self.cap), new_cap) }
        };

        self.ptr = NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout));
        log::trace!("raw array reallocated: {} -> {} bytes", self.cap, new_cap);
        self.cap = new_cap;
    }

    /// # Panics
    /// Panics if `size`, rounded up to [`MAX_ALIGN`], exceeds [`isize::MAX`].
    fn make_layout(size: usize) -> Layout {
        Layout::from_size_align(size, MAX_ALIGN)
            .map_err(|_| CapacityOverflow)
            .throw()
    }
}

impl Default for RawDynArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RawDynArray {
    fn drop(&mut self) {
        if self.cap > 0 {
            // SAFETY: ptr was allocated with the layout for cap, and is never used again.
            unsafe { alloc::dealloc(self.ptr.as_ptr(), Self::make_layout(self.cap)) }
        }
    }
}

impl Debug for RawDynArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawDynArray")
            .field("ptr", &self.ptr)
            .field("len_bytes", &self.len)
            .field("cap_bytes", &self.cap)
            .finish()
    }
}

// SAFETY: RawDynArray uniquely owns its allocation and only hands out pointers, which carry their
// own safety requirements.
unsafe impl Send for RawDynArray {}
// SAFETY: No method taking &self mutates the buffer.
unsafe impl Sync for RawDynArray {}
