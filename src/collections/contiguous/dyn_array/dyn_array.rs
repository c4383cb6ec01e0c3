use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::{RawDynArray, Slice, TypeInfo};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A dynamic, exponentially growing array, backed by a [`RawDynArray`].
///
/// The element type is tracked by the compiler rather than by the caller, so the [`TypeInfo`] of
/// `T` is passed to the underlying buffer on every call and can't be mismatched. Growth follows the
/// raw buffer exactly: the first push allocates room for
/// [`MIN_CAP`](crate::collections::contiguous::raw::MIN_CAP) elements, later pushes double the
/// capacity and bulk extension reserves the smallest power of two (in bytes) that fits.
///
/// References obtained from a DynArray borrow it, so the "invalidated by the next mutation" rule
/// of the raw buffer is enforced by the borrow checker. Raw pointers from
/// [`begin`](DynArray::begin) and [`end`](DynArray::end) are still subject to it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynArray.
/// - `m`: The number of items being appended.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `extend_from_slice` | `O(m)`, `O(n+m)` |
/// | `clear` | `O(n)` |
///
/// \* If the DynArray doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// # Examples
/// ```
/// # use standard_ext::collections::contiguous::DynArray;
/// let mut arr = DynArray::new();
/// arr.extend_from_slice(&[1, 2, 4, 4, 5, 6, 7, 8, 9, 10]);
/// assert_eq!(&*arr, &[1, 2, 4, 4, 5, 6, 7, 8, 9, 10]);
///
/// let mut popped = DynArray::new();
/// while let Some(n) = arr.pop() {
///     popped.push(n);
/// }
/// assert_eq!(&*popped, &[10, 9, 8, 7, 6, 5, 4, 4, 2, 1]);
/// ```
pub struct DynArray<T> {
    pub(crate) raw: RawDynArray,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> DynArray<T> {
    const TYPE: TypeInfo = TypeInfo::of::<T>();

    /// Creates a new DynArray with length and capacity 0. Memory will be allocated by the first
    /// push.
    ///
    /// # Examples
    /// ```
    /// # use standard_ext::collections::contiguous::DynArray;
    /// let arr: DynArray<u32> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> DynArray<T> {
        DynArray {
            raw: RawDynArray::new(),
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the DynArray.
    pub const fn len(&self) -> usize {
        self.raw.len(Self::TYPE)
    }

    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of elements which fit in the current allocation.
    pub const fn cap(&self) -> usize {
        self.raw.cap(Self::TYPE)
    }

    /// Returns the number of bytes occupied by elements.
    pub const fn len_bytes(&self) -> usize {
        self.raw.len_bytes()
    }

    /// Returns the number of allocated bytes. This is always a power of two times
    /// `size_of::<T>()` after push-driven growth, or a power of two after bulk extension.
    pub const fn cap_bytes(&self) -> usize {
        self.raw.cap_bytes()
    }

    /// A pointer to the first element, valid until the next mutation.
    pub const fn begin(&self) -> *const T {
        self.raw.begin().cast()
    }

    /// A pointer one past the last element. It isn't valid for reads.
    pub const fn end(&self) -> *const T {
        self.raw.end().cast()
    }

    pub const fn as_ptr(&self) -> *const T {
        self.begin()
    }

    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.begin_mut().cast()
    }

    /// Grows the capacity exponentially. See [`RawDynArray::grow`].
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`] bytes.
    pub fn grow(&mut self) {
        self.raw.grow(Self::TYPE);
    }

    /// Ensures that `extra` more elements fit without another allocation. If they don't already,
    /// the capacity becomes the smallest power of two (in bytes) that fits them.
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`] bytes.
    pub fn reserve_to_fit(&mut self, extra: usize) {
        let bytes = extra.checked_mul(Self::TYPE.size()).ok_or(CapacityOverflow).throw();
        self.raw.reserve_to_fit(bytes);
    }

    /// Pushes `value` onto the end of the DynArray, growing if required, and returns a reference
    /// to it in its new location.
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use standard_ext::collections::contiguous::DynArray;
    /// let mut arr = DynArray::new();
    /// for n in 1..=100 {
    ///     arr.push(n);
    /// }
    /// *arr.push(0) += 101;
    /// assert_eq!(arr.len(), 101);
    /// assert_eq!(arr[100], 101);
    /// ```
    pub fn push(&mut self, value: T) -> &mut T {
        // SAFETY: The slot is initialized before anything else can observe it.
        unsafe { self.push_uninit().write(value) }
    }

    /// Claims the next slot and returns it uninitialized, growing if required.
    ///
    /// # Safety
    /// The slot is counted by [`len`](DynArray::len) immediately. It must be initialized before
    /// the DynArray is used again, including being dropped.
    pub unsafe fn push_uninit(&mut self) -> &mut MaybeUninit<T> {
        // SAFETY: Every element is a T, so the slot is aligned for T. The caller initializes it.
        unsafe { self.raw.push_uninit(Self::TYPE).cast::<MaybeUninit<T>>().as_mut() }
    }

    /// Pushes `value` onto the end of the DynArray, assuming that there is enough capacity to do so.
    ///
    /// # Safety
    /// The DynArray must have room for at least one more element, for example after
    /// [`reserve_to_fit`](DynArray::reserve_to_fit).
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees the capacity; the slot is written immediately.
        unsafe { self.raw.push_uninit_unchecked(Self::TYPE).cast::<T>().write(value) }
    }

    /// Pops the last value off the end of the DynArray, returning an owned value if the DynArray
    /// has length greater than 0. The capacity is retained.
    ///
    /// # Examples
    /// ```
    /// # use standard_ext::collections::contiguous::DynArray;
    /// let mut arr = DynArray::from([1, 2]);
    /// assert_eq!(arr.pop(), Some(2));
    /// assert_eq!(arr.pop(), Some(1));
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        // SAFETY: The popped slot held an initialized T, which is no longer counted by len, so
        // moving it out doesn't duplicate it.
        self.raw.pop(Self::TYPE).map(|slot| unsafe { slot.cast::<T>().read() })
    }

    /// Returns a reference to the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DynArray.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        // SAFETY: The pointer is in bounds, aligned and initialized, and borrowed from self.
        self.raw.try_get(Self::TYPE, index).map(|elem| unsafe { elem.cast::<T>().as_ref() })
    }

    /// Returns a mutable reference to the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DynArray.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        // SAFETY: The pointer is in bounds, aligned and initialized, and uniquely borrowed from
        // self.
        self.raw.try_get(Self::TYPE, index).map(|elem| unsafe { elem.cast::<T>().as_mut() })
    }

    /// Returns a bounds-checked view over the contents of the DynArray.
    pub fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self)
    }

    /// Drops all elements, keeping the allocation.
    pub fn clear(&mut self) {
        let elems: *mut [T] = &mut **self;
        self.raw.clear();

        // SAFETY: The elements are no longer reachable through self, so they are dropped exactly
        // once, even if a destructor panics.
        unsafe { ptr::drop_in_place(elems) }
    }

    /// Sets the length in elements without touching the contents.
    ///
    /// # Safety
    /// `len` must not exceed the capacity, and the first `len` elements must be initialized.
    pub(crate) const unsafe fn set_len(&mut self, len: usize) {
        self.raw.len = len * Self::TYPE.size();
    }
}

impl<T: Copy> DynArray<T> {
    /// Appends a copy of every element in `items`, reserving with
    /// [`reserve_to_fit`](DynArray::reserve_to_fit) first so that only one reallocation happens.
    ///
    /// # Panics
    /// Panics if the capacity would exceed [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use standard_ext::collections::contiguous::DynArray;
    /// let source: DynArray<u32> = (0..1000).collect();
    /// let mut copy = DynArray::new();
    /// copy.extend_from_slice(&source);
    /// assert_eq!(copy, source);
    /// assert_eq!(copy.cap_bytes(), 4096);
    /// ```
    pub fn extend_from_slice(&mut self, items: &[T]) {
        let range = items.as_ptr_range();
        // SAFETY: items is a valid, initialized range of T which can't alias self while self is
        // borrowed mutably. T: Copy, so a byte copy is a valid copy.
        unsafe { self.raw.extend_from_raw(range.start.cast(), range.end.cast()) }
    }
}

impl DynArray<u8> {
    /// Compares the contents of two byte arrays for equality.
    pub fn equals_bytes(&self, other: &DynArray<u8>) -> bool {
        self.as_slice().equals_bytes(other.as_slice())
    }
}

/// Creates a [`DynArray`] containing the provided elements, pushed in order.
///
/// # Examples
/// ```
/// # use standard_ext::dyn_array;
/// let arr = dyn_array![1, 2, 3];
/// assert_eq!(&*arr, &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::collections::contiguous::DynArray::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut arr = $crate::collections::contiguous::DynArray::new();
        $(arr.push($item);)+
        arr
    }};
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_to_fit(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T: Copy> From<&[T]> for DynArray<T> {
    fn from(value: &[T]) -> Self {
        let mut arr = DynArray::new();
        arr.extend_from_slice(value);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop. The raw buffer is
        // freed afterwards by its own Drop.
        unsafe { ptr::drop_in_place(&mut **self as *mut [T]) }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The pointer is nonnull and aligned (dangling for an empty DynArray) and the
        // first len values are initialized. The borrow prevents mutation for the slice's lifetime.
        unsafe { slice::from_raw_parts(self.begin(), self.len()) }
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        let len = self.len();
        // SAFETY: As for deref, with a unique borrow of self.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: DynArray uniquely owns its elements, so it can be sent when T can.
unsafe impl<T: Send> Send for DynArray<T> {}
// SAFETY: DynArray's safe API obeys the borrow checker, with no interior mutability.
unsafe impl<T: Sync> Sync for DynArray<T> {}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut arr = DynArray::new();
        arr.reserve_to_fit(self.len());

        for value in self.iter() {
            arr.push(value.clone());
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: Hash> Hash for DynArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("contents", &&**self)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

/// Renders the contents as `{ 1, 2, 3 }`, or `{ }` when empty.
impl<T: Display> Display for DynArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some((last, init)) = self.split_last() else {
            return write!(f, "{{ }}");
        };

        write!(f, "{{ ")?;
        for item in init {
            write!(f, "{item}, ")?;
        }
        write!(f, "{last} }}")
    }
}
