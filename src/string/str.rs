use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str as std_str;

use super::Codepoints;
use crate::collections::contiguous::Slice;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A borrowed view over valid UTF-8, such as the visible contents of a
/// [`CString`](super::CString).
///
/// Indexing is by byte. To work with codepoints, use [`Str::codepoints`].
///
/// Ordering compares lengths first, see [`Slice::compare_bytes`].
#[derive(Clone, Copy)]
pub struct Str<'a> {
    bytes: Slice<'a, u8>,
}

impl<'a> Str<'a> {
    pub const fn new(text: &'a str) -> Str<'a> {
        Str {
            bytes: Slice::new(text.as_bytes()),
        }
    }

    /// Creates a Str from bytes without checking that they are valid UTF-8.
    ///
    /// # Safety
    /// `bytes` must be valid UTF-8.
    pub const unsafe fn from_utf8_unchecked(bytes: &'a [u8]) -> Str<'a> {
        Str {
            bytes: Slice::new(bytes),
        }
    }

    /// Creates a Str over the bytes in `[begin, end)`.
    ///
    /// # Safety
    /// All of the requirements of [`Slice::from_range`] apply, and the range must be valid UTF-8.
    pub unsafe fn from_range(begin: *const u8, end: *const u8) -> Str<'a> {
        Str {
            // SAFETY: Passed on to the caller.
            bytes: unsafe { Slice::from_range(begin, end) },
        }
    }

    pub const fn begin(&self) -> *const u8 {
        self.bytes.begin()
    }

    pub const fn end(&self) -> *const u8 {
        self.bytes.end()
    }

    /// The length of the Str in bytes. For the number of codepoints, count
    /// [`codepoints`](Str::codepoints).
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get(&self, index: usize) -> u8 {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<u8, IndexOutOfBounds> {
        self.bytes.try_get(index).copied()
    }

    pub const fn as_bytes(&self) -> Slice<'a, u8> {
        self.bytes
    }

    pub const fn as_str(&self) -> &'a str {
        // SAFETY: A Str can only be constructed from valid UTF-8.
        unsafe { std_str::from_utf8_unchecked(self.bytes.to_slice()) }
    }

    /// Returns an iterator over the codepoints of this Str.
    pub const fn codepoints(&self) -> Codepoints<'a> {
        Codepoints::new(self.bytes)
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(value: &'a str) -> Self {
        Str::new(value)
    }
}

impl PartialEq for Str<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.equals_bytes(other.bytes)
    }
}

impl Eq for Str<'_> {}

impl PartialOrd for Str<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Str<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.compare_bytes(other.bytes)
    }
}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for Str<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Debug for Str<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl Display for Str<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}
