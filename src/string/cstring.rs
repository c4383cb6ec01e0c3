use std::ffi::{c_char, CStr};
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::str as std_str;

use derive_more::{Display, Error, From};

use super::{utf8, Codepoints, Str};
use crate::collections::contiguous::DynArray;
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

const NUL: u8 = 0x00;

/// Bytes couldn't be added to a [`CString`].
#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq)]
pub enum FromBytesError {
    #[display("bytes are not valid utf-8: {_0}")]
    InvalidUtf8(std_str::Utf8Error),
}

/// An owned, growable UTF-8 string, which always ends in a NUL byte.
///
/// The trailing NUL isn't part of the string's contents: it isn't counted by
/// [`len`](CString::len) and isn't included in [`as_str`](CString::as_str). It is there so that
/// [`as_ptr`](CString::as_ptr) and [`as_cstr`](CString::as_cstr) can be handed straight to code
/// expecting a C string. If either property is unwanted, a [`DynArray<u8>`] is a better fit.
///
/// Some terminology used throughout:
/// - `CString`: this type, an owned `cstr`.
/// - `cstr`: NUL-terminated bytes, such as a [`CStr`].
/// - `str`: a view over valid UTF-8, see [`Str`].
///
/// NUL bytes can be pushed like any other codepoint, in which case C code will only see the
/// content up to the first one.
///
/// # Examples
/// ```
/// # use standard_ext::string::CString;
/// let mut greeting = CString::from("Hello, ");
/// greeting.push('世');
/// greeting.push_str("界!");
/// assert_eq!(greeting, "Hello, 世界!");
/// assert_eq!(greeting.as_cstr(), c"Hello, 世界!");
/// assert_eq!(greeting.len(), 14);
/// ```
pub struct CString {
    // Always ends with exactly one NUL that isn't part of the visible contents.
    buf: DynArray<u8>,
}

impl CString {
    /// Creates a new, empty CString. This allocates room for the terminator.
    pub fn new() -> CString {
        let mut buf = DynArray::new();
        buf.push(NUL);
        CString { buf }
    }

    /// Creates a CString from `bytes`, checking that they are valid UTF-8.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<CString, FromBytesError> {
        let mut string = CString::new();
        string.try_extend_bytes(bytes)?;
        Ok(string)
    }

    /// The length of the CString in bytes, excluding the terminator.
    pub const fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encodes `ch` as UTF-8 and appends it.
    pub fn push(&mut self, ch: char) {
        let mut encoded = [0; 4];
        let width = utf8::encode(ch, &mut encoded);

        // SAFETY: encode produces valid UTF-8.
        unsafe { self.extend_bytes_unchecked(&encoded[..width]) }
    }

    pub fn push_str(&mut self, text: &str) {
        // SAFETY: text is a str, so it is valid UTF-8.
        unsafe { self.extend_bytes_unchecked(text.as_bytes()) }
    }

    /// Appends `bytes` if they are valid UTF-8, leaving the CString unchanged otherwise.
    pub fn try_extend_bytes(&mut self, bytes: &[u8]) -> Result<(), FromBytesError> {
        let text = std_str::from_utf8(bytes)?;
        self.push_str(text);
        Ok(())
    }

    /// Appends `bytes` without checking them.
    ///
    /// # Safety
    /// `bytes` must be valid UTF-8.
    pub unsafe fn extend_bytes_unchecked(&mut self, bytes: &[u8]) {
        self.edit(|buf| buf.extend_from_slice(bytes));
    }

    /// Appends the contents of `cstr`, excluding its terminator.
    ///
    /// # Panics
    /// Panics if `cstr` isn't valid UTF-8.
    #[track_caller]
    pub fn extend_cstr(&mut self, cstr: &CStr) {
        self.try_extend_cstr(cstr).throw()
    }

    pub fn try_extend_cstr(&mut self, cstr: &CStr) -> Result<(), FromBytesError> {
        self.try_extend_bytes(cstr.to_bytes())
    }

    /// Returns the byte at `index`. The terminator is out of bounds.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> u8 {
        self.as_str().get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<u8, IndexOutOfBounds> {
        self.as_str().try_get(index)
    }

    /// Returns a pointer to the internal buffer, which is always NUL-terminated. It is
    /// invalidated by the next mutation.
    pub const fn as_ptr(&self) -> *const c_char {
        self.buf.as_ptr().cast()
    }

    /// Views the CString as a [`CStr`], which ends at the first NUL byte.
    pub fn as_cstr(&self) -> &CStr {
        // SAFETY: The buffer always contains a NUL, and stays borrowed for the returned lifetime.
        unsafe { CStr::from_ptr(self.as_ptr()) }
    }

    /// The contents, including the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// Views the contents, excluding the terminator.
    pub fn as_str(&self) -> Str<'_> {
        // SAFETY: Only valid UTF-8 is ever added, and the terminator is excluded.
        unsafe { Str::from_utf8_unchecked(&self.buf[..self.len()]) }
    }

    /// Returns an iterator over the codepoints of this CString.
    pub fn codepoints(&self) -> Codepoints<'_> {
        self.as_str().codepoints()
    }

    /// Removes all contents, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.buf.push(NUL);
    }

    /// Runs `f` with the terminator removed, and restores it afterwards, including when `f`
    /// panics.
    fn edit(&mut self, f: impl FnOnce(&mut DynArray<u8>)) {
        let mut guard = Unterminated::new(&mut self.buf);
        f(&mut *guard.buf);
    }
}

/// A CString's buffer with the terminator popped off. Dropping it pushes the terminator back, so
/// unwinding out of an edit still leaves the CString terminated.
struct Unterminated<'a> {
    buf: &'a mut DynArray<u8>,
}

impl<'a> Unterminated<'a> {
    fn new(buf: &'a mut DynArray<u8>) -> Unterminated<'a> {
        buf.pop();
        Unterminated { buf }
    }
}

impl Drop for Unterminated<'_> {
    fn drop(&mut self) {
        self.buf.push(NUL);
    }
}

impl Default for CString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CString {
    fn from(value: &str) -> Self {
        let mut string = CString::new();
        string.push_str(value);
        string
    }
}

impl Write for CString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push(c);
        Ok(())
    }
}

impl Extend<char> for CString {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.edit(|buf| {
            let mut encoded = [0; 4];
            for ch in iter {
                let width = utf8::encode(ch, &mut encoded);
                buf.extend_from_slice(&encoded[..width]);
            }
        });
    }
}

impl<'a> Extend<&'a str> for CString {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.edit(|buf| {
            for text in iter {
                buf.extend_from_slice(text.as_bytes());
            }
        });
    }
}

impl FromIterator<char> for CString {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut string = CString::new();
        string.extend(iter);
        string
    }
}

impl Clone for CString {
    fn clone(&self) -> Self {
        CString {
            buf: DynArray::from(&*self.buf),
        }
    }
}

impl PartialEq for CString {
    fn eq(&self, other: &Self) -> bool {
        self.buf.equals_bytes(&other.buf)
    }
}

impl Eq for CString {}

impl PartialEq<str> for CString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for CString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Debug for CString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.as_str(), f)
    }
}

impl Display for CString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_str(), f)
    }
}
