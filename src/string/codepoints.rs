use std::iter::FusedIterator;

use super::utf8;
use crate::collections::contiguous::Slice;

/// An iterator over the codepoints of a [`Str`](super::Str) or [`CString`](super::CString).
///
/// This iterator is `O(n)` over the bytes.
///
/// # Examples
/// ```
/// # use standard_ext::string::CString;
/// let string = CString::from("Hi, 世界");
/// let mut codepoints = string.codepoints();
/// assert_eq!(codepoints.next(), Some('H'));
/// assert_eq!(codepoints.nth(3), Some('世'));
/// assert!(codepoints.has_next());
/// assert_eq!(codepoints.next(), Some('界'));
/// assert!(!codepoints.has_next());
/// ```
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    // The unvisited bytes, begin advances as iteration progresses.
    iter: Slice<'a, u8>,
}

impl<'a> Codepoints<'a> {
    pub(crate) const fn new(bytes: Slice<'a, u8>) -> Codepoints<'a> {
        Codepoints { iter: bytes }
    }

    /// Checks if a call to [`next`](Iterator::next) will produce a codepoint.
    pub const fn has_next(&self) -> bool {
        !self.iter.is_empty()
    }
}

impl Iterator for Codepoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.iter.to_slice();

        let Some((ch, width)) = utf8::decode(bytes) else {
            // Only reachable for an empty iterator, the bytes are always valid UTF-8.
            self.iter = Slice::new(&[]);
            return None;
        };

        self.iter = Slice::new(&bytes[width..]);
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.iter.len();
        (len.div_ceil(4), Some(len))
    }
}

impl FusedIterator for Codepoints<'_> {}
