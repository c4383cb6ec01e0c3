use std::fmt::{Display, LowerHex, Octal, UpperHex, Write};

use crate::string::CString;
use crate::util::result::ResultExtension;

/// Appends `value` in decimal, like `%d` or `%u`.
///
/// # Panics
/// Panics if the [`Display`] implementation of `T` returns an error.
#[track_caller]
pub fn decimal<T: Display + ?Sized>(f: &mut CString, value: &T) {
    write!(f, "{value}").throw()
}

/// Appends `value` in octal without a prefix, like `%o`.
///
/// # Panics
/// Panics if the [`Octal`] implementation of `T` returns an error.
#[track_caller]
pub fn octal<T: Octal + ?Sized>(f: &mut CString, value: &T) {
    write!(f, "{value:o}").throw()
}

/// Appends `value` in lowercase hexadecimal without a prefix, like `%x`.
///
/// Signed values are rendered as their two's complement, so `-1_i32` becomes `ffffffff`.
///
/// # Panics
/// Panics if the [`LowerHex`] implementation of `T` returns an error.
#[track_caller]
pub fn lower_hex<T: LowerHex + ?Sized>(f: &mut CString, value: &T) {
    write!(f, "{value:x}").throw()
}

/// Appends `value` in uppercase hexadecimal without a prefix, like `%X`.
///
/// # Panics
/// Panics if the [`UpperHex`] implementation of `T` returns an error.
#[track_caller]
pub fn upper_hex<T: UpperHex + ?Sized>(f: &mut CString, value: &T) {
    write!(f, "{value:X}").throw()
}
