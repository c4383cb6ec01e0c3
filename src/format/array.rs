use crate::string::CString;

/// Appends the contents of `items` as `{ a, b, c }`, rendering each element with `cb`. An empty
/// input renders as `{ }`.
///
/// `items` can be anything that derefs to a slice, including a
/// [`DynArray`](crate::collections::contiguous::DynArray) or a
/// [`Slice`](crate::collections::contiguous::Slice).
///
/// # Examples
/// ```
/// # use standard_ext::{dyn_array, format, string::CString};
/// let arr = dyn_array![1, 2, 3];
/// let mut f = CString::new();
/// format::dyn_array(&mut f, &arr, format::decimal);
/// assert_eq!(f, "{ 1, 2, 3 }");
///
/// let mut f = CString::from("numbers: ");
/// format::dyn_array(&mut f, &arr, |f, n| format::lower_hex(f, &(n * 100)));
/// assert_eq!(f, "numbers: { 64, c8, 12c }");
/// ```
pub fn dyn_array<T, F>(f: &mut CString, items: &[T], mut cb: F)
where
    F: FnMut(&mut CString, &T),
{
    let Some((last, init)) = items.split_last() else {
        f.push_str("{ }");
        return;
    };

    f.push_str("{ ");
    for item in init {
        cb(f, item);
        f.push_str(", ");
    }
    cb(f, last);
    f.push_str(" }");
}
