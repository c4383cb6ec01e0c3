#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::collections::contiguous::DynArray;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_from_range() {
    let values = [10_u64, 20, 30, 40, 50];
    let range = values[1..4].as_ptr_range();

    // SAFETY: The range comes from a live, immutable array.
    let view = unsafe { Slice::from_range(range.start, range.end) };
    assert_eq!(view.len(), 3);
    assert_eq!(view.len_bytes(), 24);
    assert_eq!(*view.get(0), 20);
    assert_eq!(*view.get(2), 40);
    assert_eq!(view.begin(), range.start);
    assert_eq!(view.end(), range.end);
}

#[test]
fn test_bounds() {
    let arr: DynArray<i32> = (0..4).collect();
    let view = arr.as_slice();

    assert_eq!(view.try_get(3), Ok(&3));
    assert_eq!(view.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    assert_panics!(
        {
            view.get(4);
        },
        "Indexing at the length should panic."
    );
    assert_panics!({
        view.get(usize::MAX);
    });

    let empty = Slice::<i32>::new(&[]);
    assert!(empty.is_empty());
    assert_panics!({
        empty.get(0);
    });
}

#[test]
fn test_view_outlives_mutation_of_copy() {
    let mut arr: DynArray<i32> = (0..4).collect();
    let copy = arr.clone();
    let view = copy.as_slice();

    arr.push(4);
    arr.clear();

    assert_eq!(
        &*view,
        &[0, 1, 2, 3],
        "A view borrows its own source, and is unaffected by other arrays."
    );
}

#[test]
fn test_compare_bytes() {
    let hello = Slice::new(b"hello");
    let world = Slice::new(b"world");
    let hi = Slice::new(b"hi");

    assert_eq!(hello.compare_bytes(hello), Ordering::Equal);
    assert_eq!(hello.compare_bytes(world), Ordering::Less);
    assert_eq!(world.compare_bytes(hello), Ordering::Greater);
    assert_eq!(
        hi.compare_bytes(hello),
        Ordering::Less,
        "A shorter range should order first, regardless of content."
    );
    assert_eq!(hello.compare_bytes(hi), Ordering::Greater);
    assert_eq!(Slice::new(b"").compare_bytes(Slice::new(b"")), Ordering::Equal);

    assert!(hello.equals_bytes(Slice::new(b"hello")));
    assert!(!hello.equals_bytes(world));
    assert!(!hello.equals_bytes(Slice::new(b"hell")));
}
