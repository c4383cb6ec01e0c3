#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::collections::contiguous::raw::MIN_CAP;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_then_pop_in_reverse() {
    let mut arr = DynArray::<i32>::new();
    for n in [1, 2, 4, 4, 5, 6, 7, 8, 9, 10] {
        arr.push(n);
    }

    let mut it = arr.begin();
    let mut seen = DynArray::new();
    while it != arr.end() {
        // SAFETY: it stays within [begin, end) and arr isn't mutated during the loop.
        unsafe {
            seen.push(*it);
            it = it.add(1);
        }
    }
    assert_eq!(*seen, [1, 2, 4, 4, 5, 6, 7, 8, 9, 10]);

    let popped: DynArray<_> = iter::from_fn(|| arr.pop()).take(10).collect();
    assert_eq!(*popped, [10, 9, 8, 7, 6, 5, 4, 4, 2, 1]);
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.pop(), None, "Popping an empty DynArray should return None.");
}

#[test]
fn test_growth() {
    let mut arr = DynArray::<u64>::new();
    assert_eq!(arr.cap_bytes(), 0, "A new DynArray shouldn't allocate.");

    arr.push(0);
    assert_eq!(arr.cap(), MIN_CAP);
    assert_eq!(arr.cap_bytes(), MIN_CAP * 8);

    for n in 1..=MIN_CAP as u64 {
        arr.push(n);
    }
    assert_eq!(arr.cap(), MIN_CAP * 2, "Growth should double the capacity.");

    let cap = arr.cap_bytes();
    while arr.pop().is_some() {}
    assert_eq!(arr.cap_bytes(), cap, "Popping should never release capacity.");
}

#[test]
fn test_copy_large_array() {
    let mut arr = DynArray::<i32>::new();
    for n in 0..100_000 {
        arr.push(n);
    }

    let view = arr.as_slice();
    let mut copy = DynArray::new();
    copy.extend_from_slice(&view);

    assert_eq!(*copy.get(2345), 2345);
    assert_eq!(copy.len(), 100_000);
    assert_eq!(
        copy.cap_bytes(),
        (100_000 * 4_usize).next_power_of_two(),
        "Bulk extension should allocate once, to the smallest power of two that fits."
    );
    assert_eq!(copy, arr);
}

#[test]
fn test_extend_round_trip() {
    let mut arr = DynArray::from([0xAA_u16, 0xBB]);
    let source = [1_u16, 2, 3, 4, 5, 6, 7];
    let before = arr.len();

    arr.extend_from_slice(&source);
    assert_eq!(
        &arr[before..],
        &source,
        "The new region should be identical to the source range."
    );
    assert_eq!(&arr[..before], &[0xAA, 0xBB]);
}

#[test]
fn test_get() {
    let mut arr: DynArray<_> = (0_usize..5).collect();
    assert_eq!(*arr.get(4), 4);
    *arr.get_mut(1) = 100;
    assert_eq!(arr.try_get(1), Ok(&100));

    assert_eq!(arr.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert!(arr.try_get_mut(7).is_err());

    assert_panics!(
        {
            arr.get(5);
        },
        "Getting at index == len should panic."
    );
    assert_panics!(
        {
            arr.get_mut(usize::MAX);
        },
        contains = "index out of bounds"
    );
}

#[test]
fn test_push_returns_slot() {
    let mut arr = DynArray::new();
    arr.push(String::from("a"));
    arr.push(String::new()).push_str("bc");
    assert_eq!(arr.get(1), "bc");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let popped = arr.pop();
    assert_eq!(counter.count(), 0, "Popping should move the value out, not drop it.");
    drop(popped);
    assert_eq!(counter.count(), 1);

    drop(arr);
    assert_eq!(counter.count(), 10, "The remaining 9 elements should have been dropped.");

    let counter = CountedDrop::new(0);
    let mut arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let cap = arr.cap();
    arr.clear();
    assert_eq!(counter.count(), 4, "Clearing should drop every element.");
    assert_eq!(arr.cap(), cap, "Clearing should keep the allocation.");
}

#[test]
fn test_into_iter() {
    let arr: DynArray<_> = (0_usize..5).collect();
    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new(0);
    let arr: DynArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = arr.into_iter();
    let taken = iter.next();
    drop(iter);
    assert_eq!(
        counter.count(),
        9,
        "Dropping an owned iterator should drop the elements it hasn't yielded."
    );
    drop(taken);
    assert_eq!(counter.count(), 10);

    let mut arr: DynArray<_> = (0_usize..3).collect();
    for n in &mut arr {
        *n *= 2;
    }
    assert_eq!((&arr).into_iter().sum::<usize>(), 6);
}

#[test]
fn test_equality_and_hash() {
    let arr: DynArray<usize> = (0..5).collect();

    assert_eq!(arr, DynArray::from([0, 1, 2, 3, 4]));
    assert_eq!(arr, DynArray::from(&[0, 1, 2, 3, 4][..]));
    assert_ne!(arr, DynArray::from([0, 1, 2, 5, 4]));
    assert_eq!(arr.clone(), arr);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Hashing should match the hash of the equivalent slice."
    );

    let bytes = DynArray::from(*b"bytes");
    assert!(bytes.equals_bytes(&DynArray::from(*b"bytes")));
    assert!(!bytes.equals_bytes(&DynArray::from(*b"byte")));
}

#[test]
fn test_macro_and_display() {
    let arr = crate::dyn_array![1, 2, 3];
    assert_eq!(arr.to_string(), "{ 1, 2, 3 }");
    assert_eq!(arr.cap(), MIN_CAP, "The macro should push, using regular growth.");

    let empty: DynArray<i32> = crate::dyn_array![];
    assert_eq!(empty.to_string(), "{ }");
    assert_eq!(crate::dyn_array![7].to_string(), "{ 7 }");
}

#[test]
fn test_reserve_to_fit() {
    let mut arr = DynArray::<u32>::new();
    arr.reserve_to_fit(3);
    assert_eq!(arr.cap_bytes(), 16);

    // SAFETY: Room for three elements has just been reserved.
    unsafe {
        arr.push_unchecked(1);
        arr.push_unchecked(2);
        arr.push_unchecked(3);
    }
    assert_eq!(*arr, [1, 2, 3]);
    assert_eq!(arr.cap_bytes(), 16);

    assert_panics!(
        {
            DynArray::<u32>::new().reserve_to_fit(usize::MAX);
        },
        contains = "capacity overflow"
    );
}
