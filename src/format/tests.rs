#![cfg(test)]

use super::*;
use crate::collections::contiguous::{DynArray, Slice};
use crate::dyn_array;
use crate::string::CString;

fn render<T: ?Sized>(value: &T, formatter: fn(&mut CString, &T)) -> CString {
    let mut f = CString::new();
    formatter(&mut f, value);
    f
}

#[test]
fn test_int_dyn_array() {
    let arr = dyn_array![1_i32, 2, 3];
    let mut f = CString::new();
    dyn_array(&mut f, &arr, decimal);

    assert_eq!(f, "{ 1, 2, 3 }");
    assert_eq!(f.as_cstr(), c"{ 1, 2, 3 }");
}

#[test]
fn test_dyn_array_edge_cases() {
    let empty: DynArray<i32> = DynArray::new();
    let mut f = CString::new();
    dyn_array(&mut f, &empty, decimal);
    assert_eq!(f, "{ }", "An empty array should render without reading any element.");

    let mut f = CString::new();
    dyn_array(&mut f, &[42_u64], decimal);
    assert_eq!(f, "{ 42 }");

    let arr = dyn_array![1_u32, 2, 3, 4, 5];
    let view = Slice::new(&arr[1..4]);
    let mut f = CString::from("view: ");
    dyn_array(&mut f, &view, |f, n| {
        f.push('#');
        octal(f, n);
    });
    assert_eq!(f, "view: { #2, #3, #4 }");
}

#[test]
fn test_nested() {
    let rows = dyn_array![dyn_array![1, 2], DynArray::new(), dyn_array![3]];
    let mut f = CString::new();
    dyn_array(&mut f, &rows, |f, row| dyn_array(f, row, decimal));
    assert_eq!(f, "{ { 1, 2 }, { }, { 3 } }");
}

#[test]
fn test_integers() {
    assert_eq!(render(&-42_i32, decimal), "-42");
    assert_eq!(render(&u64::MAX, decimal), "18446744073709551615");
    assert_eq!(render(&i8::MIN, decimal), "-128");
    assert_eq!(render(&isize::MIN, decimal), isize::MIN.to_string().as_str());

    assert_eq!(render(&8_u32, octal), "10");
    assert_eq!(render(&0o777_usize, octal), "777");

    assert_eq!(render(&255_u8, lower_hex), "ff");
    assert_eq!(render(&255_u8, upper_hex), "FF");
    assert_eq!(render(&-1_i32, lower_hex), "ffffffff");
    assert_eq!(render(&0xDEAD_BEEF_u64, upper_hex), "DEADBEEF");
    assert_eq!(render(&0_u128, lower_hex), "0");
}

#[test]
fn test_appends() {
    let mut f = CString::from("size=");
    decimal(&mut f, &1024_usize);
    f.push_str(", mask=0x");
    upper_hex(&mut f, &0xFF00_u16);

    assert_eq!(f, "size=1024, mask=0xFF00");
    assert_eq!(f.as_bytes_with_nul().last(), Some(&0));
}
