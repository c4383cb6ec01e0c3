use standard_ext::collections::contiguous::DynArray;
use standard_ext::dyn_array;
use standard_ext::format;
use standard_ext::string::CString;

fn main() {
    println!("\n[DynArray]\n");

    let mut arr = DynArray::<i32>::new();
    for i in 0..100_000 {
        arr.push(i);
    }
    let view = arr.as_slice();

    let mut copy = DynArray::new();
    copy.extend_from_slice(&view);

    let copy_view = copy.as_slice();
    for i in 2345..2356 {
        print!("{} ", copy_view.get(i));
    }
    println!();
    println!("{}", copy.len());

    println!("\n[Format]\n");

    let arr = dyn_array![1, 2, 3];
    let mut f = CString::new();
    format::dyn_array(&mut f, &arr, format::decimal);
    println!("{f}");
}
