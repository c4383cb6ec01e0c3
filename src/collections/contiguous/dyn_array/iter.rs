use std::iter::FusedIterator;
use std::ptr;
use std::slice::{Iter, IterMut};

use super::DynArray;

impl<T> IntoIterator for DynArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            arr: self,
            front: 0,
        }
    }
}

/// An owned iterator over the elements of a [`DynArray`]. Elements which haven't been yielded
/// are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) arr: DynArray<T>,
    // Everything before front has been moved out already.
    pub(crate) front: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.arr.len() {
            return None;
        }

        // SAFETY: front < len, so the value is initialized, and it is never read again because
        // front only increases.
        let value = unsafe { self.arr.as_ptr().add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.arr.len() {
            return None;
        }

        self.arr.pop()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.arr.len() - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = &mut self.arr[self.front..];

        // SAFETY: Setting the length to 0 first means that the DynArray won't drop anything
        // itself, including the values that were moved out. The remaining values are initialized.
        unsafe {
            self.arr.set_len(0);
            ptr::drop_in_place(remaining);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
