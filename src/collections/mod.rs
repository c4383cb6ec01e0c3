//! General-purpose collection types.
//!
//! # Purpose
//! At the moment, this is the resizable buffer and its views, which everything else in the crate
//! (such as [`CString`](crate::string::CString)) is built on top of.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref), which saves me from
//! writing some of the more repetitive functionality.

pub mod contiguous;
