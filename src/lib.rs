//! This crate is my attempt at writing a small extension to the standard library, centred on one
//! growable buffer and the things built on top of it.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. The interesting part is the growth engine behind
//! [`DynArray`](collections::contiguous::DynArray): all of its capacity arithmetic happens in
//! bytes, with the element size supplied on each call, so that the same buffer can back typed
//! arrays, byte strings and views alike.
//!
//! # Layout
//! - [`collections::contiguous`]: the untyped [`RawDynArray`](collections::contiguous::RawDynArray),
//!   the typed [`DynArray`](collections::contiguous::DynArray) and the borrowed
//!   [`Slice`](collections::contiguous::Slice) view.
//! - `string` (feature `string`): a NUL-terminated UTF-8 builder, `CString`, and its views.
//! - `format` (feature `format`): formatters which render integers and arrays into a `CString`.
//!
//! # Error Handling
//! Specifically for a standard library, it is more ergonomic for functions to panic in some cases,
//! because users don't want to be forced to handle an error every time they invoke a method. For
//! example, imagine having to handle the possibility of a capacity overflow every time you push
//! into a DynArray. So, errors come in two tiers:
//! - Fatal: out of bounds accesses and capacity overflows panic with a typed error, and running out
//!   of memory aborts via [`handle_alloc_error`](std::alloc::handle_alloc_error).
//! - Benign: popping from an empty array returns [`None`].
//!
//! Every panicking accessor has a `try_` twin which returns the typed error as a [`Result`]
//! instead. The error types are small structs that implement [`Error`](std::error::Error).
//!
//! # Logging
//! Reallocations are reported through the [`log`] facade at the trace level. This crate never
//! installs a logger itself.
//!
//! # Dependencies
//! This crate uses `std` for allocation, but not its collections: I'm not going to go and use
//! [`Vec`] to write [`DynArray`](collections::contiguous::DynArray) or anything. It also depends on
//! some derive macros because they're helpful and remove the need for some very repetitive
//! programming.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "format")]
pub mod format;
#[cfg(feature = "string")]
pub mod string;

pub(crate) mod util;
