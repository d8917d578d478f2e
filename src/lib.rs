#![no_std]

//! `StrideVec`: a growable type-erased vector over fixed-size elements.
//!
//! `StrideVec` stores elements of one fixed byte size in a single owned,
//! contiguous buffer with explicit size/capacity bookkeeping. Elements are
//! addressed by index and handled as opaque byte payloads; the element size
//! (the stride) is chosen at construction and never changes.
//!
//! This crate is `no_std` compatible (it requires `alloc`).
//!
//! # Capacity policy
//!
//! - A fresh vector holds one element slot (the capacity floor).
//! - An append into a full vector doubles the capacity first, bounding the
//!   total copy cost of N appends to O(N).
//! - Once a removal leaves the vector at a quarter occupancy or less, the
//!   capacity is halved (never below the floor). A shrink that cannot get
//!   memory is harmless: the removal still succeeds and the vector keeps
//!   its larger buffer.
//! - Growth that cannot get memory aborts the triggering operation and
//!   leaves the vector exactly as it was.
//!
//! ```
//! use stridevec::StrideVec;
//!
//! let mut vec = StrideVec::new(4).unwrap();
//!
//! vec.push_back(&1i32.to_le_bytes()).unwrap();
//! vec.push_back(&2i32.to_le_bytes()).unwrap();
//! vec.push_back(&3i32.to_le_bytes()).unwrap();
//!
//! assert_eq!(vec.len(), 3);
//! assert_eq!(vec.get(1), Some(&2i32.to_le_bytes()[..]));
//!
//! vec.insert(1, &9i32.to_le_bytes()).unwrap();
//! assert_eq!(vec.get(1), Some(&9i32.to_le_bytes()[..]));
//! assert_eq!(vec.get(2), Some(&2i32.to_le_bytes()[..]));
//!
//! vec.erase(0).unwrap();
//! assert_eq!(vec.len(), 3);
//! ```
//!
//! # Typed interface
//!
//! [`TypedVec`] fixes the stride to `size_of::<T>()` and moves values in
//! and out by copy, so callers never touch raw payload bytes:
//!
//! ```
//! use stridevec::TypedVec;
//!
//! let mut values: TypedVec<u64> = TypedVec::new().unwrap();
//!
//! values.push_back(10).unwrap();
//! values.push_back(20).unwrap();
//! values.assign_n(1, 5).unwrap();
//!
//! assert_eq!(values.get(0), Some(5));
//! assert_eq!(values.get(1), Some(20));
//! ```
//!
//! # Error reporting
//!
//! Every fallible operation returns a [`StrideVecError`] naming the exact
//! failure; there is no global error state. The error's `Display` output
//! is the human-readable description ("Invalid element size", "Index out
//! of range: ...", and so on) for callers that log or surface failures.
//!
//! ```
//! use stridevec::{StrideVec, StrideVecError};
//!
//! let mut vec = StrideVec::new(2).unwrap();
//! let err = vec.try_get(0).unwrap_err();
//! assert!(matches!(err, StrideVecError::OutOfRange { index: 0, length: 0 }));
//! ```

extern crate alloc;

mod core;
mod error;
mod storage;
mod typed;

// Re-export public types
pub use crate::core::StrideVec;
pub use crate::error::StrideVecError;
pub use crate::typed::TypedVec;
