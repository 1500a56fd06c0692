//! Two-phase priority queues.
//!
//! A sortinator alternates between an accepting phase, where elements are
//! added in any order, and an extracting phase, where they come back out
//! smallest-first under a caller-supplied ordering. Three interchangeable
//! strategies share the [`Sortinator`] contract:
//!
//! - [`EagerSortinator`] keeps its contents sorted on every insert.
//! - [`LazySortinator`] appends on insert and scans for the minimum on extract.
//! - [`HeapSortinator`] maintains a binary min-heap.
//!
//! ```
//! use sortinator::{HeapSortinator, Sortinator};
//!
//! let mut s = HeapSortinator::new(|a: &i32, b: &i32| a.cmp(b));
//! for n in [33, 9, 43, 0, -4] {
//! 	s.add(n)?;
//! }
//! s.switch_state();
//! assert_eq!(s.remove_smallest()?, -4);
//! # Ok::<(), sortinator::SortinatorError>(())
//! ```

/// The shared two-phase contract and its storage-order iterator.
pub mod contract;
/// Sorted-on-insert strategy.
pub mod eager;
/// Error type shared by every strategy.
pub mod error;
/// Binary min-heap strategy.
pub mod heap;
/// Sorted-on-extract strategy.
pub mod lazy;
/// Accepting/extracting phase flag.
pub mod mode;
/// Shared ordering function handle.
pub mod order;
/// Runtime strategy selection.
pub mod strategy;

pub use contract::{Iter, Sortinator};
pub use eager::EagerSortinator;
pub use error::{Result, SortinatorError};
pub use heap::HeapSortinator;
pub use lazy::LazySortinator;
pub use mode::Mode;
pub use order::Order;
pub use strategy::{Strategy, sort_with};
