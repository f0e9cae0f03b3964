//! A binary max-heap priority queue that sorts its keys according to a specified
//! total order rather than the [`Ord`] trait.
//!
//! [`BinaryMaxHeap`] keeps its keys in a growable array using the classic 1-based
//! layout (the parent of position `p` is `p / 2`, its children are `2p` and
//! `2p + 1`).  Insertion is amortized *O*(1), removal of the greatest key is
//! *O*(log(*n*)), and [`BinaryMaxHeap::iter`] walks the keys in decreasing order
//! without disturbing the heap.
//!
//! The order is chosen once, at construction, and is one of:
//!
//! * [`OrdTotalOrder`], which delegates to the key's own [`Ord`] implementation;
//! * any closure `Fn(&K, &K) -> Ordering`;
//! * any other implementation of [`TotalOrder`], such as [`Reversed`].
//!
//! ```
//! use maxpq::BinaryMaxHeap;
//!
//! let mut heap = BinaryMaxHeap::new();
//! for key in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(key);
//! }
//!
//! assert_eq!(heap.max(), Ok(&9));
//! assert_eq!(heap.iter().collect::<Vec<_>>(), [9, 8, 5, 3, 2, 1]);
//! assert_eq!(heap.len(), 6);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

extern crate alloc;

use core::cmp::Ordering;

mod polyfill;

pub mod binary_heap;
mod default;

pub use binary_heap::{BinaryMaxHeap, EmptyHeapError};
pub use default::{OrdTotalOrder, Reversed};

/// A total order over values of type `T`.
///
/// Implementations must be consistent with themselves for as long as a heap uses
/// them: the result of comparing two keys may not change while those keys are in
/// the heap.  Breaking this rule is a logic error; it cannot cause undefined
/// behaviour, but the heap may then hand keys back in an unspecified order.
///
/// Closures of type `Fn(&T, &T) -> Ordering` implement this trait.
pub trait TotalOrder<T: ?Sized> {
    /// Compare two values.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Tests whether `this` and `that` are equal.
    fn eq(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Tests whether `this` and `that` are not equal.
    fn ne(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Tests whether `this` is greater than or equal to `that`.
    fn ge(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Tests whether `this` is strictly greater than `that`.
    fn gt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Tests whether `this` is less than or equal to `that`.
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Tests whether `this` is strictly less than `that`.
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_lt()
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: ?Sized + Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}
