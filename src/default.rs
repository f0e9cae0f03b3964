//! Ready-made total orders: the natural order of a type, and the reversal of
//! any other order.
//!
//! [`OrdTotalOrder`] is what a [`BinaryMaxHeap`](crate::BinaryMaxHeap) uses when
//! no comparator is supplied, making it behave like the standard library's
//! `BinaryHeap`.

use crate::TotalOrder;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> OrdTotalOrder<T> {
    /// Creates the natural order of `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder<T> {
    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // The default implementations of the following methods are overridden so that
    // they delegate to `T`'s implementations of [`PartialEq`] and [`PartialOrd`]
    // rather than merely using its implementation of [`Ord`].
    //
    // If, as required by those traits, `T`'s implementations are consistent with
    // one another, then these overrides will have no effect.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// A total order that reverses another one.
///
/// Wrapping the order of a [`BinaryMaxHeap`](crate::BinaryMaxHeap) in `Reversed`
/// turns it into a min-heap.
///
/// ```
/// use maxpq::{BinaryMaxHeap, OrdTotalOrder, Reversed};
///
/// let mut heap = BinaryMaxHeap::with_order(Reversed(OrdTotalOrder::<i32>::new()));
/// heap.extend([4, 1, 3]);
///
/// assert_eq!(heap.delete_max(), Ok(1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: TotalOrder<T>> TotalOrder<T> for Reversed<O> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self.0.cmp(that, this)
    }

    fn gt(&self, this: &T, that: &T) -> bool {
        self.0.lt(this, that)
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        self.0.gt(this, that)
    }
}
