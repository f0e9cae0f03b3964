//! A priority queue implemented with a binary max-heap.
//!
//! Insertion is amortized *O*(1) and popping the greatest key is *O*(log(*n*)).
//! Checking the greatest key is *O*(1). The keys can be traversed in decreasing
//! order without modifying the heap: [`BinaryMaxHeap::iter`] drains a private
//! snapshot instead.
//!
//! # Examples
//!
//! Keeping the three most urgent jobs of a backlog, most urgent first:
//!
//! ```
//! use maxpq::BinaryMaxHeap;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//!     urgency: u8,
//! }
//!
//! let mut backlog = BinaryMaxHeap::with_comparator(4, |a: &Job, b: &Job| {
//!     a.urgency.cmp(&b.urgency)
//! });
//!
//! backlog.insert(Job { name: "docs", urgency: 1 });
//! backlog.insert(Job { name: "outage", urgency: 9 });
//! backlog.insert(Job { name: "release", urgency: 6 });
//! backlog.insert(Job { name: "refactor", urgency: 3 });
//!
//! let names: Vec<_> = backlog.iter().take(3).map(|job| job.name).collect();
//! assert_eq!(names, ["outage", "release", "refactor"]);
//!
//! // The backlog itself was not touched by the traversal.
//! assert_eq!(backlog.len(), 4);
//! assert_eq!(backlog.delete_max().map(|job| job.name), Ok("outage"));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem;

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use crate::{OrdTotalOrder, TotalOrder};

#[cfg(test)]
mod tests;

/// The capacity of a heap created without an explicit one.
const DEFAULT_CAPACITY: usize = 1;

// Heap positions are 1-based: the root is at position 1 and position 0 is never
// used, which keeps the parent/child arithmetic free of offsets.  Position `pos`
// is stored at index `pos - 1` of the backing vector.

#[inline]
const fn parent(pos: usize) -> usize {
    pos / 2
}

#[inline]
const fn left_child(pos: usize) -> usize {
    2 * pos
}

#[inline]
const fn right_child(pos: usize) -> usize {
    2 * pos + 1
}

#[inline]
const fn index(pos: usize) -> usize {
    pos - 1
}

/// A priority queue implemented with a binary max-heap.
///
/// Keys are ordered by `O`, which is fixed when the heap is created: by default
/// the keys' own [`Ord`] implementation, otherwise any [`TotalOrder`] including
/// closures `Fn(&K, &K) -> Ordering`. Because the natural-order constructors
/// require `K: Ord`, a heap of keys that cannot be compared is rejected at
/// compile time.
///
/// Keys are laid out as a complete binary tree at 1-based positions
/// `1..=len()`: position `p` has parent `p / 2` and children `2p` and `2p + 1`.
/// Every key compares greater than or equal to its children.
///
/// The heap manages its own storage. It doubles its capacity when an insertion
/// finds it full, and halves it when a removal leaves it a quarter full, so both
/// insertion and removal stay amortized constant-time in their resizing cost.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key, as determined by `O`, changes while it is in the
/// heap. This is normally only possible through interior mutability, global
/// state, I/O, or unsafe code. The behavior resulting from such a logic error is
/// not specified, but will be encapsulated to the `BinaryMaxHeap` that observed
/// the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use maxpq::BinaryMaxHeap;
///
/// let mut heap = BinaryMaxHeap::new();
/// assert!(heap.max().is_err());
///
/// heap.insert(1);
/// heap.insert(5);
/// heap.insert(2);
///
/// assert_eq!(heap.max(), Ok(&5));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.delete_max(), Ok(5));
/// assert_eq!(heap.delete_max(), Ok(2));
/// assert_eq!(heap.delete_max(), Ok(1));
/// assert!(heap.delete_max().is_err());
/// ```
///
/// ## Min-heap
///
/// A comparator that reverses the natural order makes `delete_max` return the
/// smallest key first.
///
/// ```
/// use maxpq::BinaryMaxHeap;
///
/// let mut heap = BinaryMaxHeap::with_comparator(8, |a: &i32, b: &i32| b.cmp(a));
/// heap.extend([1, 5, 2]);
///
/// assert_eq!(heap.delete_max(), Ok(1));
/// assert_eq!(heap.delete_max(), Ok(2));
/// assert_eq!(heap.delete_max(), Ok(5));
/// ```
///
/// # Time complexity
///
/// | [insert] | [delete_max]      | [max] |
/// |----------|-------------------|-------|
/// | *O*(1)~  | *O*(log(*n*))~    | *O*(1)|
///
/// [insert]: BinaryMaxHeap::insert
/// [delete_max]: BinaryMaxHeap::delete_max
/// [max]: BinaryMaxHeap::max
pub struct BinaryMaxHeap<K, O = OrdTotalOrder<K>> {
    // position `p` lives at `data[p - 1]`; `data.len()` is the heap's size
    data: Vec<K>,
    // storage length counting the unused position 0, so capacity is `slots - 1`
    slots: usize,
    order: O,
}

/// The error returned when the greatest key of an empty heap is requested.
///
/// ```
/// use maxpq::{BinaryMaxHeap, EmptyHeapError};
///
/// let mut heap = BinaryMaxHeap::<u8>::new();
/// assert_eq!(heap.delete_max(), Err(EmptyHeapError));
/// assert_eq!(EmptyHeapError.to_string(), "priority queue is empty");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("priority queue is empty")
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl crate::polyfill::Error for EmptyHeapError {}

impl<K: Ord> BinaryMaxHeap<K> {
    /// Creates an empty `BinaryMaxHeap` ordered by the keys' [`Ord`]
    /// implementation, with the minimal default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let mut heap = BinaryMaxHeap::new();
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn new() -> BinaryMaxHeap<K> {
        BinaryMaxHeap::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `BinaryMaxHeap` ordered by the keys' [`Ord`]
    /// implementation, able to hold `capacity` keys before it has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let mut heap = BinaryMaxHeap::with_capacity(10);
    /// assert_eq!(heap.capacity(), 10);
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> BinaryMaxHeap<K> {
        BinaryMaxHeap::with_capacity_and_order(capacity, OrdTotalOrder::new())
    }
}

impl<K, F> BinaryMaxHeap<K, F>
where
    F: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty `BinaryMaxHeap` able to hold `capacity` keys, ordered by
    /// `comparator` instead of the keys' natural order.
    ///
    /// The key for which `comparator` reports [`Ordering::Greater`] against every
    /// other key is the one [`delete_max`](Self::delete_max) returns first.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    ///
    /// let mut heap = BinaryMaxHeap::with_comparator(2, |a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    /// heap.extend([3, -7, 5]);
    /// assert_eq!(heap.max(), Ok(&-7));
    /// ```
    #[must_use]
    pub fn with_comparator(capacity: usize, comparator: F) -> BinaryMaxHeap<K, F> {
        BinaryMaxHeap::with_capacity_and_order(capacity, comparator)
    }
}

impl<K, O> BinaryMaxHeap<K, O> {
    /// Creates an empty `BinaryMaxHeap` ordered by `order`, with the minimal
    /// default capacity.
    #[must_use]
    pub fn with_order(order: O) -> BinaryMaxHeap<K, O> {
        BinaryMaxHeap::with_capacity_and_order(DEFAULT_CAPACITY, order)
    }

    /// Creates an empty `BinaryMaxHeap` ordered by `order`, able to hold
    /// `capacity` keys before it has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::{BinaryMaxHeap, OrdTotalOrder, Reversed};
    ///
    /// let mut heap = BinaryMaxHeap::with_capacity_and_order(3, Reversed(OrdTotalOrder::<char>::new()));
    /// heap.extend(['m', 'a', 'x']);
    /// assert_eq!(heap.capacity(), 3);
    /// assert_eq!(heap.max(), Ok(&'a'));
    /// ```
    #[must_use]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> BinaryMaxHeap<K, O> {
        BinaryMaxHeap { data: Vec::with_capacity(capacity), slots: capacity + 1, order }
    }

    /// Returns the greatest key in the heap without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyHeapError`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::{BinaryMaxHeap, EmptyHeapError};
    ///
    /// let mut heap = BinaryMaxHeap::new();
    /// assert_eq!(heap.max(), Err(EmptyHeapError));
    ///
    /// heap.extend([1, 5, 2]);
    /// assert_eq!(heap.max(), Ok(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    pub fn max(&self) -> Result<&K, EmptyHeapError> {
        self.peek().ok_or(EmptyHeapError)
    }

    /// Returns the greatest key in the heap, or `None` if it is empty.
    #[must_use]
    pub fn peek(&self) -> Option<&K> {
        self.data.first()
    }

    /// Returns the number of keys in the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let heap = BinaryMaxHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of keys the heap can hold before it grows.
    ///
    /// This follows the heap's own resizing policy rather than whatever the
    /// allocator handed out: it doubles on insertion into a full heap and halves
    /// once a removal leaves the heap a quarter full.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    ///
    /// let mut heap = BinaryMaxHeap::with_capacity(3);
    /// heap.extend([1, 2, 3]);
    /// assert_eq!(heap.capacity(), 3);
    ///
    /// heap.insert(4);
    /// assert_eq!(heap.capacity(), 7);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots - 1
    }

    /// Borrows the order this heap sorts its keys by.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Drops every key and returns the storage to the default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let mut heap = BinaryMaxHeap::from([1, 3]);
    ///
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.data.clear();
        self.set_slots(DEFAULT_CAPACITY + 1);
    }

    /// Consumes the heap and returns its keys in storage (heap) order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<K> {
        self.data
    }

    /// Returns `true` when the next insertion must grow the storage.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    fn set_slots(&mut self, slots: usize) {
        debug_assert!(slots > self.len());
        log::trace!(
            "resizing heap storage from {} to {} slots ({} keys)",
            self.slots,
            slots,
            self.len()
        );
        if slots < self.slots {
            self.data.shrink_to(slots - 1);
        }
        self.slots = slots;
    }

    fn grow(&mut self) {
        let slots = self.slots * 2;
        self.data.reserve_exact(slots - 1 - self.len());
        self.set_slots(slots);
    }

    fn try_grow(&mut self) -> Result<(), TryReserveError> {
        let slots = self.slots * 2;
        self.data.try_reserve_exact(slots - 1 - self.len())?;
        self.set_slots(slots);
        Ok(())
    }

    /// Halves the storage once removals have left it a quarter full.
    fn shrink_if_sparse(&mut self) {
        let len = self.len();
        if len > 0 && len == self.capacity() / 4 {
            self.set_slots(self.slots / 2);
        }
    }
}

impl<K, O: TotalOrder<K>> BinaryMaxHeap<K, O> {
    /// Builds a full heap out of `vec`, ordered by `order`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    ///
    /// let heap = BinaryMaxHeap::from_vec_and_order(vec![3, -7, 5], |a: &i32, b: &i32| {
    ///     a.abs().cmp(&b.abs())
    /// });
    /// assert_eq!(heap.capacity(), 3);
    /// assert_eq!(heap.max(), Ok(&-7));
    /// ```
    pub fn from_vec_and_order(mut vec: Vec<K>, order: O) -> BinaryMaxHeap<K, O> {
        let capacity = vec.len().max(DEFAULT_CAPACITY);
        vec.shrink_to(capacity);
        let mut heap = BinaryMaxHeap { data: vec, slots: capacity + 1, order };
        heap.rebuild();
        heap
    }

    /// Inserts a key into the heap.
    ///
    /// If the heap is full its capacity is doubled first.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let mut heap = BinaryMaxHeap::new();
    /// heap.insert(3);
    /// heap.insert(5);
    /// heap.insert(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.max(), Ok(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The amortized cost of `insert` is *O*(1) when keys arrive in no
    /// particular order, since a new key swims up only a constant number of
    /// levels on average. Keys inserted in ascending order each swim all the way
    /// to the root, for *O*(log(*n*)) per call. A single call that has to grow
    /// the storage additionally costs *O*(*n*); that cost is amortized over the
    /// insertions that filled the storage.
    pub fn insert(&mut self, key: K) {
        if self.is_full() {
            self.grow();
        }
        self.push_and_swim(key);
    }

    /// Inserts a key into the heap, reporting allocation failure instead of
    /// aborting.
    ///
    /// # Errors
    ///
    /// If growing a full heap fails, the error is returned, `key` is dropped and
    /// the heap is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    ///
    /// let mut heap = BinaryMaxHeap::new();
    /// heap.try_insert(7).expect("out of memory");
    /// assert_eq!(heap.max(), Ok(&7));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<(), TryReserveError> {
        if self.is_full() {
            self.try_grow()?;
        }
        self.push_and_swim(key);
        Ok(())
    }

    /// Removes the greatest key from the heap and returns it.
    ///
    /// If the removal leaves the heap a quarter full its capacity is halved.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyHeapError`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::{BinaryMaxHeap, EmptyHeapError};
    /// let mut heap = BinaryMaxHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.delete_max(), Ok(3));
    /// assert_eq!(heap.delete_max(), Ok(1));
    /// assert_eq!(heap.delete_max(), Err(EmptyHeapError));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `delete_max` on a heap containing *n* keys is
    /// *O*(log(*n*)), plus an amortized constant for shrinking the storage.
    pub fn delete_max(&mut self) -> Result<K, EmptyHeapError> {
        self.pop().ok_or(EmptyHeapError)
    }

    /// Removes the greatest key from the heap and returns it, or `None` if it
    /// is empty.
    pub fn pop(&mut self) -> Option<K> {
        // Taking the last key releases its trailing slot straight away.
        let last = self.data.pop()?;
        let key = if self.is_empty() {
            last
        } else {
            let root = mem::replace(&mut self.data[index(1)], last);
            self.sink(1);
            root
        };
        self.shrink_if_sparse();
        Some(key)
    }

    /// Returns an iterator over the keys in decreasing order.
    ///
    /// The iterator drains a snapshot of the heap taken when `iter` is called,
    /// so the heap is never modified and every call starts over from the
    /// greatest key. Keys that compare equal come out in an unspecified order.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let heap = BinaryMaxHeap::from([1, 4, 2, 3]);
    ///
    /// assert_eq!(heap.iter().collect::<Vec<_>>(), [4, 3, 2, 1]);
    /// assert_eq!(heap.iter().next(), Some(4));
    /// assert_eq!(heap.len(), 4);
    /// ```
    pub fn iter(&self) -> Iter<K, O>
    where
        K: Clone,
        O: Clone,
    {
        // The storage already satisfies the heap property, so the snapshot
        // needs no heapifying of its own.
        let mut snapshot = BinaryMaxHeap::with_capacity_and_order(self.len(), self.order.clone());
        snapshot.data.extend_from_slice(&self.data);
        Iter { snapshot }
    }

    /// Returns an iterator which retrieves keys in decreasing order.
    /// This method consumes the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let heap = BinaryMaxHeap::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<K, O> {
        IntoIterSorted { inner: self }
    }

    /// Consumes the heap and returns its keys in decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    ///
    /// let mut heap = BinaryMaxHeap::from([1, 2, 4, 5, 7]);
    /// heap.insert(6);
    /// heap.insert(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [7, 6, 5, 4, 3, 2, 1]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.into_iter_sorted());
        sorted
    }

    /// The one comparison every heap mutation goes through: whether the key at
    /// position `this` is strictly greater than the key at position `that`.
    #[inline]
    fn greater(&self, this: usize, that: usize) -> bool {
        self.order.gt(&self.data[index(this)], &self.data[index(that)])
    }

    #[inline]
    fn swap(&mut self, this: usize, that: usize) {
        self.data.swap(index(this), index(that));
    }

    fn push_and_swim(&mut self, key: K) {
        self.data.push(key);
        self.swim(self.len());
    }

    /// Moves the key at `pos` towards the root while it is greater than its
    /// parent.
    fn swim(&mut self, mut pos: usize) {
        while pos > 1 && self.greater(pos, parent(pos)) {
            self.swap(pos, parent(pos));
            pos = parent(pos);
        }
    }

    /// Moves the key at `pos` towards the leaves while one of its children is
    /// greater than it.
    fn sink(&mut self, mut pos: usize) {
        let len = self.len();
        while left_child(pos) <= len {
            let mut child = left_child(pos);
            // only a strictly greater right child is preferred
            if right_child(pos) <= len && self.greater(right_child(pos), child) {
                child = right_child(pos);
            }

            if !self.greater(child, pos) {
                break;
            }

            self.swap(pos, child);
            pos = child;
        }
    }

    /// Restores the heap property over the whole storage, bottom-up.
    fn rebuild(&mut self) {
        for pos in (1..=parent(self.len())).rev() {
            self.sink(pos);
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (2..=self.len()).all(|pos| !self.greater(pos, parent(pos)))
    }
}

impl<K: Clone, O: Clone> Clone for BinaryMaxHeap<K, O> {
    fn clone(&self) -> Self {
        BinaryMaxHeap { data: self.data.clone(), slots: self.slots, order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.slots = source.slots;
        self.order.clone_from(&source.order);
    }
}

impl<K, O: Default> Default for BinaryMaxHeap<K, O> {
    /// Creates an empty `BinaryMaxHeap` with the default order and capacity.
    #[inline]
    fn default() -> BinaryMaxHeap<K, O> {
        BinaryMaxHeap::with_order(O::default())
    }
}

impl<K: fmt::Debug, O> fmt::Debug for BinaryMaxHeap<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// An iterator over the keys of a `BinaryMaxHeap`, in decreasing order.
///
/// This `struct` is created by [`BinaryMaxHeap::iter()`]. It owns a snapshot
/// of the heap, so it yields owned keys and outlives the heap it came from.
/// See its documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<K, O = OrdTotalOrder<K>> {
    snapshot: BinaryMaxHeap<K, O>,
}

impl<K: fmt::Debug, O> fmt::Debug for Iter<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.snapshot).finish()
    }
}

impl<K, O: TotalOrder<K>> Iterator for Iter<K, O> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.snapshot.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.snapshot.len();
        (exact, Some(exact))
    }
}

impl<K, O: TotalOrder<K>> ExactSizeIterator for Iter<K, O> {}

impl<K, O: TotalOrder<K>> FusedIterator for Iter<K, O> {}

#[cfg(feature = "trusted_len")]
unsafe impl<K, O: TotalOrder<K>> crate::polyfill::TrustedLen for Iter<K, O> {}

/// An owning iterator over the keys of a `BinaryMaxHeap`, in decreasing order.
///
/// This `struct` is created by [`BinaryMaxHeap::into_iter_sorted()`] and by
/// [`BinaryMaxHeap::into_iter()`] (provided by the [`IntoIterator`] trait).
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct IntoIterSorted<K, O = OrdTotalOrder<K>> {
    inner: BinaryMaxHeap<K, O>,
}

impl<K: fmt::Debug, O> fmt::Debug for IntoIterSorted<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIterSorted").field(&self.inner).finish()
    }
}

impl<K, O: TotalOrder<K>> Iterator for IntoIterSorted<K, O> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<K, O: TotalOrder<K>> ExactSizeIterator for IntoIterSorted<K, O> {}

impl<K, O: TotalOrder<K>> FusedIterator for IntoIterSorted<K, O> {}

#[cfg(feature = "trusted_len")]
unsafe impl<K, O: TotalOrder<K>> crate::polyfill::TrustedLen for IntoIterSorted<K, O> {}

impl<K, O: TotalOrder<K>> IntoIterator for BinaryMaxHeap<K, O> {
    type Item = K;
    type IntoIter = IntoIterSorted<K, O>;

    /// Creates a consuming iterator that moves each key out of the heap in
    /// decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use maxpq::BinaryMaxHeap;
    /// let heap = BinaryMaxHeap::from([1, 2, 3, 4]);
    ///
    /// assert_eq!(heap.into_iter().collect::<Vec<_>>(), [4, 3, 2, 1]);
    /// ```
    fn into_iter(self) -> IntoIterSorted<K, O> {
        self.into_iter_sorted()
    }
}

impl<K: Clone, O: TotalOrder<K> + Clone> IntoIterator for &BinaryMaxHeap<K, O> {
    type Item = K;
    type IntoIter = Iter<K, O>;

    fn into_iter(self) -> Iter<K, O> {
        self.iter()
    }
}

impl<K: Ord> From<Vec<K>> for BinaryMaxHeap<K> {
    /// Converts a `Vec<K>` into a full `BinaryMaxHeap<K>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<K>) -> BinaryMaxHeap<K> {
        BinaryMaxHeap::from_vec_and_order(vec, OrdTotalOrder::new())
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for BinaryMaxHeap<K> {
    /// ```
    /// use maxpq::BinaryMaxHeap;
    ///
    /// let mut h1 = BinaryMaxHeap::from([1, 4, 2, 3]);
    /// let mut h2: BinaryMaxHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [K; N]) -> Self {
        Self::from(Vec::from(arr))
    }
}

impl<K, O> From<BinaryMaxHeap<K, O>> for Vec<K> {
    /// Converts a `BinaryMaxHeap<K>` into a `Vec<K>` in storage order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryMaxHeap<K, O>) -> Vec<K> {
        heap.into_vec()
    }
}

impl<K, O: TotalOrder<K> + Default> FromIterator<K> for BinaryMaxHeap<K, O> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> BinaryMaxHeap<K, O> {
        BinaryMaxHeap::from_vec_and_order(iter.into_iter().collect(), O::default())
    }
}

impl<K, O: TotalOrder<K>> Extend<K> for BinaryMaxHeap<K, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |key| self.insert(key));
    }
}

impl<'a, K: 'a + Copy, O: TotalOrder<K>> Extend<&'a K> for BinaryMaxHeap<K, O> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
