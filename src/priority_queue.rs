//! Binary-heap priority queue of `(element, priority)` pairs.

use std::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which end of the priority scale is served first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Order {
    /// Higher priorities come out first (max-heap).
    PreferHigh,
    /// Lower priorities come out first (min-heap).
    PreferLow,
}

impl Order {
    /// The order selected by a `prefer_high_values` flag.
    pub fn from_prefer_high(prefer_high_values: bool) -> Self {
        if prefer_high_values { Order::PreferHigh } else { Order::PreferLow }
    }

    // Whether `a` must sit above `b` in the heap.
    fn outranks<P: PartialOrd>(self, a: &P, b: &P) -> bool {
        match self {
            Order::PreferHigh => a > b,
            Order::PreferLow  => a < b,
        }
    }
}

/// A priority queue of elements, each pushed with its own priority.
///
/// The same element may be pushed several times; each push is a separate
/// entry. Ties between equal priorities come out in no particular order.
///
/// [`contains`](#method.contains) and
/// [`change_priority`](#method.change_priority) search the heap linearly
/// for the first matching entry, as there is no position index; the
/// latter then rebuilds the whole heap.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriorityQueue<E, P> {
    entries: Vec<(E, P)>,
    order: Order,
}
// Invariant: for every i > 0, entries[(i - 1) / 2] is not outranked by entries[i].

impl<E: Debug, P: Debug> Debug for PriorityQueue<E, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "PriorityQueue({:?}, {:?})", self.order, self.entries)
    }
}

impl<E, P: PartialOrd> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        PriorityQueue::new(true)
    }
}

impl<E, P: PartialOrd> PriorityQueue<E, P> {
    /// Creates an empty queue; high priorities are served first if
    /// `prefer_high_values` is set, low priorities otherwise.
    pub fn new(prefer_high_values: bool) -> Self {
        PriorityQueue::with_order(Order::from_prefer_high(prefer_high_values))
    }

    /// Creates an empty queue with the given order.
    pub fn with_order(order: Order) -> Self {
        PriorityQueue {
            entries: Vec::new(),
            order,
        }
    }

    /// The order in which priorities are served.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Switches the serving order, rebuilding the heap for any entries
    /// already queued.
    pub fn set_comparator(&mut self, prefer_high_values: bool) {
        let order = Order::from_prefer_high(prefer_high_values);
        if order != self.order {
            self.order = order;
            self.heapify();
        }
    }

    /// The number of entries in the queue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the queue empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Inserts `element` with the given priority in *O(log k)*.
    pub fn push(&mut self, element: E, priority: P) {
        self.entries.push((element, priority));
        let last = self.entries.len() - 1;
        self.sift_up(last);
    }

    /// The element served next, if any.
    pub fn top(&self) -> Option<&E> {
        self.entries.first().map(|(element, _)| element)
    }

    /// The priority of the element served next, if any.
    pub fn top_priority(&self) -> Option<&P> {
        self.entries.first().map(|(_, priority)| priority)
    }

    /// Removes and returns the element served next.
    pub fn pop(&mut self) -> Option<E> {
        self.pop_with_priority().map(|(element, _)| element)
    }

    /// Removes and returns the entry served next along with its priority.
    pub fn pop_with_priority(&mut self) -> Option<(E, P)> {
        if self.entries.is_empty() { return None; }

        let result = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some(result)
    }

    // HELPERS

    fn heapify(&mut self) {
        for i in (0 .. self.entries.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    fn outranks(&self, i: usize, j: usize) -> bool {
        self.order.outranks(&self.entries[i].1, &self.entries[j].1)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.outranks(i, parent) { break; }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();

        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;

            if left < len && self.outranks(left, best) { best = left; }
            if right < len && self.outranks(right, best) { best = right; }
            if best == i { break; }

            self.entries.swap(i, best);
            i = best;
        }
    }
}

impl<E: PartialEq, P: PartialOrd> PriorityQueue<E, P> {
    /// Is there at least one entry for `element`? Linear in the length.
    pub fn contains(&self, element: &E) -> bool {
        self.entries.iter().any(|(e, _)| e == element)
    }

    /// Changes the priority of the first entry found for `element` and
    /// rebuilds the heap.
    ///
    /// Returns `false`, leaving the queue untouched, if `element` is not
    /// queued.
    pub fn change_priority(&mut self, element: &E, priority: P) -> bool {
        match self.entries.iter().position(|(e, _)| e == element) {
            Some(i) => {
                self.entries[i].1 = priority;
                self.heapify();
                true
            }
            None => false,
        }
    }
}
