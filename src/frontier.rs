//! Min-priority frontier with insertion-order tie-breaking.
//!
//! The frontier knows nothing about search nodes. Callers push each item
//! together with the key it should be ordered by, so the ordering policy stays
//! with the engine instead of being baked into the node type.
//!
//! Dominated duplicates are never removed or re-prioritized in place; the
//! engine filters them when they are popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Deserialize;

/// How entries with equal keys are ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Earliest pushed pops first.
    #[default]
    Fifo,
    /// Latest pushed pops first.
    Lifo,
}

struct Entry<T, K> {
    key: K,
    order: u64,
    item: T,
}

impl<T, K: Ord> PartialEq for Entry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, K: Ord> Eq for Entry<T, K> {}

impl<T, K: Ord> PartialOrd for Entry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for Entry<T, K> {
    // `BinaryHeap` is a max-heap; reversing both fields makes the smallest
    // `(key, order)` the top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// A priority queue that pops the item with the smallest key.
pub struct Frontier<T, K> {
    heap: BinaryHeap<Entry<T, K>>,
    tie_break: TieBreak,
    pushed: u64,
    high_water: usize,
}

impl<T, K: Ord> Frontier<T, K> {
    /// Creates an empty frontier with FIFO tie-breaking.
    pub fn new() -> Self {
        Self::with_tie_break(TieBreak::Fifo)
    }

    /// Creates an empty frontier with the given tie-break policy.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            tie_break,
            pushed: 0,
            high_water: 0,
        }
    }

    /// Adds `item` with priority `key`.
    pub fn push(&mut self, item: T, key: K) {
        let order = match self.tie_break {
            TieBreak::Fifo => self.pushed,
            TieBreak::Lifo => u64::MAX - self.pushed,
        };
        self.pushed += 1;
        self.heap.push(Entry { key, order, item });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes and returns the item with the smallest key.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Returns the smallest key without removing its item.
    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries held at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Total number of pushes since creation.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }
}

impl<T, K: Ord> Default for Frontier<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_returns_smallest_key_first() {
        let mut frontier = Frontier::new();
        frontier.push("ten", 10);
        frontier.push("five", 5);
        frontier.push("fifteen", 15);

        assert_eq!(frontier.peek_key(), Some(&5));
        assert_eq!(frontier.pop(), Some("five"));
        assert_eq!(frontier.pop(), Some("ten"));
        assert_eq!(frontier.pop(), Some("fifteen"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_fifo_among_equal_keys() {
        let mut frontier = Frontier::new();
        frontier.push('a', 1);
        frontier.push('b', 1);
        frontier.push('z', 0);
        frontier.push('c', 1);

        let order: Vec<char> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec!['z', 'a', 'b', 'c']);
    }

    #[test]
    fn test_lifo_among_equal_keys() {
        let mut frontier = Frontier::with_tie_break(TieBreak::Lifo);
        frontier.push('a', 1);
        frontier.push('b', 1);
        frontier.push('c', 1);
        frontier.push('z', 2);

        let order: Vec<char> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec!['c', 'b', 'a', 'z']);
    }

    #[test]
    fn test_high_water_does_not_decrease_on_pop() {
        let mut frontier = Frontier::new();
        frontier.push(1, 1);
        frontier.push(2, 2);
        frontier.push(3, 3);
        assert_eq!(frontier.high_water(), 3);

        let _ = frontier.pop();
        let _ = frontier.pop();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.high_water(), 3);
        assert_eq!(frontier.pushed(), 3);
    }

    #[test]
    fn test_empty_frontier() {
        let mut frontier: Frontier<u8, u8> = Frontier::default();
        assert!(frontier.is_empty());
        assert_eq!(frontier.peek_key(), None);
        assert_eq!(frontier.pop(), None);
    }
}
