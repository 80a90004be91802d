//! The open set of an A* search.
//!
//! A [`Frontier`] never stores authoritative scores. Each heap entry keeps
//! the score it was pushed with, and [`peek_best`](Frontier::peek_best)
//! compares it against the caller's record table: an entry whose score no
//! longer matches, or whose coordinate was already finalized, is stale and
//! gets discarded. Improving a coordinate's score therefore means pushing it
//! again (lazy decrease-key).

use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

/// Heap entry ordered by `score`, then by insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry<C> {
    score: i32,
    seq: u64,
    coord: C,
}

impl<C: Eq> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest score first, and
        // the earliest push among equal scores.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<C: Eq> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority open set keyed by estimated total cost.
#[derive(Debug, Clone)]
pub struct Frontier<C> {
    heap: BinaryHeap<Entry<C>>,
    open: HashSet<C>,
    finalized: HashSet<C>,
    seq: u64,
}

impl<C: Copy + Eq + Hash> Default for Frontier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Copy + Eq + Hash> Frontier<C> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            open: HashSet::new(),
            finalized: HashSet::new(),
            seq: 0,
        }
    }

    /// Register `coord` as a candidate with the given score.
    ///
    /// Pushing a coordinate that is already a member adds a newer entry;
    /// the older one goes stale once the record table holds the new score.
    pub fn push(&mut self, coord: C, score: i32) {
        self.open.insert(coord);
        self.heap.push(Entry {
            score,
            seq: self.seq,
            coord,
        });
        self.seq += 1;
    }

    /// The member with the smallest current score, as reported by
    /// `score_of`. Stale entries met on the way are dropped.
    pub fn peek_best(&mut self, score_of: impl Fn(&C) -> Option<i32>) -> Option<C> {
        while let Some(top) = self.heap.peek() {
            if self.finalized.contains(&top.coord) {
                let coord = top.coord;
                self.open.remove(&coord);
                self.heap.pop();
                continue;
            }
            if score_of(&top.coord) != Some(top.score) {
                self.heap.pop();
                continue;
            }
            return Some(top.coord);
        }
        None
    }

    /// Remove and return the best member, marking it finalized.
    pub fn pop_best(&mut self, score_of: impl Fn(&C) -> Option<i32>) -> Option<C> {
        let best = self.peek_best(score_of)?;
        self.heap.pop();
        self.open.remove(&best);
        self.finalized.insert(best);
        Some(best)
    }

    /// Whether `coord` is currently a member.
    #[inline]
    pub fn contains(&self, coord: &C) -> bool {
        self.open.contains(coord)
    }

    /// Whether `coord` was already popped.
    #[inline]
    pub fn is_finalized(&self, coord: &C) -> bool {
        self.finalized.contains(coord)
    }

    /// Number of distinct members.
    #[inline]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether there are no members left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Heap entries held, stale ones included.
    #[inline]
    pub fn entries(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(table: &HashMap<char, i32>) -> impl Fn(&char) -> Option<i32> + '_ {
        move |c: &char| table.get(c).copied()
    }

    #[test]
    fn pops_lowest_score_first() {
        let scores = HashMap::from([('a', 5), ('b', 2), ('c', 9)]);
        let mut f = Frontier::new();
        for (&c, &s) in &scores {
            f.push(c, s);
        }
        assert_eq!(f.pop_best(lookup(&scores)), Some('b'));
        assert_eq!(f.pop_best(lookup(&scores)), Some('a'));
        assert_eq!(f.pop_best(lookup(&scores)), Some('c'));
        assert_eq!(f.pop_best(lookup(&scores)), None);
        assert!(f.is_empty());
    }

    #[test]
    fn ties_follow_insertion_order() {
        let scores = HashMap::from([('x', 3), ('y', 3), ('z', 3)]);
        let mut f = Frontier::new();
        f.push('y', 3);
        f.push('x', 3);
        f.push('z', 3);
        let order: Vec<_> = std::iter::from_fn(|| f.pop_best(lookup(&scores))).collect();
        assert_eq!(order, ['y', 'x', 'z']);
    }

    #[test]
    fn record_table_is_authoritative() {
        let mut scores = HashMap::from([('a', 4), ('b', 6)]);
        let mut f = Frontier::new();
        f.push('a', 4);
        f.push('b', 6);
        // 'b' improves: re-pushed with its new score.
        scores.insert('b', 1);
        f.push('b', 1);
        assert_eq!(f.len(), 2);
        assert_eq!(f.entries(), 3);
        assert_eq!(f.peek_best(lookup(&scores)), Some('b'));
        assert_eq!(f.pop_best(lookup(&scores)), Some('b'));
        assert_eq!(f.pop_best(lookup(&scores)), Some('a'));
        // The stale (b, 6) entry is never returned.
        assert_eq!(f.pop_best(lookup(&scores)), None);
        assert_eq!(f.entries(), 0);
    }

    #[test]
    fn finalized_members_are_not_returned_again() {
        let scores = HashMap::from([('a', 1)]);
        let mut f = Frontier::new();
        f.push('a', 1);
        assert_eq!(f.pop_best(lookup(&scores)), Some('a'));
        assert!(f.is_finalized(&'a'));
        assert!(!f.contains(&'a'));
        f.push('a', 1);
        assert_eq!(f.pop_best(lookup(&scores)), None);
        assert!(f.is_empty());
    }

    #[test]
    fn membership() {
        let mut f = Frontier::new();
        assert!(!f.contains(&7));
        f.push(7, 0);
        assert!(f.contains(&7));
        assert_eq!(f.len(), 1);
    }
}
