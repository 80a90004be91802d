use std::collections::HashMap;
use std::collections::hash_map::Entry;

use gridwalk_core::{Coord, Point};

use crate::frontier::Frontier;
use crate::traits::AstarPather;

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<C> {
    /// Total cost from the first to the last step.
    pub cost: i32,
    /// Every coordinate visited, start and goal included.
    pub steps: Vec<C>,
}

/// Per-coordinate bookkeeping, created on first discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeRecord<C> {
    cost: i32,
    score: i32,
    parent: Option<C>,
}

/// Where an [`AstarSearch`] is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The start is seeded; nothing has been expanded yet.
    Initialized,
    /// Candidates are being expanded.
    Expanding,
    /// The goal was reached with this cost.
    Found(i32),
    /// The frontier ran dry before the goal was reached.
    Exhausted,
}

impl SearchState {
    /// Whether the search has finished, successfully or not.
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Found(_) | Self::Exhausted)
    }
}

/// One A* search from a start coordinate to a ground-plane goal.
///
/// The goal is reached by any coordinate whose spatial projection equals
/// it, so a time-expanded search may arrive at any time. The record table
/// and frontier live only as long as this value.
pub struct AstarSearch<'a, P: AstarPather> {
    pather: &'a P,
    start: P::Coord,
    goal: Point,
    records: HashMap<P::Coord, NodeRecord<P::Coord>>,
    frontier: Frontier<P::Coord>,
    nbuf: Vec<P::Coord>,
    state: SearchState,
    finish: Option<P::Coord>,
    expanded: usize,
}

impl<'a, P: AstarPather> AstarSearch<'a, P> {
    /// Seed a search with `start` at cost 0.
    pub fn new(pather: &'a P, start: P::Coord, goal: Point) -> Self {
        let score = pather.estimate(start, goal);
        let mut records = HashMap::new();
        records.insert(
            start,
            NodeRecord {
                cost: 0,
                score,
                parent: None,
            },
        );
        let mut frontier = Frontier::new();
        frontier.push(start, score);
        Self {
            pather,
            start,
            goal,
            records,
            frontier,
            nbuf: Vec::with_capacity(8),
            state: SearchState::Initialized,
            finish: None,
            expanded: 0,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The start coordinate.
    #[inline]
    pub fn start(&self) -> P::Coord {
        self.start
    }

    /// Number of coordinates expanded so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The coordinate at which the goal was reached, once found.
    #[inline]
    pub fn finish(&self) -> Option<P::Coord> {
        self.finish
    }

    /// Cost to the goal, once found.
    pub fn cost(&self) -> Option<i32> {
        match self.state {
            SearchState::Found(cost) => Some(cost),
            _ => None,
        }
    }

    /// Pop the best candidate and expand it. Returns the new state; calling
    /// this after the search is done is a no-op.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_done() {
            return self.state;
        }
        self.state = SearchState::Expanding;

        let records = &self.records;
        let Some(current) = self.frontier.pop_best(|c| records.get(c).map(|r| r.score)) else {
            log::debug!(
                "astar: exhausted after {} expansions, goal {} unreachable",
                self.expanded,
                self.goal
            );
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let current_cost = self.records[&current].cost;
        if current.spatial() == self.goal {
            log::debug!(
                "astar: reached {:?} at cost {} after {} expansions",
                current,
                current_cost,
                self.expanded
            );
            self.finish = Some(current);
            self.state = SearchState::Found(current_cost);
            return self.state;
        }
        self.expanded += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if self.frontier.is_finalized(&n) {
                continue;
            }
            let tentative = current_cost + self.pather.cost(current, n);
            let record = NodeRecord {
                cost: tentative,
                score: tentative + self.pather.estimate(n, self.goal),
                parent: Some(current),
            };
            match self.records.entry(n) {
                Entry::Occupied(mut e) => {
                    if tentative >= e.get().cost {
                        continue;
                    }
                    e.insert(record);
                }
                Entry::Vacant(e) => {
                    e.insert(record);
                }
            }
            self.frontier.push(n, record.score);
        }

        self.nbuf = nbuf;
        self.state
    }

    /// Step until the search is done and return the final state.
    pub fn run(&mut self) -> SearchState {
        while !self.state.is_done() {
            self.step();
        }
        self.state
    }

    /// Walk parent links back from the goal. `None` unless found.
    pub fn path(&self) -> Option<Path<P::Coord>> {
        let cost = self.cost()?;
        let mut steps = Vec::new();
        let mut cur = self.finish;
        while let Some(c) = cur {
            steps.push(c);
            cur = self.records.get(&c).and_then(|r| r.parent);
        }
        steps.reverse();
        Some(Path { cost, steps })
    }
}

/// Cost of the shortest path from `start` to `goal`, or `None` if the goal
/// cannot be reached.
pub fn astar_cost<P: AstarPather>(pather: &P, start: P::Coord, goal: Point) -> Option<i32> {
    let mut search = AstarSearch::new(pather, start, goal);
    match search.run() {
        SearchState::Found(cost) => Some(cost),
        _ => None,
    }
}

/// The shortest path from `start` to `goal` (both endpoints included), or
/// `None` if the goal cannot be reached.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    start: P::Coord,
    goal: Point,
) -> Option<Path<P::Coord>> {
    let mut search = AstarSearch::new(pather, start, goal);
    search.run();
    search.path()
}
