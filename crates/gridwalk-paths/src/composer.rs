//! Multi-leg routes: one A* search per leg, each leg starting when the
//! previous one finished.

use gridwalk_core::{Coord, Point};

use crate::astar::astar_cost;
use crate::traits::AstarPather;

/// One start-to-goal stage of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub start: Point,
    pub goal: Point,
}

impl Leg {
    /// Create a new leg.
    pub const fn new(start: Point, goal: Point) -> Self {
        Self { start, goal }
    }

    /// The same leg travelled backwards.
    pub const fn reversed(self) -> Self {
        Self::new(self.goal, self.start)
    }
}

/// The outcome of a composed route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Sum of all leg costs.
    pub total: i32,
    /// Cost of each leg, in order.
    pub legs: Vec<i32>,
    /// Elapsed time when the last leg reached its goal.
    pub finish_time: i32,
}

/// Run `legs` in order, starting the first one at `start_time`.
///
/// Leg *k+1* starts at the time leg *k* finished. Returns `None` as soon as
/// any leg is unreachable.
pub fn compose<P: AstarPather>(pather: &P, legs: &[Leg], start_time: i32) -> Option<Route> {
    let mut t = start_time;
    let mut costs = Vec::with_capacity(legs.len());
    for (i, leg) in legs.iter().enumerate() {
        let Some(cost) = astar_cost(pather, P::Coord::place(leg.start, t), leg.goal) else {
            log::debug!("compose: leg {i} {} -> {} unreachable from t={t}", leg.start, leg.goal);
            return None;
        };
        log::debug!("compose: leg {i} {} -> {} cost {cost}", leg.start, leg.goal);
        costs.push(cost);
        t += cost;
    }
    Some(Route {
        total: costs.iter().sum(),
        legs: costs,
        finish_time: t,
    })
}
