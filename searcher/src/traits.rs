use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::graph::Graph;

/// Identifies a vertex in a [Graph].
///
/// Vertices are opaque tokens: they only need to be compared,
/// hashed and printed. Strings and small integers both qualify.
pub trait Vertex: Clone + Eq + Hash + Debug + Display {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug + Display {}

/// The numeric weight carried by each edge.
///
/// Negative weights are accepted, but the cost based searches
/// only promise optimal paths when every weight is non-negative.
pub trait Weight: num::Num + Copy + PartialOrd + Debug + Display {}

impl<T> Weight for T where T: num::Num + Copy + PartialOrd + Debug + Display {}

/// An interface for estimating the remaining cost to the goal.
///
/// Informed searches rank candidates using this estimate. For A*
/// to return an optimal path the heuristic must never overestimate
/// the true remaining cost; that property is assumed, not checked.
pub trait Heuristic<V, W> {
    /// Best guess of the cost from `vertex` to `goal`.
    fn estimate(&self, vertex: &V, graph: &Graph<V, W>, start: &V, goal: &V) -> W;
}

impl<V, W, F> Heuristic<V, W> for F
where
    F: Fn(&V, &Graph<V, W>, &V, &V) -> W,
{
    fn estimate(&self, vertex: &V, graph: &Graph<V, W>, start: &V, goal: &V) -> W {
        self(vertex, graph, start, goal)
    }
}

/// A heuristic which always guesses zero.
///
/// With this heuristic A* orders its frontier exactly like
/// uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<V, W> Heuristic<V, W> for Zero
where
    W: Weight,
{
    fn estimate(&self, _vertex: &V, _graph: &Graph<V, W>, _start: &V, _goal: &V) -> W {
        W::zero()
    }
}
