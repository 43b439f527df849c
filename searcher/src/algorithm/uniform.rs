//! Uniform-cost search
//!
//! Like Dijkstra's algorithm, this always expands the cheapest vertex
//! on the frontier, and replaces a frontier vertex's route whenever a
//! strictly cheaper one is found. Explored vertices are never reopened,
//! so the returned path is only guaranteed cheapest when no edge has a
//! negative weight.

use super::frontier::PriorityQueue;
use super::score::Scored;
use super::{GoalTest, Problem, SearchAlgorithm, Strategy};
use crate::errors::{GraphResult, Result};
use crate::graph::{Graph, Path};
use crate::traits::{Vertex, Weight};

/// Orders the frontier by accumulated path cost.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UniformCost {
    reversed: bool,
}

impl UniformCost {
    pub(crate) fn forward() -> Self {
        Self { reversed: false }
    }

    /// Walks edges backwards: expanding `parent` to reach `child`
    /// costs the weight of the edge from `child` to `parent`.
    pub(crate) fn backward() -> Self {
        Self { reversed: true }
    }
}

impl<V, W> Strategy<V, W> for UniformCost
where
    V: Vertex,
    W: Weight,
{
    type Metric = Scored<W>;
    type Frontier = PriorityQueue<V, W>;

    const GOAL_TEST: GoalTest = GoalTest::OnExpansion;

    fn origin(&self, _problem: &Problem<'_, V, W>) -> Scored<W> {
        Scored::cost(W::zero())
    }

    fn discover(
        &self,
        problem: &Problem<'_, V, W>,
        parent: &V,
        metric: &Scored<W>,
        child: &V,
    ) -> GraphResult<Scored<W>> {
        let weight = if self.reversed {
            problem.graph.edge_weight(child, parent)?
        } else {
            problem.graph.edge_weight(parent, child)?
        };
        Ok(Scored::cost(metric.cost + weight))
    }

    fn improves(&self, candidate: &Scored<W>, current: &Scored<W>) -> bool {
        candidate.cost < current.cost
    }

    fn cost(&self, metric: &Scored<W>) -> Option<W> {
        Some(metric.cost)
    }
}

/// Perform a uniform-cost search.
///
/// With non-negative weights the path returned is the cheapest path
/// from `start` to `goal`.
pub fn uniform_cost<V, W>(graph: &Graph<V, W>, start: &V, goal: &V) -> Result<Path<V, W>>
where
    V: Vertex,
    W: Weight,
{
    let problem = Problem::new(graph, start, goal)?;
    SearchAlgorithm::new(problem, UniformCost::forward())
        .run()?
        .found_or(|| problem.no_path())
}
