//! Greedy best-first search

use super::frontier::PriorityQueue;
use super::score::Scored;
use super::{GoalTest, Problem, SearchAlgorithm, Strategy};
use crate::errors::{GraphResult, Result};
use crate::graph::{Graph, Path};
use crate::traits::{Heuristic, Vertex, Weight};

/// Orders the frontier by the heuristic alone.
#[derive(Debug)]
pub(crate) struct GreedyBestFirst<'h, H: ?Sized> {
    heuristic: &'h H,
}

impl<'h, V, W, H> Strategy<V, W> for GreedyBestFirst<'h, H>
where
    V: Vertex,
    W: Weight,
    H: Heuristic<V, W> + ?Sized,
{
    type Metric = Scored<W>;
    type Frontier = PriorityQueue<V, W>;

    const GOAL_TEST: GoalTest = GoalTest::OnExpansion;

    fn origin(&self, problem: &Problem<'_, V, W>) -> Scored<W> {
        Scored {
            cost: W::zero(),
            priority: problem.estimate(self.heuristic, problem.start),
        }
    }

    fn discover(
        &self,
        problem: &Problem<'_, V, W>,
        parent: &V,
        metric: &Scored<W>,
        child: &V,
    ) -> GraphResult<Scored<W>> {
        Ok(Scored {
            cost: metric.cost + problem.graph.edge_weight(parent, child)?,
            priority: problem.estimate(self.heuristic, child),
        })
    }

    fn cost(&self, metric: &Scored<W>) -> Option<W> {
        Some(metric.cost)
    }
}

/// Greedy best-first search, which always expands the vertex the
/// heuristic judges closest to the goal.
///
/// Routes to a vertex are never revised once it has been discovered,
/// so the path returned is often not the cheapest.
pub fn greedy_best_first<V, W, H>(
    graph: &Graph<V, W>,
    start: &V,
    goal: &V,
    heuristic: &H,
) -> Result<Path<V, W>>
where
    V: Vertex,
    W: Weight,
    H: Heuristic<V, W> + ?Sized,
{
    let problem = Problem::new(graph, start, goal)?;
    SearchAlgorithm::new(problem, GreedyBestFirst { heuristic })
        .run()?
        .found_or(|| problem.no_path())
}
