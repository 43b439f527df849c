//! A* and iterative-deepening A*

use tracing::info;

use super::frontier::PriorityQueue;
use super::score::Scored;
use super::{GoalTest, Outcome, Problem, SearchAlgorithm, Strategy};
use crate::errors::{GraphResult, Result, SearchError};
use crate::graph::{Graph, Path};
use crate::traits::{Heuristic, Vertex, Weight};

/// Orders the frontier by path cost plus heuristic, and refuses to
/// expand vertices whose sum exceeds the limit.
#[derive(Debug)]
pub(crate) struct AStar<'h, H: ?Sized, W> {
    heuristic: &'h H,
    limit: Option<W>,
}

impl<'h, V, W, H> Strategy<V, W> for AStar<'h, H, W>
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
        let cost = metric.cost + problem.graph.edge_weight(parent, child)?;
        Ok(Scored {
            cost,
            priority: cost + problem.estimate(self.heuristic, child),
        })
    }

    fn expands(&self, metric: &Scored<W>) -> bool {
        self.limit.map_or(true, |limit| metric.priority <= limit)
    }

    fn improves(&self, candidate: &Scored<W>, current: &Scored<W>) -> bool {
        candidate.cost < current.cost
    }

    fn cost(&self, metric: &Scored<W>) -> Option<W> {
        Some(metric.cost)
    }
}

fn limited<V, W, H>(
    problem: Problem<'_, V, W>,
    heuristic: &H,
    limit: Option<W>,
) -> GraphResult<Outcome<V, W>>
where
    V: Vertex,
    W: Weight,
    H: Heuristic<V, W> + ?Sized,
{
    SearchAlgorithm::new(problem, AStar { heuristic, limit }).run()
}

fn exhausted<V, W>(problem: &Problem<'_, V, W>, limit: Option<W>) -> SearchError
where
    V: Vertex,
    W: Weight,
{
    match limit {
        Some(limit) => SearchError::CostLimitExhausted {
            start: problem.start.to_string(),
            goal: problem.goal.to_string(),
            limit: limit.to_string(),
        },
        None => problem.no_path(),
    }
}

/// Perform an A* search.
///
/// The frontier is ordered by the cost of the path to each vertex plus
/// the heuristic's estimate of the remaining cost. If the heuristic never
/// overestimates, the path returned is the cheapest one.
///
/// With a `limit`, vertices whose cost plus estimate exceeds it are
/// discarded rather than expanded.
pub fn astar<V, W, H>(
    graph: &Graph<V, W>,
    start: &V,
    goal: &V,
    heuristic: &H,
    limit: Option<W>,
) -> Result<Path<V, W>>
where
    V: Vertex,
    W: Weight,
    H: Heuristic<V, W> + ?Sized,
{
    let problem = Problem::new(graph, start, goal)?;
    limited(problem, heuristic, limit)?.found_or(|| exhausted(&problem, limit))
}

/// Repeated A* searches with a cost limit growing from one.
///
/// Gives up once the limit reaches the total weight of every edge in
/// the graph, which no simple path can cost more than.
pub fn iterative_deepening_astar<V, W, H>(
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
    let bound = graph.total_weight();

    let mut limit = W::one();
    loop {
        if let Outcome::Found(path) = limited(problem, heuristic, Some(limit))? {
            return Ok(path);
        }

        if limit >= bound {
            return Err(exhausted(&problem, Some(limit)));
        }

        limit = limit + W::one();
        info!(limit = %limit, "increasing cost limit");
    }
}
