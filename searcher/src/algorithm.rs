//! Provides the building blocks for search algorithms
//!
//! Every search shares one skeleton: a frontier seeded with the start
//! vertex, an explored set, and predecessor links from which paths are
//! rebuilt. A [Strategy] decides how the frontier is ordered, when the
//! goal is recognised, and which vertices may be expanded.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use tracing::{debug, trace};

use self::frontier::Frontier;
use crate::errors::{GraphError, GraphResult, Result, SearchError};
use crate::graph::{Graph, Path};
use crate::traits::{Heuristic, Vertex, Weight};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod bidirectional;
pub(crate) mod frontier;
pub(crate) mod greedy;
pub(crate) mod score;
pub(crate) mod uniform;

/// When a strategy checks whether it has reached the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoalTest {
    /// As soon as the goal is discovered as a neighbor.
    OnDiscovery,

    /// When the goal is taken off the frontier.
    OnExpansion,
}

/// The graph and endpoints of a single search.
#[derive(Debug)]
pub(crate) struct Problem<'g, V, W> {
    pub(crate) graph: &'g Graph<V, W>,
    pub(crate) start: &'g V,
    pub(crate) goal: &'g V,
}

impl<'g, V, W> Clone for Problem<'g, V, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, V, W> Copy for Problem<'g, V, W> {}

impl<'g, V, W> Problem<'g, V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Both endpoints must be vertices of the graph.
    pub(crate) fn new(graph: &'g Graph<V, W>, start: &'g V, goal: &'g V) -> GraphResult<Self> {
        for vertex in &[start, goal] {
            if !graph.contains(vertex) {
                return Err(GraphError::NoSuchVertex(vertex.to_string()));
            }
        }
        Ok(Self { graph, start, goal })
    }

    /// The same problem, searched from the goal back to the start.
    pub(crate) fn reversed(&self) -> Self {
        Self {
            graph: self.graph,
            start: self.goal,
            goal: self.start,
        }
    }

    /// The heuristic's estimate of the cost from `vertex` to the goal.
    pub(crate) fn estimate<H>(&self, heuristic: &H, vertex: &V) -> W
    where
        H: Heuristic<V, W> + ?Sized,
    {
        heuristic.estimate(vertex, self.graph, self.start, self.goal)
    }

    pub(crate) fn no_path(&self) -> SearchError {
        SearchError::NoPath {
            start: self.start.to_string(),
            goal: self.goal.to_string(),
        }
    }
}

/// Specializes the search skeleton for a particular algorithm.
pub(crate) trait Strategy<V, W> {
    /// What the frontier records for each vertex.
    type Metric: Clone + Debug;

    type Frontier: Frontier<V, Metric = Self::Metric> + Default;

    const GOAL_TEST: GoalTest;

    /// Metric for the start vertex.
    fn origin(&self, problem: &Problem<'_, V, W>) -> Self::Metric;

    /// Metric for `child`, reached by expanding `parent`.
    fn discover(
        &self,
        problem: &Problem<'_, V, W>,
        parent: &V,
        metric: &Self::Metric,
        child: &V,
    ) -> GraphResult<Self::Metric>;

    /// Whether a vertex taken off the frontier may be expanded. Vertices
    /// which may not are still marked as explored.
    fn expands(&self, _metric: &Self::Metric) -> bool {
        true
    }

    /// Whether `candidate` should replace `current` for a vertex which
    /// is already on the frontier.
    fn improves(&self, _candidate: &Self::Metric, _current: &Self::Metric) -> bool {
        false
    }

    /// Path cost recorded in the metric. When `None`, the cost is summed
    /// along the final path instead.
    fn cost(&self, _metric: &Self::Metric) -> Option<W> {
        None
    }
}

/// Result of a single bounded search.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome<V, W> {
    Found(Path<V, W>),
    Exhausted,
}

impl<V, W> Outcome<V, W> {
    pub(crate) fn found_or<F>(self, exhausted: F) -> Result<Path<V, W>>
    where
        F: FnOnce() -> SearchError,
    {
        match self {
            Outcome::Found(path) => Ok(path),
            Outcome::Exhausted => Err(exhausted()),
        }
    }
}

/// Implementation of search, using a generic strategy.
///
/// The frontier and explored set live only as long as this value.
pub(crate) struct SearchAlgorithm<'g, V, W, S>
where
    S: Strategy<V, W>,
{
    problem: Problem<'g, V, W>,
    strategy: S,
    frontier: S::Frontier,
    explored: HashSet<V>,
    parents: HashMap<V, V>,
    expansions: usize,
}

impl<'g, V, W, S> SearchAlgorithm<'g, V, W, S>
where
    V: Vertex,
    W: Weight,
    S: Strategy<V, W>,
{
    pub(crate) fn new(problem: Problem<'g, V, W>, strategy: S) -> Self {
        let mut frontier = <S::Frontier as Default>::default();
        frontier.push(problem.start.clone(), strategy.origin(&problem));

        SearchAlgorithm {
            problem,
            strategy,
            frontier,
            explored: HashSet::new(),
            parents: HashMap::new(),
            expansions: 0,
        }
    }

    pub(crate) fn frontier(&self) -> &S::Frontier {
        &self.frontier
    }

    pub(crate) fn pop(&mut self) -> Option<(V, S::Metric)> {
        self.frontier.pop()
    }

    /// Vertices from the start to `vertex`, along the best route found so far.
    pub(crate) fn path_to(&self, vertex: &V) -> Vec<V> {
        let mut path = vec![vertex.clone()];
        let mut current = vertex;
        while let Some(parent) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }

    fn finish(&self, vertex: &V, metric: Option<&S::Metric>) -> GraphResult<Path<V, W>> {
        let vertices = self.path_to(vertex);
        match metric.and_then(|m| self.strategy.cost(m)) {
            Some(cost) => Ok(Path::from_parts(vertices, cost)),
            None => Path::along(self.problem.graph, vertices),
        }
    }

    /// Expand `vertex`, adding its neighbors to the frontier and then
    /// marking it explored.
    ///
    /// Loops and explored vertices are skipped. Neighbors already on
    /// the frontier are only replaced when the strategy finds the new
    /// route an improvement. Returns the path to the goal if it was
    /// discovered and the strategy checks for it on discovery.
    pub(crate) fn explore(
        &mut self,
        vertex: V,
        metric: &S::Metric,
    ) -> GraphResult<Option<Path<V, W>>> {
        let graph = self.problem.graph;
        self.expansions += 1;
        trace!(vertex = %vertex, metric = ?metric, "expanding");

        for child in graph.edges_of(&vertex)? {
            if *child == vertex || self.explored.contains(child) {
                continue;
            }

            let candidate = self
                .strategy
                .discover(&self.problem, &vertex, metric, child)?;
            let improves = self
                .frontier
                .get(child)
                .map(|current| self.strategy.improves(&candidate, current));

            match improves {
                Some(true) => {
                    self.frontier.push(child.clone(), candidate);
                    self.parents.insert(child.clone(), vertex.clone());
                }
                Some(false) => {}
                None => {
                    self.parents.insert(child.clone(), vertex.clone());
                    if S::GOAL_TEST == GoalTest::OnDiscovery && child == self.problem.goal {
                        return self.finish(child, None).map(Some);
                    }
                    self.frontier.push(child.clone(), candidate);
                }
            }
        }

        self.explored.insert(vertex);
        Ok(None)
    }

    /// Run the search to completion.
    pub(crate) fn run(mut self) -> GraphResult<Outcome<V, W>> {
        let Problem { start, goal, .. } = self.problem;
        debug!(start = %start, goal = %goal, "starting search");

        if S::GOAL_TEST == GoalTest::OnDiscovery && start == goal {
            return Ok(Outcome::Found(Path::new(start.clone())));
        }

        while let Some((vertex, metric)) = self.frontier.pop() {
            if !self.strategy.expands(&metric) {
                trace!(vertex = %vertex, metric = ?metric, "beyond limit");
                self.explored.insert(vertex);
                continue;
            }

            if S::GOAL_TEST == GoalTest::OnExpansion && vertex == *goal {
                let path = self.finish(&vertex, Some(&metric))?;
                debug!(path = %path, expansions = self.expansions, "found goal");
                return Ok(Outcome::Found(path));
            }

            if let Some(path) = self.explore(vertex, &metric)? {
                debug!(path = %path, expansions = self.expansions, "found goal");
                return Ok(Outcome::Found(path));
            }

            if self.expansions % 10_000 == 0 {
                debug!(
                    frontier = self.frontier.len(),
                    explored = self.explored.len(),
                    expansions = self.expansions,
                    "search progress"
                );
            }
        }

        debug!(expansions = self.expansions, "search exhausted");
        Ok(Outcome::Exhausted)
    }
}

/// Total cost of a path, or `None` when some step is not an edge.
#[cfg(test)]
pub(crate) fn path_cost<V, W>(graph: &Graph<V, W>, vertices: &[V]) -> Option<W>
where
    V: Vertex,
    W: Weight,
{
    let path = Path::along(graph, vertices.to_vec()).ok()?;
    Some(path.cost())
}
