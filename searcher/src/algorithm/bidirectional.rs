//! Bidirectional search
//!
//! Two uniform-cost searches run in lock step, one forward from the
//! start and one backward from the goal, until one of them takes a
//! vertex off its frontier which is waiting on the other's frontier.

use tracing::debug;

use super::frontier::Frontier;
use super::uniform::UniformCost;
use super::{Problem, SearchAlgorithm};
use crate::errors::{GraphResult, Result, SearchError};
use crate::graph::{Graph, Path};
use crate::traits::{Vertex, Weight};

type Side<'g, V, W> = SearchAlgorithm<'g, V, W, UniformCost>;

/// What happened when one side took a turn.
enum Step<V, W> {
    /// The side reached a vertex on the other side's frontier, with the
    /// combined cost of both halves.
    Met(V, W),
    Continue,
    Exhausted,
}

fn step<V, W>(side: &mut Side<'_, V, W>, other: &Side<'_, V, W>) -> GraphResult<Step<V, W>>
where
    V: Vertex,
    W: Weight,
{
    if other.frontier().is_empty() {
        return Ok(Step::Exhausted);
    }

    let (vertex, metric) = match side.pop() {
        Some(entry) => entry,
        None => return Ok(Step::Exhausted),
    };

    if let Some(theirs) = other.frontier().get(&vertex) {
        let cost = metric.cost + theirs.cost;
        return Ok(Step::Met(vertex, cost));
    }

    side.explore(vertex, &metric)?;
    Ok(Step::Continue)
}

/// Join the forward half, ending at `vertex`, to the backward half
/// which started from the goal.
fn join<V, W>(
    forward: &Side<'_, V, W>,
    backward: &Side<'_, V, W>,
    vertex: &V,
    cost: W,
) -> Path<V, W>
where
    V: Vertex,
    W: Weight,
{
    let mut vertices = forward.path_to(vertex);
    let mut tail = backward.path_to(vertex);
    tail.pop();
    tail.reverse();
    vertices.extend(tail);

    Path::from_parts(vertices, cost)
}

/// Perform a bidirectional search.
///
/// The sides alternate, each expanding its cheapest frontier vertex, and
/// stop as soon as one reaches a vertex the other has discovered. The
/// search fails as soon as either frontier is empty. The path returned
/// joins the two halves at that vertex; it is not guaranteed to be the
/// cheapest path.
///
/// The graph must be bidirectional, so that the backward search can
/// follow each edge in reverse.
pub fn bidirectional<V, W>(graph: &Graph<V, W>, start: &V, goal: &V) -> Result<Path<V, W>>
where
    V: Vertex,
    W: Weight,
{
    if !graph.is_bidirectional() {
        return Err(SearchError::NotBidirectional);
    }

    let problem = Problem::new(graph, start, goal)?;
    let mut forward = SearchAlgorithm::new(problem, UniformCost::forward());
    let mut backward = SearchAlgorithm::new(problem.reversed(), UniformCost::backward());
    debug!(start = %start, goal = %goal, "starting bidirectional search");

    loop {
        match step(&mut forward, &backward)? {
            Step::Met(vertex, cost) => {
                let path = join(&forward, &backward, &vertex, cost);
                debug!(path = %path, meeting = %vertex, "found goal");
                return Ok(path);
            }
            Step::Exhausted => return Err(problem.no_path()),
            Step::Continue => {}
        }

        match step(&mut backward, &forward)? {
            Step::Met(vertex, cost) => {
                let path = join(&forward, &backward, &vertex, cost);
                debug!(path = %path, meeting = %vertex, "found goal");
                return Ok(path);
            }
            Step::Exhausted => return Err(problem.no_path()),
            Step::Continue => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::fixtures::*;
    use crate::algorithm::path_cost;

    #[test]
    fn meets_in_the_middle() {
        let path = bidirectional(&line(), &"A", &"C").unwrap();
        assert_eq!(path.vertices(), &["A", "B", "C"]);
        assert_eq!(path.cost(), 5);

        let path = bidirectional(&line(), &"C", &"A").unwrap();
        assert_eq!(path.vertices(), &["C", "B", "A"]);
        assert_eq!(path.cost(), 5);
    }

    #[test]
    fn longer_paths() {
        let mut graph = detour();
        graph.transform_into_bidirectional();

        let path = bidirectional(&graph, &0, &5).unwrap();
        assert_eq!(path.origin(), &0);
        assert_eq!(path.destination(), &5);
        assert_eq!(path_cost(&graph, path.vertices()), Some(path.cost()));
        assert_eq!(path.vertices(), &[0, 2, 3, 4, 5]);
    }

    #[test]
    fn adjacent() {
        let path = bidirectional(&line(), &"A", &"B").unwrap();
        assert_eq!(path.vertices(), &["A", "B"]);
        assert_eq!(path.cost(), 2);
    }

    #[test]
    fn trivial() {
        let path = bidirectional(&line(), &"B", &"B").unwrap();
        assert_eq!(path.vertices(), &["B"]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn requires_bidirectional_graph() {
        assert_eq!(
            bidirectional(&shortcut(), &"A", &"C"),
            Err(SearchError::NotBidirectional)
        );
    }

    #[test]
    fn no_path() {
        let err = bidirectional(&disconnected(), &"A", &"B").unwrap_err();
        assert!(err.is_exhausted());
    }
}
