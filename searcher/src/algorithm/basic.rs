//! Uninformed searches which only follow the structure of the graph.
//!
//! None of these track cost while searching; the cost of the path they
//! return is summed afterwards.

pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use iddfs::iterative_deepening_depth_first;

mod bfs {
    use crate::algorithm::frontier::Queue;
    use crate::algorithm::{GoalTest, Problem, SearchAlgorithm, Strategy};
    use crate::errors::{GraphResult, Result};
    use crate::graph::{Graph, Path};
    use crate::traits::{Vertex, Weight};

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct BreadthFirst;

    impl<V, W> Strategy<V, W> for BreadthFirst
    where
        V: Vertex,
        W: Weight,
    {
        type Metric = ();
        type Frontier = Queue<V, ()>;

        const GOAL_TEST: GoalTest = GoalTest::OnDiscovery;

        fn origin(&self, _problem: &Problem<'_, V, W>) {}

        fn discover(
            &self,
            _problem: &Problem<'_, V, W>,
            _parent: &V,
            _metric: &(),
            _child: &V,
        ) -> GraphResult<()> {
            Ok(())
        }
    }

    /// Breadth-first search, which expands the oldest discovered vertex first.
    ///
    /// The path returned has the fewest possible edges, but is not
    /// necessarily the cheapest.
    pub fn breadth_first<V, W>(graph: &Graph<V, W>, start: &V, goal: &V) -> Result<Path<V, W>>
    where
        V: Vertex,
        W: Weight,
    {
        let problem = Problem::new(graph, start, goal)?;
        SearchAlgorithm::new(problem, BreadthFirst)
            .run()?
            .found_or(|| problem.no_path())
    }
}

mod dfs {
    use crate::algorithm::frontier::Stack;
    use crate::algorithm::{GoalTest, Outcome, Problem, SearchAlgorithm, Strategy};
    use crate::errors::{GraphResult, Result, SearchError};
    use crate::graph::{Graph, Path};
    use crate::traits::{Vertex, Weight};

    /// Records the depth of each vertex, and refuses to expand
    /// vertices at or beyond the limit.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct DepthFirst {
        limit: Option<usize>,
    }

    impl<V, W> Strategy<V, W> for DepthFirst
    where
        V: Vertex,
        W: Weight,
    {
        type Metric = usize;
        type Frontier = Stack<V, usize>;

        const GOAL_TEST: GoalTest = GoalTest::OnDiscovery;

        fn origin(&self, _problem: &Problem<'_, V, W>) -> usize {
            0
        }

        fn discover(
            &self,
            _problem: &Problem<'_, V, W>,
            _parent: &V,
            depth: &usize,
            _child: &V,
        ) -> GraphResult<usize> {
            Ok(depth + 1)
        }

        fn expands(&self, depth: &usize) -> bool {
            self.limit.map_or(true, |limit| *depth < limit)
        }
    }

    pub(crate) fn limited<V, W>(
        problem: Problem<'_, V, W>,
        limit: Option<usize>,
    ) -> GraphResult<Outcome<V, W>>
    where
        V: Vertex,
        W: Weight,
    {
        SearchAlgorithm::new(problem, DepthFirst { limit }).run()
    }

    pub(crate) fn exhausted<V, W>(problem: &Problem<'_, V, W>, limit: Option<usize>) -> SearchError
    where
        V: Vertex,
        W: Weight,
    {
        match limit {
            Some(limit) => SearchError::DepthLimitExhausted {
                start: problem.start.to_string(),
                goal: problem.goal.to_string(),
                limit,
            },
            None => problem.no_path(),
        }
    }

    /// Depth-first search, which expands the most recently discovered
    /// vertex first.
    ///
    /// With a `limit`, vertices that many edges from the start are not
    /// expanded.
    pub fn depth_first<V, W>(
        graph: &Graph<V, W>,
        start: &V,
        goal: &V,
        limit: Option<usize>,
    ) -> Result<Path<V, W>>
    where
        V: Vertex,
        W: Weight,
    {
        let problem = Problem::new(graph, start, goal)?;
        limited(problem, limit)?.found_or(|| exhausted(&problem, limit))
    }
}

mod iddfs {
    use tracing::info;

    use super::dfs;
    use crate::algorithm::{Outcome, Problem};
    use crate::errors::Result;
    use crate::graph::{Graph, Path};
    use crate::traits::{Vertex, Weight};

    /// Repeated depth-first searches with a depth limit growing from one.
    ///
    /// No path needs more edges than the graph has vertices less one,
    /// so once that depth has been tried the search gives up.
    pub fn iterative_deepening_depth_first<V, W>(
        graph: &Graph<V, W>,
        start: &V,
        goal: &V,
    ) -> Result<Path<V, W>>
    where
        V: Vertex,
        W: Weight,
    {
        let problem = Problem::new(graph, start, goal)?;
        let bound = graph.vertex_count().saturating_sub(1);

        let mut limit = 1;
        loop {
            if let Outcome::Found(path) = dfs::limited(problem, Some(limit))? {
                return Ok(path);
            }

            if limit >= bound {
                return Err(dfs::exhausted(&problem, Some(limit)));
            }

            limit += 1;
            info!(limit, "increasing depth limit");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::fixtures::*;
    use crate::errors::{GraphError, SearchError};
    use crate::graph::Graph;

    #[test]
    fn bfs_counts_hops() {
        let path = breadth_first(&shortcut(), &"A", &"C").unwrap();
        assert_eq!(path.vertices(), &["A", "C"]);
        assert_eq!(path.cost(), 4);

        let path = breadth_first(&detour(), &0, &5).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 5]);
        assert_eq!(path.cost(), 20);
    }

    #[test]
    fn bfs_no_path() {
        let err = breadth_first(&disconnected(), &"A", &"B").unwrap_err();
        assert_eq!(
            err,
            SearchError::NoPath {
                start: "A".into(),
                goal: "B".into(),
            }
        );
        assert!(err.is_exhausted());
        assert_eq!(format!("{}", err), "No path exists between A and B");
    }

    #[test]
    fn bfs_missing_vertex() {
        assert_eq!(
            breadth_first(&shortcut(), &"A", &"Z"),
            Err(SearchError::Graph(GraphError::NoSuchVertex("Z".into())))
        );
    }

    #[test]
    fn trivial() {
        let graph = shortcut();
        for path in vec![
            breadth_first(&graph, &"B", &"B"),
            depth_first(&graph, &"B", &"B", None),
            depth_first(&graph, &"B", &"B", Some(0)),
            iterative_deepening_depth_first(&graph, &"B", &"B"),
        ] {
            let path = path.unwrap();
            assert_eq!(path.vertices(), &["B"]);
            assert_eq!(path.cost(), 0);
        }

        let single: Graph<&str, i64> = vec![("A", vec![("A", 3)])].into_iter().collect();
        let path = iterative_deepening_depth_first(&single, &"A", &"A").unwrap();
        assert_eq!(path.vertices(), &["A"]);
    }

    #[test]
    fn loops_are_skipped() {
        let graph: Graph<&str, i64> = vec![("A", vec![("A", 1), ("B", 2)]), ("B", vec![("B", 1)])]
            .into_iter()
            .collect();

        let path = breadth_first(&graph, &"A", &"B").unwrap();
        assert_eq!(path.vertices(), &["A", "B"]);
        let err = breadth_first(&graph, &"B", &"A").unwrap_err();
        assert!(err.is_exhausted());
    }

    #[test]
    fn dfs_goes_deep() {
        let path = depth_first(&shortcut(), &"A", &"C", None).unwrap();
        assert_eq!(path.vertices(), &["A", "C"]);

        let path = depth_first(&detour(), &0, &5, None).unwrap();
        assert_eq!(path.vertices(), &[0, 2, 3, 4, 5]);
        assert_eq!(path.cost(), 4);
    }

    #[test]
    fn dfs_limited() {
        let path = depth_first(&detour(), &0, &5, Some(2)).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 5]);
        assert_eq!(path.cost(), 20);

        let err = depth_first(&detour(), &0, &5, Some(1)).unwrap_err();
        assert_eq!(
            err,
            SearchError::DepthLimitExhausted {
                start: "0".into(),
                goal: "5".into(),
                limit: 1,
            }
        );
        assert_eq!(
            format!("{}", err),
            "No path exists between 0 and 5 with a depth limit of 1"
        );
    }

    #[test]
    fn dfs_no_path() {
        let err = depth_first(&disconnected(), &"A", &"B", None).unwrap_err();
        assert!(err.is_exhausted());
    }

    #[test]
    fn iddfs_shallowest() {
        let path = iterative_deepening_depth_first(&detour(), &0, &5).unwrap();
        assert_eq!(path.vertices(), &[0, 1, 5]);
        assert_eq!(path.cost(), 20);

        let chain: Graph<&str, i64> = vec![
            ("A", vec![("B", 1)]),
            ("B", vec![("C", 1)]),
            ("C", vec![("D", 1)]),
            ("D", vec![]),
        ]
        .into_iter()
        .collect();
        let path = iterative_deepening_depth_first(&chain, &"A", &"D").unwrap();
        assert_eq!(path.vertices(), &["A", "B", "C", "D"]);
        assert_eq!(path.cost(), 3);
    }

    #[test]
    fn iddfs_no_path() {
        let err = iterative_deepening_depth_first(&disconnected(), &"A", &"B").unwrap_err();
        assert!(err.is_exhausted());
        assert_eq!(
            err,
            SearchError::DepthLimitExhausted {
                start: "A".into(),
                goal: "B".into(),
                limit: 1,
            }
        );
    }
}
