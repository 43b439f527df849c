//! Informed and uninformed search over weighted, directed graphs.
//!
//! Build a [Graph] from adjacency data (or generate one at random),
//! then find a path between two of its vertices with any of the search
//! strategies. Every strategy returns a [Path] carrying the vertices
//! visited and the total cost, or a [SearchError] when no path exists.
//!
//! The informed strategies take a [Heuristic], which any function or
//! closure of the form `Fn(&V, &Graph<V, W>, &V, &V) -> W` implements.

mod algorithm;
mod errors;
pub mod graph;
mod traits;

pub use errors::{GraphError, GraphResult, Result as SearchResult, SearchError};
pub use graph::{Adjacency, Direction, Graph, Path};
pub use traits::{Heuristic, Vertex, Weight, Zero};

pub use algorithm::astar::{astar, iterative_deepening_astar};
pub use algorithm::basic::{breadth_first, depth_first, iterative_deepening_depth_first};
pub use algorithm::bidirectional::bidirectional;
pub use algorithm::greedy::greedy_best_first;
pub use algorithm::uniform::uniform_cost;
