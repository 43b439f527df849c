use std::collections::HashMap;

use lazy_static::lazy_static;
use searcher::{Graph, Heuristic, Path, SearchResult, Zero};

use crate::input::CliGraph;

/// Everything a search needs besides the graph.
pub struct Query<'h> {
    pub start: String,
    pub goal: String,
    pub limit: Option<f64>,
    pub heuristic: &'h dyn Heuristic<String, f64>,
}

impl Query<'_> {
    /// The limit to search within. Zero means no limit at all.
    pub fn limit(&self) -> Option<f64> {
        self.limit.filter(|l| *l > 0.0)
    }
}

/// What a command-line search produces.
pub type CliResult = SearchResult<Path<String, f64>>;

type Searcher = Box<dyn (Fn(&CliGraph, &Query<'_>) -> CliResult) + Send + Sync + 'static>;

lazy_static! {
    pub static ref STRATEGIES: HashMap<&'static str, Searcher> = {
        let mut s: HashMap<&'static str, Searcher> = HashMap::new();
        s.insert("breadth-first", Box::new(breadth_first));
        s.insert("depth-first", Box::new(depth_first));
        s.insert("uniform-cost", Box::new(uniform_cost));
        s.insert("greedy", Box::new(greedy));
        s.insert("astar", Box::new(astar));
        s.insert("iddfs", Box::new(iddfs));
        s.insert("idastar", Box::new(idastar));
        s.insert("bidirectional", Box::new(bidirectional));
        s
    };
}

/// Names accepted on the command line, in a stable order.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = STRATEGIES.keys().copied().collect();
    names.sort_unstable();
    names
}

fn breadth_first(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    searcher::breadth_first(graph, &query.start, &query.goal)
}

fn depth_first(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    let limit = query.limit().map(|l| l as usize);
    searcher::depth_first(graph, &query.start, &query.goal, limit)
}

fn uniform_cost(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    searcher::uniform_cost(graph, &query.start, &query.goal)
}

fn greedy(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    searcher::greedy_best_first(graph, &query.start, &query.goal, query.heuristic)
}

fn astar(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    let limit = query.limit();
    searcher::astar(graph, &query.start, &query.goal, query.heuristic, limit)
}

fn iddfs(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    searcher::iterative_deepening_depth_first(graph, &query.start, &query.goal)
}

fn idastar(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    searcher::iterative_deepening_astar(graph, &query.start, &query.goal, query.heuristic)
}

fn bidirectional(graph: &CliGraph, query: &Query<'_>) -> CliResult {
    searcher::bidirectional(graph, &query.start, &query.goal)
}

/// Absolute difference between the vertex and the goal, read as numbers.
/// Vertices which are not numbers are estimated as zero.
pub fn distance(
    vertex: &String,
    _graph: &Graph<String, f64>,
    _start: &String,
    goal: &String,
) -> f64 {
    match (vertex.parse::<f64>(), goal.parse::<f64>()) {
        (Ok(v), Ok(g)) => (v - g).abs(),
        _ => 0.0,
    }
}

/// Look up a heuristic by name.
pub fn heuristic(name: &str) -> Option<&'static dyn Heuristic<String, f64>> {
    match name {
        "zero" => Some(&Zero),
        "distance" => Some(&distance),
        _ => None,
    }
}
