use std::fs::File;
use std::io::Read;

use searcher::Graph;

use crate::{AppError, Error};

type BoxedRead = Box<dyn Read + 'static>;

/// The graph every command-line search runs over.
pub type CliGraph = Graph<String, f64>;

/// Read from the named file, or from stdin for `-` or no name at all.
pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f = File::open(path).map_err(|e| AppError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

/// Parse a JSON adjacency map, `{"A": {"B": 1.0}, "B": {}}`.
pub fn load_graph<R: Read>(reader: R) -> Result<CliGraph, Error> {
    let graph: CliGraph = serde_json::from_reader(reader).map_err(AppError::InvalidGraph)?;

    for (origin, destination) in graph.edges() {
        if !graph.contains(destination) {
            return Err(AppError::DanglingEdge(origin.clone(), destination.clone()).into());
        }
    }

    Ok(graph)
}
