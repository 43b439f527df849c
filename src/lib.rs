//! Command-line driver for the `searcher` crate.
//!
//! `graphsearch search` loads a graph from JSON and runs one of the search
//! strategies over it; `graphsearch generate` prints a random graph in the
//! same format.

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};

use anyhow;
use searcher::Graph;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use std::io;

pub mod input;
pub mod strategies;

use input::{get_input_reader, load_graph};
use strategies::{Query, STRATEGIES};

type Error = anyhow::Error;

pub fn driver() -> Result<(), Error> {
    let matches = app().get_matches();
    init_logging(matches.occurrences_of("verbose"));

    match matches.subcommand() {
        ("search", Some(sub)) => search(sub),
        ("generate", Some(sub)) => generate(sub),
        (other, _) => Err(AppError::UnknownCommand(other.to_string()).into()),
    }
}

fn app() -> App<'static, 'static> {
    App::new("graphsearch")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Search weighted graphs")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Log more detail (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            SubCommand::with_name("search")
                .about("Find a path between two vertices")
                .arg(
                    Arg::with_name("strategy")
                        .value_name("STRATEGY")
                        .required(true)
                        .possible_values(&strategies::names())
                        .index(1),
                )
                .arg(
                    Arg::with_name("graph")
                        .value_name("GRAPH")
                        .help("JSON adjacency map, or - for stdin")
                        .required(false)
                        .takes_value(true)
                        .index(2),
                )
                .arg(
                    Arg::with_name("start")
                        .long("start")
                        .value_name("VERTEX")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("goal")
                        .long("goal")
                        .value_name("VERTEX")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("limit")
                        .long("limit")
                        .value_name("LIMIT")
                        .help("Depth limit (depth-first) or cost limit (astar), 0 for none")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("heuristic")
                        .long("heuristic")
                        .value_name("HEURISTIC")
                        .possible_values(&["zero", "distance"])
                        .default_value("distance"),
                ),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Print a random graph as JSON")
                .arg(
                    Arg::with_name("vertices")
                        .value_name("VERTICES")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("edges")
                        .value_name("EDGES")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::with_name("minimum")
                        .value_name("MIN")
                        .required(true)
                        .index(3),
                )
                .arg(
                    Arg::with_name("maximum")
                        .value_name("MAX")
                        .required(true)
                        .index(4),
                )
                .arg(
                    Arg::with_name("bidirectional")
                        .long("bidirectional")
                        .help("Mirror every edge"),
                ),
        )
}

fn init_logging(verbosity: u64) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn search(matches: &ArgMatches) -> Result<(), Error> {
    let name = matches.value_of("strategy").unwrap_or_default();
    let strategy = STRATEGIES
        .get(name)
        .ok_or_else(|| AppError::UnknownStrategy(name.to_string()))?;

    let heuristic_name = matches.value_of("heuristic").unwrap_or("distance");
    let heuristic = strategies::heuristic(heuristic_name)
        .ok_or_else(|| AppError::UnknownHeuristic(heuristic_name.to_string()))?;

    let limit = match matches.value_of("limit") {
        Some(_) => Some(value_t!(matches, "limit", f64)?),
        None => None,
    };

    let query = Query {
        start: matches.value_of("start").unwrap_or_default().to_string(),
        goal: matches.value_of("goal").unwrap_or_default().to_string(),
        limit,
        heuristic,
    };

    let graph = load_graph(get_input_reader(matches.value_of("graph"))?)?;
    info!(graph = %graph, strategy = name, "loaded graph");

    let path = strategy(&graph, &query)?;
    debug!(edges = path.len(), cost = %path.cost(), "search complete");
    println!("{}", path);

    Ok(())
}

fn generate(matches: &ArgMatches) -> Result<(), Error> {
    let vertices = value_t!(matches, "vertices", usize)?;
    let edges = value_t!(matches, "edges", usize)?;
    let minimum = value_t!(matches, "minimum", i64)?;
    let maximum = value_t!(matches, "maximum", i64)?;

    let graph = Graph::<usize, i64>::random_generate(
        vertices,
        edges,
        minimum,
        maximum,
        matches.is_present("bidirectional"),
    )?;
    info!(graph = %graph, "generated graph");

    println!("{}", serde_json::to_string_pretty(&graph)?);
    Ok(())
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown command {0}")]
    UnknownCommand(String),

    #[error("Unknown search strategy {0}")]
    UnknownStrategy(String),

    #[error("Unknown heuristic {0}")]
    UnknownHeuristic(String),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Graph is not a JSON adjacency map")]
    InvalidGraph(#[source] serde_json::Error),

    #[error("Edge {0} -> {1} points to a vertex not in the graph")]
    DanglingEdge(String, String),
}
