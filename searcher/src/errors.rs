use thiserror::Error;

/// Error produced when a graph query or mutation fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("No such vertex: {0}")]
    NoSuchVertex(String),

    #[error("No such edge: {0} -> {1}")]
    NoSuchEdge(String, String),

    #[error("Vertex already in graph: {0}")]
    VertexExists(String),

    #[error("Edge destination not in graph: {0} -> {1}")]
    InvalidEdgeTarget(String, String),

    #[error("Graph must contain at least one vertex")]
    EmptyGraphRequested,

    #[error("Too many edges to fit into graph: {edges} requested, at most {maximum} possible")]
    TooManyEdges { edges: usize, maximum: usize },

    #[error("Invalid weight range: {minimum} to {maximum}")]
    InvalidWeightRange { minimum: String, maximum: String },
}

impl GraphError {
    /// True when a graph could not be constructed from the requested shape.
    pub fn is_invalid_construction(&self) -> bool {
        matches!(
            self,
            GraphError::EmptyGraphRequested
                | GraphError::TooManyEdges { .. }
                | GraphError::InvalidWeightRange { .. }
        )
    }
}

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No path exists between {start} and {goal}")]
    NoPath { start: String, goal: String },

    #[error("No path exists between {start} and {goal} with a depth limit of {limit}")]
    DepthLimitExhausted {
        start: String,
        goal: String,
        limit: usize,
    },

    #[error("No path exists between {start} and {goal} with a cost limit of {limit}")]
    CostLimitExhausted {
        start: String,
        goal: String,
        limit: String,
    },

    #[error("Graph must be bidirectional")]
    NotBidirectional,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl SearchError {
    /// True when the frontier emptied before the goal was reached.
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            SearchError::NoPath { .. }
                | SearchError::DepthLimitExhausted { .. }
                | SearchError::CostLimitExhausted { .. }
        )
    }
}

/// Result when a graph operation might fail.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
