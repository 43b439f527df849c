use std::fmt;

use super::Graph;
use crate::errors::GraphResult;
use crate::traits::{Vertex, Weight};

/// A path found through a [Graph], along with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<V, W> {
    vertices: Vec<V>,
    cost: W,
}

impl<V, W> Path<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// A path which starts and ends at `origin`, costing nothing.
    pub fn new(origin: V) -> Self {
        Self {
            vertices: vec![origin],
            cost: W::zero(),
        }
    }

    /// Build a path from its parts without checking them against a graph.
    pub fn from_parts(vertices: Vec<V>, cost: W) -> Self {
        Self { vertices, cost }
    }

    /// Follow `vertices` through `graph`, summing the weight of each edge.
    ///
    /// Fails if any consecutive pair is not connected by a direct edge.
    pub fn along(graph: &Graph<V, W>, vertices: Vec<V>) -> GraphResult<Self> {
        let mut cost = W::zero();
        for step in vertices.windows(2) {
            cost = cost + graph.edge_weight(&step[0], &step[1])?;
        }
        Ok(Self { vertices, cost })
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn cost(&self) -> W {
        self.cost
    }

    /// Number of edges traversed.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn origin(&self) -> &V {
        &self.vertices[0]
    }

    pub fn destination(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Split the path into its vertices and total cost.
    pub fn into_parts(self) -> (Vec<V>, W) {
        (self.vertices, self.cost)
    }
}

impl<V, W> fmt::Display for Path<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, " (cost {})", self.cost)
    }
}
