//! Weighted, directed graphs.
//!
//! Every edge is directional. A logical edge in both directions is
//! stored as two directed entries, loops from a vertex back to itself
//! are allowed, and there is at most one edge between an ordered
//! pair of vertices.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{GraphError, GraphResult};
use crate::traits::{Vertex, Weight};

mod path;
mod random;

pub use path::Path;

/// Raw adjacency data: vertex to neighbor to edge weight.
///
/// Both levels preserve insertion order.
pub type Adjacency<V, W> = IndexMap<V, IndexMap<V, W>>;

/// Which edges to count when computing the degree of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    Both,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Both
    }
}

/// A weighted, directed graph.
///
/// The flat edge list and the bidirectional flag are derived from the
/// adjacency data, and are refreshed after every mutation.
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    adjacency: Adjacency<V, W>,
    edges: Vec<(V, V)>,
    bidirectional: bool,
}

impl<V, W> Default for Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new(IndexMap::new())
    }
}

impl<V, W> Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Create a graph from adjacency data.
    pub fn new(adjacency: Adjacency<V, W>) -> Self {
        let mut graph = Self {
            adjacency,
            edges: Vec::new(),
            bidirectional: true,
        };
        graph.refresh();
        graph
    }

    fn refresh(&mut self) {
        self.edges = self
            .adjacency
            .iter()
            .flat_map(|(v, neighbors)| neighbors.keys().map(move |n| (v.clone(), n.clone())))
            .collect();

        let adjacency = &self.adjacency;
        self.bidirectional = self.edges.iter().all(|(v, n)| linked(adjacency, n, v));
    }

    fn no_such_vertex(vertex: &V) -> GraphError {
        GraphError::NoSuchVertex(vertex.to_string())
    }

    fn outgoing(&self, vertex: &V) -> GraphResult<&IndexMap<V, W>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| Self::no_such_vertex(vertex))
    }

    /// The raw adjacency data backing this graph.
    pub fn adjacency(&self) -> &Adjacency<V, W> {
        &self.adjacency
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Vertices, in the order they were added.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Every directed edge as a (source, destination) pair.
    ///
    /// A bidirectional edge appears twice, once in each direction.
    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges; bidirectional edges count twice.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when every edge has a matching edge in the opposite direction.
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Sum of the weights of every directed edge.
    pub fn total_weight(&self) -> W {
        self.adjacency
            .values()
            .flat_map(|neighbors| neighbors.values())
            .fold(W::zero(), |total, w| total + *w)
    }

    /// Destinations of the edges leaving `vertex`.
    pub fn edges_of(&self, vertex: &V) -> GraphResult<impl Iterator<Item = &V> + '_> {
        Ok(self.outgoing(vertex)?.keys())
    }

    /// Destinations and weights of the edges leaving `vertex`.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<impl Iterator<Item = (&V, &W)> + '_> {
        Ok(self.outgoing(vertex)?.iter())
    }

    /// Destinations of the edges leaving `vertex`, by ascending edge weight.
    ///
    /// Edges with equal weights keep their insertion order.
    pub fn sorted_edges_of(&self, vertex: &V) -> GraphResult<Vec<&V>> {
        let sorted = self
            .outgoing(vertex)?
            .iter()
            .sorted_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
            .map(|(n, _)| n)
            .collect();
        Ok(sorted)
    }

    /// Weight of the edge from `origin` to `destination`.
    pub fn edge_weight(&self, origin: &V, destination: &V) -> GraphResult<W> {
        self.adjacency
            .get(origin)
            .and_then(|neighbors| neighbors.get(destination))
            .copied()
            .ok_or_else(|| GraphError::NoSuchEdge(origin.to_string(), destination.to_string()))
    }

    /// Degree of a vertex.
    ///
    /// [Direction::Both] counts each edge once on a bidirectional graph.
    /// Otherwise it is the sum of the in and out degrees, so a pair of
    /// mutual edges is counted twice.
    pub fn degree_of(&self, vertex: &V, direction: Direction) -> GraphResult<usize> {
        let out = self.outgoing(vertex)?.len();
        let incoming = || {
            self.adjacency
                .values()
                .filter(|neighbors| neighbors.contains_key(vertex))
                .count()
        };

        Ok(match direction {
            Direction::Out => out,
            Direction::In => incoming(),
            Direction::Both if self.bidirectional => out,
            Direction::Both => out + incoming(),
        })
    }

    /// Add a new vertex with the given outgoing edges.
    ///
    /// Every edge destination must already be in the graph, or be the new
    /// vertex itself. Each edge is mirrored with the same weight, so the
    /// new vertex is always connected in both directions.
    pub fn add_vertex(&mut self, vertex: V, edges: IndexMap<V, W>) -> GraphResult<()> {
        if self.contains(&vertex) {
            return Err(GraphError::VertexExists(vertex.to_string()));
        }

        let dangling = edges
            .keys()
            .find(|target| **target != vertex && !self.contains(target));
        if let Some(target) = dangling {
            return Err(GraphError::InvalidEdgeTarget(vertex.to_string(), target.to_string()));
        }

        self.adjacency.insert(vertex.clone(), IndexMap::new());
        for (target, weight) in edges {
            if let Some(neighbors) = self.adjacency.get_mut(&target) {
                neighbors.insert(vertex.clone(), weight);
            }
            if let Some(neighbors) = self.adjacency.get_mut(&vertex) {
                neighbors.insert(target, weight);
            }
        }

        self.refresh();
        Ok(())
    }

    /// Add an edge from `origin` to `destination`, replacing any existing
    /// weight. With `bidirectional`, the reverse edge is set too.
    ///
    /// Nothing happens unless both vertices exist; the return value
    /// reports whether the edge was added.
    pub fn add_edge(
        &mut self,
        origin: &V,
        destination: &V,
        weight: W,
        bidirectional: bool,
    ) -> bool {
        if !(self.contains(origin) && self.contains(destination)) {
            return false;
        }

        if let Some(neighbors) = self.adjacency.get_mut(origin) {
            neighbors.insert(destination.clone(), weight);
        }

        if bidirectional {
            if let Some(neighbors) = self.adjacency.get_mut(destination) {
                neighbors.insert(origin.clone(), weight);
            }
        }

        self.refresh();
        true
    }

    /// Remove a vertex along with every edge into or out of it.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<()> {
        if self.adjacency.shift_remove(vertex).is_none() {
            return Err(Self::no_such_vertex(vertex));
        }

        for neighbors in self.adjacency.values_mut() {
            neighbors.shift_remove(vertex);
        }

        self.refresh();
        Ok(())
    }

    /// Remove the edge from `origin` to `destination`, returning its weight.
    pub fn remove_edge(&mut self, origin: &V, destination: &V) -> GraphResult<W> {
        let weight = self
            .adjacency
            .get_mut(origin)
            .and_then(|neighbors| neighbors.shift_remove(destination))
            .ok_or_else(|| GraphError::NoSuchEdge(origin.to_string(), destination.to_string()))?;

        self.refresh();
        Ok(weight)
    }

    /// Add the reverse of every edge which does not already have one.
    ///
    /// New reverse edges take the weight of the edge they mirror; pairs of
    /// edges which already exist keep their original weights.
    pub fn transform_into_bidirectional(&mut self) {
        if self.bidirectional {
            return;
        }

        let missing: Vec<(V, V, W)> = self
            .adjacency
            .iter()
            .flat_map(|(v, neighbors)| neighbors.iter().map(move |(n, w)| (v, n, w)))
            .filter(|(v, n, _)| !linked(&self.adjacency, *n, *v))
            .map(|(v, n, w)| (v.clone(), n.clone(), *w))
            .collect();

        for (v, n, w) in missing {
            self.adjacency
                .entry(n)
                .or_insert_with(IndexMap::new)
                .entry(v)
                .or_insert(w);
        }

        self.refresh();
    }
}

/// Whether `adjacency` holds an edge from `origin` to `destination`.
fn linked<V, W>(adjacency: &Adjacency<V, W>, origin: &V, destination: &V) -> bool
where
    V: Vertex,
{
    adjacency
        .get(origin)
        .map_or(false, |neighbors| neighbors.contains_key(destination))
}

impl<V, W> From<Adjacency<V, W>> for Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn from(adjacency: Adjacency<V, W>) -> Self {
        Self::new(adjacency)
    }
}

impl<V, W, I> FromIterator<(V, I)> for Graph<V, W>
where
    V: Vertex,
    W: Weight,
    I: IntoIterator<Item = (V, W)>,
{
    fn from_iter<T: IntoIterator<Item = (V, I)>>(iter: T) -> Self {
        let adjacency = iter
            .into_iter()
            .map(|(v, neighbors)| (v, neighbors.into_iter().collect()))
            .collect();
        Self::new(adjacency)
    }
}

impl<V, W> fmt::Display for Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A graph with {} vertices and {} edges",
            self.vertex_count(),
            self.edge_count()
        )
    }
}

impl<V, W> Serialize for Graph<V, W>
where
    V: Vertex + Serialize,
    W: Weight + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.adjacency.serialize(serializer)
    }
}

impl<'de, V, W> Deserialize<'de> for Graph<V, W>
where
    V: Vertex + Deserialize<'de>,
    W: Weight + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Adjacency::<V, W>::deserialize(deserializer).map(Graph::new)
    }
}
