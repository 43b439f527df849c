//! Random graph generation.

use std::cmp;

use indexmap::IndexMap;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use tracing::debug;

use super::Graph;
use crate::errors::{GraphError, GraphResult};
use crate::traits::Weight;

/// Can `remaining` edges still be placed using the free loops and free
/// vertex pairs? Each pair places two edges, each loop places one.
fn can_fill(remaining: usize, loops: usize, pairs: usize) -> bool {
    let used_pairs = cmp::min(pairs, remaining / 2);
    remaining - 2 * used_pairs <= loops
}

impl<W> Graph<usize, W>
where
    W: Weight + SampleUniform,
{
    /// Generate a random graph using the thread-local random number generator.
    ///
    /// See [Graph::random_generate_with].
    pub fn random_generate(
        vertex_count: usize,
        edge_count: usize,
        minimum: W,
        maximum: W,
        bidirectional: bool,
    ) -> GraphResult<Self> {
        Self::random_generate_with(
            &mut rand::thread_rng(),
            vertex_count,
            edge_count,
            minimum,
            maximum,
            bidirectional,
        )
    }

    /// Generate a random graph with vertices `0..vertex_count` and exactly
    /// `edge_count` directed edges, each weighted uniformly in
    /// `[minimum, maximum]`.
    ///
    /// Edges are found by picking a source and destination uniformly until
    /// the pair is not already an edge. When `bidirectional` is set every
    /// edge between distinct vertices is mirrored with the same weight and
    /// counts as two edges, and loops are used to make up an odd count.
    pub fn random_generate_with<R>(
        rng: &mut R,
        vertex_count: usize,
        edge_count: usize,
        minimum: W,
        maximum: W,
        bidirectional: bool,
    ) -> GraphResult<Self>
    where
        R: Rng + ?Sized,
    {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraphRequested);
        }

        let capacity = vertex_count.saturating_mul(vertex_count);
        if edge_count > capacity {
            return Err(GraphError::TooManyEdges {
                edges: edge_count,
                maximum: capacity,
            });
        }

        if minimum > maximum {
            return Err(GraphError::InvalidWeightRange {
                minimum: minimum.to_string(),
                maximum: maximum.to_string(),
            });
        }

        let mut adjacency: Vec<IndexMap<usize, W>> = vec![IndexMap::new(); vertex_count];
        let mut remaining = edge_count;
        let mut free_loops = vertex_count;
        let mut free_pairs = vertex_count * (vertex_count - 1) / 2;

        while remaining > 0 {
            let source = rng.gen_range(0..vertex_count);
            let destination = rng.gen_range(0..vertex_count);

            if adjacency[source].contains_key(&destination) {
                continue;
            }

            if bidirectional {
                let is_loop = source == destination;
                let (used, loops, pairs) = if is_loop {
                    (1, free_loops - 1, free_pairs)
                } else {
                    (2, free_loops, free_pairs - 1)
                };

                if used > remaining || !can_fill(remaining - used, loops, pairs) {
                    continue;
                }

                let weight = rng.gen_range(minimum..=maximum);
                adjacency[source].insert(destination, weight);
                adjacency[destination].insert(source, weight);

                remaining -= used;
                free_loops = loops;
                free_pairs = pairs;
            } else {
                let weight = rng.gen_range(minimum..=maximum);
                adjacency[source].insert(destination, weight);
                remaining -= 1;
            }
        }

        let graph = Graph::new(adjacency.into_iter().enumerate().collect());
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            bidirectional = graph.is_bidirectional(),
            "generated random graph"
        );
        Ok(graph)
    }
}
