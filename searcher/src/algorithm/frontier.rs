//! Frontiers: the vertices discovered but not yet expanded.
//!
//! Each frontier holds a vertex at most once, alongside the metric its
//! strategy recorded for it. Pushing a vertex which is already present
//! replaces its metric instead of adding a second entry.

use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::hash::Hash;

use super::score::{Ranked, Scored};

/// Trait used to implement frontiers of vertices which
/// should be expanded by a search.
pub(crate) trait Frontier<V> {
    type Metric;

    fn pop(&mut self) -> Option<(V, Self::Metric)>;

    fn push(&mut self, vertex: V, metric: Self::Metric);

    /// The metric recorded for `vertex`, if it is on the frontier.
    fn get(&self, vertex: &V) -> Option<&Self::Metric>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug)]
pub(crate) struct Queue<V, M> {
    order: VecDeque<V>,
    members: HashMap<V, M>,
}

impl<V, M> Default for Queue<V, M> {
    fn default() -> Self {
        Queue {
            order: VecDeque::new(),
            members: HashMap::new(),
        }
    }
}

impl<V, M> Frontier<V> for Queue<V, M>
where
    V: Clone + Hash + Eq,
{
    type Metric = M;

    fn pop(&mut self) -> Option<(V, M)> {
        while let Some(vertex) = self.order.pop_front() {
            if let Some(metric) = self.members.remove(&vertex) {
                return Some((vertex, metric));
            }
        }
        None
    }

    fn push(&mut self, vertex: V, metric: M) {
        if self.members.insert(vertex.clone(), metric).is_none() {
            self.order.push_back(vertex);
        }
    }

    fn get(&self, vertex: &V) -> Option<&M> {
        self.members.get(vertex)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

/// Last in, first out.
#[derive(Debug)]
pub(crate) struct Stack<V, M> {
    order: Vec<V>,
    members: HashMap<V, M>,
}

impl<V, M> Default for Stack<V, M> {
    fn default() -> Self {
        Stack {
            order: Vec::new(),
            members: HashMap::new(),
        }
    }
}

impl<V, M> Frontier<V> for Stack<V, M>
where
    V: Clone + Hash + Eq,
{
    type Metric = M;

    fn pop(&mut self) -> Option<(V, M)> {
        while let Some(vertex) = self.order.pop() {
            if let Some(metric) = self.members.remove(&vertex) {
                return Some((vertex, metric));
            }
        }
        None
    }

    fn push(&mut self, vertex: V, metric: M) {
        if self.members.insert(vertex.clone(), metric).is_none() {
            self.order.push(vertex);
        }
    }

    fn get(&self, vertex: &V) -> Option<&M> {
        self.members.get(vertex)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

/// A priority queue which always yields the vertex with the lowest
/// [Scored::priority].
///
/// Ties go to the vertex pushed earliest. Replacing the metric of a
/// vertex counts as pushing it again. Superseded heap entries stay in
/// the heap and are skipped when they surface.
#[derive(Debug)]
pub(crate) struct PriorityQueue<V, W> {
    heap: BinaryHeap<Ranked<V, W>>,
    members: HashMap<V, (Scored<W>, u64)>,
    sequence: u64,
}

impl<V, W> Default for PriorityQueue<V, W>
where
    W: PartialOrd,
{
    fn default() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            members: HashMap::new(),
            sequence: 0,
        }
    }
}

impl<V, W> Frontier<V> for PriorityQueue<V, W>
where
    V: Clone + Hash + Eq,
    W: Copy + PartialOrd,
{
    type Metric = Scored<W>;

    fn pop(&mut self) -> Option<(V, Scored<W>)> {
        while let Some(entry) = self.heap.pop() {
            let current = match self.members.get(&entry.vertex) {
                Some((_, sequence)) => *sequence == entry.sequence,
                None => false,
            };

            if current {
                if let Some((metric, _)) = self.members.remove(&entry.vertex) {
                    return Some((entry.vertex, metric));
                }
            }
        }
        None
    }

    fn push(&mut self, vertex: V, metric: Scored<W>) {
        let sequence = self.sequence;
        self.sequence += 1;

        self.members.insert(vertex.clone(), (metric, sequence));
        self.heap.push(Ranked {
            priority: metric.priority,
            sequence,
            vertex,
        });
    }

    fn get(&self, vertex: &V) -> Option<&Scored<W>> {
        self.members.get(vertex).map(|(metric, _)| metric)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}
