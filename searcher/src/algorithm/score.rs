use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};

/// Metric recorded for a vertex on a priority frontier.
///
/// `cost` is the accumulated path cost from the start; `priority` is
/// the value the frontier is ordered by, which each strategy derives
/// from the cost and its heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Scored<W> {
    pub(crate) cost: W,
    pub(crate) priority: W,
}

impl<W> Scored<W>
where
    W: Copy,
{
    /// A metric whose priority is its cost.
    pub(crate) fn cost(cost: W) -> Self {
        Self {
            cost,
            priority: cost,
        }
    }
}

/// Heap entry which sorts so that a [std::collections::BinaryHeap]
/// yields the lowest priority first, and among equal priorities the
/// entry pushed earliest.
#[derive(Debug)]
pub(crate) struct Ranked<V, W> {
    pub(crate) priority: W,
    pub(crate) sequence: u64,
    pub(crate) vertex: V,
}

impl<V, W> Ord for Ranked<V, W>
where
    W: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<V, W> PartialOrd for Ranked<V, W>
where
    W: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W> PartialEq for Ranked<V, W>
where
    W: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W> Eq for Ranked<V, W> where W: PartialOrd {}
