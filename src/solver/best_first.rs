//! Priority queue entries shared by [Dijkstra](super::dijkstra) and [A*](super::astar).
//!
//! Both searches push a new entry whenever a cell's cost improves and skip stale entries when
//! they surface, instead of decreasing keys in place.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub(crate) struct SmallestCostHolder {
    pub estimated_cost: u32,
    pub cost: u32,
    pub index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of the deepest node first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Min-heap on estimated cost.
pub(crate) type OpenQueue = BinaryHeap<SmallestCostHolder>;

pub(crate) fn open_queue(index: usize, estimated_cost: u32) -> OpenQueue {
    let mut queue = BinaryHeap::new();
    queue.push(SmallestCostHolder {
        estimated_cost,
        cost: 0,
        index,
    });
    queue
}
