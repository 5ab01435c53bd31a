//! Open-set implementations. Both hand out indices into the engine's node table, together with
//! the cost the entry was inserted with so that the engine can discard outdated entries.
use crate::FxIndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Selects how the open set picks the next cell to expand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontierKind {
    /// Binary heap with lazy deletion, `O(log V)` per operation. Among equal f-scores the entry
    /// with the highest g-score wins, remaining ties go to the earliest insertion.
    #[default]
    BinaryHeap,
    /// Linear scan over an insertion-ordered map, `O(V)` per selection. Picks the first minimum
    /// in insertion order. A cell whose score improves keeps its position.
    LinearScan,
}

pub(crate) trait Frontier {
    fn push(&mut self, index: usize, estimated_cost: f64, cost: u32);
    /// Removes the next entry, returning its node index and the cost it was pushed with.
    fn pop(&mut self) -> Option<(usize, u32)>;
    fn len(&self) -> usize;
}

struct SmallestCostHolder {
    estimated_cost: f64,
    cost: u32,
    seq: u64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on estimated cost so the max-heap pops the smallest f first, then favours
        // the larger cost (deeper node), then the older entry.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
pub(crate) struct HeapFrontier {
    heap: BinaryHeap<SmallestCostHolder>,
    seq: u64,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, index: usize, estimated_cost: f64, cost: u32) {
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            cost,
            seq: self.seq,
            index,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<(usize, u32)> {
        self.heap.pop().map(|h| (h.index, h.cost))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Each node index appears at most once, so popped entries are never outdated.
#[derive(Default)]
pub(crate) struct ScanFrontier {
    open: FxIndexMap<usize, (f64, u32)>,
}

impl Frontier for ScanFrontier {
    fn push(&mut self, index: usize, estimated_cost: f64, cost: u32) {
        self.open.insert(index, (estimated_cost, cost));
    }

    fn pop(&mut self) -> Option<(usize, u32)> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, (_, &(f, _))) in self.open.iter().enumerate() {
            if best.map_or(true, |(_, best_f)| f < best_f) {
                best = Some((pos, f));
            }
        }
        let (pos, _) = best?;
        self.open
            .shift_remove_index(pos)
            .map(|(index, (_, cost))| (index, cost))
    }

    fn len(&self) -> usize {
        self.open.len()
    }
}

pub(crate) fn new_frontier(kind: FrontierKind) -> Box<dyn Frontier> {
    match kind {
        FrontierKind::BinaryHeap => Box::new(HeapFrontier::default()),
        FrontierKind::LinearScan => Box::new(ScanFrontier::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut dyn Frontier) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop().map(|(ix, _)| ix)).collect()
    }

    #[test]
    fn heap_orders_by_estimate_then_cost_then_age() {
        let mut f = HeapFrontier::default();
        f.push(0, 3.0, 1);
        f.push(1, 2.0, 0);
        f.push(2, 2.0, 2);
        f.push(3, 2.0, 2);
        f.push(4, 1.5, 0);
        assert_eq!(f.len(), 5);
        assert_eq!(drain(&mut f), vec![4, 2, 3, 1, 0]);
    }

    #[test]
    fn scan_picks_first_minimum_and_updates_in_place() {
        let mut f = ScanFrontier::default();
        f.push(0, 2.0, 1);
        f.push(1, 1.0, 1);
        f.push(2, 1.0, 1);
        // An improved entry keeps its original position
        f.push(0, 1.0, 0);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop(), Some((0, 0)));
        f.push(3, 1.0, 2);
        assert_eq!(drain(&mut f), vec![1, 2, 3]);
    }

    #[test]
    fn empty_frontiers_pop_nothing() {
        for kind in [FrontierKind::BinaryHeap, FrontierKind::LinearScan] {
            let mut f = new_frontier(kind);
            assert_eq!(f.len(), 0);
            assert!(f.pop().is_none());
        }
    }
}
