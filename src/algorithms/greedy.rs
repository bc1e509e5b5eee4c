use crate::algorithms::{explore, Frontier, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Greedy best-first search: the frontier is ordered solely by the heuristic
/// estimate to the goal; the cost accumulated so far plays no part in the
/// ordering. Nodes are closed at discovery time, like BFS/DFS, which keeps
/// the search terminating but means a cheaper route found later can never
/// displace the first one recorded. Fast, not optimal. The reported cost is
/// the actual step cost of the path found, not the heuristic value.
#[derive(Debug)]
pub struct GreedyBestFirst {
    heuristic: Heuristic,
}

impl GreedyBestFirst {
    pub fn new(heuristic: Heuristic) -> Self {
        GreedyBestFirst { heuristic }
    }
}

#[derive(Clone, Copy, PartialEq)]
struct HeapEntry {
    h: f64,
    pos: Position,
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; equal estimates fall back to the
        // natural Position order so runs are reproducible.
        other
            .h
            .total_cmp(&self.h)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

struct BestFirstFrontier {
    heap: BinaryHeap<HeapEntry>,
    heuristic: Heuristic,
    goal: Position,
}

impl Frontier for BestFirstFrontier {
    fn push(&mut self, pos: Position) {
        let h = self.heuristic.estimate(pos, self.goal);
        self.heap.push(HeapEntry { h, pos });
    }

    fn pop(&mut self) -> Option<Position> {
        self.heap.pop().map(|entry| entry.pos)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl SearchStrategy for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        let mut frontier = BestFirstFrontier {
            heap: BinaryHeap::new(),
            heuristic: self.heuristic,
            goal: grid.goal(),
        };
        explore(self.name(), grid, &mut frontier)
    }
}
