use crate::algorithms::{reconstruct, SearchResult, SearchStrategy, Solution};
use crate::grid::{Grid, Position};
use crate::heuristics::Heuristic;
use log::debug;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A* search: the frontier is ordered by f(n) = g(n) + h(n), where g is the
/// best known cost from the start. With an admissible, consistent heuristic
/// (Manhattan on this grid) the returned path has minimum total cost.
///
/// Unlike the closed-on-discover strategies, A* relaxes: whenever a strictly
/// cheaper route to a position is found, the position is re-enqueued with the
/// new priority and its predecessor is rewritten. The superseded frontier
/// entry is not removed; each entry carries the g value it was enqueued with,
/// and a popped entry whose g no longer matches the cost-so-far map is stale
/// and skipped without being counted as an expansion.
#[derive(Debug)]
pub struct AStar {
    heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        AStar { heuristic }
    }
}

#[derive(Clone, Copy, PartialEq)]
struct OpenEntry {
    f: f64,
    /// Cost-so-far at enqueue time; the staleness tag.
    g: f64,
    pos: Position,
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; ties on f fall back to the natural
        // Position order so runs are reproducible.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        "a_star"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        let start = grid.start();
        let goal = grid.goal();

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();
        let mut cost_so_far: FxHashMap<Position, f64> = FxHashMap::default();
        let mut nodes_expanded = 0;
        let mut peak_frontier = 0;

        cost_so_far.insert(start, 0.0);
        open.push(OpenEntry {
            f: self.heuristic.estimate(start, goal),
            g: 0.0,
            pos: start,
        });
        peak_frontier = peak_frontier.max(open.len());

        while let Some(OpenEntry { g, pos: current, .. }) = open.pop() {
            // A cheaper relaxation has superseded this entry since it was
            // enqueued; skip it, it is not an expansion.
            if cost_so_far.get(&current) != Some(&g) {
                continue;
            }

            if grid.is_goal(current) {
                debug!(
                    "a_star: goal reached, cost {}, {} nodes expanded",
                    g, nodes_expanded
                );
                return SearchResult {
                    solution: Some(Solution {
                        path: reconstruct(&came_from, current),
                        cost: g,
                    }),
                    nodes_expanded,
                    peak_frontier,
                };
            }

            nodes_expanded += 1;
            for (action, next) in grid.successors(current) {
                let next_cost = g + grid.step_cost(current, action, next);
                let improves = cost_so_far
                    .get(&next)
                    .map_or(true, |&known| next_cost < known);
                if improves {
                    cost_so_far.insert(next, next_cost);
                    came_from.insert(next, current);
                    open.push(OpenEntry {
                        f: next_cost + self.heuristic.estimate(next, goal),
                        g: next_cost,
                        pos: next,
                    });
                }
            }
            peak_frontier = peak_frontier.max(open.len());
        }

        debug!("a_star: frontier exhausted after {} expansions", nodes_expanded);
        SearchResult {
            solution: None,
            nodes_expanded,
            peak_frontier,
        }
    }
}
