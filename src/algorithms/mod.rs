pub mod a_star;
pub mod breadth_first;
pub mod depth_first;
pub mod greedy;

pub use a_star::AStar;
pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use greedy::GreedyBestFirst;

use crate::grid::{Grid, Position};
use crate::heuristics::Heuristic;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// A complete route with its accumulated step cost. Path and cost always
/// travel together; a search without a solution reports neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Positions from start to goal inclusive.
    pub path: Vec<Position>,
    pub cost: f64,
}

/// Outcome of one strategy invocation. "No path exists" is a normal result
/// (`solution: None`), not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub solution: Option<Solution>,
    /// Nodes popped from the frontier whose neighbors were generated. A goal
    /// pop terminates the search before neighbor generation, and stale A*
    /// entries are skipped, so neither is counted.
    pub nodes_expanded: usize,
    /// High-water mark of the frontier. The predecessor and cost maps only
    /// grow, so their high-water mark is their final size and needs no
    /// separate tracking.
    pub peak_frontier: usize,
}

impl SearchResult {
    pub fn path(&self) -> Option<&[Position]> {
        self.solution.as_ref().map(|s| s.path.as_slice())
    }

    pub fn cost(&self) -> Option<f64> {
        self.solution.as_ref().map(|s| s.cost)
    }
}

/// Common contract for the four search strategies. Each call allocates its
/// own frontier and bookkeeping maps, so strategies never share state and a
/// grid may be searched from multiple threads at once.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn search(&self, grid: &Grid) -> SearchResult;
}

/// Names accepted by [`by_name`], in comparison-report order.
pub const STRATEGY_NAMES: [&str; 4] = ["bfs", "dfs", "greedy", "a_star"];

/// Looks up a strategy by CLI name. The heuristic only matters for the
/// informed strategies.
pub fn by_name(name: &str, heuristic: Heuristic) -> Option<Box<dyn SearchStrategy>> {
    match name {
        "bfs" => Some(Box::new(BreadthFirst)),
        "dfs" => Some(Box::new(DepthFirst)),
        "greedy" => Some(Box::new(GreedyBestFirst::new(heuristic))),
        "a_star" => Some(Box::new(AStar::new(heuristic))),
        _ => None,
    }
}

/// Frontier discipline for the strategies that mark nodes visited at
/// insertion time. The ordering policy lives entirely in the implementation:
/// FIFO for breadth-first, LIFO for depth-first, an `h`-ordered min-heap for
/// greedy best-first.
pub(crate) trait Frontier {
    fn push(&mut self, pos: Position);
    fn pop(&mut self) -> Option<Position>;
    fn len(&self) -> usize;
}

/// Shared engine for the closed-on-discover strategies (BFS, DFS, greedy
/// best-first): a neighbor is marked visited the moment it is first
/// discovered and is never enqueued again, so every reachable node is
/// expanded at most once. A* does not fit this discipline (it relaxes
/// costs and re-enqueues) and has its own loop.
pub(crate) fn explore<F: Frontier>(name: &str, grid: &Grid, frontier: &mut F) -> SearchResult {
    let start = grid.start();
    let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();
    let mut cost_so_far: FxHashMap<Position, f64> = FxHashMap::default();
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut nodes_expanded = 0;
    let mut peak_frontier = 0;

    visited.insert(start);
    cost_so_far.insert(start, 0.0);
    frontier.push(start);
    peak_frontier = peak_frontier.max(frontier.len());

    while let Some(current) = frontier.pop() {
        if grid.is_goal(current) {
            let path = reconstruct(&came_from, current);
            let cost = cost_so_far[&current];
            debug!(
                "{}: goal reached, cost {}, {} nodes expanded",
                name, cost, nodes_expanded
            );
            return SearchResult {
                solution: Some(Solution { path, cost }),
                nodes_expanded,
                peak_frontier,
            };
        }

        nodes_expanded += 1;
        let current_cost = cost_so_far[&current];
        for (action, next) in grid.successors(current) {
            if visited.insert(next) {
                cost_so_far.insert(next, current_cost + grid.step_cost(current, action, next));
                came_from.insert(next, current);
                frontier.push(next);
            }
        }
        peak_frontier = peak_frontier.max(frontier.len());
    }

    debug!("{}: frontier exhausted after {} expansions", name, nodes_expanded);
    SearchResult {
        solution: None,
        nodes_expanded,
        peak_frontier,
    }
}

/// Walks predecessor links back from the goal (the start has no predecessor)
/// and reverses the collected sequence into a start-to-goal path.
pub(crate) fn reconstruct(came_from: &FxHashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
