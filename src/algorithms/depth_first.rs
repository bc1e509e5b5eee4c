use crate::algorithms::{explore, Frontier, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};

/// Depth-first search: a LIFO frontier with visited marking at insertion
/// time. Accepts whatever reachable goal it pops first, so the returned
/// path carries no optimality guarantee; the reported cost is simply the
/// edge count of the path that was found.
#[derive(Debug, Default)]
pub struct DepthFirst;

struct LifoFrontier {
    stack: Vec<Position>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, pos: Position) {
        self.stack.push(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

impl SearchStrategy for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        let mut frontier = LifoFrontier { stack: Vec::new() };
        explore(self.name(), grid, &mut frontier)
    }
}
