use crate::algorithms::{explore, Frontier, SearchResult, SearchStrategy};
use crate::grid::{Grid, Position};
use std::collections::VecDeque;

/// Breadth-first search: a FIFO frontier with visited marking at insertion
/// time. Every edge costs 1, so the shortest path by edge count it returns
/// is also the cheapest path.
#[derive(Debug, Default)]
pub struct BreadthFirst;

struct FifoFrontier {
    queue: VecDeque<Position>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, pos: Position) {
        self.queue.push_back(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(&self, grid: &Grid) -> SearchResult {
        let mut frontier = FifoFrontier {
            queue: VecDeque::new(),
        };
        explore(self.name(), grid, &mut frontier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_shortest_path_in_open_corridor() {
        let grid = Grid::parse("S....G\n").unwrap();
        let result = BreadthFirst.search(&grid);
        let solution = result.solution.unwrap();
        assert_eq!(solution.cost, 5.0);
        assert_eq!(solution.path.len(), 6);
        assert_eq!(solution.path[0], grid.start());
        assert_eq!(*solution.path.last().unwrap(), grid.goal());
    }

    #[test]
    fn shortest_path_around_wall() {
        let grid = Grid::parse("S.#G\n....\n").unwrap();
        let solution = BreadthFirst.search(&grid).solution.unwrap();
        // Down, across under the wall, back up: 5 edges.
        assert_eq!(solution.cost, 5.0);
    }

    #[test]
    fn reports_no_path_when_goal_walled_off() {
        let grid = Grid::parse("S.#G\n..##\n").unwrap();
        let result = BreadthFirst.search(&grid);
        assert!(result.solution.is_none());
        // All four reachable cells were expanded.
        assert_eq!(result.nodes_expanded, 4);
    }
}
