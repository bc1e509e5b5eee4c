use maze_search::algorithms::{by_name, AStar, BreadthFirst, SearchStrategy, STRATEGY_NAMES};
use maze_search::grid::{Cell, Grid, Position};
use maze_search::heuristics::Heuristic;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

const SCENARIO: &str = "S..#\n.#..\n...G\n";

const LABYRINTH: &str = "\
S...#...
.##.#.#.
.#..#.#G
.#.##.#.
........
";

fn all_strategies() -> Vec<Box<dyn SearchStrategy>> {
    STRATEGY_NAMES
        .iter()
        .filter_map(|name| by_name(name, Heuristic::Manhattan))
        .collect()
}

/// Every returned path must start at S, end at G, advance by single legal
/// moves, and visit no position twice.
fn assert_valid_path(grid: &Grid, path: &[Position]) {
    assert_eq!(path[0], grid.start());
    assert_eq!(*path.last().unwrap(), grid.goal());
    let mut seen = FxHashSet::default();
    for pos in path {
        assert!(seen.insert(*pos), "position {} repeats in path", pos);
    }
    for pair in path.windows(2) {
        let step_is_legal = grid
            .successors(pair[0])
            .into_iter()
            .any(|(_, next)| next == pair[1]);
        assert!(step_is_legal, "illegal step {} -> {}", pair[0], pair[1]);
    }
}

/// Number of passable cells reachable from the start, start included.
fn reachable_cells(grid: &Grid) -> usize {
    let mut seen = FxHashSet::default();
    let mut stack = vec![grid.start()];
    seen.insert(grid.start());
    while let Some(pos) = stack.pop() {
        for (_, next) in grid.successors(pos) {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen.len()
}

#[test]
fn known_scenario_has_cost_five() {
    let grid = Grid::parse(SCENARIO).unwrap();
    assert_eq!(grid.start(), Position::new(0, 0));
    assert_eq!(grid.goal(), Position::new(2, 3));

    let bfs = BreadthFirst.search(&grid).solution.unwrap();
    let a_star = AStar::new(Heuristic::Manhattan)
        .search(&grid)
        .solution
        .unwrap();
    assert_eq!(bfs.cost, 5.0);
    assert_eq!(a_star.cost, 5.0);

    // DFS and greedy return valid paths, possibly longer.
    for name in ["dfs", "greedy"] {
        let strategy = by_name(name, Heuristic::Manhattan).unwrap();
        let solution = strategy.search(&grid).solution.unwrap();
        assert!(solution.cost >= 5.0, "{} returned cost {}", name, solution.cost);
    }
}

#[test]
fn all_paths_are_well_formed() {
    for maze in [SCENARIO, LABYRINTH] {
        let grid = Grid::parse(maze).unwrap();
        for strategy in all_strategies() {
            let result = strategy.search(&grid);
            let solution = result
                .solution
                .unwrap_or_else(|| panic!("{} found no path", strategy.name()));
            assert_valid_path(&grid, &solution.path);
            assert_eq!(solution.cost, (solution.path.len() - 1) as f64);
        }
    }
}

#[test]
fn bfs_and_a_star_agree_on_minimum_cost() {
    let grid = Grid::parse(LABYRINTH).unwrap();
    let bfs = BreadthFirst.search(&grid).solution.unwrap();
    for heuristic in [Heuristic::Manhattan, Heuristic::Euclidean] {
        let a_star = AStar::new(heuristic).search(&grid).solution.unwrap();
        assert_eq!(a_star.cost, bfs.cost);
    }
    // DFS and greedy may only ever do worse.
    for name in ["dfs", "greedy"] {
        let strategy = by_name(name, Heuristic::Manhattan).unwrap();
        let solution = strategy.search(&grid).solution.unwrap();
        assert!(solution.cost >= bfs.cost);
    }
}

#[test]
fn optimal_cost_matches_reference_implementation() {
    let grid = Grid::parse(LABYRINTH).unwrap();
    let goal = grid.goal();
    let reference = pathfinding::prelude::astar(
        &grid.start(),
        |&pos| {
            grid.successors(pos)
                .into_iter()
                .map(|(_, next)| (next, 1u32))
                .collect::<Vec<_>>()
        },
        |&pos| {
            (pos.row.abs_diff(goal.row) + pos.col.abs_diff(goal.col)) as u32
        },
        |&pos| grid.is_goal(pos),
    );
    let (_, reference_cost) = reference.expect("reference search found no path");

    let bfs = BreadthFirst.search(&grid).solution.unwrap();
    let a_star = AStar::new(Heuristic::Manhattan)
        .search(&grid)
        .solution
        .unwrap();
    assert_eq!(bfs.cost, reference_cost as f64);
    assert_eq!(a_star.cost, reference_cost as f64);
}

#[test]
fn start_equal_to_goal_is_a_trivial_solution() {
    let cells = vec![vec![Cell::Free; 3]; 3];
    let start = Position::new(1, 1);
    let grid = Grid::from_cells(cells, start, start).unwrap();

    for strategy in all_strategies() {
        let result = strategy.search(&grid);
        let solution = result.solution.unwrap();
        assert_eq!(solution.path, vec![start]);
        assert_eq!(solution.cost, 0.0);
        assert_eq!(result.nodes_expanded, 0, "{} expanded nodes", strategy.name());
    }
}

#[test]
fn enclosed_goal_exhausts_the_reachable_region() {
    let grid = Grid::parse("S..\n###\n.G.\n").unwrap();
    let reachable = reachable_cells(&grid);
    assert_eq!(reachable, 3);

    for strategy in all_strategies() {
        let result = strategy.search(&grid);
        assert!(result.solution.is_none(), "{} found a path", strategy.name());
        assert_eq!(
            result.nodes_expanded,
            reachable,
            "{} expansion count",
            strategy.name()
        );
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let grid = Grid::parse(LABYRINTH).unwrap();
    for strategy in all_strategies() {
        let first = strategy.search(&grid);
        let second = strategy.search(&grid);
        assert_eq!(first, second, "{} is not deterministic", strategy.name());
    }
}
