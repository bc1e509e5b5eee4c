use clap::Parser;

use maze_search::algorithms::{self, STRATEGY_NAMES};
use maze_search::config::Config;
use maze_search::grid::Grid;
use maze_search::heuristics::Heuristic;
use maze_search::report::{print_comparison, run_timed};

fn main() {
    env_logger::init();
    let config = Config::parse();

    let heuristic = match Heuristic::from_name(&config.heuristic) {
        Some(h) => h,
        None => {
            eprintln!(
                "Unknown heuristic '{}'; expected 'manhattan' or 'euclidean'",
                config.heuristic
            );
            std::process::exit(1);
        }
    };

    let grid = match Grid::load(&config.maze) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Maze: {} ({}x{})",
        config.maze.display(),
        grid.height(),
        grid.width()
    );
    println!("Start: {}, Goal: {}", grid.start(), grid.goal());
    println!("Heuristic: {}", heuristic.name());
    println!();

    if config.algorithm == "all" {
        let reports: Vec<_> = STRATEGY_NAMES
            .iter()
            .filter_map(|name| algorithms::by_name(name, heuristic))
            .map(|strategy| run_timed(strategy.as_ref(), &grid))
            .collect();
        print_comparison(&reports);
    } else {
        let strategy = match algorithms::by_name(&config.algorithm, heuristic) {
            Some(strategy) => strategy,
            None => {
                eprintln!(
                    "Unknown algorithm '{}'; expected one of {:?}, or 'all'",
                    config.algorithm, STRATEGY_NAMES
                );
                std::process::exit(1);
            }
        };

        let report = run_timed(strategy.as_ref(), &grid);
        println!("{}", report);

        if !config.no_render {
            if let Some(path) = report.result.path() {
                println!("{}", grid.render(Some(path)));
            }
        }
    }
}
