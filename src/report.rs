use crate::algorithms::{SearchResult, SearchStrategy};
use crate::grid::Grid;
use std::fmt;
use std::time::{Duration, Instant};

/// One strategy run with wall-clock timing wrapped around it. Timing lives
/// here, not in the core: strategies stay free of any measurement facility.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub strategy: &'static str,
    pub elapsed: Duration,
    pub result: SearchResult,
}

pub fn run_timed(strategy: &dyn SearchStrategy, grid: &Grid) -> RunReport {
    let started = Instant::now();
    let result = strategy.search(grid);
    RunReport {
        strategy: strategy.name(),
        elapsed: started.elapsed(),
        result,
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy: {}", self.strategy)?;
        match &self.result.solution {
            Some(solution) => {
                writeln!(f, "Path Length: {} nodes", solution.path.len())?;
                writeln!(f, "Total Cost: {}", solution.cost)?;
            }
            None => {
                writeln!(f, "No path exists")?;
            }
        }
        writeln!(f, "Nodes Expanded: {}", self.result.nodes_expanded)?;
        writeln!(f, "Peak Frontier Size: {}", self.result.peak_frontier)?;
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

/// Prints a side-by-side table for an `--algorithm all` run.
pub fn print_comparison(reports: &[RunReport]) {
    println!("=== STRATEGY COMPARISON ===");
    println!(
        "{:<10} {:>8} {:>8} {:>10} {:>10} {:>12}",
        "strategy", "cost", "length", "expanded", "frontier", "elapsed"
    );
    for report in reports {
        match &report.result.solution {
            Some(solution) => println!(
                "{:<10} {:>8.1} {:>8} {:>10} {:>10} {:>12.2?}",
                report.strategy,
                solution.cost,
                solution.path.len(),
                report.result.nodes_expanded,
                report.result.peak_frontier,
                report.elapsed
            ),
            None => println!(
                "{:<10} {:>8} {:>8} {:>10} {:>10} {:>12.2?}",
                report.strategy,
                "-",
                "-",
                report.result.nodes_expanded,
                report.result.peak_frontier,
                report.elapsed
            ),
        }
    }
}
