use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the maze text file.
    pub maze: PathBuf,

    /// One of "bfs", "dfs", "greedy", "a_star", or "all" to compare them.
    #[arg(long, default_value = "a_star")]
    pub algorithm: String,

    /// Heuristic for the informed strategies: "manhattan" or "euclidean".
    #[arg(long, default_value = "manhattan")]
    pub heuristic: String,

    /// Skip printing the maze with the found path overlaid.
    #[arg(long, default_value_t = false)]
    pub no_render: bool,
}
