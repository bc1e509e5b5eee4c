//! Maze pathfinding over a 2D grid: a maze model exposing legal moves and
//! four interchangeable search strategies (breadth-first, depth-first,
//! greedy best-first, A*) sharing one frontier/predecessor-map contract.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod heuristics;
pub mod report;
