//! Shortest-path search over maze grids.
//!
//! - **Uniform-cost search** with lazy deletion ([`PathRange::shortest_path`])
//! - **BFS** step counts from one cell ([`PathRange::bfs_map`], [`PathRange::farthest`])
//! - **Regions** of mutually reachable cells ([`PathRange::region`], [`PathRange::largest_region`])
//! - **Solving** a [`GridModel`](maze_core::GridModel) in place ([`solve`],
//!   [`solve_between`])
//!
//! All searches run through [`PathRange`], which owns the distance and
//! predecessor tables for one grid and reuses them across queries.

mod bfs;
mod cc;
mod dijkstra;
mod distance;
mod pathrange;
mod solver;
mod traits;

pub use dijkstra::{PathResult, SearchOutcome};
pub use distance::manhattan;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use solver::{SolveOptions, SolveReport, solve, solve_between, solve_with};
pub use traits::{Pather, WeightedPather};
