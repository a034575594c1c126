//! Maze generation: a fixed pillar lattice plus random wall noise.

pub mod mapgen;

pub use mapgen::{GenConfig, GenStats, MazeGen, generate_maze};
