use maze_gen::GenConfig;
use maze_paths::SolveOptions;

/// Settings for a [`Maze`](crate::Maze) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Fixed seed for reproducible mazes; `None` draws fresh entropy.
    pub seed: Option<u64>,
    pub generator: GenConfig,
    /// Mark cells the search expanded as `Visited` after a solve.
    pub mark_explored: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: 20,
            seed: None,
            generator: GenConfig::default(),
            mark_explored: false,
        }
    }
}

impl MazeConfig {
    pub(crate) fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            mark_explored: self.mark_explored,
        }
    }
}
