//! Pillar-lattice maze generation.
//!
//! A generated maze is built in three passes over a freshly reset
//! [`GridModel`]:
//! 1. the border ring is wall (done by the reset);
//! 2. **pillars**: every interior cell whose row and column are both
//!    multiples of the lattice step, from (2, 2) up to `size - 3`, becomes a
//!    wall, which gives the maze a regular structure independent of chance;
//! 3. **noise**: every remaining interior `Path` cell independently becomes
//!    a wall with probability `1 / wall_one_in`.
//!
//! Nothing guarantees that all open cells stay connected.

use maze_core::{CellState, GridModel, Point};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Parameters for [`MazeGen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Distance between pillars on both axes. 0 disables pillars.
    pub pillar_step: usize,
    /// Each open interior cell becomes a wall with probability
    /// `1 / wall_one_in`. 0 disables the noise pass.
    pub wall_one_in: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            pillar_step: 2,
            wall_one_in: 5,
        }
    }
}

/// Wall counts from one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenStats {
    pub pillars: usize,
    pub random_walls: usize,
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
}

impl MazeGen<StdRng> {
    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from the thread-local entropy source.
    ///
    /// Consecutive generators are very unlikely to produce the same maze,
    /// but nothing guarantees it.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        log::trace!("maze generator seed {seed}");
        Self::seeded(seed)
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default [`GenConfig`].
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: GenConfig::default(),
        }
    }

    /// Replace the configuration (builder).
    pub fn with_config(mut self, config: GenConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate a new `size`×`size` maze.
    pub fn generate(&mut self, size: usize) -> GridModel {
        let mut model = GridModel::new(size);
        self.fill(&mut model);
        model
    }

    /// Rebuild `model` in place as a new `size`×`size` maze. Endpoints and
    /// solution marks are discarded.
    pub fn generate_into(&mut self, model: &mut GridModel, size: usize) -> GenStats {
        model.reset(size);
        self.fill(model)
    }

    fn fill(&mut self, model: &mut GridModel) -> GenStats {
        let stats = GenStats {
            pillars: self.place_pillars(model),
            random_walls: self.scatter_walls(model),
        };
        log::debug!(
            "generated {0}x{0} maze: {1} pillars, {2} random walls",
            model.size(),
            stats.pillars,
            stats.random_walls
        );
        stats
    }

    fn place_pillars(&self, model: &mut GridModel) -> usize {
        let step = self.config.pillar_step;
        if step == 0 {
            return 0;
        }
        let limit = model.size().saturating_sub(2);
        let mut placed = 0;
        for row in (2..limit).step_by(step) {
            for col in (2..limit).step_by(step) {
                if model.set_cell(Point::new(row as i32, col as i32), CellState::Wall) {
                    placed += 1;
                }
            }
        }
        placed
    }

    fn scatter_walls(&mut self, model: &mut GridModel) -> usize {
        let one_in = self.config.wall_one_in;
        if one_in == 0 {
            return 0;
        }
        let bounds = model.bounds();
        let mut added = 0;
        for p in bounds.iter().filter(|&p| !bounds.is_border(p)) {
            if model.cell_state(p) != Ok(CellState::Path) {
                continue;
            }
            if self.rng.random_ratio(1, one_in) && model.set_cell(p, CellState::Wall) {
                added += 1;
            }
        }
        added
    }
}

/// Generate a `size`×`size` maze, reproducibly when `seed` is given.
pub fn generate_maze(size: usize, seed: Option<u64>) -> GridModel {
    match seed {
        Some(seed) => MazeGen::seeded(seed).generate(size),
        None => MazeGen::from_entropy().generate(size),
    }
}
