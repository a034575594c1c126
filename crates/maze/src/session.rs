//! [`Maze`]: one maze, its generator and the solve-in-progress guard.
//!
//! A presentation layer owns a `Maze` and drives it through user actions:
//! generate, pick two points, solve, reset. Solving normally runs to
//! completion inside [`Maze::solve`]. A front-end that wants to keep its UI
//! thread free can instead take a [`SolveJob`] with [`Maze::begin_solve`],
//! run it elsewhere and hand the result back to [`Maze::finish_solve`].
//! Until then the maze refuses every mutating action with
//! [`MazeError::AlreadySolving`], so the grid has a single writer.

use maze_core::{GridModel, MazeError, Point, Role};
use maze_gen::{GenStats, MazeGen};
use maze_paths::{PathRange, SolveOptions, SolveReport};
use rand::rngs::StdRng;

use crate::config::MazeConfig;

pub struct Maze {
    model: GridModel,
    generator: MazeGen<StdRng>,
    config: MazeConfig,
    paths: PathRange,
    solving: bool,
    // Ticket of the outstanding job; bumped whenever a job is started or
    // dropped so that a late result can be told apart from the live one.
    ticket: u64,
    last_report: Option<SolveReport>,
}

impl Maze {
    /// Create a session and generate its first maze.
    pub fn new(config: MazeConfig) -> Self {
        let mut generator = match config.seed {
            Some(seed) => MazeGen::seeded(seed),
            None => MazeGen::from_entropy(),
        }
        .with_config(config.generator);
        let model = generator.generate(config.size);
        Self::assemble(model, generator, config)
    }

    /// Create a session around an existing model, e.g. a parsed layout.
    ///
    /// The configured size follows the model; later calls to
    /// [`generate`](Self::generate) replace it with a generated maze.
    pub fn from_model(model: GridModel, mut config: MazeConfig) -> Self {
        config.size = model.size();
        let generator = match config.seed {
            Some(seed) => MazeGen::seeded(seed),
            None => MazeGen::from_entropy(),
        }
        .with_config(config.generator);
        Self::assemble(model, generator, config)
    }

    fn assemble(model: GridModel, generator: MazeGen<StdRng>, config: MazeConfig) -> Self {
        Self {
            paths: PathRange::new(model.bounds()),
            model,
            generator,
            config,
            solving: false,
            ticket: 0,
            last_report: None,
        }
    }

    #[inline]
    pub fn model(&self) -> &GridModel {
        &self.model
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Whether a [`SolveJob`] is outstanding.
    #[inline]
    pub fn is_solving(&self) -> bool {
        self.solving
    }

    /// The report of the last successful solve on the current maze.
    #[inline]
    pub fn last_report(&self) -> Option<&SolveReport> {
        self.last_report.as_ref()
    }

    fn ensure_idle(&self) -> Result<(), MazeError> {
        if self.solving {
            log::debug!("maze is busy solving");
            return Err(MazeError::AlreadySolving);
        }
        Ok(())
    }

    /// Replace the maze with a freshly generated one of the configured size.
    /// Endpoints and solution marks are discarded.
    pub fn generate(&mut self) -> Result<GenStats, MazeError> {
        self.ensure_idle()?;
        let stats = self.generator.generate_into(&mut self.model, self.config.size);
        self.ticket = self.ticket.wrapping_add(1);
        self.last_report = None;
        log::info!("new {0}x{0} maze", self.config.size);
        Ok(stats)
    }

    /// Switch to `size` and generate a fresh, unsolved maze.
    pub fn reset(&mut self, size: usize) -> Result<GenStats, MazeError> {
        self.ensure_idle()?;
        self.config.size = size;
        self.generate()
    }

    /// Assign `role` to the cell at (`row`, `col`).
    pub fn designate_point(&mut self, row: i32, col: i32, role: Role) -> Result<(), MazeError> {
        self.ensure_idle()?;
        self.model.designate(Point::new(row, col), role)
    }

    /// Pointer-style selection: the first accepted click sets the start,
    /// the second sets the end, later clicks are ignored until a reset.
    ///
    /// Clicks on cells that are not open path are ignored (`Ok(None)`).
    /// Clicks outside the grid, or while solving, are errors.
    pub fn click(&mut self, row: i32, col: i32) -> Result<Option<Role>, MazeError> {
        self.ensure_idle()?;
        let p = Point::new(row, col);
        self.model.check_bounds(p)?;
        let role = match (self.model.start(), self.model.end()) {
            (None, _) => Role::Start,
            (Some(_), None) => Role::End,
            (Some(_), Some(_)) => return Ok(None),
        };
        match self.model.designate(p, role) {
            Ok(()) => Ok(Some(role)),
            Err(MazeError::PointRejected(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn solve_options(&self) -> SolveOptions {
        self.config.solve_options()
    }

    /// Solve between the designated endpoints and mark the route.
    pub fn solve(&mut self) -> Result<SolveReport, MazeError> {
        self.ensure_idle()?;
        let opts = self.solve_options();
        self.solving = true;
        let result = maze_paths::solve_with(&mut self.paths, &mut self.model, opts);
        self.solving = false;
        self.record(result)
    }

    /// Start a solve that may run on another thread.
    ///
    /// The maze stays locked against every mutating action until the job's
    /// result is handed to [`finish_solve`](Self::finish_solve) or the job
    /// is abandoned with [`abandon_solve`](Self::abandon_solve).
    pub fn begin_solve(&mut self) -> Result<SolveJob, MazeError> {
        self.ensure_idle()?;
        if self.model.endpoints().is_none() {
            return Err(MazeError::PointsNotSet);
        }
        self.solving = true;
        self.ticket = self.ticket.wrapping_add(1);
        log::debug!("solve job {} started", self.ticket);
        Ok(SolveJob {
            ticket: self.ticket,
            model: self.model.clone(),
            options: self.solve_options(),
        })
    }

    /// Apply the result of a [`SolveJob`] and release the lock.
    ///
    /// A result from a job that is no longer the outstanding one (it was
    /// abandoned, or the maze moved on since) is returned but not applied to
    /// the grid, and the lock is left as it is.
    pub fn finish_solve(&mut self, done: FinishedSolve) -> Result<SolveReport, MazeError> {
        if !self.solving || done.ticket != self.ticket {
            log::warn!("discarding the result of stale solve job {}", done.ticket);
            return done.result;
        }
        self.model = done.model;
        self.solving = false;
        self.record(done.result)
    }

    /// Release the lock without waiting for an outstanding job.
    /// Returns whether a job was outstanding.
    pub fn abandon_solve(&mut self) -> bool {
        if !self.solving {
            return false;
        }
        self.solving = false;
        self.ticket = self.ticket.wrapping_add(1);
        true
    }

    fn record(
        &mut self,
        result: Result<SolveReport, MazeError>,
    ) -> Result<SolveReport, MazeError> {
        self.last_report = result.as_ref().ok().cloned();
        result
    }
}

/// A solve detached from its [`Maze`], safe to send to another thread.
#[derive(Debug, Clone)]
pub struct SolveJob {
    ticket: u64,
    model: GridModel,
    options: SolveOptions,
}

impl SolveJob {
    /// Run the search to completion.
    pub fn run(mut self) -> FinishedSolve {
        let result = maze_paths::solve(&mut self.model, self.options);
        FinishedSolve {
            ticket: self.ticket,
            model: self.model,
            result,
        }
    }
}

/// The outcome of [`SolveJob::run`], to be handed to [`Maze::finish_solve`].
#[derive(Debug, Clone)]
pub struct FinishedSolve {
    ticket: u64,
    model: GridModel,
    result: Result<SolveReport, MazeError>,
}

impl FinishedSolve {
    pub fn result(&self) -> &Result<SolveReport, MazeError> {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::CellState;

    const CORRIDOR: &str = "
#######
#.....#
#.###.#
#.#.#.#
#.###.#
#.....#
#######";

    fn seeded(size: usize, seed: u64) -> Maze {
        Maze::new(MazeConfig {
            size,
            seed: Some(seed),
            ..MazeConfig::default()
        })
    }

    fn corridor() -> Maze {
        Maze::from_model(GridModel::parse(CORRIDOR).unwrap(), MazeConfig::default())
    }

    #[test]
    fn new_generates_configured_size() {
        let maze = seeded(15, 9);
        assert_eq!(maze.model().size(), 15);
        assert_eq!(maze.model(), seeded(15, 9).model());
        assert!(!maze.is_solving());
        assert!(maze.last_report().is_none());
    }

    #[test]
    fn clicks_set_start_then_end_then_stop() {
        let mut maze = corridor();
        assert_eq!(maze.click(0, 0).unwrap(), None);
        assert_eq!(maze.click(1, 1).unwrap(), Some(Role::Start));
        assert_eq!(maze.click(1, 1).unwrap(), None);
        assert_eq!(maze.click(5, 5).unwrap(), Some(Role::End));
        assert_eq!(maze.click(3, 3).unwrap(), None);
        assert_eq!(maze.model().start(), Some(Point::new(1, 1)));
        assert_eq!(maze.model().end(), Some(Point::new(5, 5)));
        assert!(matches!(maze.click(9, 9), Err(MazeError::OutOfRange { .. })));
        assert!(matches!(maze.click(-1, 2), Err(MazeError::OutOfRange { .. })));
    }

    #[test]
    fn click_outside_is_an_error_before_any_point_is_set() {
        let mut maze = corridor();
        assert!(matches!(maze.click(7, 0), Err(MazeError::OutOfRange { .. })));
        assert_eq!(maze.model().endpoints(), None);
    }

    #[test]
    fn solve_marks_route_and_keeps_report() {
        let mut maze = corridor();
        maze.designate_point(1, 1, Role::Start).unwrap();
        maze.designate_point(5, 5, Role::End).unwrap();
        let report = maze.solve().unwrap();
        assert_eq!(report.length, 8);
        assert_eq!(maze.last_report(), Some(&report));
        assert_eq!(maze.model().grid().count(CellState::ShortestPath), 7);
        assert!(!maze.is_solving());
    }

    #[test]
    fn solve_needs_both_points() {
        let mut maze = corridor();
        assert_eq!(maze.solve(), Err(MazeError::PointsNotSet));
        assert!(!maze.is_solving());
        maze.designate_point(1, 1, Role::Start).unwrap();
        assert_eq!(maze.begin_solve().map(|_| ()), Err(MazeError::PointsNotSet));
        assert!(!maze.is_solving());
    }

    #[test]
    fn unreachable_leaves_grid_alone() {
        let mut maze = corridor();
        maze.designate_point(1, 1, Role::Start).unwrap();
        maze.designate_point(3, 3, Role::End).unwrap();
        let before = maze.model().clone();
        assert!(matches!(maze.solve(), Err(MazeError::Unreachable { .. })));
        assert_eq!(maze.model(), &before);
        assert!(maze.last_report().is_none());
    }

    #[test]
    fn outstanding_job_locks_the_maze() {
        let mut maze = corridor();
        maze.designate_point(1, 1, Role::Start).unwrap();
        maze.designate_point(5, 5, Role::End).unwrap();
        let job = maze.begin_solve().unwrap();
        assert!(maze.is_solving());

        assert_eq!(maze.solve(), Err(MazeError::AlreadySolving));
        assert_eq!(maze.begin_solve().map(|_| ()), Err(MazeError::AlreadySolving));
        assert_eq!(maze.designate_point(3, 1, Role::End), Err(MazeError::AlreadySolving));
        assert_eq!(maze.click(3, 1), Err(MazeError::AlreadySolving));
        assert_eq!(maze.generate().map(|_| ()), Err(MazeError::AlreadySolving));
        assert_eq!(maze.reset(9).map(|_| ()), Err(MazeError::AlreadySolving));

        let done = std::thread::spawn(move || job.run()).join().unwrap();
        let report = maze.finish_solve(done).unwrap();
        assert_eq!(report.length, 8);
        assert!(!maze.is_solving());
        assert_eq!(maze.model().grid().count(CellState::ShortestPath), 7);
    }

    #[test]
    fn abandoned_job_is_not_applied() {
        let mut maze = corridor();
        maze.designate_point(1, 1, Role::Start).unwrap();
        maze.designate_point(5, 5, Role::End).unwrap();
        let job = maze.begin_solve().unwrap();
        assert!(maze.abandon_solve());
        assert!(!maze.abandon_solve());

        let done = job.run();
        assert!(done.result().is_ok());
        assert!(maze.finish_solve(done).is_ok());
        assert_eq!(maze.model().grid().count(CellState::ShortestPath), 0);
        assert!(maze.last_report().is_none());
    }

    fn open_cells(maze: &Maze) -> Vec<Point> {
        maze.model()
            .grid()
            .iter()
            .filter(|&(_, c)| c == CellState::Path)
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn stale_job_cannot_overwrite_a_newer_maze() {
        let mut maze = seeded(9, 4);
        let open = open_cells(&maze);
        maze.designate_point(open[0].row, open[0].col, Role::Start).unwrap();
        maze.designate_point(open[1].row, open[1].col, Role::End).unwrap();
        let old_job = maze.begin_solve().unwrap();
        assert!(maze.abandon_solve());

        maze.reset(13).unwrap();
        let open = open_cells(&maze);
        maze.designate_point(open[0].row, open[0].col, Role::Start).unwrap();
        maze.designate_point(open[1].row, open[1].col, Role::End).unwrap();
        let live_job = maze.begin_solve().unwrap();
        let before = maze.model().clone();

        let _ = maze.finish_solve(old_job.run());
        assert_eq!(maze.model(), &before);
        assert_eq!(maze.model().size(), 13);
        assert!(maze.is_solving());
        assert_eq!(maze.designate_point(1, 1, Role::Start), Err(MazeError::AlreadySolving));

        let _ = maze.finish_solve(live_job.run());
        assert_eq!(maze.model().size(), 13);
        assert!(!maze.is_solving());
    }

    #[test]
    fn reset_regenerates_at_new_size() {
        let mut maze = corridor();
        maze.designate_point(1, 1, Role::Start).unwrap();
        maze.designate_point(5, 5, Role::End).unwrap();
        maze.solve().unwrap();

        maze.reset(11).unwrap();
        assert_eq!(maze.model().size(), 11);
        assert_eq!(maze.config().size, 11);
        assert_eq!(maze.model().endpoints(), None);
        assert!(maze.last_report().is_none());
        for s in [CellState::ShortestPath, CellState::Start, CellState::End] {
            assert_eq!(maze.model().grid().count(s), 0);
        }
    }

    #[test]
    fn explored_marking_follows_config() {
        let model = GridModel::new(9);
        let mut maze = Maze::from_model(
            model,
            MazeConfig {
                mark_explored: true,
                ..MazeConfig::default()
            },
        );
        maze.designate_point(1, 1, Role::Start).unwrap();
        maze.designate_point(7, 7, Role::End).unwrap();
        maze.solve().unwrap();
        assert!(maze.model().grid().count(CellState::Visited) > 0);
    }
}
