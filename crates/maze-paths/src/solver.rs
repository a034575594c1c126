//! Solving a [`GridModel`] in place: search, then mark the route.

use maze_core::{CellState, GridModel, MazeError, Point};

use crate::PathRange;
use crate::dijkstra::SearchOutcome;

/// Knobs for [`solve`] and [`solve_between`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOptions {
    /// Also mark every expanded cell that is not on the route as `Visited`.
    pub mark_explored: bool,
}

/// What a successful solve found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    /// Number of steps from start to end.
    pub length: usize,
    /// The route from start to end, both included.
    pub path: Vec<Point>,
    /// Cells expanded by the search, in expansion order.
    pub explored: Vec<Point>,
}

/// Solve between the model's designated endpoints.
///
/// Fails with [`MazeError::PointsNotSet`] unless both are set.
pub fn solve(model: &mut GridModel, opts: SolveOptions) -> Result<SolveReport, MazeError> {
    let mut pr = PathRange::new(model.bounds());
    solve_with(&mut pr, model, opts)
}

/// Like [`solve`], reusing the tables of an existing [`PathRange`].
pub fn solve_with(
    pr: &mut PathRange,
    model: &mut GridModel,
    opts: SolveOptions,
) -> Result<SolveReport, MazeError> {
    let (start, end) = model.endpoints().ok_or(MazeError::PointsNotSet)?;
    solve_between_with(pr, model, start, end, opts)
}

/// Solve between two arbitrary cells and mark the route as `ShortestPath`.
///
/// `start` and `end` keep their state. When they are the same cell the
/// route has length 0 and nothing is marked. Marks left by an earlier solve
/// are cleared first; an unreachable `end` changes nothing else.
pub fn solve_between(
    model: &mut GridModel,
    start: Point,
    end: Point,
    opts: SolveOptions,
) -> Result<SolveReport, MazeError> {
    let mut pr = PathRange::new(model.bounds());
    solve_between_with(&mut pr, model, start, end, opts)
}

fn solve_between_with(
    pr: &mut PathRange,
    model: &mut GridModel,
    start: Point,
    end: Point,
    opts: SolveOptions,
) -> Result<SolveReport, MazeError> {
    model.check_bounds(start)?;
    model.check_bounds(end)?;
    pr.set_range(model.bounds());

    let cleared = model.clear_solution();
    if cleared > 0 {
        log::debug!("cleared {cleared} marks from a previous solve");
    }

    if !model.is_traversable(start) || !model.is_traversable(end) {
        log::info!("no path from {start} to {end}: endpoint is a wall");
        return Err(MazeError::Unreachable { start, end });
    }

    let result = match pr.shortest_path(&*model, start, end) {
        SearchOutcome::Found(r) => r,
        SearchOutcome::Unreachable => {
            log::info!("no path from {start} to {end}");
            return Err(MazeError::Unreachable { start, end });
        }
    };

    let is_endpoint = |p: Point| p == start || p == end;
    if opts.mark_explored {
        for &p in result.explored.iter().filter(|&&p| !is_endpoint(p)) {
            model.set_cell(p, CellState::Visited);
        }
    }
    for &p in result.path.iter().filter(|&&p| !is_endpoint(p)) {
        model.set_cell(p, CellState::ShortestPath);
    }

    let length = result.cost as usize;
    log::info!(
        "solved {start} -> {end}: length {length}, {} cells explored",
        result.explored.len()
    );

    Ok(SolveReport {
        length,
        path: result.path,
        explored: result.explored,
    })
}
