//! Randomized backtracking generator.
//!
//! Carving walks the grid depth first from a start cell, knocking down the wall pair towards a
//! randomly chosen unvisited neighbour and backing up once a cell has none left. The walk uses an
//! explicit stack of frames so its depth is only bounded by the heap, and the result is a spanning
//! tree over the grid: every cell reachable, no loops.

use rand::{rngs::StdRng, Rng, SeedableRng as _};

use crate::{
    grid::Grid,
    notify::Renderer,
    types::{Direction, MazeError, Position},
};

/// Pending work for one cell of the walk.
struct Frame {
    /// Cell the walk is carving from.
    position: Position,
    /// Directions towards neighbours not tried yet.
    candidates: Vec<Direction>,
}

impl Frame {
    /// Opens a frame on `position`, listing its in-bounds, unvisited neighbours.
    fn open(grid: &Grid, position: Position) -> Self {
        let candidates = Direction::CARVE_ORDER
            .into_iter()
            .filter(|&direction| {
                grid.neighbour(position, direction)
                    .is_some_and(|neighbour| grid.cell(neighbour).is_ok_and(|cell| !cell.is_visited()))
            })
            .collect();

        Self {
            position,
            candidates,
        }
    }
}

/// Builds the random source used for carving.
///
/// A seed gives a reproducible maze; without one the generator draws from the operating system.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Carves a perfect maze into `grid`, starting at `start`.
///
/// Each carved wall pair is reported to `renderer` as two cell updates followed by a refresh.
/// All visited flags are cleared before returning so a following pass starts from a clean slate.
///
/// # Errors
///
/// Returns [`MazeError::OutOfBounds`] if `start` is outside the grid.
pub fn carve<R, V>(
    grid: &mut Grid,
    start: Position,
    rng: &mut R,
    renderer: &mut V,
) -> Result<(), MazeError>
where
    R: Rng + ?Sized,
    V: Renderer + ?Sized,
{
    grid.set_visited(start, true)?;
    let mut stack = vec![Frame::open(grid, start)];

    while let Some(frame) = stack.last_mut() {
        if frame.candidates.is_empty() {
            let _ = stack.pop();
            continue;
        }

        let pick = rng.random_range(0..frame.candidates.len());
        let direction = frame.candidates.swap_remove(pick);
        let current = frame.position;

        // A deeper branch may have reached this neighbour since the frame was opened.
        let Some(next) = grid.neighbour(current, direction) else {
            continue;
        };
        if grid.is_visited(next)? {
            continue;
        }

        let _ = grid.carve_passage(current, direction)?;
        renderer.cell_updated(grid.cell(current)?);
        renderer.cell_updated(grid.cell(next)?);
        renderer.refresh();

        grid.set_visited(next, true)?;
        stack.push(Frame::open(grid, next));
    }

    grid.reset_visited();

    Ok(())
}
