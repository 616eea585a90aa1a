//! Depth-first maze solver.
//!
//! The solver explores open passages from a start cell until it stands on the exit, trying
//! neighbours in the fixed order of [`Direction::SOLVE_ORDER`]. Like the generator it keeps an
//! explicit stack, one frame per cell on the current path, which makes the path to the exit fall
//! out of the stack once the search succeeds.

use crate::{
    grid::Grid,
    notify::Renderer,
    types::{Direction, MazeError, Position},
};

/// One cell on the current search path.
struct Frame {
    /// Cell the frame explores from.
    position: Position,
    /// Index into [`Direction::SOLVE_ORDER`] of the next direction to try.
    next: usize,
}

impl Frame {
    /// Opens a frame that has not tried any direction yet.
    const fn open(position: Position) -> Self {
        Self { position, next: 0 }
    }

    /// Advances to the next neighbour worth stepping into.
    ///
    /// Bounds come first, then the wall on this cell's side, then the visited mark, so a broken
    /// boundary wall never leads outside the grid.
    fn next_candidate(&mut self, grid: &Grid) -> Result<Option<Position>, MazeError> {
        let cell = grid.cell(self.position)?;

        while let Some(&direction) = Direction::SOLVE_ORDER.get(self.next) {
            self.next += 1;

            let Some(neighbour) = grid.neighbour(self.position, direction) else {
                continue;
            };
            if cell.has_wall(direction) || grid.is_visited(neighbour)? {
                continue;
            }

            return Ok(Some(neighbour));
        }

        Ok(None)
    }
}

/// Marks `position` visited, reports the visit and tells whether it is the exit.
fn enter<V: Renderer + ?Sized>(
    grid: &mut Grid,
    position: Position,
    renderer: &mut V,
) -> Result<bool, MazeError> {
    let cell = grid.cell_mut(position)?;
    cell.set_visited(true);
    renderer.cell_visited(cell);

    Ok(cell.is_exit())
}

/// Searches for the exit from `start` and returns the path to it.
///
/// The path runs from `start` to the exit cell, both included. `None` means the exit cannot be
/// reached: every cell connected to `start` has been explored and is left marked visited.
///
/// Each tentative step is reported through [`Renderer::moved`]; each step backed out of is
/// reported through [`Renderer::move_undone`]. Steps on the winning path are never undone.
///
/// # Errors
///
/// Returns [`MazeError::OutOfBounds`] if `start` is outside the grid.
pub fn find_path<V: Renderer + ?Sized>(
    grid: &mut Grid,
    start: Position,
    renderer: &mut V,
) -> Result<Option<Vec<Position>>, MazeError> {
    if enter(grid, start, renderer)? {
        return Ok(Some(vec![start]));
    }

    let mut stack = vec![Frame::open(start)];

    while let Some(frame) = stack.last_mut() {
        let current = frame.position;

        if let Some(next) = frame.next_candidate(grid)? {
            renderer.moved(grid.cell(current)?, grid.cell(next)?);
            renderer.refresh();

            stack.push(Frame::open(next));
            if enter(grid, next, renderer)? {
                return Ok(Some(stack.iter().map(|frame| frame.position).collect()));
            }
        } else {
            let _ = stack.pop();

            if let Some(parent) = stack.last() {
                renderer.move_undone(grid.cell(parent.position)?, grid.cell(current)?);
                renderer.refresh();
            }
        }
    }

    Ok(None)
}

/// Tells whether the exit can be reached from `start`.
///
/// This is [`find_path`] without the path. A `false` result is final: the search is exhaustive.
///
/// # Errors
///
/// Returns [`MazeError::OutOfBounds`] if `start` is outside the grid.
pub fn solve<V: Renderer + ?Sized>(
    grid: &mut Grid,
    start: Position,
    renderer: &mut V,
) -> Result<bool, MazeError> {
    Ok(find_path(grid, start, renderer)?.is_some())
}
