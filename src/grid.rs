//! Grid and cell model of the maze.
//!
//! The grid is a plain container: it owns the cells with their wall, visited and exit flags and
//! knows how to address them safely. The only operations that touch more than one flag at a time
//! are carving a wall pair, breaking the entrance and exit, and clearing the traversal state
//! between the generation and solving passes.

use crate::{
    notify::Renderer,
    types::{Direction, MazeError, Position},
};

/// Point in the renderer's logical coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// Builds a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle covered by a cell, given by two opposite corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    /// Corner with the smallest coordinates.
    pub top_left: Point,
    /// Corner with the largest coordinates.
    pub bottom_right: Point,
}

impl Bounds {
    /// Returns the midpoint of the rectangle.
    #[must_use]
    pub fn centre(self) -> (f64, f64) {
        (
            (f64::from(self.top_left.x) + f64::from(self.bottom_right.x)) / 2.,
            (f64::from(self.top_left.y) + f64::from(self.bottom_right.y)) / 2.,
        )
    }
}

/// Placement of the grid in the renderer's coordinate space.
///
/// Cell `(row, column)` starts at `origin + (row * cell_width, column * cell_height)`. The
/// geometry is carried for renderers only and has no influence on carving or solving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Top-left corner of cell `(0, 0)`.
    pub origin: Point,
    /// Horizontal extent of every cell.
    pub cell_width: i32,
    /// Vertical extent of every cell.
    pub cell_height: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            cell_width: 1,
            cell_height: 1,
        }
    }
}

impl Geometry {
    /// Computes the bounds of the cell at `position`.
    ///
    /// Coordinates saturate instead of overflowing; a grid that large cannot be drawn anyway.
    #[must_use]
    pub fn bounds(self, position: Position) -> Bounds {
        let row = i32::try_from(position.row).unwrap_or(i32::MAX);
        let column = i32::try_from(position.column).unwrap_or(i32::MAX);

        let left = self
            .origin
            .x
            .saturating_add(row.saturating_mul(self.cell_width));
        let top = self
            .origin
            .y
            .saturating_add(column.saturating_mul(self.cell_height));

        Bounds {
            top_left: Point::new(left, top),
            bottom_right: Point::new(
                left.saturating_add(self.cell_width),
                top.saturating_add(self.cell_height),
            ),
        }
    }
}

/// Set of walls still standing around a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Default for Walls {
    fn default() -> Self {
        Self::ALL
    }
}

impl Walls {
    /// All four walls present.
    pub const ALL: Self = Self(0b1111);
    /// No wall present.
    pub const NONE: Self = Self(0);

    /// Bit used for the wall crossed when moving in `direction`.
    const fn bit(direction: Direction) -> u8 {
        match direction {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }

    /// Tells whether the wall on the side of `direction` is present.
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & Self::bit(direction) != 0
    }

    /// Raises or removes the wall on the side of `direction`.
    pub const fn set(&mut self, direction: Direction, present: bool) {
        if present {
            self.0 |= Self::bit(direction);
        } else {
            self.0 &= !Self::bit(direction);
        }
    }

    /// Number of sides without a wall.
    #[must_use]
    pub const fn open_sides(self) -> u32 {
        4 - self.0.count_ones()
    }
}

/// One position of the maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Index of the cell in its grid.
    position: Position,
    /// Screen rectangle, only used by renderers.
    bounds: Bounds,
    /// Walls still standing.
    walls: Walls,
    /// Traversal mark owned by whichever pass is running.
    visited: bool,
    /// Whether reaching this cell ends the solver's search.
    exit: bool,
}

impl Cell {
    /// Creates a fully walled, unvisited cell.
    #[must_use]
    pub const fn new(position: Position, bounds: Bounds) -> Self {
        Self {
            position,
            bounds,
            walls: Walls::ALL,
            visited: false,
            exit: false,
        }
    }

    /// Index of the cell in its grid.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Screen rectangle of the cell.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Walls still standing around the cell.
    #[must_use]
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Tells whether the wall on the side of `direction` is present.
    #[must_use]
    pub const fn has_wall(&self, direction: Direction) -> bool {
        self.walls.contains(direction)
    }

    /// Raises or removes a single wall of this cell only.
    ///
    /// Prefer [`Grid::carve_passage`] when opening a passage, which keeps the neighbour in sync.
    pub const fn set_wall(&mut self, direction: Direction, present: bool) {
        self.walls.set(direction, present);
    }

    /// Replaces the whole wall set.
    pub const fn set_walls(&mut self, walls: Walls) {
        self.walls = walls;
    }

    /// Whether the running pass has already been here.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Sets the traversal mark.
    pub const fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Whether this is the maze's exit cell.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        self.exit
    }

    /// Sets the exit mark.
    pub const fn set_exit(&mut self, exit: bool) {
        self.exit = exit;
    }
}

/// Rectangular arrangement of cells indexed `[row][column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cells stored row by row.
    cells: Vec<Vec<Cell>>,
    /// Number of rows, always positive.
    rows: usize,
    /// Number of columns, always positive.
    columns: usize,
    /// Placement of the cells for renderers.
    geometry: Geometry,
}

impl Grid {
    /// Creates a fully walled grid with unit cells at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if `rows` or `columns` is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        Self::with_geometry(rows, columns, Geometry::default())
    }

    /// Creates a fully walled grid laid out according to `geometry`.
    ///
    /// Every cell exists before this returns; carving only ever clears walls afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if `rows` or `columns` is zero.
    pub fn with_geometry(
        rows: usize,
        columns: usize,
        geometry: Geometry,
    ) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }

        let cells = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| {
                        let position = Position::new(row, column);
                        Cell::new(position, geometry.bounds(position))
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            cells,
            rows,
            columns,
            geometry,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Placement of the grid for renderers.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Position of the exit corner, `(rows - 1, columns - 1)`.
    #[must_use]
    pub const fn last_position(&self) -> Position {
        Position::new(self.rows - 1, self.columns - 1)
    }

    /// Tells whether `position` addresses a cell of this grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    /// Builds the error reported for `position`.
    const fn out_of_bounds(&self, position: Position) -> MazeError {
        MazeError::OutOfBounds {
            row: position.row,
            column: position.column,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Looks a cell up.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn cell(&self, position: Position) -> Result<&Cell, MazeError> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// Looks a cell up for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn cell_mut(&mut self, position: Position) -> Result<&mut Cell, MazeError> {
        let error = self.out_of_bounds(position);

        self.cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.column))
            .ok_or(error)
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Tells whether the wall of `position` on the side of `direction` is present.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn has_wall(&self, position: Position, direction: Direction) -> Result<bool, MazeError> {
        Ok(self.cell(position)?.has_wall(direction))
    }

    /// Raises or removes one wall of one cell, leaving the neighbour untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn set_wall(
        &mut self,
        position: Position,
        direction: Direction,
        present: bool,
    ) -> Result<(), MazeError> {
        self.cell_mut(position)?.set_wall(direction, present);
        Ok(())
    }

    /// Reads the traversal mark of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn is_visited(&self, position: Position) -> Result<bool, MazeError> {
        Ok(self.cell(position)?.is_visited())
    }

    /// Writes the traversal mark of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn set_visited(&mut self, position: Position, visited: bool) -> Result<(), MazeError> {
        self.cell_mut(position)?.set_visited(visited);
        Ok(())
    }

    /// Reads the exit mark of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn is_exit(&self, position: Position) -> Result<bool, MazeError> {
        Ok(self.cell(position)?.is_exit())
    }

    /// Writes the exit mark of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid.
    pub fn set_exit(&mut self, position: Position, exit: bool) -> Result<(), MazeError> {
        self.cell_mut(position)?.set_exit(exit);
        Ok(())
    }

    /// Clears the traversal mark of every cell.
    ///
    /// Generation and solving share the visited flags; this is the hand-over between them.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.set_visited(false);
        }
    }

    /// Returns the neighbour of `position` in `direction`, or `None` past the grid's edge.
    #[must_use]
    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .step(direction)
            .filter(|&neighbour| self.contains(neighbour))
    }

    /// Opens a passage by clearing the wall pair between `position` and its neighbour in
    /// `direction`, and returns the neighbour.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `position` is outside the grid or has no neighbour in
    /// that direction.
    pub fn carve_passage(
        &mut self,
        position: Position,
        direction: Direction,
    ) -> Result<Position, MazeError> {
        if !self.contains(position) {
            return Err(self.out_of_bounds(position));
        }
        let neighbour = self.neighbour(position, direction).ok_or_else(|| {
            // Report the index one step past the edge so the message names the offending cell.
            let (row_delta, column_delta) = direction.offset();
            self.out_of_bounds(Position::new(
                position.row.wrapping_add_signed(row_delta),
                position.column.wrapping_add_signed(column_delta),
            ))
        })?;

        self.set_wall(position, direction, false)?;
        self.set_wall(neighbour, direction.opposite(), false)?;

        Ok(neighbour)
    }

    /// Breaks the global entrance and exit.
    ///
    /// The left wall of `(0, 0)` and the right wall of `(rows - 1, columns - 1)` are cleared and
    /// the latter becomes the exit. Both cells are reported to `renderer`.
    pub fn break_entrance_and_exit<V: Renderer + ?Sized>(&mut self, renderer: &mut V) {
        let entrance = Position::default();
        let exit = self.last_position();

        if let Ok(cell) = self.cell_mut(entrance) {
            cell.set_wall(Direction::Left, false);
            renderer.cell_updated(cell);
            renderer.refresh();
        }

        if let Ok(cell) = self.cell_mut(exit) {
            cell.set_wall(Direction::Right, false);
            cell.set_exit(true);
            renderer.cell_updated(cell);
            renderer.refresh();
        }
    }
}
