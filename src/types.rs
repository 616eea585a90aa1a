//! Shared value types and the error type of the maze core.

use std::fmt;

use thiserror::Error;

/// Index of a cell in the grid.
///
/// The row index grows along the horizontal axis and the column index along the vertical one, so a
/// position reads as `(x, y)` on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing to the right.
    pub row: usize,
    /// Column index, growing downwards.
    pub column: usize,
}

impl Position {
    /// Builds a position from its row and column indices.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the position one step away in the given direction.
    ///
    /// This only guards against underflow below index zero. The upper bound depends on the grid
    /// and is checked by [`Grid::neighbour`](crate::grid::Grid::neighbour).
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, column_delta) = direction.offset();

        let Some(row) = self.row.checked_add_signed(row_delta) else {
            return None;
        };
        let Some(column) = self.column.checked_add_signed(column_delta) else {
            return None;
        };

        Some(Self { row, column })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.column)
    }
}

/// Cardinal directions between neighbouring cells.
///
/// Each direction names both the move and the wall side it crosses: moving [`Direction::Up`] goes
/// through the top wall of the current cell and the bottom wall of the neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same row, previous column.
    Up,
    /// Same row, next column.
    Down,
    /// Previous row, same column.
    Left,
    /// Next row, same column.
    Right,
}

impl Direction {
    /// Order in which the generator lists its neighbour candidates.
    pub const CARVE_ORDER: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Order in which the solver tries neighbours. Fixed so solver traces are reproducible.
    pub const SOLVE_ORDER: [Self; 4] = [Self::Left, Self::Up, Self::Down, Self::Right];

    /// Returns the direction pointing back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(row, column)` delta of one step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Errors raised by the maze core.
///
/// Both kinds are contract violations rather than transient failures: the algorithms themselves
/// never produce them on a well-formed grid.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// A grid was requested with a zero extent.
    #[error("invalid maze dimensions {rows}x{columns}: both must be greater than zero")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        columns: usize,
    },
    /// A cell outside the grid was addressed.
    #[error("cell ({row}, {column}) lies outside the {rows}x{columns} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        columns: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposites() {
        for direction in Direction::CARVE_ORDER {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }

        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn test_direction_axis_convention() {
        let origin = Position::new(3, 3);

        assert_eq!(origin.step(Direction::Up), Some(Position::new(3, 2)));
        assert_eq!(origin.step(Direction::Down), Some(Position::new(3, 4)));
        assert_eq!(origin.step(Direction::Left), Some(Position::new(2, 3)));
        assert_eq!(origin.step(Direction::Right), Some(Position::new(4, 3)));
    }

    #[test]
    fn test_position_step_underflow() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Down), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_solve_order_starts_left() {
        assert_eq!(Direction::SOLVE_ORDER.first(), Some(&Direction::Left));
        assert_eq!(Direction::SOLVE_ORDER.last(), Some(&Direction::Right));
    }

    #[test]
    fn test_error_messages() {
        let dimensions = MazeError::InvalidDimensions {
            rows: 0,
            columns: 4,
        };
        let bounds = MazeError::OutOfBounds {
            row: 5,
            column: 1,
            rows: 2,
            columns: 2,
        };

        assert_eq!(
            dimensions.to_string(),
            "invalid maze dimensions 0x4: both must be greater than zero"
        );
        assert_eq!(bounds.to_string(), "cell (5, 1) lies outside the 2x2 grid");
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(1, 2)), "(1, 2)");
    }
}
