//! Maze construction and solving in one place.

use crate::{
    generator,
    grid::{Geometry, Grid},
    notify::Renderer,
    solver,
    types::{MazeError, Position},
};

/// Construction-time options of a [`Maze`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Number of rows, must be positive.
    pub rows: usize,
    /// Number of columns, must be positive.
    pub columns: usize,
    /// Seed of the carving random source. The same seed always carves the same maze.
    pub rng_seed: Option<u64>,
    /// Placement of the cells for renderers.
    pub geometry: Geometry,
}

impl Settings {
    /// Unseeded settings with unit cells at the origin.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            rng_seed: None,
            geometry: Geometry::default(),
        }
    }

    /// Fixes the carving seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Replaces the cell placement.
    #[must_use]
    pub const fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }
}

/// A carved maze ready to be solved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Carved grid with its entrance and exit broken.
    grid: Grid,
}

impl Maze {
    /// Builds and carves a maze.
    ///
    /// The grid is populated, its entrance and exit are broken, and passages are carved from
    /// `(0, 0)`. The returned maze has every visited flag cleared. `renderer` sees every wall
    /// change in order.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension in `settings` is zero.
    pub fn new<V: Renderer + ?Sized>(
        settings: &Settings,
        renderer: &mut V,
    ) -> Result<Self, MazeError> {
        let mut grid = Grid::with_geometry(settings.rows, settings.columns, settings.geometry)?;
        grid.break_entrance_and_exit(renderer);

        let mut rng = generator::rng_from_seed(settings.rng_seed);
        generator::carve(&mut grid, Position::default(), &mut rng, renderer)?;

        Ok(Self { grid })
    }

    /// The carved grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gives up the maze and keeps the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Finds the path from `(0, 0)` to the exit.
    ///
    /// Visited flags left over from an earlier search are cleared first.
    ///
    /// # Errors
    ///
    /// Never fails on a grid built by [`Maze::new`]; the error is kept for the solver's bounds
    /// contract.
    pub fn find_path<V: Renderer + ?Sized>(
        &mut self,
        renderer: &mut V,
    ) -> Result<Option<Vec<Position>>, MazeError> {
        self.grid.reset_visited();
        solver::find_path(&mut self.grid, Position::default(), renderer)
    }

    /// Tells whether the exit can be reached from `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Never fails on a grid built by [`Maze::new`]; see [`Maze::find_path`].
    pub fn solve<V: Renderer + ?Sized>(&mut self, renderer: &mut V) -> Result<bool, MazeError> {
        Ok(self.find_path(renderer)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::Point,
        notify::{NullRenderer, StepRecorder},
        types::Direction,
    };

    #[test]
    fn test_maze_rejects_zero_dimensions() {
        let result = Maze::new(&Settings::new(0, 3), &mut NullRenderer);

        assert_eq!(
            result,
            Err(MazeError::InvalidDimensions {
                rows: 0,
                columns: 3
            })
        );
    }

    #[test]
    fn test_maze_entrance_exit_and_open_cells() {
        let maze = Maze::new(&Settings::new(12, 16).with_seed(3), &mut NullRenderer)
            .expect("dimensions are positive");
        let grid = maze.grid();

        assert!(!grid
            .has_wall(Position::new(0, 0), Direction::Left)
            .expect("entrance exists"));
        assert!(!grid
            .has_wall(Position::new(11, 15), Direction::Right)
            .expect("exit exists"));
        assert!(grid.is_exit(Position::new(11, 15)).expect("exit exists"));
        assert_eq!(grid.cells().filter(|cell| cell.is_exit()).count(), 1);
        assert!(grid.cells().all(|cell| cell.walls().open_sides() > 0));
        assert!(grid.cells().all(|cell| !cell.is_visited()));
    }

    #[test]
    fn test_maze_seed_is_reproducible() {
        let settings = Settings::new(9, 14).with_seed(314);

        let first = Maze::new(&settings, &mut NullRenderer).expect("dimensions are positive");
        let second = Maze::new(&settings, &mut NullRenderer).expect("dimensions are positive");

        assert_eq!(first, second);
    }

    #[test]
    fn test_maze_renderer_does_not_change_result() {
        let settings = Settings::new(6, 7).with_seed(21);
        let mut recorder = StepRecorder::default();

        let mut quiet = Maze::new(&settings, &mut NullRenderer).expect("dimensions are positive");
        let mut observed = Maze::new(&settings, &mut recorder).expect("dimensions are positive");

        assert_eq!(quiet, observed);
        assert_eq!(
            quiet.find_path(&mut NullRenderer).expect("solver succeeds"),
            observed.find_path(&mut recorder).expect("solver succeeds")
        );
        assert_eq!(quiet, observed);
    }

    #[test]
    fn test_maze_solves_repeatedly() {
        let mut maze = Maze::new(&Settings::new(8, 5), &mut NullRenderer)
            .expect("dimensions are positive");

        assert!(maze.solve(&mut NullRenderer).expect("solver succeeds"));
        assert!(maze.solve(&mut NullRenderer).expect("solver succeeds"));
    }

    #[test]
    fn test_maze_single_cell() {
        let mut maze = Maze::new(&Settings::new(1, 1), &mut NullRenderer)
            .expect("dimensions are positive");
        let mut recorder = StepRecorder::default();

        assert!(maze.solve(&mut recorder).expect("solver succeeds"));
        assert_eq!(recorder.move_counts(), (0, 0));

        let cell = maze
            .grid()
            .cell(Position::default())
            .expect("single cell exists");
        assert!(!cell.has_wall(Direction::Left));
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.is_exit());
    }

    #[test]
    fn test_maze_uses_geometry() {
        let geometry = Geometry {
            origin: Point::new(50, 50),
            cell_width: 58,
            cell_height: 31,
        };
        let maze = Maze::new(
            &Settings::new(12, 16).with_geometry(geometry),
            &mut NullRenderer,
        )
        .expect("dimensions are positive");

        let last = maze
            .into_grid()
            .cell(Position::new(11, 15))
            .expect("exit exists")
            .bounds();
        assert_eq!(last.bottom_right, Point::new(50 + 12 * 58, 50 + 16 * 31));
    }
}
