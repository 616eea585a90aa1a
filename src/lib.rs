//! Carves perfect mazes and solves them.
//!
//! The core of this crate is a grid of cells ([`grid`]), a randomized backtracking generator
//! ([`generator`]) and a depth-first solver ([`solver`]). Both algorithms report what they do
//! through the [`notify::Renderer`] trait, which the terminal application uses to replay the passes
//! as an animation.
//!
//! [`Maze`] ties the pieces together: it builds the grid, breaks the entrance and exit, carves from
//! the top-left cell and hands the carved grid to the solver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
mod config;
mod events;
pub mod generator;
pub mod grid;
mod maze;
pub mod notify;
pub mod solver;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use maze::{Maze, Settings};
pub use types::{Direction, MazeError, Position};
