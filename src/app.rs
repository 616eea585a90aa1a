//! Core application state and logic for the maze viewer.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    animation::AnimationManager,
    config::Config,
    events,
    grid::Grid,
    maze::Maze,
    notify::StepRecorder,
    types::Position,
    ui,
};

/// Application state container for the maze viewer.
///
/// This structure holds the outcome of one carve-and-solve run, together with the replay that
/// Ratatui renders from and that Crossterm key events drive.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the user asks to quit; the main loop returns after the
    /// next event poll.
    pub(crate) exit: bool,
    /// Configuration the maze was built from.
    pub(crate) config: Config,
    /// Seed the current maze was carved with.
    pub(crate) seed: u64,
    /// Path found by the solver, if any.
    pub(crate) path: Option<Vec<Position>>,
    /// Number of tentative moves and of undone moves during the search.
    pub(crate) move_counts: (usize, usize),
    /// Replay of the carving and solving passes.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Carves and solves a maze as described by `config`.
    ///
    /// When the configuration carries no seed, a random one is drawn so the run can still be
    /// reproduced from the seed shown on screen.
    ///
    /// # Errors
    ///
    /// This function fails if the configuration does not describe a maze that can be laid out.
    pub fn new(config: Config) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    /// Carves and solves a maze with an explicit seed.
    pub(crate) fn with_seed(config: Config, seed: u64) -> Result<Self> {
        let settings = config.settings()?.with_seed(seed);
        let blank = Grid::with_geometry(settings.rows, settings.columns, settings.geometry)?;

        let mut recorder = StepRecorder::default();
        let mut maze = Maze::new(&settings, &mut recorder)?;
        let path = maze.find_path(&mut recorder)?;
        let move_counts = recorder.move_counts();

        let frame_delay = Duration::from_millis(config.delay_ms);

        Ok(Self {
            exit: false,
            config,
            seed,
            path,
            move_counts,
            animation_manager: AnimationManager::new(recorder.into_steps(), blank, frame_delay),
        })
    }

    /// Replaces the current maze with a freshly seeded one.
    pub(crate) fn regenerate(&mut self) -> Result<()> {
        let next = Self::with_seed(self.config.clone(), rand::random())?;
        *self = next;

        Ok(())
    }

    /// One-line description of the run, as printed in headless mode.
    #[must_use]
    pub fn summary(&self) -> String {
        let (moves, undos) = self.move_counts;
        let outcome = self.path.as_ref().map_or_else(
            || "no path to the exit".to_owned(),
            |path| format!("solved, path of {} cells", path.len()),
        );

        format!(
            "{}x{} maze, seed {}: {outcome} ({moves} moves, {undos} backtracked)",
            self.config.rows, self.config.columns, self.seed
        )
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current frame, handles user input and advances the replay. The loop
    /// continues until the exit condition is `true`, after which the function returns to the call
    /// site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
