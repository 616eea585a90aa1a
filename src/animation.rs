//! Replay of recorded carving and solving steps.
//!
//! The maze is carved and solved up front with a [`StepRecorder`](crate::notify::StepRecorder);
//! this module plays the recorded steps back onto a fully walled copy of the grid, one frame per
//! pacing hook, so the terminal can show the passes as they happened.

use std::time::{Duration, Instant};

use crate::{grid::Grid, notify::Step, types::Position};

/// Default delay between two animation frames, in milliseconds.
pub(crate) const DEFAULT_FRAME_DELAY_MS: u64 = 50;

/// One solver step drawn on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Segment {
    /// Cell the step starts from.
    pub(crate) from: Position,
    /// Cell the step leads into.
    pub(crate) to: Position,
    /// Whether the solver has backed out of this step.
    pub(crate) undone: bool,
}

/// Animation state for the carving and solving replay.
///
/// This structure owns the recorded steps, the position of the replay within them, and the picture
/// built so far: the walls of every cell and the trail of solver moves.
pub(crate) struct AnimationManager {
    /// Steps recorded while carving and solving.
    steps: Vec<Step>,
    /// Index of the next step to replay.
    current_index: usize,
    /// Time of the last frame.
    last_update_time: Instant,
    /// Minimum time between two frames.
    frame_delay: Duration,
    /// Whether the replay is on hold.
    paused: bool,
    /// Fully walled grid the replay starts from.
    blank: Grid,
    /// Grid as shown on screen.
    board: Grid,
    /// Solver moves shown on screen, oldest first.
    trail: Vec<Segment>,
}

impl AnimationManager {
    /// Creates a replay of `steps` starting from the untouched grid `blank`.
    pub(crate) fn new(steps: Vec<Step>, blank: Grid, frame_delay: Duration) -> Self {
        Self {
            steps,
            current_index: 0,
            last_update_time: Instant::now(),
            frame_delay,
            paused: false,
            board: blank.clone(),
            blank,
            trail: Vec::new(),
        }
    }

    /// Rewinds the replay to its first frame.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.board.clone_from(&self.blank);
        self.trail.clear();
        self.last_update_time = Instant::now();
    }

    /// Grid as currently shown.
    pub(crate) const fn board(&self) -> &Grid {
        &self.board
    }

    /// Solver moves currently shown.
    pub(crate) fn trail(&self) -> &[Segment] {
        &self.trail
    }

    /// Minimum time between two frames.
    pub(crate) const fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Number of steps replayed so far and in total.
    pub(crate) fn progress(&self) -> (usize, usize) {
        (self.current_index, self.steps.len())
    }

    /// Whether every step has been replayed.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Whether the replay is on hold.
    pub(crate) const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Puts the replay on hold or resumes it.
    pub(crate) const fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advances the replay by one frame once the frame delay has elapsed.
    pub(crate) fn update(&mut self) {
        if self.paused || self.is_finished() {
            return;
        }

        if self.last_update_time.elapsed() >= self.frame_delay {
            self.last_update_time = Instant::now();
            self.advance_frame();
        }
    }

    /// Replays every remaining step at once.
    pub(crate) fn finish(&mut self) {
        while !self.is_finished() {
            self.advance_frame();
        }
    }

    /// Applies steps up to and including the next pacing hook.
    fn advance_frame(&mut self) {
        while let Some(step) = self.steps.get(self.current_index).copied() {
            self.current_index += 1;
            self.apply(step);

            if step == Step::Refreshed {
                break;
            }
        }
    }

    /// Applies a single step to the picture.
    fn apply(&mut self, step: Step) {
        match step {
            Step::Carved { position, walls } => {
                if let Ok(cell) = self.board.cell_mut(position) {
                    cell.set_walls(walls);
                }
            }
            Step::Moved { from, to } => self.trail.push(Segment {
                from,
                to,
                undone: false,
            }),
            Step::Undone { from, to } => {
                // The most recent live segment between the two cells is the one being undone.
                if let Some(segment) = self
                    .trail
                    .iter_mut()
                    .rev()
                    .find(|segment| !segment.undone && segment.from == from && segment.to == to)
                {
                    segment.undone = true;
                }
            }
            Step::Visited(_) | Step::Refreshed => {}
        }
    }
}
