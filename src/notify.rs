//! Renderer contract of the maze core.
//!
//! The generator and the solver report every state change through [`Renderer`]. The calls are
//! purely informational: none of them can fail, and the algorithms behave the same whether the
//! renderer draws something, records it, or ignores it.

use crate::{
    grid::{Cell, Walls},
    types::Position,
};

/// Observer of the carving and solving passes.
///
/// Every method has an empty default body so implementors only override what they display.
pub trait Renderer {
    /// Called after any wall of `_cell` changed.
    fn cell_updated(&mut self, _cell: &Cell) {}

    /// Called when the solver enters `_cell`.
    fn cell_visited(&mut self, _cell: &Cell) {}

    /// Called when the solver tentatively steps from `_from` into `_to`.
    fn moved(&mut self, _from: &Cell, _to: &Cell) {}

    /// Called when the solver backs out of a dead end, undoing the step from `_from` into `_to`.
    fn move_undone(&mut self, _from: &Cell, _to: &Cell) {}

    /// Pacing hook between two algorithmic steps.
    fn refresh(&mut self) {}
}

/// Renderer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// One recorded notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The walls of a cell changed; `walls` is the new wall set.
    Carved {
        /// Cell whose walls changed.
        position: Position,
        /// Walls standing after the change.
        walls: Walls,
    },
    /// The solver entered a cell.
    Visited(Position),
    /// The solver tried a step.
    Moved {
        /// Cell the step starts from.
        from: Position,
        /// Cell the step leads into.
        to: Position,
    },
    /// The solver backed out of a step.
    Undone {
        /// Cell the undone step started from.
        from: Position,
        /// Cell the undone step led into.
        to: Position,
    },
    /// The pacing hook fired.
    Refreshed,
}

/// Renderer that keeps every notification in order.
///
/// The terminal interface replays these steps as an animation, and tests inspect them to check the
/// exact trace of a pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepRecorder {
    /// Notifications in arrival order.
    steps: Vec<Step>,
}

impl StepRecorder {
    /// Recorded notifications in arrival order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Consumes the recorder and hands the steps over.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Counts the recorded moves and undos, in that order.
    #[must_use]
    pub fn move_counts(&self) -> (usize, usize) {
        self.steps
            .iter()
            .fold((0, 0), |(moves, undos), step| match step {
                Step::Moved { .. } => (moves + 1, undos),
                Step::Undone { .. } => (moves, undos + 1),
                _ => (moves, undos),
            })
    }
}

impl Renderer for StepRecorder {
    fn cell_updated(&mut self, cell: &Cell) {
        self.steps.push(Step::Carved {
            position: cell.position(),
            walls: cell.walls(),
        });
    }

    fn cell_visited(&mut self, cell: &Cell) {
        self.steps.push(Step::Visited(cell.position()));
    }

    fn moved(&mut self, from: &Cell, to: &Cell) {
        self.steps.push(Step::Moved {
            from: from.position(),
            to: to.position(),
        });
    }

    fn move_undone(&mut self, from: &Cell, to: &Cell) {
        self.steps.push(Step::Undone {
            from: from.position(),
            to: to.position(),
        });
    }

    fn refresh(&mut self) {
        self.steps.push(Step::Refreshed);
    }
}
