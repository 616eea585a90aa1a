//! User interface rendering for the maze replay.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    grid::{Bounds, Grid},
    types::{Direction, Position},
    App,
};

/// Colour of standing walls.
const WALL_COLOR: Color = Color::Green;
/// Colour of solver moves still on the current path.
const MOVE_COLOR: Color = Color::Red;
/// Colour of solver moves that were backed out of.
const UNDO_COLOR: Color = Color::DarkGray;

/// Updates the application UI based on the persistent state.
///
/// The screen is split between the maze canvas and a status bar at the bottom.
///
/// # Errors
///
/// This function may return errors if the layout cannot be split.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());
    let maze_area = *layout
        .first()
        .ok_or_eyre("failed to get maze area from layout")?;
    let status_area = *layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    maze(app, frame, maze_area);
    status_bar(app, frame, status_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Builds the canvas line between two points given in screen coordinates.
///
/// The logical canvas grows downwards like the screen while Ratatui's canvas grows upwards, so the
/// vertical coordinates are flipped against `height`.
fn segment(from: (f64, f64), to: (f64, f64), height: f64, color: Color) -> CanvasLine {
    CanvasLine::new(from.0, height - from.1, to.0, height - to.1, color)
}

/// Lists the lines of every wall standing on `grid`.
fn wall_lines(grid: &Grid, height: f64) -> Vec<CanvasLine> {
    let mut lines = Vec::new();

    for cell in grid.cells() {
        let Bounds {
            top_left,
            bottom_right,
        } = cell.bounds();
        let (left, top) = (f64::from(top_left.x), f64::from(top_left.y));
        let (right, bottom) = (f64::from(bottom_right.x), f64::from(bottom_right.y));

        for direction in Direction::CARVE_ORDER {
            if !cell.has_wall(direction) {
                continue;
            }

            let (from, to) = match direction {
                Direction::Up => ((left, top), (right, top)),
                Direction::Down => ((left, bottom), (right, bottom)),
                Direction::Left => ((left, top), (left, bottom)),
                Direction::Right => ((right, top), (right, bottom)),
            };
            lines.push(segment(from, to, height, WALL_COLOR));
        }
    }

    lines
}

/// Centre of the cell at `position`, or `None` outside the grid.
fn centre(grid: &Grid, position: Position) -> Option<(f64, f64)> {
    grid.cell(position).ok().map(|cell| cell.bounds().centre())
}

/// Renders the maze as currently replayed: its walls, then the solver trail on top.
fn maze(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let board = app.animation_manager.board();
    let width = f64::from(app.config.width);
    let height = f64::from(app.config.height);

    let walls = wall_lines(board, height);
    let trail: Vec<CanvasLine> = app
        .animation_manager
        .trail()
        .iter()
        .filter_map(|step| {
            let color = if step.undone { UNDO_COLOR } else { MOVE_COLOR };
            Some(segment(
                centre(board, step.from)?,
                centre(board, step.to)?,
                height,
                color,
            ))
        })
        .collect();

    let canvas = Canvas::default()
        .x_bounds([0., width])
        .y_bounds([0., height])
        .marker(Marker::Braille)
        .paint(|ctx| {
            for line in &walls {
                ctx.draw(line);
            }
            ctx.layer();
            for line in &trail {
                ctx.draw(line);
            }
        });

    frame.render_widget(canvas, area);
}

/// Describes the state of the replay for the status bar.
fn status(app: &App) -> String {
    let (current, total) = app.animation_manager.progress();

    let outcome = match (&app.path, app.animation_manager.is_finished()) {
        (_, false) if app.animation_manager.is_paused() => "paused".to_owned(),
        (_, false) => "running".to_owned(),
        (Some(path), true) => format!("solved, path of {} cells", path.len()),
        (None, true) => "no path to the exit".to_owned(),
    };

    format!("seed {} | step {current}/{total} | {outcome}", app.seed)
}

/// Renders the status bar with the seed, the replay progress and the key bindings.
fn status_bar(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::bordered()
        .title("(r) new maze / (a) replay / (p) pause / (f) finish / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(WALL_COLOR))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Line::raw(status(app)).centered(), inner);
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::Config;

    /// Creates a small seeded app for UI testing.
    fn create_test_app() -> App {
        let config = Config::try_parse_from(["mazecarver", "--seed", "7", "-r", "5", "-c", "4"])
            .expect("test arguments are valid");
        App::new(config).expect("maze can be laid out")
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Collects the symbols of the last drawn frame into one string.
    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_start_of_replay() {
        let app = create_test_app();
        let mut terminal = create_test_terminal(80, 24);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the first frame should succeed");
        assert!(screen_text(&terminal).contains("seed 7 | step 0/"));
    }

    #[test]
    fn test_draw_finished_replay() {
        let mut app = create_test_app();
        app.animation_manager.finish();
        let mut terminal = create_test_terminal(80, 24);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing the final frame should succeed");
        assert!(screen_text(&terminal).contains("solved, path of"));
    }

    #[test]
    fn test_draw_paused_replay() {
        let mut app = create_test_app();
        app.animation_manager.toggle_pause();
        let mut terminal = create_test_terminal(80, 24);

        let _ = terminal
            .draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            })
            .expect("terminal drawing should succeed");

        assert!(screen_text(&terminal).contains("paused"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut app = create_test_app();
        app.animation_manager.finish();
        let mut terminal = create_test_terminal(8, 3);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing into a tiny terminal should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal(80, 24);

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_wall_lines_of_fresh_grid() {
        let grid = Grid::new(2, 3).expect("dimensions are positive");

        assert_eq!(wall_lines(&grid, 10.).len(), 2 * 3 * 4);
    }

    #[test]
    fn test_wall_lines_flip_vertical_axis() {
        let grid = Grid::new(1, 1).expect("dimensions are positive");

        let lines = wall_lines(&grid, 10.);
        let top = lines.first().expect("a walled cell has a top wall");

        // The top wall sits at y = 0 on screen, which is the canvas ceiling.
        assert!((top.y1 - 10.).abs() < f64::EPSILON);
        assert!((top.y2 - 10.).abs() < f64::EPSILON);
        assert!((top.x2 - 1.).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trail_is_drawn_from_centres() {
        assert_eq!(
            centre(
                &Grid::new(1, 1).expect("dimensions are positive"),
                Position::default()
            ),
            Some((0.5, 0.5))
        );
        assert_eq!(
            centre(
                &Grid::new(1, 1).expect("dimensions are positive"),
                Position::new(1, 0)
            ),
            None
        );
    }
}
