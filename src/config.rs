//! Command-line configuration of the application.

use clap::Parser;
use color_eyre::eyre::{ensure, Result, WrapErr as _};

use crate::{
    animation::DEFAULT_FRAME_DELAY_MS,
    grid::{Geometry, Point},
    maze::Settings,
    types::MazeError,
};

/// Carve a random maze and watch it being solved.
///
/// The maze is laid out on a logical canvas of `width` by `height` units with `margin` units kept
/// free on every side; the terminal scales that canvas to fit.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Number of rows, laid out from left to right.
    #[arg(short, long, default_value_t = 12)]
    pub rows: usize,
    /// Number of columns, laid out from top to bottom.
    #[arg(short, long, default_value_t = 16)]
    pub columns: usize,
    /// Seed of the maze; a random one is drawn when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Delay between two animation frames, in milliseconds.
    #[arg(short, long = "delay-ms", default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub delay_ms: u64,
    /// Width of the logical canvas.
    #[arg(long, default_value_t = 800)]
    pub width: i32,
    /// Height of the logical canvas.
    #[arg(long, default_value_t = 600)]
    pub height: i32,
    /// Free space around the maze on the logical canvas.
    #[arg(long, default_value_t = 50)]
    pub margin: i32,
    /// Carve and solve without the terminal interface, then print a summary.
    #[arg(long)]
    pub headless: bool,
}

impl Config {
    /// Derives where the cells sit on the logical canvas.
    ///
    /// Each cell gets an equal, rounded share of the canvas left once the margins are taken off.
    ///
    /// # Errors
    ///
    /// This function fails if a dimension is zero or too large to lay out, or if the canvas leaves
    /// no room for a single unit per cell.
    pub fn geometry(&self) -> Result<Geometry> {
        if self.rows == 0 || self.columns == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            }
            .into());
        }

        let rows = i32::try_from(self.rows).wrap_err("too many rows to lay out")?;
        let columns = i32::try_from(self.columns).wrap_err("too many columns to lay out")?;
        let margins = self.margin.saturating_mul(2);

        let cell_width = rounded_div::i32(self.width.saturating_sub(margins), rows);
        let cell_height = rounded_div::i32(self.height.saturating_sub(margins), columns);

        ensure!(
            cell_width > 0 && cell_height > 0,
            "a {}x{} canvas with a margin of {} leaves no room for a {}x{} maze",
            self.width,
            self.height,
            self.margin,
            self.rows,
            self.columns
        );

        Ok(Geometry {
            origin: Point::new(self.margin, self.margin),
            cell_width,
            cell_height,
        })
    }

    /// Builds the maze settings described by this configuration.
    ///
    /// # Errors
    ///
    /// This function fails under the same conditions as [`Config::geometry`].
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::new(self.rows, self.columns).with_geometry(self.geometry()?);
        settings.rng_seed = self.seed;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    /// Parses a command line made of the program name followed by `args`.
    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("mazecarver").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).expect("no arguments is valid");

        assert_eq!(config.rows, 12);
        assert_eq!(config.columns, 16);
        assert_eq!(config.seed, None);
        assert_eq!(config.delay_ms, DEFAULT_FRAME_DELAY_MS);
        assert_eq!((config.width, config.height, config.margin), (800, 600, 50));
        assert!(!config.headless);
    }

    #[test]
    fn test_custom_arguments() {
        let config = parse(&[
            "--rows",
            "3",
            "-c",
            "4",
            "--seed",
            "99",
            "--delay-ms",
            "0",
            "--headless",
        ])
        .expect("arguments are valid");

        assert_eq!(config.rows, 3);
        assert_eq!(config.columns, 4);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.delay_ms, 0);
        assert!(config.headless);
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(parse(&["--rows", "twelve"]).is_err());
        assert!(parse(&["--seed", "-1"]).is_err());
    }

    #[test]
    fn test_geometry_follows_canvas() {
        let geometry = parse(&[])
            .expect("no arguments is valid")
            .geometry()
            .expect("default canvas fits the default maze");

        // (800 - 100) / 12 = 58.3 and (600 - 100) / 16 = 31.25
        assert_eq!(geometry.origin, Point::new(50, 50));
        assert_eq!(geometry.cell_width, 58);
        assert_eq!(geometry.cell_height, 31);
    }

    #[test]
    fn test_geometry_rejects_zero_dimensions() {
        let config = parse(&["--rows", "0"]).expect("zero parses as a number");

        let error = config.geometry().expect_err("zero rows cannot be laid out");

        assert_eq!(
            error.downcast_ref::<MazeError>(),
            Some(&MazeError::InvalidDimensions {
                rows: 0,
                columns: 16
            })
        );
    }

    #[test]
    fn test_geometry_rejects_crowded_canvas() {
        let config =
            parse(&["--width", "120", "--margin", "50", "--rows", "100"]).expect("valid numbers");

        assert!(config.geometry().is_err());
    }

    #[test]
    fn test_settings_carry_seed() {
        let settings = parse(&["--seed", "5", "-r", "2", "-c", "3"])
            .expect("arguments are valid")
            .settings()
            .expect("canvas fits the maze");

        assert_eq!(settings.rng_seed, Some(5));
        assert_eq!((settings.rows, settings.columns), (2, 3));
    }
}
