//! This crate contains the source code for the binary of the maze carver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazecarver::{App, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    let headless = config.headless;
    let mut app = App::new(config)?;

    if headless {
        println!("{}", app.summary());
        return Ok(());
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
