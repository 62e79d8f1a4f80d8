//! Board command - open the interactive board

use std::path::Path;

use tracing::info;

use crate::config::load_config;
use crate::errors::Result;
use crate::tui::BoardRunner;

/// Open the board, optionally seeded with sample projects
pub fn run(config_path: Option<&Path>, demo: bool) -> Result<()> {
    let config = load_config(config_path)?;
    info!(tick_rate_ms = config.tick_rate_ms, "opening board");

    let mut runner = BoardRunner::new(&config);
    if demo {
        runner.seed_demo();
    }
    runner.run()
}
