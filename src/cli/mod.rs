//! CLI module for lanekit
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lanekit - a two-lane project board in the terminal
#[derive(Parser, Debug)]
#[command(name = "lanekit")]
#[command(version)]
#[command(about = "A two-lane project board in the terminal")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to ./lanekit.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive board (the default when no command is given)
    Board {
        /// Seed the board with a few sample projects
        #[arg(long)]
        demo: bool,
    },

    /// Validate candidate project input without opening the board
    Check {
        /// Project title
        #[arg(long)]
        title: String,

        /// Project description
        #[arg(long)]
        description: String,

        /// People count, as typed into the form
        #[arg(long)]
        people: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
