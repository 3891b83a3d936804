// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use selbox_core::AspectRatio;

#[derive(Debug, Parser)]
#[command(name = "selbox", version, about = "Replay pointer gestures against a selection box.")]
pub struct Args {
    /// Override config file (default: $XDG_CONFIG_HOME/selbox/selbox.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/selbox/selbox.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Replay an event script and print the resulting selection
    Replay {
        /// Script file, one command per line
        script: PathBuf,

        /// Host surface width
        #[arg(long)]
        width: Option<i32>,

        /// Host surface height
        #[arg(long)]
        height: Option<i32>,

        /// Enforce a width:height ratio (e.g. 16:9)
        #[arg(long)]
        ratio: Option<AspectRatio>,

        /// Keep the selection inside the host surface
        #[arg(long)]
        confine: bool,

        /// Print the selection after every script line
        #[arg(long)]
        trace: bool,
    },

    /// Print the handle rectangles for a selection
    Layout {
        x: i32,
        y: i32,
        w: i32,
        h: i32,

        /// Handle edge length (default from config)
        #[arg(long)]
        handle_size: Option<i32>,
    },
}
