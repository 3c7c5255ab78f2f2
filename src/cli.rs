use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::todos::VisibilityFilter;

#[derive(Debug, Parser)]
#[command(name = "todo-tui", version, about = "A to-do list for the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Visibility filter at startup: all, active or completed (overrides config)
    #[arg(
        long,
        value_name = "FILTER",
        value_parser = clap::value_parser!(VisibilityFilter)
    )]
    pub filter: Option<VisibilityFilter>,

    /// Add an item at startup; may be repeated
    #[arg(long = "add", value_name = "TEXT")]
    pub add: Vec<String>,

    /// Write logs to this file (suffixed with timestamp and pid)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(filter) = self.filter {
            config.ui.initial_filter = filter;
        }
    }
}
