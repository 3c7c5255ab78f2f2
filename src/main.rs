use anyhow::{bail, Context};
use clap::Parser;
use todo_tui::cli::Cli;
use todo_tui::config::Config;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = todo_tui::logging::init_tracing(cli.log_file.as_deref());

    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);

    tracing::info!(
        log_file = ?log_file,
        filter = %config.ui.initial_filter,
        seeded = cli.add.len(),
        "starting"
    );

    todo_tui::ui::run(&config, &cli.add).context("terminal UI failed")?;
    Ok(())
}
