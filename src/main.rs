use anyhow::Context;
use clap::Parser;
use counter_view::cli::Cli;
use counter_view::logging::init_tracing;
use counter_view::ui::runtime;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    // Config problems are reported before the terminal is switched to raw mode
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load config");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let result = runtime::run(&config.ui).context("terminal UI failed");
    if let Err(err) = result {
        tracing::error!(error = %err, "exiting with error");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
