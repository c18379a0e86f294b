//! Pushover Desktop entry point

use std::process::ExitCode;

use clap::Parser;

use pushover_desktop::cli::{
    app::{config_store, init_tracing, run_server, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Config { action }) => {
            let presenter = Presenter::new();
            let store = config_store(cli.serve.config.as_deref());
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        None => run_server(cli.serve).await,
    }
}
