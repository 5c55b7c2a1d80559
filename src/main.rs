use clap::Parser;
use tracing::debug;

use helios_shell::app::Application;
use helios_shell::cli::Cli;
use helios_shell::config::Config;
use helios_shell::console::StdTerminal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    let mut config = match Config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    let mut app = match Application::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut terminal = StdTerminal::new();
    match app.run(&mut terminal).await {
        Ok(reason) => {
            debug!(?reason, "exiting");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
