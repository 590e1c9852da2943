//! # CLI Layer
//!
//! The only place that knows about the terminal:
//!
//! 1. **Argument parsing**: clap derive types in `setup.rs`
//! 2. **Context setup**: logging, then configuration via `XpoConfig::load`
//! 3. **Dispatch**: one function per subcommand in `handlers.rs`
//! 4. **Output**: handlers return strings, printed here to stdout

mod handlers;
mod logging;
mod setup;

use anyhow::Result;
use handlers::AppState;
use setup::{parse_cli, Commands};
use xpourl::config::XpoConfig;

pub fn run() -> Result<()> {
    let cli = parse_cli();

    logging::setup_logging(if cli.verbose { "debug" } else { "warn" });

    // Token commands never touch configuration
    let state = || -> Result<AppState> {
        Ok(AppState::new(XpoConfig::load(cli.config.as_deref())?))
    };

    let output = match &cli.command {
        Commands::Url { request, base_url } => {
            handlers::url(&state()?, request, base_url.as_deref())?
        }
        Commands::Keys { request } => handlers::keys(&state()?, request)?,
        Commands::Config => handlers::config(&state()?)?,
        Commands::Encode { text } => handlers::encode(text),
        Commands::Decode { token } => handlers::decode(token)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
