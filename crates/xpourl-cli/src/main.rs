//! # xpourl CLI
//!
//! The binary is a thin shell around the `xpourl` library: `cli/` parses
//! arguments, loads configuration, and prints what the library returns.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  CLI (crates/xpourl-cli/src/cli/)            │
//! │  - clap parsing (setup.rs)                   │
//! │  - logging to stderr (logging.rs)            │
//! │  - one handler per subcommand (handlers.rs)  │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │  Library (crates/xpourl/)                    │
//! │  - UrlGenerator, key sets, token codec       │
//! │  - no terminal I/O                           │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Only the CLI writes to stdout/stderr or exits the process.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
