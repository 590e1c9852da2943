use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0 (dev abc1234)"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("XPOURL_GIT_HASH");
    const IS_RELEASE: &str = env!("XPOURL_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} (dev {})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "xpourl",
    bin_name = "xpourl",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Build query-string URLs for the XPO render API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (overrides the global xpourl.toml)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the render URL for a JSON request
    #[command(display_order = 1)]
    Url {
        /// Request file, or "-" for stdin
        request: PathBuf,

        /// Render API endpoint (overrides config)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Print each encoded attribute parameter of a request, one per line
    #[command(display_order = 2)]
    Keys {
        /// Request file, or "-" for stdin
        request: PathBuf,
    },

    /// Encode text as a URL-safe token
    #[command(display_order = 3)]
    Encode {
        /// Text to encode
        text: String,
    },

    /// Decode a URL-safe token back to text
    #[command(display_order = 4)]
    Decode {
        /// Token to decode
        token: String,
    },

    /// Show the resolved configuration
    #[command(display_order = 5)]
    Config,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
