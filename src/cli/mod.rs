use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod validate;

pub use config::Config;

/// massbank-validate - Check MassBank record files
#[derive(Parser)]
#[command(name = "massbank-validate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Record files or directories (directories are searched for .txt files)
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Relax checks for legacy records
    #[arg(long)]
    legacy: bool,

    /// Validate files one after another instead of on all cores
    #[arg(long)]
    sequential: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verify PK$SPLASH values against the SPLASH service (needs the splash-http feature)
    #[arg(long)]
    splash: bool,

    // === Advanced tuning flags (hidden from --help) ===
    /// SPLASH service endpoint
    #[arg(long, value_name = "URL", hide = true)]
    splash_url: Option<String>,

    /// Time allowed per SPLASH lookup in milliseconds
    #[arg(long, value_name = "MS", hide = true)]
    splash_timeout_ms: Option<u64>,
}

impl Cli {
    /// Number of `-v` flags
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Configure env_logger; `RUST_LOG` overrides the verbosity flags
pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Load configuration and run validation
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let settings = validate::Settings::resolve(&cli, &config);

    validate::run(&cli.paths, &settings)
}
