use anyhow::Result;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use massbank::batch::validate_batch;
use massbank::splash::{DEFAULT_SPLASH_URL, DEFAULT_TIMEOUT};
use massbank::validator::{ValidationOptions, ValidationResult};

use super::{Cli, Config};

/// Effective settings after merging config file and flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Legacy and parallel switches
    pub options: ValidationOptions,
    /// Print the result as JSON
    pub json: bool,
    /// Verify `PK$SPLASH` values
    pub splash: bool,
    /// SPLASH service endpoint
    pub splash_url: String,
    /// Time allowed per SPLASH calculation
    pub splash_timeout: Duration,
}

impl Settings {
    /// Flags win over the config file, which wins over defaults
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let defaults = ValidationOptions::default();

        let legacy = cli.legacy || config.validation.legacy.unwrap_or(defaults.legacy);
        let parallel = !cli.sequential && config.validation.parallel.unwrap_or(defaults.parallel);

        let splash_timeout = cli
            .splash_timeout_ms
            .or(config.splash.timeout_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            options: ValidationOptions { legacy, parallel },
            json: cli.json,
            splash: cli.splash || config.splash.enabled.unwrap_or(false),
            splash_url: cli
                .splash_url
                .clone()
                .or_else(|| config.splash.url.clone())
                .unwrap_or_else(|| DEFAULT_SPLASH_URL.to_string()),
            splash_timeout,
        }
    }
}

/// Validate MassBank records and print the report
pub fn run(paths: &[PathBuf], settings: &Settings) -> Result<()> {
    info!("MassBank Validator");
    info!("==================");
    info!("Inputs: {}", paths.len());
    info!("Legacy mode: {}", settings.options.legacy);
    info!("Parallel: {}", settings.options.parallel);

    let mut result = validate_batch(paths, &settings.options);

    if settings.splash {
        verify_splash(paths, settings, &mut result)?;
    }

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        // Use colorized output if available
        #[cfg(feature = "colorized_output")]
        {
            println!("{}", result.format_colored());
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            println!("{}", result);
        }
    }

    // Exit with error code if validation failed
    if !result.success {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(feature = "splash-http")]
fn verify_splash(paths: &[PathBuf], settings: &Settings, result: &mut ValidationResult) -> Result<()> {
    use anyhow::Context;
    use massbank::batch::{FsSource, InputSource};
    use massbank::parser::parse_record;
    use massbank::splash::{HttpSplashCalculator, SplashVerifier};

    let verifier = SplashVerifier::new(HttpSplashCalculator::with_url(&settings.splash_url))
        .with_timeout(settings.splash_timeout);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    info!("Verifying SPLASH values against {}", settings.splash_url);

    let source = FsSource;
    for path in source.resolve_inputs(paths) {
        // Unreadable or unparseable inputs are already reported
        let Ok(text) = source.read_text(&path) else {
            continue;
        };
        let Ok(record) = parse_record(&text) else {
            continue;
        };

        let check = runtime.block_on(verifier.check(&record));
        if let Some(error) = check.to_error(&path.display().to_string()) {
            result.errors.push(error);
        }
    }

    result.success = result.errors.is_empty();
    Ok(())
}

#[cfg(not(feature = "splash-http"))]
fn verify_splash(_paths: &[PathBuf], _settings: &Settings, _result: &mut ValidationResult) -> Result<()> {
    log::warn!("SPLASH verification requested but the splash-http feature is disabled; skipping");
    Ok(())
}
