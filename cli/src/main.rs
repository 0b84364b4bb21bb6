//! Themis CLI: verify one account-ownership claim and print the result.
//!
//! On success the verified line (`value,signature[,identity...]`) goes to
//! stdout and the process exits 0. On failure the reason goes to stderr and
//! the process exits 1.

mod args;
mod config;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

use args::Cli;
use config::ThemisConfig;
use themis_connectors::verify_request;
use themis_http::ReqwestClient;
use themis_types::VerificationResult;

/// Layer CLI flags and env vars over the file (or default) config.
fn effective_config(cli: &Cli, base: ThemisConfig) -> ThemisConfig {
    ThemisConfig {
        endpoint: cli.endpoint.clone().unwrap_or(base.endpoint),
        gist_endpoint: cli.gist_endpoint.clone().unwrap_or(base.gist_endpoint),
        timeout_secs: cli.timeout_secs.unwrap_or(base.timeout_secs),
        log_format: cli.log_format.unwrap_or(base.log_format),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
        ..base
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let loaded = cli
        .config
        .as_deref()
        .map(|path| (path, ThemisConfig::from_toml_file(path)));
    let base = match &loaded {
        Some((_, Ok(file_cfg))) => file_cfg.clone(),
        _ => ThemisConfig::default(),
    };
    let config = effective_config(&cli, base);

    themis_utils::init_logging(config.log_format, &config.log_level)
        .context("failed to initialise logging")?;

    match &loaded {
        Some((path, Ok(_))) => tracing::info!("Loaded config from {}", path.display()),
        Some((path, Err(e))) => {
            tracing::warn!("Failed to load config file {}: {e}, using defaults", path.display())
        }
        None => {}
    }

    let Some(request) = cli.command.to_request()? else {
        print!("{}", config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    };

    themis_crypto::provider::init();

    let http = ReqwestClient::new(&config.http_config()).context("failed to build HTTP client")?;

    let mut policy = config.policy_for(request.platform());
    if let Some(encoding) = cli.value_encoding {
        policy.value_encoding = encoding;
    }
    if let Some(encoding) = cli.address_encoding.clone() {
        policy.address_encoding = encoding;
    }

    let result = verify_request(&http, &config.endpoints(), policy, &request);
    match &result {
        VerificationResult::Verified { .. } => {
            println!("{}", result.output_line().unwrap_or_default());
            Ok(ExitCode::SUCCESS)
        }
        VerificationResult::Failed { reason } => {
            eprintln!("{reason}");
            Ok(ExitCode::FAILURE)
        }
    }
}
