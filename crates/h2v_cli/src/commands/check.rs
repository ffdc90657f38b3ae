//! The `check` command: validate one secret against its provider's API.

use std::path::PathBuf;

use h2v_core::{AppConfig, SecretState, ValidationResult, redact_secret};
use h2v_providers::{ValidateOptions, ValidatorRegistry};

use crate::ui::{self, colors};
use crate::{CheckArgs, OutputFormat};

/// Runs one synchronous validation call and renders the result.
///
/// Returns the process exit code: 0 for an active secret, 1 for anything
/// that resolved to inactive.
pub fn run(args: &CheckArgs) -> anyhow::Result<i32> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(crate::CONFIG_FILENAME));
    let config = AppConfig::load(&config_path)?;

    let registry = ValidatorRegistry::with_client(config)?;

    let provider = registry
        .provider_for(&args.service)
        .ok_or_else(|| anyhow::anyhow!("no validator registered for service '{}'", args.service))?;
    if provider.id() != args.provider {
        anyhow::bail!(
            "service '{}' belongs to provider '{}', not '{}'",
            args.service,
            provider.id(),
            args.provider
        );
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create async runtime: {e}"))?;

    let options = ValidateOptions {
        include_response: args.response,
        report: args.report.clone(),
        quiet: args.format == OutputFormat::Json,
    };
    let result = rt.block_on(registry.validate(&args.service, &args.secret, &options))?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_text(args, &result),
    }

    if result.data.validate.state == SecretState::Active {
        Ok(0)
    } else {
        Ok(ui::exit::INACTIVE)
    }
}

fn print_text(args: &CheckArgs, result: &ValidationResult) {
    ui::print_command_header("check");

    println!(
        "  {} {}",
        ui::state_indicator(result.data.validate.state),
        colors::primary().apply_to(&result.data.validate.message)
    );
    println!();
    println!(
        "  {}   {}",
        colors::muted().apply_to("secret"),
        redact_secret(&args.secret)
    );
    println!(
        "  {}   {}",
        colors::muted().apply_to("status"),
        result.status
    );
    println!(
        "  {}   {}",
        colors::muted().apply_to("report"),
        result.data.validate.report
    );

    if args.response {
        println!();
        println!("  {}", colors::muted().apply_to("response"));
        println!("  {}", result.data.validate.response);
    }
    println!();
}
