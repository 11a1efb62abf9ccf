//! Configuration inspection command
//!
//! Shows the effective configuration, its location, or an example file, and
//! reads or writes single values.

use anyhow::{Context, Result};
use cli_lib::util;
use owo_colors::OwoColorize;
use pacer_core::config;
use std::path::Path;

/// Show effective configuration values
pub async fn run_list(config_path: Option<&Path>) -> Result<()> {
    let path = util::config_path(config_path)?;
    let config = util::load_config(config_path)?;

    println!("{}", "Pacer Configuration".bold());
    if path.exists() {
        println!("{}: {}\n", "Location".dimmed(), path.display().dimmed());
    } else {
        println!(
            "{}: {} {}\n",
            "Location".dimmed(),
            path.display().dimmed(),
            "(not found, using defaults)".yellow()
        );
    }

    println!("{}", "[debounce]".yellow());
    println!(
        "  {} = {} {}",
        "delay_ms".cyan(),
        config.debounce.delay_ms,
        format!("(effective {})", config.debounce.delay()).dimmed()
    );

    println!("\n{}", "[throttle]".yellow());
    println!(
        "  {} = {} {}",
        "delay_ms".cyan(),
        config.throttle.delay_ms,
        format!("(effective {})", config.throttle.delay()).dimmed()
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  delay_ms: up to {} (negative = 0)", config::MAX_DELAY_MS);

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(key: &str, config_path: Option<&Path>) -> Result<()> {
    let config = util::load_config(config_path)?;

    let value = match key {
        "debounce.delay_ms" => config.debounce.delay_ms,
        "throttle.delay_ms" => config.throttle.delay_ms,
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'pacer config' to see available keys.",
            key
        ),
    };

    println!("{}", value);
    Ok(())
}

/// Set a configuration value (`key=value`)
pub async fn run_set(assignment: &str, config_path: Option<&Path>) -> Result<()> {
    let (key, value) = assignment
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .context("Expected KEY=VALUE, e.g. throttle.delay_ms=500")?;

    let path = util::config_path(config_path)?;
    let mut config = util::load_config(config_path)?;

    let delay_ms: i64 = value
        .parse()
        .context("Invalid value: must be an integer number of milliseconds")?;

    match key {
        "debounce.delay_ms" => config.debounce.delay_ms = delay_ms,
        "throttle.delay_ms" => config.throttle.delay_ms = delay_ms,
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'pacer config' to see available keys.",
            key
        ),
    }

    // Validates before writing
    config
        .save(&path)
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    println!("{} {} = {}", "✓".green(), key.cyan(), delay_ms);
    Ok(())
}

/// Show the config file path
pub async fn run_path(config_path: Option<&Path>) -> Result<()> {
    let path = util::config_path(config_path)?;

    println!("{}", path.display());
    if !path.exists() {
        println!(
            "{}",
            "File does not exist. Use 'pacer config --example' for a template.".yellow()
        );
    }

    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    println!("{}", config::example_config());
    Ok(())
}
