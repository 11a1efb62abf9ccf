//! Replay a call schedule through debounce or throttle

use anyhow::{Context, Result};
use cli_lib::replay::{self, Mode};
use cli_lib::util;
use owo_colors::OwoColorize;
use std::path::Path;

pub async fn run(
    mode: Mode,
    delay_ms: Option<i64>,
    at: &str,
    config_path: Option<&Path>,
) -> Result<()> {
    // 1. Resolve delay (flag overrides config)
    let config = util::load_config(config_path)?;
    let configured = match mode {
        Mode::Debounce => config.debounce.delay(),
        Mode::Throttle => config.throttle.delay(),
    };
    let delay = util::resolve_delay(delay_ms, configured);

    // 2. Parse the call schedule
    let offsets = util::parse_offsets(at).context("Invalid --at schedule")?;

    println!(
        "{} {} calls (delay: {})",
        "Replaying".bold(),
        offsets.len(),
        delay.to_string().cyan()
    );

    // 3. Run it
    let report = replay::replay(mode, delay, &offsets).await?;

    // 4. Display per-call outcome
    println!();
    for (i, offset) in report.offsets.iter().enumerate() {
        let call = i + 1;
        let label = format!("call #{:<3} @ {:>6}ms", call, offset);
        match report.executed(call) {
            Some(execution) => println!(
                "  {}  {} {}",
                label,
                "executed".green(),
                format!("(ran at {}ms)", execution.at_ms).dimmed()
            ),
            None => {
                let outcome = match mode {
                    Mode::Debounce => "superseded",
                    Mode::Throttle => "dropped",
                };
                println!("  {}  {}", label, outcome.yellow());
            }
        }
    }

    let executed: Vec<String> = report
        .executed_calls()
        .iter()
        .map(|call| call.to_string())
        .collect();

    println!();
    println!(
        "{}: {} of {} calls executed",
        report.mode.to_string().bold(),
        report.executions.len(),
        report.offsets.len()
    );
    println!("executed calls: {}", executed.join(", "));

    Ok(())
}
