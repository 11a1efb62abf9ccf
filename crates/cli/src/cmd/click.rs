//! Interactive throttled button
//!
//! Every line read from stdin is a click. Clicks go through a throttle, so
//! only the first click in each window greets.

use anyhow::{Context, Result};
use cli_lib::util;
use owo_colors::OwoColorize;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(delay_ms: Option<i64>, config_path: Option<&Path>) -> Result<()> {
    let config = util::load_config(config_path)?;
    let delay = util::resolve_delay(delay_ms, config.throttle.delay());

    let click = limiter::throttle(|()| println!("{}", "Hello".green().bold()), delay);

    eprintln!(
        "{}",
        format!("Press Enter to click (throttled to one per {}). Ctrl-D to quit.", delay).dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut clicks = 0usize;
    let mut accepted = 0usize;

    while lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
        .is_some()
    {
        clicks += 1;
        if click.call(()) {
            accepted += 1;
        } else {
            println!("{}", "(throttled)".dimmed());
        }
    }

    println!("{} clicks, {} accepted", clicks, accepted);
    Ok(())
}
