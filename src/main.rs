mod battery;
mod config;
mod error;
mod notify;
mod types;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::BatteryError;
use crate::notify::{Notifier, OsaScriptNotifier};
use crate::types::{BatteryStatus, ChargeState};

const WARNING_TITLE: &str = "Plug in your charger";

fn warning_body(threshold: u32) -> String {
    format!("Your laptop battery is below {}%", threshold)
}

fn should_notify(status: &BatteryStatus, threshold: u32) -> bool {
    status.state == ChargeState::Discharging && status.level <= threshold
}

/// Notifies if the battery is discharging at or below `threshold`.
/// Returns whether a notification was issued.
fn warn_if_low(status: &BatteryStatus, threshold: u32, notifier: &dyn Notifier) -> bool {
    if status.level > 100 {
        warn!(level = status.level, "battery level above 100%");
    }

    if !should_notify(status, threshold) {
        debug!(level = status.level, state = ?status.state, threshold, "no notification needed");
        return false;
    }

    notifier.notify(WARNING_TITLE, &warning_body(threshold));
    true
}

fn run(config: &Config, notifier: &dyn Notifier) -> Result<bool, BatteryError> {
    let status = BatteryStatus::read_from_pmset(config)?;
    Ok(warn_if_low(&status, config.threshold, notifier))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_args(std::env::args().skip(1));
    let notifier = OsaScriptNotifier::new(config.notifier_program.as_str());

    run(&config, &notifier).context("Error checking battery")?;
    Ok(())
}
