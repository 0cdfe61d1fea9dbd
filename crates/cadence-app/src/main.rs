use anyhow::Context;
use cadence_core::config::{OutputFormat, load_config};
use cadence_core::{Recurrence, is_complete, occurrences};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true))
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let path = std::env::args()
        .nth(1)
        .context("usage: cadence <rule.json>")?;
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading rule file {path}"))?;
    let rule = Recurrence::from_json_str(&text)?;

    let dates = occurrences(&rule);
    if !is_complete(&rule) {
        tracing::warn!("Rule is incomplete; the expansion is empty by contract");
    }
    tracing::info!(count = dates.len(), "Expanded recurrence rule");

    match config.output.format {
        OutputFormat::Lines => {
            for date in &dates {
                println!("{date}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&dates)?),
    }

    Ok(())
}
