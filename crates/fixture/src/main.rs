use anyhow::Context;

use gildedrose_fixture::{FixtureConfig, run};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = FixtureConfig::load().context("failed to read fixture settings")?;
    tracing::info!(days = config.days, format = ?config.format, "running fixture");

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())
}
