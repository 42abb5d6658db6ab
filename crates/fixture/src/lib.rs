//! Text fixture: prints the opening stock and how it looks after each day.

pub mod config;

pub use config::{FixtureConfig, OutputFormat};

use std::io::Write;

use anyhow::Context;

use gildedrose_inventory::{DaySnapshot, default_stock, render_text, snapshots};

/// Simulate the default stock and write the report to `out`.
pub fn run(config: &FixtureConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let report: Vec<DaySnapshot> = snapshots(default_stock(), config.days).collect();

    match config.format {
        OutputFormat::Text => {
            write_banner(out)?;
            out.write_all(render_text(&report).as_bytes())
                .context("failed to write report")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report).context("failed to encode report")?;
            writeln!(out).context("failed to write report")?;
        }
    }

    out.flush().context("failed to flush report")?;
    tracing::debug!(snapshots = report.len(), "report written");
    Ok(())
}

fn write_banner(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "OMGHAI!").context("failed to write report")
}
