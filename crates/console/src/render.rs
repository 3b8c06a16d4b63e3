//! Report rendering: plain text or one JSON document.

use std::io::Write;

use serde::Serialize;

use warehouse_inventory::{Pallet, PalletSummary, grouped_by_expiry, summarize, top_by_expiry};

use crate::config::ReportFormat;
use crate::error::ConsoleResult;

/// Everything printed at the end of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub pallets: Vec<PalletSummary>,
    pub grouped_by_expiry: Vec<PalletSummary>,
    pub top_n: usize,
    pub top_by_expiry: Vec<PalletSummary>,
}

impl Report {
    pub fn build(pallets: &[Pallet], top_n: usize) -> Self {
        Self {
            pallets: summarize(pallets),
            grouped_by_expiry: summarize(grouped_by_expiry(pallets)),
            top_n,
            top_by_expiry: summarize(top_by_expiry(pallets, top_n)),
        }
    }
}

pub fn write_report(report: &Report, format: ReportFormat, out: &mut impl Write) -> ConsoleResult<()> {
    match format {
        ReportFormat::Text => write_text(report, out),
        ReportFormat::Json => write_json(report, out),
    }
}

fn write_text(report: &Report, out: &mut impl Write) -> ConsoleResult<()> {
    writeln!(out)?;
    writeln!(out, "All pallets:")?;
    for p in &report.pallets {
        writeln!(
            out,
            "Pallet {}: volume {}, weight {}, expiry {}",
            p.id,
            p.volume,
            p.weight,
            p.expiry_label()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Pallets by expiry date, then weight:")?;
    for p in &report.grouped_by_expiry {
        writeln!(
            out,
            "Pallet {}: expiry {}, weight {}",
            p.id,
            p.expiry_label(),
            p.weight
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Top {} pallets with the latest expiry, by volume:",
        report.top_n
    )?;
    for p in &report.top_by_expiry {
        writeln!(
            out,
            "Pallet {}: expiry {}, volume {}",
            p.id,
            p.expiry_label(),
            p.volume
        )?;
    }

    Ok(())
}

fn write_json(report: &Report, out: &mut impl Write) -> ConsoleResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
