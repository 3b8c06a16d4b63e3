use anyhow::Context;

use warehouse_console::{Config, Session};

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = Config::from_env();
    tracing::info!(top_n = config.top_n, format = ?config.report_format, "starting session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    let pallets = session.run().context("warehouse session failed")?;
    tracing::info!(pallets = pallets.len(), "session complete");

    Ok(())
}
