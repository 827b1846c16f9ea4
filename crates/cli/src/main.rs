use std::io::Write;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    fleet_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    fleet_cli::run(&mut out).context("scenario failed")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
