use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// The dataset lives next to the binary; there is no CLI surface.
const INPUT_PATH: &str = "popu-pref.csv";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) ingest, rank, print ──────────────────────────────────────
    let ranking = popurank::run(INPUT_PATH)?;
    for line in &ranking {
        println!("{}", line);
    }

    info!(regions = ranking.len(), "done");
    Ok(())
}
