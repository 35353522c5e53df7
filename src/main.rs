use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to initialize logging")?;

    dioxus::launch(atrium::ui::App);
    Ok(())
}
