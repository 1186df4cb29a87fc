use anyhow::Result;
use jsonx::{cli, config, logging};

fn main() -> Result<()> {
    logging::init()?;

    let mode = cli::Args::from_env().mode()?;
    let config_path = config::resolve_path()?;
    cli::run(mode, &config_path)?;
    Ok(())
}
