use buildtools::config::{load_config, GenerateVersionConfig};
use buildtools::configure_tracing;
use buildtools::tasks::run_generate_version;
use buildtools_config::ConfigError;
use chrono::Utc;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let command = clap::Command::new("generate_version").about(
        "Generates the next version number and prints it. The previous version is kept in a \
         version file when the selected strategies need it.",
    );
    let config = load_config::<GenerateVersionConfig>(command, std::env::args().collect());
    if let Err(ConfigError::CommandInput(clap_err)) = config {
        clap_err.exit();
    }
    let config = config?;
    configure_tracing();
    debug!("Generating a version with config: {config:#?}");

    let version = run_generate_version(&config, Utc::now())?;
    println!("{version}");
    Ok(())
}
