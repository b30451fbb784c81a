use buildtools::config::{load_config, GenerateAssemblyInfoConfig};
use buildtools::configure_tracing;
use buildtools::tasks::run_generate_assembly_info;
use buildtools_config::ConfigError;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let command = clap::Command::new("generate_assembly_info")
        .about("Generates a source file declaring the assembly metadata attributes.");
    let config = load_config::<GenerateAssemblyInfoConfig>(command, std::env::args().collect());
    if let Err(ConfigError::CommandInput(clap_err)) = config {
        clap_err.exit();
    }
    let config = config?;
    configure_tracing();
    debug!("Generating assembly info with config: {config:#?}");

    run_generate_assembly_info(&config)?;
    Ok(())
}
