//! The work done by the build tool binaries, given their loaded configuration.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::assembly_info::{AssemblyInfoBuilder, AssemblyInfoError};
use crate::config::{GenerateAssemblyInfoConfig, GenerateVersionConfig};
use crate::date_utils::DateError;
use crate::emitter::UnsupportedLanguageError;
use crate::generator::{generate_version_from, generate_version_with_file, VersionGenerationError};
use crate::version::{Version, VersionParseError};

#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    VersionGeneration(#[from] VersionGenerationError),
    #[error(transparent)]
    VersionParse(#[from] VersionParseError),
    #[error(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguageError),
    #[error(transparent)]
    AssemblyInfo(#[from] AssemblyInfoError),
}

/// Generates the next version at `now`, through the version file if one is configured.
pub fn run_generate_version(
    config: &GenerateVersionConfig,
    now: DateTime<Utc>,
) -> Result<Version, TaskError> {
    let starting_date = config.starting_date()?;
    let version = match config.version_file() {
        None => {
            debug!("Creating version without using a version file.");
            generate_version_from(
                config.major,
                config.minor,
                config.build_strategy,
                config.revision_strategy,
                starting_date,
                now,
            )?
        }
        Some(version_file) => generate_version_with_file(
            version_file,
            config.major,
            config.minor,
            config.build_strategy,
            config.revision_strategy,
            starting_date,
            now,
        )?,
    };
    info!("Version number generated: {version}");
    Ok(version)
}

/// Writes the assembly info file with the configured attributes.
pub fn run_generate_assembly_info(config: &GenerateAssemblyInfoConfig) -> Result<(), TaskError> {
    let mut builder = AssemblyInfoBuilder::for_language(config.language()?);

    if config.cls_compliant {
        info!("Adding CLSCompliantAttribute.");
        builder.with_cls_compliant(true)?;
    }
    if let Some(version) = config.assembly_version()? {
        info!("Adding AssemblyVersionAttribute ({version}).");
        builder.with_assembly_version(&version)?;
    }
    if let Some(version) = config.assembly_file_version()? {
        info!("Adding AssemblyFileVersionAttribute ({version}).");
        builder.with_assembly_file_version(&version)?;
    }
    if let Some(version) = config.assembly_informational_version() {
        info!("Adding AssemblyInformationalVersionAttribute ({version}).");
        builder.with_assembly_informational_version(version)?;
    }

    let file_name = Path::new(&config.file_name);
    builder.save(file_name)?;
    info!("AssemblyInfo file saved to '{}'.", file_name.display());
    Ok(())
}
