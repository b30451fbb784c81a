//! Configuration of the build tool binaries.
//!
//! Every param can be set from a custom JSON config file (`--config_file`), an environment
//! variable or a command line argument. See [`buildtools_config`] for the order of priority.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;
use std::path::Path;

use buildtools_config::dumping::{ser_param, SerializeConfig};
use buildtools_config::loading::load_and_process_config;
use buildtools_config::validators::{config_validate, validate_not_blank};
use buildtools_config::{ConfigError, ParamPath, SerializedParam};
use chrono::NaiveDate;
use clap::Command;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::date_utils::{parse_date, DateError};
use crate::emitter::{EmitterLanguage, UnsupportedLanguageError};
use crate::generator::{DEFAULT_MAJOR_VERSION, DEFAULT_MINOR_VERSION};
use crate::strategy::{BuildStrategy, RevisionStrategy};
use crate::version::{Version, VersionParseError};

const DEFAULT_STARTING_DATE: &str = "2000-01-01";
const DEFAULT_LANGUAGE: &str = "cs";
const DEFAULT_ASSEMBLY_INFO_FILE_NAME: &str = "AssemblyInfo.cs";

/// The configuration of the `generate_version` binary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct GenerateVersionConfig {
    pub build_strategy: BuildStrategy,
    pub revision_strategy: RevisionStrategy,
    /// The reference date of the calendar based strategies.
    #[validate(custom = "validate_date")]
    pub starting_date: String,
    /// The path of the version file. Empty if no version file is used.
    pub version_file: String,
    pub major: u32,
    pub minor: u32,
}

impl Default for GenerateVersionConfig {
    fn default() -> Self {
        GenerateVersionConfig {
            build_strategy: BuildStrategy::Increment,
            revision_strategy: RevisionStrategy::BuildIncrement,
            starting_date: DEFAULT_STARTING_DATE.to_owned(),
            version_file: String::new(),
            major: DEFAULT_MAJOR_VERSION,
            minor: DEFAULT_MINOR_VERSION,
        }
    }
}

impl SerializeConfig for GenerateVersionConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        BTreeMap::from_iter([
            ser_param(
                "build_strategy",
                &self.build_strategy,
                "The algorithm of the build number. One of: Fixed, Increment, YearMonthDay, \
                 MonthDay, BuildDay.",
            ),
            ser_param(
                "revision_strategy",
                &self.revision_strategy,
                "The algorithm of the revision number. One of: Fixed, Increment, BuildIncrement, \
                 HourMinute, DaySecond, DayFraction.",
            ),
            ser_param(
                "starting_date",
                &self.starting_date,
                "The reference date of the calendar based build numbers, e.g. 2008-01-01.",
            ),
            ser_param(
                "version_file",
                &self.version_file,
                "The file holding the previous version. Leave empty to generate the version \
                 without a version file.",
            ),
            ser_param("major", &self.major, "The major version number."),
            ser_param("minor", &self.minor, "The minor version number."),
        ])
    }
}

impl GenerateVersionConfig {
    pub fn starting_date(&self) -> Result<NaiveDate, DateError> {
        parse_date(&self.starting_date)
    }

    /// The version file, or None if the version is generated without one.
    pub fn version_file(&self) -> Option<&Path> {
        optional(&self.version_file).map(Path::new)
    }
}

/// The configuration of the `generate_assembly_info` binary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct GenerateAssemblyInfoConfig {
    /// The name of the language of the generated source file.
    #[validate(custom = "validate_language")]
    pub language: String,
    /// The path of the generated source file.
    #[validate(custom = "validate_not_blank")]
    pub file_name: String,
    // The attributes below are omitted when empty.
    #[validate(custom = "validate_optional_version")]
    pub assembly_version: String,
    #[validate(custom = "validate_optional_version")]
    pub assembly_file_version: String,
    pub assembly_informational_version: String,
    /// Marks the assembly as CLS compliant. Nothing is declared when false.
    pub cls_compliant: bool,
}

impl Default for GenerateAssemblyInfoConfig {
    fn default() -> Self {
        GenerateAssemblyInfoConfig {
            language: DEFAULT_LANGUAGE.to_owned(),
            file_name: DEFAULT_ASSEMBLY_INFO_FILE_NAME.to_owned(),
            assembly_version: String::new(),
            assembly_file_version: String::new(),
            assembly_informational_version: String::new(),
            cls_compliant: false,
        }
    }
}

impl SerializeConfig for GenerateAssemblyInfoConfig {
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
        BTreeMap::from_iter([
            ser_param(
                "language",
                &self.language,
                "The language of the generated source file: cs or vb.",
            ),
            ser_param("file_name", &self.file_name, "The path of the generated source file."),
            ser_param(
                "assembly_version",
                &self.assembly_version,
                "The version of the AssemblyVersionAttribute. Leave empty to omit it.",
            ),
            ser_param(
                "assembly_file_version",
                &self.assembly_file_version,
                "The version of the AssemblyFileVersionAttribute. Leave empty to omit it.",
            ),
            ser_param(
                "assembly_informational_version",
                &self.assembly_informational_version,
                "The text of the AssemblyInformationalVersionAttribute. Leave empty to omit it.",
            ),
            ser_param(
                "cls_compliant",
                &self.cls_compliant,
                "Whether to mark the assembly as CLS compliant.",
            ),
        ])
    }
}

impl GenerateAssemblyInfoConfig {
    pub fn language(&self) -> Result<EmitterLanguage, UnsupportedLanguageError> {
        self.language.parse()
    }

    pub fn assembly_version(&self) -> Result<Option<Version>, VersionParseError> {
        optional(&self.assembly_version).map(str::parse::<Version>).transpose()
    }

    pub fn assembly_file_version(&self) -> Result<Option<Version>, VersionParseError> {
        optional(&self.assembly_file_version).map(str::parse::<Version>).transpose()
    }

    pub fn assembly_informational_version(&self) -> Option<&str> {
        optional(&self.assembly_informational_version)
    }
}

/// Loads a config from its defaults overridden by `args` (the first of which is the binary name),
/// environment variables and an optional config file, and validates it.
pub fn load_config<T>(command: Command, args: Vec<String>) -> Result<T, ConfigError>
where
    T: Default + SerializeConfig + DeserializeOwned + Validate,
{
    let config: T = load_and_process_config(T::default().dump(), command, args)?;
    config_validate(&config)?;
    Ok(config)
}

fn optional(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    parse_date(value).map(|_| ()).map_err(|error| invalid_value("invalid date", error))
}

fn validate_language(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<EmitterLanguage>()
        .map(|_| ())
        .map_err(|error| invalid_value("unsupported language", error))
}

fn validate_optional_version(value: &str) -> Result<(), ValidationError> {
    match optional(value) {
        Some(version) => version
            .parse::<Version>()
            .map(|_| ())
            .map_err(|error| invalid_value("invalid version", error)),
        None => Ok(()),
    }
}

fn invalid_value(code: &'static str, error: impl ToString) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(error.to_string().into());
    validation_error
}
