use std::fs;
use std::path::Path;

use assert_matches::assert_matches;
use buildtools_config::dumping::SerializeConfig;
use buildtools_config::loading::load;
use buildtools_config::ConfigError;
use chrono::NaiveDate;
use clap::Command;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;
use test_case::test_case;
use validator::Validate;

use super::{load_config, GenerateAssemblyInfoConfig, GenerateVersionConfig};
use crate::emitter::EmitterLanguage;
use crate::strategy::{BuildStrategy, RevisionStrategy};
use crate::version::Version;

fn args(input: &[&str]) -> Vec<String> {
    std::iter::once("tool").chain(input.iter().copied()).map(str::to_owned).collect()
}

fn load_version_config(input: &[&str]) -> Result<GenerateVersionConfig, ConfigError> {
    load_config(Command::new("generate_version"), args(input))
}

fn load_assembly_info_config(input: &[&str]) -> Result<GenerateAssemblyInfoConfig, ConfigError> {
    load_config(Command::new("generate_assembly_info"), args(input))
}

#[test]
fn version_config_defaults_dump_and_load_back() {
    let dump = GenerateVersionConfig::default().dump();
    assert_eq!(dump["build_strategy"].value, json!("Increment"));
    assert_eq!(dump["revision_strategy"].value, json!("BuildIncrement"));
    assert_eq!(dump["starting_date"].value, json!("2000-01-01"));
    assert_eq!(dump["version_file"].value, json!(""));
    assert_eq!(dump["major"].value, json!(1));
    assert_eq!(dump["minor"].value, json!(0));

    let loaded: GenerateVersionConfig = load(&dump).unwrap();
    assert_eq!(loaded, GenerateVersionConfig::default());
}

#[test]
fn assembly_info_config_defaults_dump_and_load_back() {
    let loaded: GenerateAssemblyInfoConfig =
        load(&GenerateAssemblyInfoConfig::default().dump()).unwrap();
    assert_eq!(loaded, GenerateAssemblyInfoConfig::default());
    assert!(loaded.validate().is_ok());
}

#[test]
fn command_line_overrides_version_config() {
    let config = load_version_config(&[
        "--build_strategy",
        "yearmonthday",
        "--revision_strategy",
        "HourMinute",
        "--starting_date",
        "2008-01-01",
        "--version_file",
        "build/version.txt",
        "--major",
        "3",
        "--minor",
        "2",
    ])
    .unwrap();

    assert_eq!(
        config,
        GenerateVersionConfig {
            build_strategy: BuildStrategy::YearMonthDay,
            revision_strategy: RevisionStrategy::HourMinute,
            starting_date: "2008-01-01".to_owned(),
            version_file: "build/version.txt".to_owned(),
            major: 3,
            minor: 2,
        }
    );
    assert_eq!(config.starting_date().unwrap(), NaiveDate::from_ymd_opt(2008, 1, 1).unwrap());
    assert_eq!(config.version_file(), Some(Path::new("build/version.txt")));
}

#[test]
fn custom_config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let config_file = dir.path().join("config.json");
    fs::write(
        &config_file,
        json!({"build_strategy": "MonthDay", "starting_date": "01/15/2010", "minor": 5})
            .to_string(),
    )
    .unwrap();

    let config =
        load_version_config(&["--config_file", config_file.to_str().unwrap(), "--minor", "6"])
            .unwrap();
    assert_eq!(config.build_strategy, BuildStrategy::MonthDay);
    assert_eq!(config.revision_strategy, RevisionStrategy::BuildIncrement);
    assert_eq!(config.starting_date().unwrap(), NaiveDate::from_ymd_opt(2010, 1, 15).unwrap());
    // The command line wins over the config file.
    assert_eq!(config.minor, 6);
}

#[test]
fn invalid_strategy_name_fails_loading() {
    assert_matches!(
        load_version_config(&["--build_strategy", "Weekly"]),
        Err(ConfigError::MissingParam(_))
    );
    assert_matches!(
        load_version_config(&["--revision_strategy", "BuildDay"]),
        Err(ConfigError::MissingParam(_))
    );
}

#[test]
fn invalid_starting_date_fails_validation() {
    assert_matches!(
        load_version_config(&["--starting_date", "the day before yesterday"]),
        Err(ConfigError::ConfigValidationError(_))
    );
}

#[test_case(""; "empty")]
#[test_case("  "; "whitespace")]
fn blank_version_file_means_no_file(version_file: &str) {
    let config = GenerateVersionConfig {
        version_file: version_file.to_owned(),
        ..GenerateVersionConfig::default()
    };
    assert_eq!(config.version_file(), None);
}

#[test]
fn command_line_overrides_assembly_info_config() {
    let config = load_assembly_info_config(&[
        "--language",
        "VB",
        "--file_name",
        "My Project/AssemblyInfo.vb",
        "--assembly_version",
        "2.1",
        "--assembly_informational_version",
        "2.1 beta",
        "--cls_compliant",
        "true",
    ])
    .unwrap();

    assert_eq!(config.language().unwrap(), EmitterLanguage::VisualBasic);
    assert_eq!(config.file_name, "My Project/AssemblyInfo.vb");
    assert_eq!(config.assembly_version().unwrap(), Some(Version::new(2, 1, 0, 0)));
    assert_eq!(config.assembly_file_version().unwrap(), None);
    assert_eq!(config.assembly_informational_version(), Some("2.1 beta"));
    assert!(config.cls_compliant);
}

#[test_case(&["--language", "fortran"]; "unsupported language")]
#[test_case(&["--file_name", " "]; "blank file name")]
#[test_case(&["--assembly_version", "1.x"]; "malformed assembly version")]
#[test_case(&["--assembly_file_version", "1.0.0.0.0"]; "malformed file version")]
fn invalid_assembly_info_config_fails_validation(input: &[&str]) {
    assert_matches!(
        load_assembly_info_config(input),
        Err(ConfigError::ConfigValidationError(_))
    );
}
