//! Configuration utilities for the build tools.
//!
//! A configuration is represented as a flat map from dotted param paths to a description and a
//! JSON value. The map is produced from a config struct with [`dumping::SerializeConfig`] and
//! loaded back with [`loading::load_and_process_config`], which overlays, in increasing order of
//! priority:
//! * The default values of the config struct.
//! * A custom JSON config file (given by `--config_file`).
//! * Environment variables (`BUILDTOOLS_` followed by the param path in capital letters, `.`
//!   replaced by `__`).
//! * Command line arguments.
//!
//! # example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use buildtools_config::dumping::{ser_param, SerializeConfig};
//! use buildtools_config::loading::load_and_process_config;
//! use buildtools_config::{ParamPath, SerializedParam};
//! use clap::Command;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize, Debug, PartialEq)]
//! struct ToolConfig {
//!     major: usize,
//! }
//!
//! impl SerializeConfig for ToolConfig {
//!     fn dump(&self) -> BTreeMap<ParamPath, SerializedParam> {
//!         BTreeMap::from_iter([ser_param("major", &self.major, "The major version.")])
//!     }
//! }
//!
//! let args = vec!["Tool".to_owned(), "--major".to_owned(), "3".to_owned()];
//! let config: ToolConfig =
//!     load_and_process_config(ToolConfig::default().dump(), Command::new("Tool"), args).unwrap();
//! assert_eq!(config.major, 3);
//! ```

use clap::parser::MatchesError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

pub(crate) mod command;
pub mod dumping;
pub mod loading;
pub mod validators;


/// A nested path of a configuration parameter.
pub type ParamPath = String;
/// A description of a configuration parameter.
pub type Description = String;

/// A serialized configuration parameter.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SerializedParam {
    /// The description of the parameter.
    pub description: Description,
    /// The value of the parameter.
    pub value: Value,
}

/// Errors at the configuration dumping and loading process.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    CommandInput(#[from] clap::error::Error),
    #[error(transparent)]
    MissingParam(#[from] serde_json::Error),
    #[error(transparent)]
    CommandMatches(#[from] MatchesError),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("Insert a new param is not allowed: {param_path}.")]
    ParamNotFound { param_path: String },
    #[error("Changing {param_path} from {before} to {after} is not allowed.")]
    ChangeParamType { param_path: String, before: Value, after: Value },
    #[error("The custom config file must hold a JSON object, got {content}.")]
    CustomConfigNotAnObject { content: Value },
    #[error(transparent)]
    ConfigValidationError(#[from] ValidationErrors),
}
