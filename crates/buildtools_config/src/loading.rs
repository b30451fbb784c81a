//! Loads a configuration object, and set values for the fields in the following order of priority:
//! * Command line arguments.
//! * Environment variables (capital letters).
//! * Custom config file.
//! * Default values of the config.

use std::collections::BTreeMap;
use std::fs::File;
use std::mem::discriminant;
use std::ops::IndexMut;
use std::path::Path;

use clap::Command;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::command::{get_command_matches, update_config_map_by_command_args, CONFIG_FILE_ARG};
use crate::{ConfigError, ParamPath, SerializedParam};

/// Deserializes a config from flatten JSON.
/// For an explanation of `for<'a> Deserialize<'a>` see
/// `<https://doc.rust-lang.org/nomicon/hrtb.html>`.
pub fn load<T: for<'a> Deserialize<'a>>(
    config_map: &BTreeMap<ParamPath, SerializedParam>,
) -> Result<T, ConfigError> {
    let mut nested_map = json!({});
    for (param_path, serialized_param) in config_map {
        let mut entry = &mut nested_map;
        for config_name in param_path.split('.') {
            entry = entry.index_mut(config_name);
        }
        *entry = serialized_param.value.clone();
    }
    Ok(serde_json::from_value(nested_map)?)
}

/// Deserializes a config from the default config map, overridden by a custom config file, env
/// variables and command line arguments.
pub fn load_and_process_config<T: for<'a> Deserialize<'a>>(
    mut config_map: BTreeMap<ParamPath, SerializedParam>,
    command: Command,
    args: Vec<String>,
) -> Result<T, ConfigError> {
    let arg_matches = get_command_matches(&config_map, command, args)?;
    if let Some(custom_config_path) =
        arg_matches.try_get_one::<std::path::PathBuf>(CONFIG_FILE_ARG)?
    {
        update_config_map_by_custom_config(&mut config_map, custom_config_path)?;
    };
    update_config_map_by_command_args(&mut config_map, &arg_matches)?;
    load(&config_map)
}

/// Updates the config map by a custom JSON file of param path to value.
pub(crate) fn update_config_map_by_custom_config(
    config_map: &mut BTreeMap<ParamPath, SerializedParam>,
    custom_config_path: &Path,
) -> Result<(), ConfigError> {
    let file = File::open(custom_config_path)?;
    let custom_config: Value = serde_json::from_reader(file)?;
    let Value::Object(custom_config) = custom_config else {
        return Err(ConfigError::CustomConfigNotAnObject { content: custom_config });
    };
    update_config_map_by_json(config_map, custom_config)
}

fn update_config_map_by_json(
    config_map: &mut BTreeMap<ParamPath, SerializedParam>,
    custom_config: Map<String, Value>,
) -> Result<(), ConfigError> {
    for (param_path, json_value) in custom_config {
        update_config_map(config_map, param_path.as_str(), json_value)?;
    }
    Ok(())
}

pub(crate) fn update_config_map(
    config_map: &mut BTreeMap<ParamPath, SerializedParam>,
    param_path: &str,
    new_value: Value,
) -> Result<(), ConfigError> {
    let Some(serialized_param) = config_map.get_mut(param_path) else {
        return Err(ConfigError::ParamNotFound { param_path: param_path.to_string() });
    };
    if discriminant(&serialized_param.value) != discriminant(&new_value) {
        return Err(ConfigError::ChangeParamType {
            param_path: param_path.to_string(),
            before: serialized_param.value.to_owned(),
            after: new_value,
        });
    }
    serialized_param.value = new_value;
    Ok(())
}
