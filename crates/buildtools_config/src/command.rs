use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};
use serde_json::{json, Value};

use crate::loading::update_config_map;
use crate::{ConfigError, ParamPath, SerializedParam};

pub(crate) const CONFIG_FILE_ARG: &str = "config_file";
pub(crate) const ENV_VAR_PREFIX: &str = "BUILDTOOLS_";

pub(crate) fn get_command_matches(
    config_map: &BTreeMap<ParamPath, SerializedParam>,
    command: Command,
    command_input: Vec<String>,
) -> Result<ArgMatches, ConfigError> {
    Ok(command.args(build_args_parser(config_map)).try_get_matches_from(command_input)?)
}

// Takes matched arguments from the command line interface and env variables and updates the config
// map.
// Supports usize, bool and String.
pub(crate) fn update_config_map_by_command_args(
    config_map: &mut BTreeMap<ParamPath, SerializedParam>,
    arg_match: &ArgMatches,
) -> Result<(), ConfigError> {
    let param_paths: Vec<ParamPath> = config_map.keys().cloned().collect();
    for param_path in param_paths {
        if let Some(new_value) = get_arg_by_type(config_map, arg_match, &param_path)? {
            update_config_map(config_map, &param_path, new_value)?;
        }
    }
    Ok(())
}

pub(crate) fn to_env_var_name(param_path: &str) -> String {
    format!("{ENV_VAR_PREFIX}{}", param_path.to_uppercase().replace('.', "__"))
}

// Builds the parser for the command line flags and env variables according to the types of the
// values in the config map.
fn build_args_parser(config_map: &BTreeMap<ParamPath, SerializedParam>) -> Vec<Arg> {
    let mut args_parser = vec![
        // Custom_config_file_path.
        Arg::new(CONFIG_FILE_ARG)
            .long(CONFIG_FILE_ARG)
            .short('f')
            .help("Optionally sets a config file to use")
            .value_parser(value_parser!(PathBuf)),
    ];

    for (param_path, serialized_param) in config_map.iter() {
        let clap_parser = match serialized_param.value {
            Value::Number(_) => clap::value_parser!(usize).into(),
            Value::Bool(_) => clap::value_parser!(bool),
            Value::String(_) => clap::value_parser!(String),
            Value::Array(_) | Value::Object(_) | Value::Null => continue,
        };

        let arg = Arg::new(param_path)
            .long(param_path)
            .env(to_env_var_name(param_path))
            .help(&serialized_param.description)
            .value_parser(clap_parser)
            .allow_hyphen_values(true);
        args_parser.push(arg);
    }
    args_parser
}

// Converts clap arg_matches into json values.
fn get_arg_by_type(
    config_map: &BTreeMap<ParamPath, SerializedParam>,
    arg_match: &ArgMatches,
    param_path: &str,
) -> Result<Option<Value>, ConfigError> {
    let value = match config_map[param_path].value {
        Value::Number(_) => arg_match.try_get_one::<usize>(param_path)?.map(|v| json!(v)),
        Value::Bool(_) => arg_match.try_get_one::<bool>(param_path)?.map(|v| json!(v)),
        Value::String(_) => arg_match.try_get_one::<String>(param_path)?.map(|v| json!(v)),
        Value::Array(_) | Value::Object(_) | Value::Null => None,
    };
    Ok(value)
}
