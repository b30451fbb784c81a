//! Utils for serializing config objects into a flat map.
//! The elements structure is:
//!
//! ```json
//! "param_name": {
//!     "description": "Param description.",
//!     "value": json_value
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::{ParamPath, SerializedParam};

/// Serialization for configs.
pub trait SerializeConfig {
    /// Conversion of a configuration to a mapping of flattened parameters to their descriptions and
    /// values.
    fn dump(&self) -> BTreeMap<ParamPath, SerializedParam>;
}

/// Serializes a single param of a config.
/// The returned pair is designed to be an input to a dumped config map.
pub fn ser_param<T: Serialize>(
    name: &str,
    value: &T,
    description: &str,
) -> (String, SerializedParam) {
    (name.to_owned(), SerializedParam { description: description.to_owned(), value: json!(value) })
}
