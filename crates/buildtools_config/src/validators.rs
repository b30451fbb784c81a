//! Utils for config validations.

use validator::{Validate, ValidationError};

use crate::ConfigError;

/// Validates a loaded config and converts the validation errors into a [`ConfigError`].
pub fn config_validate<T: Validate>(config: &T) -> Result<(), ConfigError> {
    config.validate().map_err(ConfigError::ConfigValidationError)
}

/// Custom validation for a string that must hold a non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank value");
        error.message = Some("The value must not be empty or whitespace.".into());
        return Err(error);
    }
    Ok(())
}
