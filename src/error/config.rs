use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set to a value the configuration cannot use.
    ///
    /// # Fields
    /// - `var` - Name of the environment variable
    /// - `value` - The rejected value
    #[error("Invalid value '{value}' for environment variable {var}")]
    InvalidValue { var: String, value: String },
}
