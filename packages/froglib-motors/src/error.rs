/// Errors raised while building or validating a motor configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not valid TOML or does not match the configuration shape.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field holds a value the controller would reject.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Errors raised by a motor adapter.
///
/// `E` is the error type of the underlying vendor driver, passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum MotorError<E> {
    /// The configuration was rejected before reaching the controller.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The vendor driver reported a failure.
    #[error("Motor controller error: {0}")]
    Driver(#[source] E),
}
