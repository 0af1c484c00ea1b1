use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// The variable's value does not match the expected format (e.g. a number or
    /// a valid URL).
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
