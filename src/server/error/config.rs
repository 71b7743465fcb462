use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {0}")]
    InvalidValue(String),
}
