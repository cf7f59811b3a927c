/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the {env_var} environment variable is not set; export it before starting a session")]
    MissingApiKey { env_var: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid config in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
