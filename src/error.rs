use std::path::PathBuf;

/// Errors raised while loading the UI configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level application errors (startup and the SDL2 shell)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// SDL2 reports most failures as plain strings.
impl From<String> for AppError {
    fn from(message: String) -> Self {
        AppError::Sdl(message)
    }
}
