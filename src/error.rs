use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Scoreboard snapshot errors
    #[error("No scoreboard snapshot found at: {path}")]
    SnapshotNotFound { path: String },

    #[error("Scoreboard snapshot is malformed: {message} (path: {path})")]
    MalformedSnapshot { message: String, path: String },

    #[error("Unknown team: {query}")]
    UnknownTeam { query: String },
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a missing snapshot error
    pub fn snapshot_not_found(path: impl Into<String>) -> Self {
        Self::SnapshotNotFound { path: path.into() }
    }

    /// Create a malformed snapshot error
    pub fn malformed_snapshot(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create an unknown team error
    pub fn unknown_team(query: impl Into<String>) -> Self {
        Self::UnknownTeam {
            query: query.into(),
        }
    }

    /// Returns true when the error points at missing input rather than a bug or bad data.
    ///
    /// The report command prints these as a short notice instead of failing.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, AppError::SnapshotNotFound { .. })
    }
}
