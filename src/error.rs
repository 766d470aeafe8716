use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RbError {
    #[error("Roster file not found: {}", .0.display())]
    RosterNotFound(PathBuf),

    #[error("Malformed roster row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Could not determine a config directory for the roster")]
    NoConfigDir,

    #[error("Failed to run git: {0}")]
    GitSpawn(std::io::Error),

    #[error("git exited with status {0}")]
    GitExit(i32),

    #[error("git was terminated by a signal")]
    GitKilled,

    #[error("Roster parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RbError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::RosterNotFound(_) | Self::NoConfigDir => 2,
            Self::MalformedRow { .. } | Self::Csv(_) => 3,
            Self::GitSpawn(_) | Self::GitExit(_) | Self::GitKilled => 4,
            Self::Io(_) | Self::Serialization(_) => 10,
        }
    }
}

pub type Result<T> = std::result::Result<T, RbError>;
