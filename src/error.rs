//! Configuration error type.
//!
//! The per-frame simulation is infallible; the only thing that can go wrong is
//! building a flock from a bad or unreadable configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewport width/height must be positive and finite (got {width}x{height})")]
    InvalidViewport { width: f32, height: f32 },

    #[error("ground margin must lie in [0, height) (got {0})")]
    InvalidGroundMargin(f32),

    #[error("agent count must be greater than 0")]
    NoAgents,

    #[error("safety distance must be positive and finite (got {0})")]
    InvalidSafetyDistance(f32),

    #[error("safety distance ({safety}) must be smaller than perceptual distance ({perceptual})")]
    SafetyNotInsidePerception { safety: f32, perceptual: f32 },

    #[error("velocity bounds must satisfy 0 < vel_min < vel_max (got {min}..{max})")]
    InvalidVelocityBounds { min: f32, max: f32 },

    #[error("agent radius must be non-negative and finite (got {0})")]
    InvalidRadius(f32),

    #[error("perch timer range is empty ({min}..={max})")]
    InvalidPerchRange { min: u32, max: u32 },

    #[error("parameter `{0}` must be finite")]
    NonFinite(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shorthand result type for flock construction and config loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
