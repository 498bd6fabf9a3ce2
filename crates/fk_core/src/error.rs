//! Error taxonomy for the simulation core.
//!
//! Nothing here is fatal: invalid commands and degenerate contacts degrade
//! to no-ops at the public surface. The typed variants exist so rejection
//! reasons stay observable in logs and tests.

use thiserror::Error;

/// Why a queued command was dropped instead of applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("kick direction is the zero vector")]
    DegenerateDirection,
    #[error("kick force must be positive, got {0}")]
    NonPositiveForce(f32),
    #[error("curve intensity must be positive, got {0}")]
    InvalidIntensity(f32),
    #[error("command contains a non-finite component")]
    NonFinite,
}

/// Why a `BallParams` value set was refused at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must lie in [0, 1], got {value}")]
    UnitRange { field: &'static str, value: f32 },
}
