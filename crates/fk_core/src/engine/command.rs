//! Buffered ball command surface.
//!
//! Kick / curve / reset requests arrive asynchronously from the input
//! layer, are queued per ball, and are drained exactly once at the start
//! of the next tick. A command is never applied mid-integration and never
//! applied twice.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// Curve directions selectable from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveType {
    Left,
    Right,
    Up,
    Down,
}

impl CurveType {
    /// Spin axis for each curve in the ball's local reference:
    /// left/right curves spin about the vertical axis, up/down about the
    /// lateral axis.
    pub fn spin_axis(self) -> Vector3<f32> {
        match self {
            CurveType::Left => Vector3::y(),
            CurveType::Right => -Vector3::y(),
            CurveType::Up => Vector3::x(),
            CurveType::Down => -Vector3::x(),
        }
    }
}

/// A queued request from the input/gameplay layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BallCommand {
    Kick {
        direction: Vector3<f32>,
        force: f32,
        spin: Vector3<f32>,
    },
    ApplyCurve {
        curve: CurveType,
        intensity: f32,
    },
    Reset {
        position: Vector3<f32>,
    },
}

impl BallCommand {
    /// Check a command before application. Invalid commands are dropped
    /// silently at the public surface (state unchanged, no event); the
    /// reason goes to the debug log only.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self {
            BallCommand::Kick { direction, force, spin } => {
                if !is_finite(direction) || !force.is_finite() || !is_finite(spin) {
                    return Err(CommandError::NonFinite);
                }
                if direction.norm_squared() < 1e-12 {
                    return Err(CommandError::DegenerateDirection);
                }
                if *force <= 0.0 {
                    return Err(CommandError::NonPositiveForce(*force));
                }
                Ok(())
            }
            BallCommand::ApplyCurve { intensity, .. } => {
                if !intensity.is_finite() || *intensity <= 0.0 {
                    return Err(CommandError::InvalidIntensity(*intensity));
                }
                Ok(())
            }
            BallCommand::Reset { position } => {
                if !is_finite(position) {
                    return Err(CommandError::NonFinite);
                }
                Ok(())
            }
        }
    }
}

#[inline]
fn is_finite(v: &Vector3<f32>) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Per-ball command buffer, drained at the tick boundary.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<BallCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    pub fn push(&mut self, command: BallCommand) {
        self.pending.push(command);
    }

    /// Take every pending command, in arrival order, leaving the queue
    /// empty.
    pub fn drain(&mut self) -> Vec<BallCommand> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
