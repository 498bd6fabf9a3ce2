//! Structured events emitted by the simulation core.
//!
//! The core never calls audio, particle or haptic APIs. Every observable
//! reaction is published as an event into a per-simulation buffer that the
//! host drains once per frame (`BallSimulation::drain_events`).

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::physics_constants::haptics;

/// Surface class of a contact, used by consumers to pick sound/particle
/// banks. Never feeds back into the physics response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceCategory {
    /// Grass, pitch, generic ground.
    Ground,
    /// Goal posts and crossbar.
    Woodwork,
    Other,
}

impl SurfaceCategory {
    /// Classify a collider tag reported by the geometry layer.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "ground" | "grass" | "pitch" => SurfaceCategory::Ground,
            "post" | "crossbar" | "goal_frame" => SurfaceCategory::Woodwork,
            _ => SurfaceCategory::Other,
        }
    }
}

/// One contact between the ball and static geometry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub point: Vector3<f32>,
    /// Unit contact normal.
    pub normal: Vector3<f32>,
    pub relative_speed: f32,
    pub surface: SurfaceCategory,
}

impl CollisionEvent {
    /// Whether the impact is strong enough for the haptics layer to react.
    pub fn warrants_haptics(&self) -> bool {
        self.relative_speed > haptics::MIN_IMPACT_SPEED
    }
}

/// A kick strong enough that the renderer should enable the motion trail.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct KickEvent {
    pub force: f32,
}

/// The ball was reset between plays; transient visuals should clear.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ResetEvent {
    pub position: Vector3<f32>,
}

/// Everything a simulation can publish in one tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BallEvent {
    Collision(CollisionEvent),
    Kick(KickEvent),
    Reset(ResetEvent),
}
