//! Ball state and read-only telemetry.
//!
//! `BallState` is the single physical data record of the simulation:
//! kinematics, a simplified spin vector, and the grounded/knuckleball
//! flags. It is exclusively owned by its `BallSimulation`; external
//! consumers only ever see `BallSnapshot` copies or events.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::config::BallParams;

/// Physical state of a single ball.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallState {
    /// World-space position (m).
    pub position: Vector3<f32>,
    /// World-space velocity (m/s).
    pub velocity: Vector3<f32>,
    /// Velocity recorded at the start of the current tick. Collision
    /// reflection uses this rather than the partially-integrated velocity.
    pub last_velocity: Vector3<f32>,
    /// Angular-momentum proxy (rad/s). Drives the Magnus force and torque
    /// injection only; not a full rotational state.
    pub spin: Vector3<f32>,
    /// Mass (kg), fixed at construction.
    pub mass: f32,
    /// Radius (m), fixed at construction.
    pub radius: f32,
    pub is_grounded: bool,
    pub is_knuckleball: bool,
}

impl BallState {
    /// Build a resting ball at the origin from its construction params.
    pub fn new(params: &BallParams) -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            last_velocity: Vector3::zeros(),
            spin: Vector3::zeros(),
            mass: params.mass,
            radius: params.radius,
            is_grounded: false,
            is_knuckleball: false,
        }
    }

    /// Current speed `|velocity|` (m/s).
    #[inline]
    pub fn current_speed(&self) -> f32 {
        self.velocity.norm()
    }

    /// Total spin magnitude (rad/s).
    #[inline]
    pub fn spin_magnitude(&self) -> f32 {
        self.spin.norm()
    }

    /// Hard clamp: rescale velocity to exactly `max_speed` along its
    /// existing direction when above the cap.
    pub fn clamp_speed(&mut self, max_speed: f32) {
        let speed = self.current_speed();
        if speed > max_speed {
            self.velocity *= max_speed / speed;
        }
    }

    /// Zero all motion and flags and relocate the ball.
    pub fn reset(&mut self, position: Vector3<f32>) {
        self.position = position;
        self.velocity = Vector3::zeros();
        self.last_velocity = Vector3::zeros();
        self.spin = Vector3::zeros();
        self.is_grounded = false;
        self.is_knuckleball = false;
    }

    /// Read-only copy for external consumers (renderer, save layer).
    pub fn snapshot(&self) -> BallSnapshot {
        BallSnapshot {
            position: self.position,
            velocity: self.velocity,
            spin: self.spin,
            speed: self.current_speed(),
            is_grounded: self.is_grounded,
            is_knuckleball: self.is_knuckleball,
        }
    }
}

/// Serializable read-only view of a `BallState`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub spin: Vector3<f32>,
    pub speed: f32,
    pub is_grounded: bool,
    pub is_knuckleball: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ball_is_at_rest() {
        let params = BallParams::default();
        let ball = BallState::new(&params);

        assert_eq!(ball.current_speed(), 0.0);
        assert_eq!(ball.spin_magnitude(), 0.0);
        assert!(!ball.is_grounded);
        assert!(!ball.is_knuckleball);
        assert_eq!(ball.mass, params.mass);
        assert_eq!(ball.radius, params.radius);
    }

    #[test]
    fn test_clamp_rescales_direction_exactly() {
        let mut ball = BallState::new(&BallParams::default());
        ball.velocity = Vector3::new(30.0, 0.0, 40.0); // speed 50

        ball.clamp_speed(25.0);

        assert!((ball.current_speed() - 25.0).abs() < 1e-3);
        // Direction preserved: still 3-4-5 proportions.
        assert!((ball.velocity.x / ball.velocity.z - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_clamp_leaves_slow_ball_untouched() {
        let mut ball = BallState::new(&BallParams::default());
        ball.velocity = Vector3::new(1.0, 2.0, 3.0);

        ball.clamp_speed(25.0);

        assert_eq!(ball.velocity, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ball = BallState::new(&BallParams::default());
        ball.velocity = Vector3::new(5.0, 1.0, -2.0);
        ball.last_velocity = ball.velocity;
        ball.spin = Vector3::new(0.0, 4.0, 0.0);
        ball.is_grounded = true;
        ball.is_knuckleball = true;

        ball.reset(Vector3::new(0.0, 1.0, 0.0));

        assert_eq!(ball.position, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(ball.velocity, Vector3::zeros());
        assert_eq!(ball.last_velocity, Vector3::zeros());
        assert_eq!(ball.spin, Vector3::zeros());
        assert!(!ball.is_grounded);
        assert!(!ball.is_knuckleball);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut ball = BallState::new(&BallParams::default());
        ball.velocity = Vector3::new(0.0, 0.0, 12.0);
        ball.is_knuckleball = true;

        let snap = ball.snapshot();

        assert_eq!(snap.velocity, ball.velocity);
        assert!((snap.speed - 12.0).abs() < 1e-5);
        assert!(snap.is_knuckleball);
    }

    #[test]
    fn test_snapshot_serializes() {
        let ball = BallState::new(&BallParams::default());
        let json = serde_json::to_string(&ball.snapshot()).unwrap();
        let back: BallSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.position, ball.position);
    }
}
