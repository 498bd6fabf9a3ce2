//! Fixed-timestep force integration.
//!
//! One call advances a ball by one tick, applying in order: air drag, the
//! Magnus force, spin decay, the speed clamp, the ground probe, ground
//! friction or gravity, knuckleball turbulence, and the position update.
//! Deterministic given a seeded random source.

use rand::Rng;

use super::ball::BallState;
use super::config::BallParams;
use super::ground::{GroundContactProbe, GroundQuery};
use super::knuckleball::KnuckleballController;
use super::physics_constants::{ball, knuckleball};

pub struct ForceIntegrator;

impl ForceIntegrator {
    /// Advance `state` by one fixed timestep `dt` (canonical 0.02 s).
    pub fn step(
        state: &mut BallState,
        params: &BallParams,
        ground: &dyn GroundQuery,
        rng: &mut impl Rng,
        dt: f32,
    ) {
        // Collision response reflects the velocity the ball entered the
        // tick with, so record it before any force touches it.
        state.last_velocity = state.velocity;

        // Linear air drag.
        state.velocity *= (1.0 - params.drag_coefficient * dt).max(0.0);

        // Magnus force bends the path while the ball is both fast and
        // spinning. Continuous force, not an impulse.
        if state.current_speed() > ball::MAGNUS_MIN_SPEED
            && state.spin_magnitude() > ball::MAGNUS_MIN_SPIN
        {
            let magnus = state.velocity.cross(&state.spin) * params.magnus_coefficient;
            state.velocity += magnus * (dt / state.mass);
        }

        // Spin bleeds off exponentially absent fresh torque.
        state.spin *= (1.0 - ball::SPIN_DECAY_RATE * dt).clamp(0.0, 1.0);

        state.clamp_speed(params.max_speed);

        state.is_grounded = GroundContactProbe::probe(state, ground);

        if state.is_grounded {
            Self::apply_ground_friction(state, params, dt);
        } else {
            state.velocity.y -= ball::GRAVITY * dt;
        }

        if state.is_knuckleball {
            if state.current_speed() > knuckleball::MIN_ACTIVE_SPEED {
                KnuckleballController::apply_turbulence(state, params, rng, dt);
            } else {
                // Too slow to sustain the wobble.
                state.is_knuckleball = false;
            }
        }

        // Gravity and turbulence above may momentarily exceed the cap; the
        // clamp is a hard post-step guarantee, not soft damping.
        state.clamp_speed(params.max_speed);

        state.position += state.velocity * dt;
    }

    /// Decelerate a rolling ball by a force of magnitude
    /// `ground_friction * 10 N` opposing the velocity. Never reverses the
    /// roll direction.
    fn apply_ground_friction(state: &mut BallState, params: &BallParams, dt: f32) {
        let speed = state.current_speed();
        if speed <= ball::FRICTION_MIN_SPEED {
            return;
        }
        let decel = params.ground_friction * ball::FRICTION_FORCE_SCALE / state.mass * dt;
        let new_speed = (speed - decel).max(0.0);
        state.velocity *= new_speed / speed;
    }
}
