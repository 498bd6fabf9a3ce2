//! Knuckleball effect.
//!
//! A kick with almost no spin occasionally goes unstable: while the ball
//! is fast, small bounded random forces wobble the trajectory, and the
//! effect dies once the ball slows or the next kick lands. The random
//! source is injected so replays and tests can fix the sequence.

use nalgebra::Vector3;
use rand::Rng;

use super::ball::BallState;
use super::config::BallParams;
use super::physics_constants::knuckleball;

pub struct KnuckleballController;

impl KnuckleballController {
    /// Decide at kick time whether the knuckleball effect arms.
    ///
    /// Only a kick whose applied spin stays under the threshold qualifies,
    /// and then only with `knuckleball_chance` probability. Called once per
    /// kick; a spinny kick always clears the flag.
    pub fn on_kick(
        state: &mut BallState,
        applied_spin: Vector3<f32>,
        params: &BallParams,
        rng: &mut impl Rng,
    ) {
        let low_spin = applied_spin.norm() < knuckleball::SPIN_THRESHOLD;
        state.is_knuckleball = low_spin && rng.gen::<f32>() < params.knuckleball_chance;
    }

    /// One tick of turbulence: a force with components drawn uniformly
    /// from bounded ranges (lateral ±1, vertical ±0.5, pre-gain). The
    /// integrator gates this on the active-speed threshold.
    pub fn apply_turbulence(
        state: &mut BallState,
        params: &BallParams,
        rng: &mut impl Rng,
        dt: f32,
    ) {
        let force = Vector3::new(
            rng.gen_range(-knuckleball::LATERAL_RANGE..=knuckleball::LATERAL_RANGE),
            rng.gen_range(-knuckleball::VERTICAL_RANGE..=knuckleball::VERTICAL_RANGE),
            rng.gen_range(-knuckleball::LATERAL_RANGE..=knuckleball::LATERAL_RANGE),
        ) * params.knuckleball_gain;
        state.velocity += force * (dt / state.mass);
    }
}
