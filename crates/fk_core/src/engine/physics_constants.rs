//! Physics constants for the ball simulation.
//!
//! Fixed contract values live here, grouped by concern. Gameplay-tunable
//! values (coefficients, gains, thresholds a designer would touch) live in
//! `BallParams` instead.

// ============================================================
// Fixed timestep
// ============================================================
pub mod timestep {
    /// Simulation tick rate (Hz), independent of the render loop.
    pub const TICK_HZ: f32 = 50.0;

    /// Simulation tick duration (s).
    pub const TICK_DT: f32 = 0.02;

    /// Accumulator cap (s). A frame longer than this is truncated instead
    /// of producing a catch-up burst of ticks.
    pub const MAX_FRAME_DT: f32 = 0.25;

    // TICK_HZ and TICK_DT must describe the same rate.
    const _: () = assert!(TICK_HZ * TICK_DT > 0.999 && TICK_HZ * TICK_DT < 1.001);
}

/// Ball physics constants
pub mod ball {
    /// Ball mass (kg) - standard match ball.
    pub const MASS_KG: f32 = 0.43;
    /// Ball radius (m).
    pub const RADIUS_M: f32 = 0.11;
    /// Gravity constant (m/s²).
    pub const GRAVITY: f32 = 9.81;
    /// Minimum speed for the Magnus force to act (m/s).
    pub const MAGNUS_MIN_SPEED: f32 = 1.0;
    /// Minimum spin magnitude for the Magnus force to act (rad/s).
    pub const MAGNUS_MIN_SPIN: f32 = 0.1;
    /// Spin decay rate (1/s): spin is lerped toward zero by `rate * dt`
    /// every tick.
    pub const SPIN_DECAY_RATE: f32 = 2.0;
    /// Minimum speed before ground friction applies (m/s).
    pub const FRICTION_MIN_SPEED: f32 = 0.1;
    /// Ground friction force per unit coefficient (N).
    pub const FRICTION_FORCE_SCALE: f32 = 10.0;
}

/// Ground contact probing
pub mod ground {
    /// Downward sphere-cast reach beyond the ball radius (m).
    pub const PROBE_PADDING_M: f32 = 0.1;
}

/// Knuckleball effect
pub mod knuckleball {
    /// Applied-spin magnitude below which a kick can go knuckleball (rad/s).
    pub const SPIN_THRESHOLD: f32 = 0.1;
    /// Speed below which the effect is dormant and the flag clears (m/s).
    pub const MIN_ACTIVE_SPEED: f32 = 5.0;
    /// Horizontal turbulence component range, pre-gain (±).
    pub const LATERAL_RANGE: f32 = 1.0;
    /// Vertical turbulence component range, pre-gain (±).
    pub const VERTICAL_RANGE: f32 = 0.5;
}

/// Bounce response
pub mod bounce {
    /// Reference impact speed (m/s) for the softness scale:
    /// `bounce multiplier = restitution * clamp01(relative_speed / this)`.
    /// Tuning anchor, not a physical law.
    pub const SOFTNESS_REF_SPEED: f32 = 10.0;
    /// Impact speed above which a random spin impulse is injected (m/s).
    pub const SPIN_INJECT_MIN_SPEED: f32 = 2.0;
    /// Contact normals shorter than this are treated as degenerate.
    pub const NORMAL_EPSILON: f32 = 1e-6;
}

/// External haptics contract
pub mod haptics {
    /// Impact speed (m/s) above which consumers are expected to fire
    /// haptic feedback. Dispatch itself lives outside the core.
    pub const MIN_IMPACT_SPEED: f32 = 3.0;
}
