//! Ball tuning configuration.
//!
//! Every designer-facing tunable lives in one explicitly constructed
//! struct handed to the simulation at creation time. There is no ambient
//! lookup: a ball is built from exactly the values it is given.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use super::physics_constants::ball;

/// Tunable parameters for one ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallParams {
    /// Mass (kg).
    pub mass: f32,
    /// Radius (m).
    pub radius: f32,
    /// Linear air drag coefficient (1/s).
    pub drag_coefficient: f32,
    /// Ground friction coefficient; friction force is
    /// `coefficient * 10 N` opposing the roll.
    pub ground_friction: f32,
    /// Restitution in `[0, 1]`: speed fraction preserved by a full-power
    /// bounce.
    pub restitution: f32,
    /// Magnus force scale applied to `velocity × spin`.
    pub magnus_coefficient: f32,
    /// Hard speed cap (m/s).
    pub max_speed: f32,
    /// Scale from kick force input to impulse.
    pub kick_force_multiplier: f32,
    /// Scale from kick spin input (normalized swipe) to spin (rad/s).
    pub spin_sensitivity: f32,
    /// Probability a near-spinless kick goes knuckleball.
    pub knuckleball_chance: f32,
    /// Knuckleball turbulence force gain (N).
    pub knuckleball_gain: f32,
    /// Random spin impulse gain on hard bounces (rad/s).
    pub bounce_spin_gain: f32,
    /// Kick force above which the renderer is told to enable the motion
    /// trail (`KickEvent`).
    pub trail_activation_force: f32,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            mass: ball::MASS_KG,
            radius: ball::RADIUS_M,
            drag_coefficient: 0.25,
            ground_friction: 0.3,
            restitution: 0.65,
            magnus_coefficient: 0.1,
            max_speed: 40.0,
            kick_force_multiplier: 1.0,
            spin_sensitivity: 5.0,
            knuckleball_chance: 0.15,
            knuckleball_gain: 6.0,
            bounce_spin_gain: 1.5,
            trail_activation_force: 10.0,
        }
    }
}

impl BallParams {
    /// Match-day tuning (the default).
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Exaggerated curve and bounce for arcade modes.
    pub fn arcade() -> Self {
        let mut params = Self::default();
        params.magnus_coefficient = 0.2;
        params.restitution = 0.75;
        params.knuckleball_chance = 0.3;
        params.kick_force_multiplier = 1.2;
        params
    }

    /// Refuse non-finite or out-of-range values before a simulation is
    /// built around them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("mass", self.mass),
            ("radius", self.radius),
            ("max_speed", self.max_speed),
            ("kick_force_multiplier", self.kick_force_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("drag_coefficient", self.drag_coefficient),
            ("ground_friction", self.ground_friction),
            ("magnus_coefficient", self.magnus_coefficient),
            ("spin_sensitivity", self.spin_sensitivity),
            ("knuckleball_gain", self.knuckleball_gain),
            ("bounce_spin_gain", self.bounce_spin_gain),
            ("trail_activation_force", self.trail_activation_force),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("restitution", self.restitution),
            ("knuckleball_chance", self.knuckleball_chance),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::UnitRange { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert!(BallParams::default().validate().is_ok());
        assert!(BallParams::arcade().validate().is_ok());
    }

    #[test]
    fn test_default_matches_standard_ball() {
        let params = BallParams::default();
        assert_eq!(params.mass, 0.43);
        assert_eq!(params.radius, 0.11);
        assert_eq!(params.knuckleball_chance, 0.15);
    }

    #[test]
    fn test_arcade_curves_harder() {
        let arcade = BallParams::arcade();
        assert!(arcade.magnus_coefficient > BallParams::default().magnus_coefficient);
        assert!(arcade.restitution > BallParams::default().restitution);
    }

    #[test]
    fn test_validate_rejects_bad_restitution() {
        let mut params = BallParams::default();
        params.restitution = 1.4;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::UnitRange { field: "restitution", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_mass() {
        let mut params = BallParams::default();
        params.mass = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositive { field: "mass", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut params = BallParams::default();
        params.drag_coefficient = f32::NAN;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_params_round_trip_json() {
        let params = BallParams::arcade();
        let json = serde_json::to_string(&params).unwrap();
        let back: BallParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
