//! Collision response.
//!
//! The collision world itself is external: some geometry layer detects the
//! contact and reports it here. The responder reflects the ball, scales
//! energy by restitution and impact softness, injects a little random spin
//! on hard hits, and publishes a `CollisionEvent` for the audio / particle
//! / haptics layers. Degenerate contacts are dropped as no-op bounces.

use nalgebra::Vector3;
use rand::Rng;

use super::ball::BallState;
use super::config::BallParams;
use super::events::{CollisionEvent, SurfaceCategory};
use super::physics_constants::bounce;

/// One contact reported by the external collision-detection layer.
#[derive(Clone, Debug)]
pub struct Contact<'a> {
    pub point: Vector3<f32>,
    /// Contact normal; normalized by the responder, rejected when
    /// degenerate.
    pub normal: Vector3<f32>,
    /// Closing speed along the contact (m/s).
    pub relative_speed: f32,
    /// Collider tag from the geometry layer ("grass", "post", ...).
    pub surface_tag: &'a str,
}

pub struct CollisionResponder;

impl CollisionResponder {
    /// React to a contact: reflect, damp, spin, emit.
    ///
    /// Returns `None` (state untouched, warning logged) for degenerate
    /// geometry: zero-length normal or non-finite kinematics.
    pub fn on_contact(
        state: &mut BallState,
        params: &BallParams,
        rng: &mut impl Rng,
        contact: &Contact<'_>,
    ) -> Option<CollisionEvent> {
        let normal_len = contact.normal.norm();
        if normal_len < bounce::NORMAL_EPSILON || !normal_len.is_finite() {
            log::warn!("ignoring contact with degenerate normal {:?}", contact.normal);
            return None;
        }
        if !is_finite(&state.last_velocity) || !contact.relative_speed.is_finite() {
            log::warn!("ignoring contact with non-finite velocity");
            return None;
        }
        let normal = contact.normal / normal_len;

        let reflected = reflect(state.last_velocity, normal);

        // Low-speed impacts lose proportionally more energy than the base
        // restitution: soft-contact model, anchored at SOFTNESS_REF_SPEED.
        let multiplier = params.restitution
            * (contact.relative_speed / bounce::SOFTNESS_REF_SPEED).clamp(0.0, 1.0);
        state.velocity = reflected * multiplier;

        // A second contact in the same tick must reflect the post-bounce
        // velocity, not the stale pre-tick one.
        state.last_velocity = state.velocity;

        // Real bounces are imperfect: hard hits pick up a bit of random
        // spin, same distribution family as knuckleball turbulence.
        if contact.relative_speed > bounce::SPIN_INJECT_MIN_SPEED {
            let impulse = Vector3::new(
                rng.gen_range(-1.0f32..=1.0),
                rng.gen_range(-0.5f32..=0.5),
                rng.gen_range(-1.0f32..=1.0),
            ) * params.bounce_spin_gain;
            state.spin += impulse;
        }

        Some(CollisionEvent {
            point: contact.point,
            normal,
            relative_speed: contact.relative_speed,
            surface: SurfaceCategory::from_tag(contact.surface_tag),
        })
    }
}

/// Mirror `v` about the plane with unit normal `n`.
#[inline]
pub fn reflect(v: Vector3<f32>, n: Vector3<f32>) -> Vector3<f32> {
    v - n * (2.0 * v.dot(&n))
}

#[inline]
fn is_finite(v: &Vector3<f32>) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ball_with_last_velocity(v: Vector3<f32>) -> BallState {
        let mut state = BallState::new(&BallParams::default());
        state.velocity = v;
        state.last_velocity = v;
        state
    }

    fn ground_contact(relative_speed: f32) -> Contact<'static> {
        Contact {
            point: Vector3::zeros(),
            normal: Vector3::y(),
            relative_speed,
            surface_tag: "grass",
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(21)
    }

    #[test]
    fn test_fast_vertical_bounce() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(0.0, -10.0, 0.0));

        let event = CollisionResponder::on_contact(
            &mut state,
            &params,
            &mut rng(),
            &ground_contact(12.0),
        )
        .expect("valid contact must produce an event");

        // Full-power impact: multiplier = restitution * clamp01(12/10).
        assert!(state.velocity.y > 0.0, "ball should bounce upward");
        assert!((state.velocity.y - 10.0 * params.restitution).abs() < 1e-3);
        assert_eq!(event.surface, SurfaceCategory::Ground);
        assert!(event.warrants_haptics());
    }

    #[test]
    fn test_reflection_law_along_normal() {
        let params = BallParams::default();
        let incoming = Vector3::new(3.0, -8.0, 1.0);
        let mut state = ball_with_last_velocity(incoming);
        let relative_speed = 12.0;

        CollisionResponder::on_contact(
            &mut state,
            &params,
            &mut rng(),
            &ground_contact(relative_speed),
        )
        .unwrap();

        let normal = Vector3::y();
        let restitution_effective =
            params.restitution * (relative_speed / bounce::SOFTNESS_REF_SPEED).clamp(0.0, 1.0);
        let expected = -incoming.dot(&normal) * restitution_effective;
        assert!((state.velocity.dot(&normal) - expected).abs() < 1e-3);
        assert!(restitution_effective <= params.restitution);
    }

    #[test]
    fn test_soft_contact_kills_slow_bounce() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(0.0, -1.0, 0.0));

        CollisionResponder::on_contact(&mut state, &params, &mut rng(), &ground_contact(1.0))
            .unwrap();

        // multiplier = 0.65 * 0.1: almost all energy gone.
        assert!((state.velocity.y - 1.0 * params.restitution * 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_reflected_speed_never_exceeds_incoming_times_restitution() {
        let params = BallParams::default();
        let incoming = Vector3::new(4.0, -9.0, 2.0);
        let mut state = ball_with_last_velocity(incoming);

        CollisionResponder::on_contact(&mut state, &params, &mut rng(), &ground_contact(25.0))
            .unwrap();

        assert!(state.current_speed() <= incoming.norm() * params.restitution + 1e-4);
    }

    #[test]
    fn test_hard_hit_injects_spin() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(0.0, -10.0, 0.0));
        assert_eq!(state.spin_magnitude(), 0.0);

        CollisionResponder::on_contact(&mut state, &params, &mut rng(), &ground_contact(12.0))
            .unwrap();

        let cap = params.bounce_spin_gain * Vector3::<f32>::new(1.0, 0.5, 1.0).norm();
        assert!(state.spin_magnitude() > 0.0, "hard bounce should add spin");
        assert!(state.spin_magnitude() <= cap + 1e-5);
    }

    #[test]
    fn test_gentle_hit_leaves_spin_alone() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(0.0, -1.5, 0.0));
        state.spin = Vector3::new(0.0, 2.0, 0.0);

        CollisionResponder::on_contact(&mut state, &params, &mut rng(), &ground_contact(1.5))
            .unwrap();

        assert_eq!(state.spin, Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_zero_normal_is_noop() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(0.0, -10.0, 0.0));
        let before = state.clone();

        let event = CollisionResponder::on_contact(
            &mut state,
            &params,
            &mut rng(),
            &Contact {
                point: Vector3::zeros(),
                normal: Vector3::zeros(),
                relative_speed: 12.0,
                surface_tag: "grass",
            },
        );

        assert!(event.is_none());
        assert_eq!(state.velocity, before.velocity);
        assert_eq!(state.spin, before.spin);
    }

    #[test]
    fn test_non_finite_velocity_is_noop() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(f32::NAN, -10.0, 0.0));

        let event =
            CollisionResponder::on_contact(&mut state, &params, &mut rng(), &ground_contact(12.0));

        assert!(event.is_none());
    }

    #[test]
    fn test_unnormalized_normal_is_accepted() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(0.0, -10.0, 0.0));

        let event = CollisionResponder::on_contact(
            &mut state,
            &params,
            &mut rng(),
            &Contact {
                point: Vector3::zeros(),
                normal: Vector3::new(0.0, 4.0, 0.0),
                relative_speed: 12.0,
                surface_tag: "post",
            },
        )
        .unwrap();

        assert_eq!(event.normal, Vector3::y());
        assert_eq!(event.surface, SurfaceCategory::Woodwork);
        assert!(state.velocity.y > 0.0);
    }

    #[test]
    fn test_last_velocity_updated_for_chained_contacts() {
        let params = BallParams::default();
        let mut state = ball_with_last_velocity(Vector3::new(0.0, -10.0, 0.0));

        CollisionResponder::on_contact(&mut state, &params, &mut rng(), &ground_contact(12.0))
            .unwrap();

        assert_eq!(state.last_velocity, state.velocity);
    }

    #[test]
    fn test_reflect_preserves_tangent() {
        let v = Vector3::new(3.0, -4.0, 1.0);
        let reflected = reflect(v, Vector3::y());
        assert_eq!(reflected, Vector3::new(3.0, 4.0, 1.0));
    }
}
