//! Ground contact detection against caller-supplied static geometry.
//!
//! The simulation core owns no collision world. It asks an external,
//! read-only query service whether a short downward sphere cast hits the
//! ground layer. When no service is supplied the probe reports "not
//! grounded" rather than failing.

use nalgebra::Vector3;

use super::ball::BallState;
use super::physics_constants::ground;

/// Layer filter for static-geometry queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionLayer {
    /// Walkable ground: pitch, grass.
    Ground,
    /// Everything solid.
    Any,
}

/// Result of a sphere cast against static geometry.
#[derive(Clone, Copy, Debug)]
pub struct GroundHit {
    pub point: Vector3<f32>,
    pub normal: Vector3<f32>,
    /// Cast distance travelled before the hit (m).
    pub distance: f32,
}

/// Read-only query into the static collision world.
///
/// Implementations must be pure: one instance is shared (`Arc`) across all
/// balls and may be queried concurrently from parallel ball updates.
pub trait GroundQuery: Send + Sync {
    fn sphere_cast(
        &self,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
        radius: f32,
        max_distance: f32,
        layer: CollisionLayer,
    ) -> Option<GroundHit>;
}

/// Absent-collaborator default: never reports a hit, so the ball is simply
/// treated as airborne instead of the probe failing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGeometry;

impl GroundQuery for NoGeometry {
    fn sphere_cast(
        &self,
        _origin: Vector3<f32>,
        _direction: Vector3<f32>,
        _radius: f32,
        _max_distance: f32,
        _layer: CollisionLayer,
    ) -> Option<GroundHit> {
        None
    }
}

/// Infinite horizontal ground plane at a fixed height. Enough for training
/// scenes, tests and the trajectory dump binary; real pitches supply their
/// own query implementation.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub height: f32,
}

impl GroundQuery for FlatGround {
    fn sphere_cast(
        &self,
        origin: Vector3<f32>,
        direction: Vector3<f32>,
        radius: f32,
        max_distance: f32,
        _layer: CollisionLayer,
    ) -> Option<GroundHit> {
        // The plane is only reachable by casts with a downward component.
        if direction.y >= 0.0 {
            return None;
        }
        let gap = origin.y - radius - self.height;
        if gap <= max_distance {
            Some(GroundHit {
                point: Vector3::new(origin.x, self.height, origin.z),
                normal: Vector3::y(),
                distance: gap.max(0.0),
            })
        } else {
            None
        }
    }
}

/// Per-tick grounded/airborne classifier.
pub struct GroundContactProbe;

impl GroundContactProbe {
    /// Sphere-cast the ball's radius downward by `radius + 0.1` m against
    /// the ground layer; any hit counts as contact. Pure: the only output
    /// is the returned flag.
    pub fn probe(state: &BallState, query: &dyn GroundQuery) -> bool {
        query
            .sphere_cast(
                state.position,
                -Vector3::y(),
                state.radius,
                state.radius + ground::PROBE_PADDING_M,
                CollisionLayer::Ground,
            )
            .is_some()
    }
}
