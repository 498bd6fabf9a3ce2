//! Ball simulation engine.
//!
//! Control flow per tick: the command queue drains into `BallState`, the
//! integrator evolves the state, the ground probe refreshes the grounded
//! flag, the knuckleball controller may perturb the ball, and the external
//! collision layer feeds contacts to the responder, which mutates the
//! state and emits events.

pub mod ball;
pub mod clock;
pub mod collision;
pub mod command;
pub mod config;
pub mod events;
pub mod ground;
pub mod integrator;
pub mod knuckleball;
pub mod physics_constants;
pub mod simulation;

pub use ball::{BallSnapshot, BallState};
pub use clock::FixedClock;
pub use collision::{CollisionResponder, Contact};
pub use command::{BallCommand, CommandQueue, CurveType};
pub use config::BallParams;
pub use events::{BallEvent, CollisionEvent, KickEvent, ResetEvent, SurfaceCategory};
pub use ground::{CollisionLayer, FlatGround, GroundContactProbe, GroundHit, GroundQuery, NoGeometry};
pub use integrator::ForceIntegrator;
pub use knuckleball::KnuckleballController;
pub use simulation::{BallSimulation, DEFAULT_SEED};
