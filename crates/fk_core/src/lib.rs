//! # fk_core - Deterministic Ball Physics Simulation Core
//!
//! Fixed-timestep simulation of a single free-flying ball under
//! aerodynamic drag, a spin-driven Magnus force, ground friction,
//! collision reflection and a stochastic knuckleball effect.
//!
//! ## Features
//! - 100% deterministic (same seed + same commands = same trajectory)
//! - Fixed 50 Hz tick, independent of the render loop
//! - Commands buffered and applied atomically at tick boundaries
//! - Structured events for external audio / particle / haptic layers
//!
//! Rendering, audio, haptics, save data and scene management live outside
//! this crate; they consume `BallEvent`s and `BallSnapshot`s only.

pub mod engine;
pub mod error;

pub use engine::{
    BallCommand, BallEvent, BallParams, BallSimulation, BallSnapshot, BallState, CollisionEvent,
    CollisionLayer, CollisionResponder, CommandQueue, Contact, CurveType, FixedClock,
    FlatGround, ForceIntegrator, GroundContactProbe, GroundHit, GroundQuery, KickEvent,
    KnuckleballController, NoGeometry, ResetEvent, SurfaceCategory, DEFAULT_SEED,
};
pub use error::{CommandError, ConfigError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
