//! Owning simulation context for a single ball.
//!
//! There is no process-wide instance: callers construct a `BallSimulation`
//! per ball and keep it for the ball's lifetime. Instances are mutually
//! independent; the only shared resource is the read-only `GroundQuery`,
//! so separate balls may be stepped from parallel updates.

use std::sync::Arc;

use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;

use super::ball::{BallSnapshot, BallState};
use super::clock::FixedClock;
use super::collision::{CollisionResponder, Contact};
use super::command::{BallCommand, CommandQueue, CurveType};
use super::config::BallParams;
use super::events::{BallEvent, KickEvent, ResetEvent};
use super::ground::{GroundQuery, NoGeometry};
use super::integrator::ForceIntegrator;
use super::knuckleball::KnuckleballController;

/// Fallback seed when the caller supplies none. Replays stay reproducible
/// even for hosts that never think about seeding.
pub const DEFAULT_SEED: u64 = 0x4672_6565_4b69_636b;

pub struct BallSimulation {
    state: BallState,
    params: BallParams,
    commands: CommandQueue,
    events: Vec<BallEvent>,
    clock: FixedClock,
    rng: ChaCha8Rng,
    ground: Arc<dyn GroundQuery>,
}

impl BallSimulation {
    /// Build a simulation from validated parameters, seeded with
    /// `DEFAULT_SEED` and no collision world attached.
    pub fn new(params: BallParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            state: BallState::new(&params),
            params,
            commands: CommandQueue::new(),
            events: Vec::new(),
            clock: FixedClock::default(),
            rng: ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
            ground: Arc::new(NoGeometry),
        })
    }

    /// Reseed the random source (deterministic replay / tests).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Attach the shared static-geometry query service.
    pub fn with_ground(mut self, ground: Arc<dyn GroundQuery>) -> Self {
        self.ground = ground;
        self
    }

    // ============================================================
    // Command surface (buffered; applied at the next tick boundary)
    // ============================================================

    pub fn kick(&mut self, direction: Vector3<f32>, force: f32, spin: Vector3<f32>) {
        self.commands.push(BallCommand::Kick { direction, force, spin });
    }

    pub fn apply_curve(&mut self, curve: CurveType, intensity: f32) {
        self.commands.push(BallCommand::ApplyCurve { curve, intensity });
    }

    pub fn reset(&mut self, position: Vector3<f32>) {
        self.commands.push(BallCommand::Reset { position });
    }

    // ============================================================
    // Scheduling
    // ============================================================

    /// Feed one render frame of elapsed time; the integrator runs exactly
    /// once per elapsed fixed interval.
    pub fn advance(&mut self, frame_dt: f32) {
        for _ in 0..self.clock.advance(frame_dt) {
            self.step();
        }
    }

    /// Run exactly one fixed tick: drain queued commands atomically, then
    /// integrate.
    pub fn step(&mut self) {
        for command in self.commands.drain() {
            self.apply_command(command);
        }
        let dt = self.clock.tick_dt();
        ForceIntegrator::step(&mut self.state, &self.params, self.ground.as_ref(), &mut self.rng, dt);
    }

    fn apply_command(&mut self, command: BallCommand) {
        if let Err(reason) = command.validate() {
            log::debug!("rejected ball command: {reason}");
            return;
        }
        match command {
            BallCommand::Kick { direction, force, spin } => {
                let impulse = direction.normalize() * force * self.params.kick_force_multiplier;
                self.state.velocity += impulse / self.state.mass;

                let applied_spin = if spin.norm_squared() > 0.0 {
                    let applied = spin * self.params.spin_sensitivity;
                    self.state.spin = applied;
                    applied
                } else {
                    Vector3::zeros()
                };
                KnuckleballController::on_kick(
                    &mut self.state,
                    applied_spin,
                    &self.params,
                    &mut self.rng,
                );

                if force > self.params.trail_activation_force {
                    self.events.push(BallEvent::Kick(KickEvent { force }));
                }
            }
            BallCommand::ApplyCurve { curve, intensity } => {
                // Torque only; linear velocity is untouched.
                self.state.spin = curve.spin_axis() * intensity;
            }
            BallCommand::Reset { position } => {
                self.state.reset(position);
                self.events.push(BallEvent::Reset(ResetEvent { position }));
            }
        }
    }

    // ============================================================
    // External collision layer
    // ============================================================

    /// Entry point for the external collision-detection layer: the ball
    /// touched static geometry. Mutates the ball and queues a
    /// `CollisionEvent` unless the contact is degenerate.
    pub fn handle_contact(
        &mut self,
        point: Vector3<f32>,
        normal: Vector3<f32>,
        relative_speed: f32,
        surface_tag: &str,
    ) {
        let contact = Contact { point, normal, relative_speed, surface_tag };
        if let Some(event) =
            CollisionResponder::on_contact(&mut self.state, &self.params, &mut self.rng, &contact)
        {
            self.events.push(BallEvent::Collision(event));
        }
    }

    // ============================================================
    // Read-only telemetry
    // ============================================================

    pub fn current_speed(&self) -> f32 {
        self.state.current_speed()
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded
    }

    pub fn spin(&self) -> Vector3<f32> {
        self.state.spin
    }

    pub fn is_knuckleball(&self) -> bool {
        self.state.is_knuckleball
    }

    pub fn position(&self) -> Vector3<f32> {
        self.state.position
    }

    pub fn params(&self) -> &BallParams {
        &self.params
    }

    pub fn snapshot(&self) -> BallSnapshot {
        self.state.snapshot()
    }

    /// Take every event queued since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<BallEvent> {
        std::mem::take(&mut self.events)
    }
}
