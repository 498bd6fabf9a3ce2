//! Trajectory dump utility.
//!
//! Simulates a curled kick over a flat pitch and prints one JSON line per
//! tick, for eyeballing tuning changes or feeding a plotting script:
//!
//! ```text
//! cargo run --bin trajectory_dump > trajectory.jsonl
//! ```

use std::sync::Arc;

use nalgebra::Vector3;
use serde_json::json;

use fk_core::{BallEvent, BallParams, BallSimulation, FlatGround};

fn main() {
    let mut sim = BallSimulation::new(BallParams::default())
        .expect("default params are valid")
        .with_seed(7)
        .with_ground(Arc::new(FlatGround { height: 0.0 }));

    sim.reset(Vector3::new(0.0, 0.11, 0.0));
    sim.kick(Vector3::new(0.0, 0.4, 1.0), 14.0, Vector3::new(0.0, 0.6, 0.0));

    // 5 seconds at 50 Hz, with the collision layer emulated over the plane.
    for tick in 0..250u32 {
        sim.step();

        let snap = sim.snapshot();
        if snap.position.y - 0.11 <= 0.0 && snap.velocity.y < 0.0 {
            sim.handle_contact(
                Vector3::new(snap.position.x, 0.0, snap.position.z),
                Vector3::y(),
                snap.velocity.y.abs(),
                "grass",
            );
        }

        let events: Vec<&str> = sim
            .drain_events()
            .iter()
            .map(|event| match event {
                BallEvent::Collision(_) => "collision",
                BallEvent::Kick(_) => "kick",
                BallEvent::Reset(_) => "reset",
            })
            .collect();

        let snap = sim.snapshot();
        let line = json!({
            "tick": tick,
            "position": [snap.position.x, snap.position.y, snap.position.z],
            "speed": snap.speed,
            "spin": [snap.spin.x, snap.spin.y, snap.spin.z],
            "grounded": snap.is_grounded,
            "knuckleball": snap.is_knuckleball,
            "events": events,
        });
        println!("{line}");
    }
}
