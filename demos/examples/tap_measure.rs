// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-to-measure against a simulated floor and table.
//!
//! A camera looks down at a floor with a table on it. A scripted series of
//! taps is fed through a `RulerSession`; after each one the in-memory scene
//! is printed so you can see markers and labels come and go.
//!
//! Run:
//! - `cargo run -p ruler_demos --example tap_measure`
//! - `RUST_LOG=debug cargo run -p ruler_demos --example tap_measure` to see tracker events.

use kurbo::{Point, Rect, Size};
use ruler_measure::AnchorPoint;
use ruler_scene::{
    Camera, HorizontalPlane, MemoryScene, PlaneHitTester, RulerSession, TapOutcome, Vec3,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Phone held 1.4m above the floor, tilted down toward a point 1m ahead.
    let camera = Camera::look_at(
        AnchorPoint::new(0.0, 1.4, 0.0),
        AnchorPoint::new(0.0, 0.0, -1.0),
        Vec3::UP,
        800.0,
        Size::new(1170.0, 2532.0),
    )?;

    // The floor, plus a 1m x 0.6m table top at 0.75m.
    let hits = PlaneHitTester::new(camera)
        .with_plane(HorizontalPlane::infinite(0.0))
        .with_plane(HorizontalPlane::bounded(
            0.75,
            Rect::new(-0.5, -1.3, 0.5, -0.7),
        ));

    let mut scene = MemoryScene::new();
    let mut session = RulerSession::new();

    let taps = [
        ("floor, near", Point::new(585.0, 1900.0)),
        ("floor, far", Point::new(700.0, 1400.0)),
        ("sky", Point::new(585.0, 10.0)),
        ("table, left", Point::new(350.0, 1150.0)),
        ("table, right", Point::new(820.0, 1150.0)),
    ];

    for (name, screen) in taps {
        let outcome = session.tap(screen, &hits, &mut scene);
        println!("\n== Tap: {} @ ({:.0}, {:.0}) ==", name, screen.x, screen.y);
        match outcome {
            TapOutcome::Missed => println!("  no surface under tap"),
            TapOutcome::Placed { restarted, .. } => {
                println!("  placed marker (restarted: {restarted})");
            }
            TapOutcome::Measured { distance, .. } => {
                println!("  measured {distance:.4} m");
            }
        }

        for (handle, marker) in scene.markers() {
            let p = marker.position;
            println!("  marker {:?} at ({:.3}, {:.3}, {:.3})", handle, p.x, p.y, p.z);
        }
        for (handle, label) in scene.labels() {
            println!("  label  {:?} \"{}\"", handle, label.text);
        }
    }

    let effects = session.reset(&mut scene);
    tracing::info!(?effects, nodes = scene.len(), "session reset");
    Ok(())
}
