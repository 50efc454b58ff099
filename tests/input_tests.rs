// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec4;
use input::*;
use wavesculpt_core::Position2D;

#[test]
fn surface_corners_map_to_shape_corners() {
    // Top-left is full warmth, no sharpness (sine corner)
    assert_eq!(
        surface_position(0.0, 0.0, 400.0, 300.0),
        Position2D::new(0.0, 1.0)
    );
    // Bottom-right is the square corner
    assert_eq!(
        surface_position(400.0, 300.0, 400.0, 300.0),
        Position2D::new(1.0, 0.0)
    );
    let mid = surface_position(200.0, 150.0, 400.0, 300.0);
    assert!((mid.sharpness - 0.5).abs() < 1e-6);
    assert!((mid.warmth - 0.5).abs() < 1e-6);
}

#[test]
fn surface_position_clamps_outside_pointer() {
    // Captured pointers keep reporting after leaving the canvas
    let p = surface_position(-40.0, 900.0, 400.0, 300.0);
    assert_eq!(p, Position2D::new(0.0, 0.0));
    let p = surface_position(1000.0, -5.0, 400.0, 300.0);
    assert_eq!(p, Position2D::new(1.0, 1.0));
}

#[test]
fn collapsed_surface_maps_to_centre() {
    assert_eq!(
        surface_position(10.0, 10.0, 0.0, 300.0),
        Position2D::new(0.5, 0.5)
    );
}

#[test]
fn handle_round_trips_through_surface_mapping() {
    let (w, h) = (640.0, 480.0);
    let p = Position2D::new(0.25, 0.75);
    let px = handle_px(p, w, h);
    let back = surface_position(px.x, px.y, w, h);
    assert!((back.sharpness - p.sharpness).abs() < 1e-6);
    assert!((back.warmth - p.warmth).abs() < 1e-6);
}

#[test]
fn css_rgba_formats_and_clamps() {
    assert_eq!(css_rgba(Vec4::new(1.0, 0.0, 0.5, 0.25)), "rgba(255,0,128,0.250)");
    // Out-of-range channels are clamped rather than wrapped
    assert_eq!(css_rgba(Vec4::new(2.0, -1.0, 0.0, 1.5)), "rgba(255,0,0,1.000)");
    assert_eq!(css_rgba_arr([0.0, 0.0, 0.0, 0.0]), "rgba(0,0,0,0.000)");
}

#[test]
fn pointer_state_starts_up() {
    let ps = PointerState::default();
    assert!(!ps.down);
    assert_eq!(ps.pointer_id, None);
}
