//! Phaser swirl: radial blobs orbiting the centre on a Lissajous path, each
//! ringed by rotating particles.

use super::{rgba, DrawCommand, LightCtx};
use crate::constants::{
    PARTICLE_RGB, SWIRL_BASE_RADIUS_PX, SWIRL_BLOBS, SWIRL_CORE_RGB, SWIRL_EDGE_RGB,
    SWIRL_ORBIT_FRAC, SWIRL_PARTICLES_PER_BLOB, SWIRL_PARTICLE_RADIUS_PX,
    SWIRL_PARTICLE_RING_FRAC, SWIRL_RADIUS_SWING_PX,
};
use glam::Vec2;
use std::f32::consts::TAU;

pub fn emit_swirl(ctx: &LightCtx) -> Vec<DrawCommand> {
    if ctx.gated() {
        return Vec::new();
    }
    let LightCtx {
        time: t,
        intensity,
        viewport,
    } = *ctx;
    let orbit = Vec2::new(viewport.width, viewport.height) * SWIRL_ORBIT_FRAC;
    let mut out = Vec::with_capacity(SWIRL_BLOBS * (1 + SWIRL_PARTICLES_PER_BLOB));

    for i in 0..SWIRL_BLOBS {
        let fi = i as f32;
        let path = Vec2::new((0.5 * t + fi).cos(), (0.7 * t + 0.8 * fi).sin());
        let center = viewport.center() + path * orbit;
        let radius = SWIRL_BASE_RADIUS_PX + SWIRL_RADIUS_SWING_PX * (2.0 * t + fi).sin();
        out.push(DrawCommand::RadialBlob {
            center,
            radius,
            inner: rgba(SWIRL_CORE_RGB, intensity * 0.5),
            outer: rgba(SWIRL_EDGE_RGB, 0.0),
        });

        let ring = radius * SWIRL_PARTICLE_RING_FRAC;
        for k in 0..SWIRL_PARTICLES_PER_BLOB {
            let angle = TAU * k as f32 / SWIRL_PARTICLES_PER_BLOB as f32 + 2.0 * t;
            out.push(DrawCommand::Particle {
                center: center + Vec2::new(angle.cos(), angle.sin()) * ring,
                radius: SWIRL_PARTICLE_RADIUS_PX,
                color: rgba(PARTICLE_RGB, intensity * 0.8),
            });
        }
    }
    out
}
