//! Delay echoes: slanted trails sweeping across the surface, each dragging a
//! column of particles.

use super::{rgba, BandKind, DrawCommand, LightCtx};
use crate::constants::{
    ECHO_BAND_WIDTH_PX, ECHO_JITTER_PX, ECHO_PARTICLES_PER_TRAIL, ECHO_PARTICLE_RADIUS_PX,
    ECHO_RGB, ECHO_SLANT_PX, ECHO_SPEED_PX_PER_SEC, ECHO_TRAILS, ECHO_TRAIL_SPACING_PX,
    ECHO_WRAP_MARGIN_PX, PARTICLE_RGB,
};
use glam::Vec2;

/// Horizontal position of trail `i` at time `t`, wrapping with a margin on
/// both sides of a surface `width` pixels wide.
#[inline]
pub(crate) fn trail_x(t: f32, i: usize, width: f32) -> f32 {
    let span = width + 2.0 * ECHO_WRAP_MARGIN_PX;
    (ECHO_SPEED_PX_PER_SEC * t + ECHO_TRAIL_SPACING_PX * i as f32).rem_euclid(span)
        - ECHO_WRAP_MARGIN_PX
}

pub fn emit_echo_trails(ctx: &LightCtx) -> Vec<DrawCommand> {
    if ctx.gated() {
        return Vec::new();
    }
    let LightCtx {
        time: t,
        intensity,
        viewport,
    } = *ctx;
    let h = viewport.height;
    let mut out = Vec::with_capacity(ECHO_TRAILS * (1 + ECHO_PARTICLES_PER_TRAIL));

    for i in 0..ECHO_TRAILS {
        let x = trail_x(t, i, viewport.width);
        let opacity = intensity * 0.6 * (1.0 - i as f32 / ECHO_TRAILS as f32);
        out.push(DrawCommand::GradientBand {
            kind: BandKind::Trail,
            origin: Vec2::new(x, 0.0),
            size: Vec2::new(ECHO_BAND_WIDTH_PX, h),
            skew: ECHO_SLANT_PX,
            top: rgba(ECHO_RGB, opacity),
            bottom: rgba(ECHO_RGB, opacity * 0.2),
        });

        for j in 0..ECHO_PARTICLES_PER_TRAIL {
            let fj = j as f32;
            let y = h * (fj + 0.5) / ECHO_PARTICLES_PER_TRAIL as f32 + (t + fj).sin() * ECHO_JITTER_PX;
            // follow the slant so particles sit on the band
            let along = if h > 0.0 { y / h } else { 0.0 };
            let px = x + ECHO_BAND_WIDTH_PX * 0.5 + ECHO_SLANT_PX * along;
            out.push(DrawCommand::Particle {
                center: Vec2::new(px, y),
                radius: ECHO_PARTICLE_RADIUS_PX,
                color: rgba(PARTICLE_RGB, opacity),
            });
        }
    }
    out
}
