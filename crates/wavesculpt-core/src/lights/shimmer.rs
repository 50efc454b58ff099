//! Chorus shimmer: evenly spaced vertical beams with drifting highlights.

use super::{rgba, BandKind, DrawCommand, LightCtx};
use crate::constants::{
    SHIMMER_BAND_WIDTH_FRAC, SHIMMER_BEAMS, SHIMMER_BOTTOM_RGB, SHIMMER_OVERLAY_HEIGHT_FRAC,
    SHIMMER_OVERLAY_SWING_FRAC, SHIMMER_TOP_RGB,
};
use glam::Vec2;

/// Beam `i` has opacity `intensity * (0.3 * sin(3t + i) + 0.7) * 0.4`; its
/// highlight rides up and down with `sin(2t + 0.5 i)`.
pub fn emit_shimmer(ctx: &LightCtx) -> Vec<DrawCommand> {
    if ctx.gated() {
        return Vec::new();
    }
    let LightCtx {
        time: t,
        intensity,
        viewport,
    } = *ctx;
    let spacing = viewport.width / SHIMMER_BEAMS as f32;
    let band_w = spacing * SHIMMER_BAND_WIDTH_FRAC;
    let overlay_h = viewport.height * SHIMMER_OVERLAY_HEIGHT_FRAC;
    let mut out = Vec::with_capacity(SHIMMER_BEAMS * 2);

    for i in 0..SHIMMER_BEAMS {
        let fi = i as f32;
        let x = spacing * (fi + 0.5) - band_w * 0.5;
        let opacity = intensity * (0.3 * (3.0 * t + fi).sin() + 0.7) * 0.4;
        out.push(DrawCommand::GradientBand {
            kind: BandKind::Beam,
            origin: Vec2::new(x, 0.0),
            size: Vec2::new(band_w, viewport.height),
            skew: 0.0,
            top: rgba(SHIMMER_TOP_RGB, opacity),
            bottom: rgba(SHIMMER_BOTTOM_RGB, opacity),
        });

        let drift = (2.0 * t + 0.5 * fi).sin() * viewport.height * SHIMMER_OVERLAY_SWING_FRAC;
        let y = (viewport.height - overlay_h) * 0.5 + drift;
        out.push(DrawCommand::GradientBand {
            kind: BandKind::Shimmer,
            origin: Vec2::new(x, y),
            size: Vec2::new(band_w, overlay_h),
            skew: 0.0,
            top: rgba(SHIMMER_TOP_RGB, 0.0),
            bottom: rgba(SHIMMER_TOP_RGB, opacity * 0.5),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lights::Viewport;

    fn ctx(time: f32, intensity: f32) -> LightCtx {
        LightCtx {
            time,
            intensity,
            viewport: Viewport::new(800.0, 400.0),
        }
    }

    #[test]
    fn beams_are_evenly_spaced() {
        let cmds = emit_shimmer(&ctx(0.0, 1.0));
        let xs: Vec<f32> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCommand::GradientBand {
                    kind: BandKind::Beam,
                    origin,
                    ..
                } => Some(origin.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs.len(), SHIMMER_BEAMS);
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn beam_opacity_follows_formula() {
        let t = 1.3;
        let cmds = emit_shimmer(&ctx(t, 0.5));
        let DrawCommand::GradientBand { top, .. } = cmds[2] else {
            panic!("expected band");
        };
        // cmds[2] is beam 1
        let expected = 0.5 * (0.3 * (3.0 * t + 1.0).sin() + 0.7) * 0.4;
        assert!((top.w - expected).abs() < 1e-6);
    }

    #[test]
    fn highlight_drifts_with_time() {
        let a = emit_shimmer(&ctx(0.0, 1.0));
        let b = emit_shimmer(&ctx(0.5, 1.0));
        let y = |cmds: &[DrawCommand]| match cmds[1] {
            DrawCommand::GradientBand { origin, .. } => origin.y,
            _ => f32::NAN,
        };
        assert!((y(&a) - y(&b)).abs() > 1.0);
    }
}
