//! Procedural light layers driven by effect intensities.
//!
//! Three generators (shimmer for chorus, echo trails for delay, swirl for
//! phaser) each map `(time, intensity)` to a fresh list of draw commands every
//! tick. Nothing carries over between ticks except the clock.

mod echo;
mod shimmer;
mod swirl;

pub use echo::emit_echo_trails;
pub use shimmer::emit_shimmer;
pub use swirl::emit_swirl;

use crate::bus::{ParamBus, SubscriptionId};
use crate::clock::AnimationClock;
use crate::constants::LIGHT_GATE_THRESHOLD;
use crate::params::{EffectParameterState, Topic};
use glam::{Vec2, Vec4};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Drawing surface extent in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandKind {
    /// Main chorus beam.
    Beam,
    /// Drifting highlight laid over a beam.
    Shimmer,
    /// Slanted delay echo.
    Trail,
}

/// Renderer-agnostic shape. Colors are straight RGBA in 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Quad from `origin` (top-left) spanning `size`, its bottom edge shifted
    /// right by `skew`, filled with a vertical gradient `top` -> `bottom`.
    GradientBand {
        kind: BandKind,
        origin: Vec2,
        size: Vec2,
        skew: f32,
        top: Vec4,
        bottom: Vec4,
    },
    /// Radial gradient from `inner` at the centre to `outer` at `radius`.
    RadialBlob {
        center: Vec2,
        radius: f32,
        inner: Vec4,
        outer: Vec4,
    },
    Particle {
        center: Vec2,
        radius: f32,
        color: Vec4,
    },
}

/// Inputs shared by all generators for one tick.
#[derive(Clone, Copy, Debug)]
pub struct LightCtx {
    pub time: f32,
    pub intensity: f32,
    pub viewport: Viewport,
}

impl LightCtx {
    /// Generators draw nothing at or below the gate threshold.
    #[inline]
    pub fn gated(&self) -> bool {
        self.intensity.is_nan() || self.intensity <= LIGHT_GATE_THRESHOLD
    }
}

#[inline]
pub(crate) fn rgba(rgb: [f32; 3], alpha: f32) -> Vec4 {
    Vec4::new(rgb[0], rgb[1], rgb[2], alpha)
}

/// All three layers for one parameter snapshot at time `time`.
pub fn compose(params: &EffectParameterState, time: f32, viewport: Viewport) -> Vec<DrawCommand> {
    let ctx = |topic| LightCtx {
        time,
        intensity: params.intensity(topic),
        viewport,
    };
    let mut out = emit_shimmer(&ctx(Topic::ChorusChange));
    out.extend(emit_echo_trails(&ctx(Topic::DelayChange)));
    out.extend(emit_swirl(&ctx(Topic::PhaserChange)));
    out
}

/// Owns the animation clock and the bus subscriptions feeding it.
///
/// Created with [`LightRenderer::init`]; after [`LightRenderer::dispose`] (or
/// drop) it holds no handlers on the bus and every tick is empty.
pub struct LightRenderer {
    bus: ParamBus,
    params: Rc<RefCell<EffectParameterState>>,
    subscriptions: SmallVec<[SubscriptionId; 3]>,
    clock: AnimationClock,
    viewport: Viewport,
    disposed: bool,
}

impl LightRenderer {
    pub fn init(bus: &ParamBus, viewport: Viewport) -> Self {
        let params = Rc::new(RefCell::new(EffectParameterState::default()));
        let subscriptions = Topic::ALL
            .into_iter()
            .map(|topic| {
                let params = params.clone();
                bus.subscribe(topic, move |ev| params.borrow_mut().apply(ev))
            })
            .collect();
        log::info!(
            "[lights] init {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
        Self {
            bus: bus.clone(),
            params,
            subscriptions,
            clock: AnimationClock::new(),
            viewport,
            disposed: false,
        }
    }

    pub fn params(&self) -> EffectParameterState {
        *self.params.borrow()
    }

    #[inline]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Advance the clock by `dt` seconds and build this tick's commands.
    pub fn tick(&mut self, dt: f32) -> Vec<DrawCommand> {
        if self.disposed {
            return Vec::new();
        }
        let t = self.clock.advance(dt);
        compose(&self.params.borrow(), t, self.viewport)
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        for id in self.subscriptions.drain(..) {
            self.bus.unsubscribe(id);
        }
        self.clock.reset();
        self.disposed = true;
        log::info!("[lights] disposed");
    }
}

impl Drop for LightRenderer {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamEvent;

    #[test]
    fn idle_parameters_draw_nothing() {
        let bus = ParamBus::new();
        let mut r = LightRenderer::init(&bus, Viewport::new(800.0, 600.0));
        assert!(r.tick(0.016).is_empty());
        assert_eq!(bus.subscriber_count(), 3);
    }

    #[test]
    fn bus_events_reach_renderer_state() {
        let bus = ParamBus::new();
        let r = LightRenderer::init(&bus, Viewport::new(800.0, 600.0));
        bus.publish(ParamEvent::chorus(0.8));
        bus.publish(ParamEvent::phaser(0.3));
        let p = r.params();
        assert_eq!(p.chorus_depth, 0.8);
        assert_eq!(p.delay_wet, 0.0);
        assert_eq!(p.phaser_wet, 0.3);
    }

    #[test]
    fn drop_releases_subscriptions() {
        let bus = ParamBus::new();
        {
            let _r = LightRenderer::init(&bus, Viewport::new(10.0, 10.0));
            assert_eq!(bus.subscriber_count(), 3);
        }
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn gate_is_exclusive_at_threshold() {
        let ctx = |intensity| LightCtx {
            time: 0.0,
            intensity,
            viewport: Viewport::new(100.0, 100.0),
        };
        assert!(ctx(LIGHT_GATE_THRESHOLD).gated());
        assert!(ctx(f32::NAN).gated());
        assert!(!ctx(LIGHT_GATE_THRESHOLD + 1e-4).gated());
    }
}
