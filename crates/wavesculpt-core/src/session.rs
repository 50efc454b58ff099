//! Pointer-driven sculpting: position in, coefficients out to the wave sink.

use crate::cache::WaveformCache;
use crate::clock::RedrawSlot;
use crate::constants::{ATTACK_SEC, DEFAULT_RESOLUTION, LIVE_GAIN, MUTED_GAIN, RELEASE_SEC};
use crate::error::SinkError;
use crate::export::DragExportPayload;
use crate::harmonics::{blend, Position2D};
use crate::waveform::{sample, Waveform};

/// Whatever turns a spectrum into sound, typically an oscillator with a
/// custom periodic wave behind a gain stage.
pub trait WaveSink {
    /// `real` and `imag` always have equal length.
    fn set_periodic_wave(&mut self, real: &[f32], imag: &[f32]) -> Result<(), SinkError>;

    /// Move the output level to `target` over `duration_sec` seconds.
    fn ramp_gain(&mut self, target: f32, duration_sec: f64) -> Result<(), SinkError>;

    /// Release the underlying audio resource. Called once, on dispose.
    fn close(&mut self) {}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub resolution: usize,
    pub live_gain: f32,
    pub attack_sec: f64,
    pub release_sec: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            live_gain: LIVE_GAIN,
            attack_sec: ATTACK_SEC,
            release_sec: RELEASE_SEC,
        }
    }
}

/// Owns the sink, the last result and the pending redraw for one control
/// surface. Every pointer sample is applied to audio immediately; redraws
/// collapse to the newest waveform per frame.
pub struct SculptSession<S: WaveSink> {
    sink: Option<S>,
    config: SessionConfig,
    cache: WaveformCache,
    redraw: RedrawSlot<Waveform>,
    live: bool,
}

impl<S: WaveSink> SculptSession<S> {
    pub fn new(sink: S, config: SessionConfig) -> Self {
        Self {
            sink: Some(sink),
            config,
            cache: WaveformCache::new(),
            redraw: RedrawSlot::new(),
            live: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn cache(&self) -> &WaveformCache {
        &self.cache
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.sink.is_none()
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Pointer went down on the surface: fade in and sound `position`.
    pub fn press(&mut self, position: Position2D) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        self.live = true;
        if let Err(e) = sink.ramp_gain(self.config.live_gain, self.config.attack_sec) {
            log::warn!("[sculpt] fade-in failed: {e}");
        }
        log::debug!(
            "[sculpt] press at ({:.2},{:.2})",
            position.sharpness,
            position.warmth
        );
        self.drag(position)
    }

    /// Apply one raw pointer sample while pressed. Returns false when nothing
    /// was updated: the session is disposed, not live, or the sink refused
    /// the coefficients (the next sample simply tries again). Outside a press
    /// the sculpted waveform and its export payload stay as they were.
    pub fn drag(&mut self, position: Position2D) -> bool {
        if !self.live {
            return false;
        }
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        let spectrum = blend(position);
        if let Err(e) = sink.set_periodic_wave(&spectrum.real(), spectrum.imag()) {
            log::warn!("[sculpt] wave sink rejected update: {e}");
            return false;
        }
        let waveform = sample(&spectrum, self.config.resolution);
        self.redraw.request(waveform.clone());
        self.cache.update(position, spectrum, waveform);
        true
    }

    /// Pointer released: ramp to silence, keep the last waveform on screen.
    pub fn release(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if !self.live {
            return;
        }
        self.live = false;
        if let Err(e) = sink.ramp_gain(MUTED_GAIN, self.config.release_sec) {
            log::warn!("[sculpt] fade-out failed: {e}");
        }
        log::debug!("[sculpt] release");
    }

    /// Newest waveform requested since the last frame, at most once.
    pub fn take_redraw(&mut self) -> Option<Waveform> {
        self.redraw.take()
    }

    /// Last waveform for an idle redraw; `None` before the first sample.
    pub fn preview(&self) -> Option<&Waveform> {
        self.cache.current().map(|c| &c.waveform)
    }

    pub fn export_payload(&self) -> Option<DragExportPayload> {
        self.cache.export_payload()
    }

    /// Silence and release the sink. Later calls are no-ops.
    pub fn dispose(&mut self) {
        let Some(mut sink) = self.sink.take() else {
            return;
        };
        if self.live {
            if let Err(e) = sink.ramp_gain(MUTED_GAIN, 0.0) {
                log::warn!("[sculpt] mute on dispose failed: {e}");
            }
        }
        sink.close();
        self.live = false;
        self.redraw.cancel();
        log::info!("[sculpt] disposed");
    }
}

impl<S: WaveSink> Drop for SculptSession<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
