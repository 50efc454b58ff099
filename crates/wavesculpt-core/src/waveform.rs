//! Additive resynthesis of one cycle from a [`HarmonicSpectrum`].

use crate::constants::{HARMONIC_COUNT, PREVIEW_HEADROOM};
use crate::harmonics::HarmonicSpectrum;
use glam::Vec2;
use std::f32::consts::TAU;

/// One period of samples, peak-normalized to [-1, 1].
///
/// Unless every sample is zero, the largest absolute sample is exactly 1.0.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Waveform {
    samples: Vec<f32>,
}

impl Waveform {
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0_f32, |m, s| m.max(s.abs()))
    }

    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|s| *s == 0.0)
    }

    /// Screen-space points for drawing the cycle across a `width` x `height`
    /// surface, y growing downwards.
    pub fn polyline(&self, width: f32, height: f32) -> Vec<Vec2> {
        let n = self.samples.len();
        if n == 0 {
            return Vec::new();
        }
        let mid = height * 0.5;
        let amp = mid * PREVIEW_HEADROOM;
        let step = if n > 1 { width / (n - 1) as f32 } else { 0.0 };
        self.samples
            .iter()
            .enumerate()
            .map(|(i, s)| Vec2::new(i as f32 * step, mid - s * amp))
            .collect()
    }
}

/// Evaluate `spectrum` at `resolution` evenly spaced phases over one cycle
/// and peak-normalize. Cost is O(resolution * HARMONIC_COUNT).
// TODO: switch to a shared sine table if preview resolution grows past a few thousand samples.
pub fn sample(spectrum: &HarmonicSpectrum, resolution: usize) -> Waveform {
    let mut samples = Vec::with_capacity(resolution);
    for i in 0..resolution {
        let phase = TAU * i as f32 / resolution as f32;
        let mut acc = 0.0_f32;
        for n in 1..HARMONIC_COUNT {
            let amp = spectrum.coefficient(n);
            if amp != 0.0 {
                acc += amp * (n as f32 * phase).sin();
            }
        }
        samples.push(acc);
    }
    normalize(&mut samples);
    Waveform { samples }
}

// Divide by the peak; an all-zero buffer is left untouched.
fn normalize(samples: &mut [f32]) {
    let peak = samples.iter().fold(0.0_f32, |m, s| m.max(s.abs()));
    if peak > 0.0 {
        for s in samples.iter_mut() {
            *s /= peak;
        }
    }
}
