//! Bilinear harmonic blending over the sharpness/warmth control surface.
//!
//! The four canonical periodic shapes sit at the corners of the unit square:
//!
//! ```text
//!  warmth 1   sine ───────── sawtooth
//!               │               │
//!  warmth 0   triangle ────── square
//!          sharpness 0     sharpness 1
//! ```
//!
//! A position inside the square mixes the sine-phase harmonic series of each
//! corner with bilinear weights.

use crate::constants::{HARMONIC_COUNT, SAWTOOTH_SCALE, SQUARE_SCALE, TRIANGLE_SCALE};

/// A point on the control surface.
///
/// `new` stores the components as given; callers feeding raw pointer data
/// should go through [`Position2D::clamped`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position2D {
    pub sharpness: f32,
    pub warmth: f32,
}

impl Position2D {
    pub const fn new(sharpness: f32, warmth: f32) -> Self {
        Self { sharpness, warmth }
    }

    /// Clamp both axes into [0, 1]. NaN maps to 0.
    pub fn clamped(sharpness: f32, warmth: f32) -> Self {
        Self {
            sharpness: unit(sharpness),
            warmth: unit(warmth),
        }
    }
}

#[inline]
pub(crate) fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Sine, Shape::Triangle, Shape::Sawtooth, Shape::Square];

    /// Control-surface position where this shape is heard in isolation.
    pub const fn corner(self) -> Position2D {
        match self {
            Shape::Sine => Position2D::new(0.0, 1.0),
            Shape::Sawtooth => Position2D::new(1.0, 1.0),
            Shape::Triangle => Position2D::new(0.0, 0.0),
            Shape::Square => Position2D::new(1.0, 0.0),
        }
    }
}

/// Bilinear corner weights for a position. They form a partition of unity
/// over the unit square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerWeights {
    pub sine: f32,
    pub sawtooth: f32,
    pub triangle: f32,
    pub square: f32,
}

impl CornerWeights {
    pub fn at(position: Position2D) -> Self {
        let Position2D { sharpness, warmth } = position;
        Self {
            sine: (1.0 - sharpness) * warmth,
            sawtooth: sharpness * warmth,
            triangle: (1.0 - sharpness) * (1.0 - warmth),
            square: sharpness * (1.0 - warmth),
        }
    }

    pub fn of(&self, shape: Shape) -> f32 {
        match shape {
            Shape::Sine => self.sine,
            Shape::Sawtooth => self.sawtooth,
            Shape::Triangle => self.triangle,
            Shape::Square => self.square,
        }
    }

    pub fn sum(&self) -> f32 {
        self.sine + self.sawtooth + self.triangle + self.square
    }
}

/// Sine-phase amplitudes for harmonics `1..HARMONIC_COUNT`. Index 0 (DC) is
/// always zero and no cosine component is modelled.
#[derive(Clone, Debug, PartialEq)]
pub struct HarmonicSpectrum {
    coeffs: [f32; HARMONIC_COUNT],
}

impl HarmonicSpectrum {
    pub const fn silent() -> Self {
        Self {
            coeffs: [0.0; HARMONIC_COUNT],
        }
    }

    /// Rebuild a spectrum from an imaginary-axis array, e.g. a decoded export
    /// payload. Returns `None` unless the slice holds exactly
    /// `HARMONIC_COUNT` values.
    pub fn from_imag(imag: &[f32]) -> Option<Self> {
        let coeffs: [f32; HARMONIC_COUNT] = imag.try_into().ok()?;
        let mut spectrum = Self { coeffs };
        spectrum.coeffs[0] = 0.0;
        Some(spectrum)
    }

    /// Amplitude of harmonic `n`; zero outside the modelled range.
    #[inline]
    pub fn coefficient(&self, n: usize) -> f32 {
        self.coeffs.get(n).copied().unwrap_or(0.0)
    }

    /// Sine (imaginary-axis) coefficients, `HARMONIC_COUNT` long.
    #[inline]
    pub fn imag(&self) -> &[f32] {
        &self.coeffs
    }

    /// Cosine (real-axis) coefficients; always zero.
    #[inline]
    pub fn real(&self) -> [f32; HARMONIC_COUNT] {
        [0.0; HARMONIC_COUNT]
    }

    pub fn is_silent(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }

    /// `(n, amplitude)` for every harmonic from the fundamental upwards.
    pub fn harmonics(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.coeffs.iter().copied().enumerate().skip(1)
    }
}

impl Default for HarmonicSpectrum {
    fn default() -> Self {
        Self::silent()
    }
}

/// Mix the four corner series for `position`.
///
/// The position must already lie in the unit square; nothing is clamped here.
/// Identical inputs give bit-identical output.
pub fn blend(position: Position2D) -> HarmonicSpectrum {
    let w = CornerWeights::at(position);
    let mut coeffs = [0.0_f32; HARMONIC_COUNT];

    for (n, c) in coeffs.iter_mut().enumerate().skip(1) {
        let nf = n as f32;
        let odd = n % 2 == 1;
        if n == 1 {
            *c += w.sine;
        }
        if odd {
            let sign = if ((n - 1) / 2) % 2 == 0 { 1.0 } else { -1.0 };
            *c += sign * (1.0 / (nf * nf)) * w.triangle * TRIANGLE_SCALE;
        }
        *c += (1.0 / nf) * w.sawtooth * SAWTOOTH_SCALE;
        if odd {
            *c += (1.0 / nf) * w.square * SQUARE_SCALE;
        }
    }

    HarmonicSpectrum { coeffs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn weights_partition_unity_over_the_square() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let p = Position2D::new(rng.gen::<f32>(), rng.gen::<f32>());
            let sum = CornerWeights::at(p).sum();
            assert!((sum - 1.0).abs() < EPS, "sum {sum} at {p:?}");
        }
        for shape in Shape::ALL {
            let w = CornerWeights::at(shape.corner());
            assert_eq!(w.of(shape), 1.0, "{shape:?} corner not isolated");
        }
    }

    #[test]
    fn sine_corner_is_pure_fundamental() {
        let s = blend(Shape::Sine.corner());
        assert_eq!(s.coefficient(1), 1.0);
        for n in 2..HARMONIC_COUNT {
            assert_eq!(s.coefficient(n), 0.0, "harmonic {n}");
        }
    }

    #[test]
    fn square_corner_has_odd_series() {
        let s = blend(Shape::Square.corner());
        for n in 1..HARMONIC_COUNT {
            let expected = if n % 2 == 1 { 4.0 / n as f32 } else { 0.0 };
            assert!((s.coefficient(n) - expected).abs() < EPS, "harmonic {n}");
        }
    }

    #[test]
    fn triangle_corner_alternates_sign() {
        let s = blend(Shape::Triangle.corner());
        assert!((s.coefficient(1) - 8.0).abs() < EPS);
        assert!((s.coefficient(3) + 8.0 / 9.0).abs() < EPS);
        assert!((s.coefficient(5) - 8.0 / 25.0).abs() < EPS);
        assert!((s.coefficient(7) + 8.0 / 49.0).abs() < EPS);
        assert_eq!(s.coefficient(2), 0.0);
    }

    #[test]
    fn sawtooth_corner_covers_every_harmonic() {
        let s = blend(Shape::Sawtooth.corner());
        for n in 1..HARMONIC_COUNT {
            assert!((s.coefficient(n) - 2.0 / n as f32).abs() < EPS);
        }
    }

    #[test]
    fn centre_fundamental_mixes_all_four() {
        let s = blend(Position2D::new(0.5, 0.5));
        assert!((s.coefficient(1) - 3.75).abs() < EPS);
    }

    #[test]
    fn blend_is_bit_deterministic() {
        let p = Position2D::new(0.37, 0.81);
        let a = blend(p);
        let b = blend(p);
        for (x, y) in a.imag().iter().zip(b.imag()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
        assert_eq!(a.coefficient(0), 0.0);
        assert_eq!(a.imag().len(), HARMONIC_COUNT);
    }

    #[test]
    fn clamped_position_handles_out_of_range() {
        assert_eq!(Position2D::clamped(-0.5, 1.7), Position2D::new(0.0, 1.0));
        assert_eq!(Position2D::clamped(f32::NAN, 0.25), Position2D::new(0.0, 0.25));
    }

    #[test]
    fn from_imag_requires_exact_length() {
        assert!(HarmonicSpectrum::from_imag(&[0.0; 8]).is_none());
        let s = blend(Position2D::new(0.2, 0.9));
        let back = HarmonicSpectrum::from_imag(s.imag()).unwrap();
        assert_eq!(back, s);
    }
}
