// Integration checks for the blend -> sample -> export path.

use rand::prelude::*;
use wavesculpt_core::*;

const EPS: f32 = 1e-5;

#[test]
fn corner_spectra_match_reference_series() {
    let sine = blend(Position2D::new(0.0, 1.0));
    assert_eq!(sine.coefficient(1), 1.0);
    assert!((2..HARMONIC_COUNT).all(|n| sine.coefficient(n) == 0.0));

    let square = blend(Position2D::new(1.0, 0.0));
    for n in 1..HARMONIC_COUNT {
        let expected = if n % 2 == 1 { 4.0 / n as f32 } else { 0.0 };
        assert!(
            (square.coefficient(n) - expected).abs() < EPS,
            "square harmonic {n}: {} vs {expected}",
            square.coefficient(n)
        );
    }
}

#[test]
fn centre_fundamental_before_normalization() {
    // 0.25 sine + 2.0 triangle + 0.5 sawtooth + 1.0 square
    let s = blend(Position2D::new(0.5, 0.5));
    assert!((s.coefficient(1) - 3.75).abs() < EPS);
}

#[test]
fn normalized_peak_property_over_random_positions() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let p = Position2D::clamped(rng.gen_range(-0.2..1.2), rng.gen_range(-0.2..1.2));
        let w = sample(&blend(p), DEFAULT_RESOLUTION);
        assert_eq!(w.len(), DEFAULT_RESOLUTION);
        assert!((w.peak() - 1.0).abs() < EPS, "peak {} at {p:?}", w.peak());
    }
    assert!(sample(&HarmonicSpectrum::silent(), DEFAULT_RESOLUTION).is_silent());
}

#[test]
fn blend_and_sample_have_no_hidden_state() {
    let p = Position2D::new(0.71, 0.13);
    let first = sample(&blend(p), 300);
    // interleave unrelated work
    let _ = sample(&blend(Position2D::new(0.1, 0.9)), 64);
    let second = sample(&blend(p), 300);
    assert_eq!(first, second);
}

#[test]
fn export_payload_round_trips_exactly() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let p = Position2D::new(rng.gen(), rng.gen());
        let spectrum = blend(p);
        let payload = DragExportPayload::new(p, &spectrum);
        let json = payload.to_json().unwrap();
        let back = DragExportPayload::from_json(&json).unwrap();
        assert_eq!(back, payload);
        assert!(back.real.iter().all(|r| *r == 0.0));
        for (a, b) in back.imag.iter().zip(spectrum.imag()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert_eq!(back.spectrum().unwrap(), spectrum);
        assert_eq!(back.position(), p);
    }
}
