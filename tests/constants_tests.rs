// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use wavesculpt_core::Topic;

#[test]
fn param_controls_publish_known_topics() {
    for (id, topic) in PARAM_CONTROLS {
        assert!(!id.is_empty());
        assert!(Topic::from_name(topic).is_some(), "{id} -> {topic}");
    }
    // One control per effect channel
    for t in Topic::ALL {
        assert_eq!(
            PARAM_CONTROLS.iter().filter(|(_, n)| *n == t.name()).count(),
            1
        );
    }
}

#[test]
fn canvas_ids_are_distinct() {
    assert_ne!(SURFACE_CANVAS_ID, LIGHTS_CANVAS_ID);
    assert_ne!(SURFACE_CANVAS_ID, PREVIEW_CANVAS_ID);
    assert_ne!(LIGHTS_CANVAS_ID, PREVIEW_CANVAS_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drawing_constants_are_within_reasonable_bounds() {
    assert!(BASE_FREQUENCY_HZ > 20.0 && BASE_FREQUENCY_HZ < 20_000.0);
    assert!(WAVE_LINE_WIDTH >= PREVIEW_LINE_WIDTH);
    assert!(HANDLE_RADIUS_PX > 0.0);
    for c in WAVE_STROKE_RGBA
        .iter()
        .chain(AXIS_RGBA.iter())
        .chain(HANDLE_RGBA.iter())
    {
        assert!((0.0..=1.0).contains(c));
    }
}
