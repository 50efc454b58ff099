// Page wiring and drawing constants for the web front end.
// Synthesis and light-generator constants live in `wavesculpt_core`.

// Element ids
pub const SURFACE_CANVAS_ID: &str = "sculpt-surface"; // pointer control surface + live waveform
pub const LIGHTS_CANVAS_ID: &str = "light-layer"; // procedural light animation
pub const PREVIEW_CANVAS_ID: &str = "wave-preview"; // collapsed preview, drag source for export

// Effect controls publishing onto the parameter bus: (element id, bus topic)
pub const PARAM_CONTROLS: [(&str, &str); 3] = [
    ("chorus-depth", "chorusChange"),
    ("delay-wet", "delayChange"),
    ("phaser-wet", "phaserChange"),
];

// MIME type used for the drag-export payload
pub const EXPORT_MIME: &str = "application/json";

// Oscillator
pub const BASE_FREQUENCY_HZ: f32 = 220.0;

// Waveform stroke
pub const WAVE_STROKE_RGBA: [f32; 4] = [0.35, 0.95, 0.8, 1.0];
pub const WAVE_LINE_WIDTH: f64 = 2.0;
pub const PREVIEW_LINE_WIDTH: f64 = 1.0;
pub const AXIS_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.15];

// Control-surface handle
pub const HANDLE_RADIUS_PX: f64 = 8.0;
pub const HANDLE_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.85];

// Light layer blend mode, additive so overlapping layers glow
pub const LIGHTS_COMPOSITE_OP: &str = "lighter";
