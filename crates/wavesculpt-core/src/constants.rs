// Fixed design parameters shared by the synthesis path and the light renderer.
// None of these are read from configuration; visual and loudness behavior
// depends on the exact values.

// Synthesis
pub const HARMONIC_COUNT: usize = 32; // coefficients per spectrum, index 0 unused
pub const DEFAULT_RESOLUTION: usize = 256; // samples per displayed cycle

// Per-shape loudness scales (sine is implicitly 1)
pub const TRIANGLE_SCALE: f32 = 8.0;
pub const SAWTOOTH_SCALE: f32 = 2.0;
pub const SQUARE_SCALE: f32 = 4.0;

// Session gain envelope
pub const LIVE_GAIN: f32 = 0.3;
pub const MUTED_GAIN: f32 = 0.0;
pub const ATTACK_SEC: f64 = 0.02;
pub const RELEASE_SEC: f64 = 0.1;

// Preview polyline uses 90% of the half-height so peaks stay inside the frame
pub const PREVIEW_HEADROOM: f32 = 0.9;

// Light generators
pub const LIGHT_GATE_THRESHOLD: f32 = 0.1; // intensities at or below draw nothing

pub const SHIMMER_BEAMS: usize = 8;
pub const SHIMMER_BAND_WIDTH_FRAC: f32 = 0.5; // band width relative to beam spacing
pub const SHIMMER_OVERLAY_HEIGHT_FRAC: f32 = 0.3;
pub const SHIMMER_OVERLAY_SWING_FRAC: f32 = 0.2;

pub const ECHO_TRAILS: usize = 5;
pub const ECHO_PARTICLES_PER_TRAIL: usize = 10;
pub const ECHO_SPEED_PX_PER_SEC: f32 = 50.0;
pub const ECHO_TRAIL_SPACING_PX: f32 = 150.0;
pub const ECHO_WRAP_MARGIN_PX: f32 = 100.0; // trails enter and leave this far off-canvas
pub const ECHO_BAND_WIDTH_PX: f32 = 60.0;
pub const ECHO_SLANT_PX: f32 = 80.0;
pub const ECHO_JITTER_PX: f32 = 20.0;
pub const ECHO_PARTICLE_RADIUS_PX: f32 = 2.0;

pub const SWIRL_BLOBS: usize = 6;
pub const SWIRL_PARTICLES_PER_BLOB: usize = 12;
pub const SWIRL_ORBIT_FRAC: f32 = 0.3;
pub const SWIRL_BASE_RADIUS_PX: f32 = 100.0;
pub const SWIRL_RADIUS_SWING_PX: f32 = 50.0;
pub const SWIRL_PARTICLE_RING_FRAC: f32 = 0.8;
pub const SWIRL_PARTICLE_RADIUS_PX: f32 = 3.0;

// Palette (linear RGB, 0..1)
pub const SHIMMER_TOP_RGB: [f32; 3] = [0.25, 0.95, 0.75]; // aqua-green
pub const SHIMMER_BOTTOM_RGB: [f32; 3] = [0.6, 0.3, 0.95]; // violet
pub const ECHO_RGB: [f32; 3] = [1.0, 0.7, 0.3];
pub const SWIRL_CORE_RGB: [f32; 3] = [0.95, 0.35, 0.85];
pub const SWIRL_EDGE_RGB: [f32; 3] = [0.3, 0.4, 1.0];
pub const PARTICLE_RGB: [f32; 3] = [1.0, 1.0, 1.0];
