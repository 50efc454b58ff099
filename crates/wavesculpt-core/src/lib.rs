pub mod bus;
pub mod cache;
pub mod clock;
pub mod constants;
pub mod error;
pub mod export;
pub mod harmonics;
pub mod lights;
pub mod params;
pub mod session;
pub mod waveform;

pub use bus::*;
pub use cache::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use export::*;
pub use harmonics::*;
pub use lights::{compose, BandKind, DrawCommand, LightCtx, LightRenderer, Viewport};
pub use params::*;
pub use session::*;
pub use waveform::*;
