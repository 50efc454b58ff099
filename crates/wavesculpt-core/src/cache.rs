//! Last synthesized result, kept for redraws that should not recompute.

use crate::export::DragExportPayload;
use crate::harmonics::{HarmonicSpectrum, Position2D};
use crate::waveform::Waveform;

#[derive(Clone, Debug, PartialEq)]
pub struct CachedWave {
    pub position: Position2D,
    pub spectrum: HarmonicSpectrum,
    pub waveform: Waveform,
}

/// Holds at most one entry; every update replaces it wholesale.
#[derive(Clone, Debug, Default)]
pub struct WaveformCache {
    entry: Option<CachedWave>,
}

impl WaveformCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, position: Position2D, spectrum: HarmonicSpectrum, waveform: Waveform) {
        self.entry = Some(CachedWave {
            position,
            spectrum,
            waveform,
        });
    }

    /// `None` until the first synthesis; callers skip the redraw in that case.
    #[inline]
    pub fn current(&self) -> Option<&CachedWave> {
        self.entry.as_ref()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn export_payload(&self) -> Option<DragExportPayload> {
        self.entry
            .as_ref()
            .map(|e| DragExportPayload::new(e.position, &e.spectrum))
    }
}
