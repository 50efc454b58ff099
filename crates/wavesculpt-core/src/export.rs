//! Drag-export payload handed to the node-graph editor.
//!
//! Wire shape is `{ "x": .., "y": .., "real": [..], "imag": [..] }` where
//! `x`/`y` are the originating sharpness/warmth and the arrays are the exact
//! spectrum coefficients (`real` all zero).

use crate::constants::HARMONIC_COUNT;
use crate::error::ExportError;
use crate::harmonics::{HarmonicSpectrum, Position2D};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragExportPayload {
    pub x: f32,
    pub y: f32,
    pub real: Vec<f32>,
    pub imag: Vec<f32>,
}

impl DragExportPayload {
    pub fn new(position: Position2D, spectrum: &HarmonicSpectrum) -> Self {
        Self {
            x: position.sharpness,
            y: position.warmth,
            real: spectrum.real().to_vec(),
            imag: spectrum.imag().to_vec(),
        }
    }

    pub fn position(&self) -> Position2D {
        Position2D::new(self.x, self.y)
    }

    /// Rebuild the spectrum carried by the payload.
    pub fn spectrum(&self) -> Result<HarmonicSpectrum, ExportError> {
        HarmonicSpectrum::from_imag(&self.imag).ok_or(ExportError::WrongLength {
            expected: HARMONIC_COUNT,
            got: self.imag.len(),
        })
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a payload. Arrays of unequal length are rejected; the arrays
    /// themselves are returned exactly as encoded.
    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        let payload: Self = serde_json::from_str(text)?;
        if payload.real.len() != payload.imag.len() {
            return Err(ExportError::LengthMismatch {
                real: payload.real.len(),
                imag: payload.imag.len(),
            });
        }
        Ok(payload)
    }
}
