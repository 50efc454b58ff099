use thiserror::Error;

/// The external oscillator refused or could not take new coefficients.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("wave sink rejected coefficients: {0}")]
    Rejected(String),
    #[error("wave sink is not available")]
    Unavailable,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export payload json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("real/imag length mismatch ({real} vs {imag})")]
    LengthMismatch { real: usize, imag: usize },
    #[error("spectrum needs {expected} coefficients, payload has {got}")]
    WrongLength { expected: usize, got: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusError {
    #[error("unknown parameter topic `{0}`")]
    UnknownTopic(String),
}
