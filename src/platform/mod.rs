//! Platform boundary
//!
//! The presentation layer talks to the kernel through JSON strings:
//! - `round_json`: shared by the native binary and the browser bindings
//! - `web` (wasm32 only): `wasm_bindgen` exports and logger setup

#[cfg(target_arch = "wasm32")]
pub mod web;

use thiserror::Error;

use crate::kernel::RoundSeed;
use crate::round::{PuzzleKind, new_round};
use crate::settings::KernelSettings;

/// Why a round request could not be answered
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("unknown puzzle kind `{0}`")]
    UnknownKind(String),

    #[error("failed to encode round: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Generate the round described by `kind`/`level`/`seed` and encode it as JSON
pub fn round_json(kind: &str, level: u32, seed: RoundSeed, settings: &KernelSettings) -> Result<String, RequestError> {
    let kind = PuzzleKind::from_str(kind).ok_or_else(|| RequestError::UnknownKind(kind.to_string()))?;
    let round = new_round(kind, level, settings, &mut seed.to_rng());
    Ok(serde_json::to_string(&round)?)
}
