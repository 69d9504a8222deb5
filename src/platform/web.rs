//! Browser bindings

use wasm_bindgen::prelude::*;

use super::round_json;
use crate::kernel::RoundSeed;
use crate::settings::KernelSettings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Puzzle kernel ready");
}

/// Round JSON for the game screen; `round` is the session's round counter
#[wasm_bindgen(js_name = newRound)]
pub fn new_round(kind: &str, level: u32, seed: u64, round: u64) -> Result<String, JsValue> {
    let settings = KernelSettings::load();
    round_json(kind, level, RoundSeed { seed, round }, &settings).map_err(|e| JsValue::from_str(&e.to_string()))
}
