//! WASM bindings for a browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{run_to_completion, SimulationConfig, StrategyRegistry};

/// Fresh seed from the browser's Math.random
fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (hi << 32) | lo
}

/// Get all available strategies, in registry order
///
/// Returns an array of `{key, label, description}`.
#[wasm_bindgen]
pub fn list_strategies() -> Result<JsValue, JsError> {
    let entries = StrategyRegistry::builtin().entries();

    serde_wasm_bindgen::to_value(&entries)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get the human-readable description of a strategy (unknown keys fall back)
#[wasm_bindgen]
pub fn describe_strategy(key: &str) -> String {
    StrategyRegistry::builtin().get(key).description().to_string()
}

/// Run a full simulation
///
/// # Arguments
/// * `strategy_a` - Strategy key for player A
/// * `strategy_b` - Strategy key for player B
/// * `round_count` - Requested rounds; clamped to the default maximum
/// * `seed` - Optional seed; a fresh one is drawn when absent
///
/// # Returns
/// Serialized SimulationRun
#[wasm_bindgen]
pub fn simulate(
    strategy_a: &str,
    strategy_b: &str,
    round_count: f64,
    seed: Option<u64>,
) -> Result<JsValue, JsError> {
    if !round_count.is_finite() || round_count.fract() != 0.0 {
        return Err(JsError::new(&format!("round count {} is not a whole number", round_count)));
    }

    let config = SimulationConfig::default();
    let rounds = config
        .resolve_rounds(round_count as i64)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let registry = StrategyRegistry::builtin();
    let seed = seed.unwrap_or_else(entropy_seed);
    let result = run_to_completion(registry.get(strategy_a), registry.get(strategy_b), rounds, seed)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Default configuration as a JSON string
#[wasm_bindgen]
pub fn default_config() -> Result<String, JsError> {
    serde_json::to_string(&SimulationConfig::default())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
