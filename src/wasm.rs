use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::api::{break_lines, Algorithm};
use crate::cost::total_penalty;
use crate::samples;

#[derive(Serialize)]
struct WasmBreaking {
    algorithm: &'static str,
    max_width: u32,
    line_count: u32,
    penalty: f64,
    lines: Vec<String>,
}

/// WebAssembly entry point: break `text` into lines at most `max_width`
/// wide using the algorithm with the given name, returning the lines and
/// a penalty summary.
#[wasm_bindgen]
pub fn break_paragraph(
    text: String,
    max_width: u32,
    algorithm: String,
) -> Result<JsValue, JsValue> {
    let algorithm = algorithm
        .parse::<Algorithm>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let lines = break_lines(&text, max_width as usize, algorithm)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let summary = WasmBreaking {
        algorithm: algorithm.name(),
        max_width,
        line_count: lines.len() as u32,
        penalty: total_penalty(&lines, max_width as usize) as f64,
        lines,
    };
    to_value(&summary).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Convenience helper exposed to JS: the algorithm names accepted by
/// [`break_paragraph`].
#[wasm_bindgen]
pub fn algorithm_names() -> JsValue {
    let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
    to_value(&names).expect("serialize algorithm names")
}

/// Convenience helper exposed to JS: the bundled sample paragraphs as
/// `[name, text]` pairs.
#[wasm_bindgen]
pub fn sample_texts() -> JsValue {
    to_value(&samples::ALL).expect("serialize sample texts")
}
