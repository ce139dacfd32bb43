//! WebAssembly bindings for the CTS solver
//!
//! The browser page owns the button grids and text fields; this crate keeps
//! the puzzle state and derives codes on every change.

use cts_core::{Alphabet, OperatorPolicy, PresetTable, Session, SessionConfig, SessionState, Symbol};
use js_sys::Array;
use wasm_bindgen::prelude::*;

// Methods that touch JS values only run under wasm-pack test
#[cfg(test)]
mod tests;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// First character of `text`, the symbol a button click sends.
fn symbol_of(text: &str) -> Option<Symbol> {
    text.chars().next().map(Symbol)
}

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The main WASM solver controller
#[wasm_bindgen]
pub struct CtsSolver {
    session: Session,
    presets: PresetTable,
}

#[wasm_bindgen]
impl CtsSolver {
    /// Create a solver using the built-in preset for `size` symbols
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<CtsSolver, JsValue> {
        let presets = PresetTable::default();
        let alphabet = presets
            .alphabet_for(size)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(CtsSolver {
            session: Session::new(SessionConfig::new(alphabet)),
            presets,
        })
    }

    /// Create a solver for an explicit alphabet such as "% ● ■ ▲ + X"
    #[wasm_bindgen]
    pub fn with_alphabet(symbols: &str) -> Result<CtsSolver, JsValue> {
        let alphabet: Alphabet = symbols
            .parse()
            .map_err(|e: cts_core::AlphabetError| JsValue::from_str(&e.to_string()))?;
        Ok(CtsSolver {
            session: Session::new(SessionConfig::new(alphabet)),
            presets: PresetTable::default(),
        })
    }

    /// Switch to the preset for another size; clears both rows and the operator
    #[wasm_bindgen]
    pub fn set_size(&mut self, size: usize) -> bool {
        match self.presets.alphabet_for(size) {
            Ok(alphabet) => {
                self.session.set_alphabet(alphabet);
                true
            }
            Err(_) => false,
        }
    }

    /// Sizes with a preset alphabet
    #[wasm_bindgen]
    pub fn preset_sizes(&self) -> Vec<usize> {
        self.presets.sizes().collect()
    }

    /// Current alphabet as an array of one-character strings
    #[wasm_bindgen]
    pub fn alphabet(&self) -> Array {
        self.session
            .alphabet()
            .symbols()
            .iter()
            .map(|s| JsValue::from_str(&s.to_string()))
            .collect()
    }

    #[wasm_bindgen]
    pub fn size(&self) -> usize {
        self.session.size()
    }

    /// Append a symbol to the top row
    #[wasm_bindgen]
    pub fn push_top(&mut self, symbol: &str) -> bool {
        symbol_of(symbol).is_some_and(|s| self.session.push_top(s))
    }

    /// Append a symbol to the bottom row
    #[wasm_bindgen]
    pub fn push_bottom(&mut self, symbol: &str) -> bool {
        symbol_of(symbol).is_some_and(|s| self.session.push_bottom(s))
    }

    /// Undo the last top row symbol
    #[wasm_bindgen]
    pub fn pop_top(&mut self) -> Option<String> {
        self.session.pop_top().map(|s| s.to_string())
    }

    /// Undo the last bottom row symbol
    #[wasm_bindgen]
    pub fn pop_bottom(&mut self) -> Option<String> {
        self.session.pop_bottom().map(|s| s.to_string())
    }

    /// Set the operator field; returns the sanitized text to show back
    #[wasm_bindgen]
    pub fn set_operator(&mut self, text: &str) -> String {
        self.session.set_operator_text(text);
        self.session.operator_text().to_string()
    }

    #[wasm_bindgen]
    pub fn set_candidates(&mut self, text: &str) {
        self.session.set_candidates_text(text);
    }

    /// Enable or disable rejection of operators with repeated digits
    #[wasm_bindgen]
    pub fn set_strict(&mut self, strict: bool) {
        self.session.set_operator_policy(if strict {
            OperatorPolicy::Strict
        } else {
            OperatorPolicy::Lenient
        });
    }

    /// Clear everything the user entered
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen]
    pub fn top(&self) -> String {
        join_symbols(self.session.top())
    }

    #[wasm_bindgen]
    pub fn bottom(&self) -> String {
        join_symbols(self.session.bottom())
    }

    #[wasm_bindgen]
    pub fn operator(&self) -> String {
        self.session.operator_text().to_string()
    }

    #[wasm_bindgen]
    pub fn is_top_full(&self) -> bool {
        self.session.is_top_full()
    }

    #[wasm_bindgen]
    pub fn is_bottom_full(&self) -> bool {
        self.session.is_bottom_full()
    }

    /// Top→Bottom code, if the inputs are complete and valid
    #[wasm_bindgen]
    pub fn forward_code(&self) -> Option<String> {
        self.session.evaluate().forward.map(|c| c.into_string())
    }

    /// Bottom→Top code, if the inputs are complete and valid
    #[wasm_bindgen]
    pub fn inverse_code(&self) -> Option<String> {
        self.session.evaluate().inverse.map(|c| c.into_string())
    }

    /// Full evaluation (status, codes, matches) as a JS object
    #[wasm_bindgen]
    pub fn evaluate(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.evaluate()).map_err(JsValue::from)
    }

    /// Get current session state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.session.state()).unwrap_or_default()
    }

    /// Load session state from JSON
    #[wasm_bindgen]
    pub fn load_state_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<SessionState>(json) {
            Ok(state) => {
                self.session = Session::from_state(state);
                true
            }
            Err(_) => false,
        }
    }
}
