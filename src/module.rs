//! Contract with the external game module.
//!
//! SYSTEM CONTEXT
//! ==============
//! The game is a separately compiled wasm-bindgen module exposing a single
//! asynchronous, no-argument initializer. Its windowing layer reports some
//! normal control-flow transitions by rejecting that initializer with a fixed
//! message, so a rejection is not necessarily a failure.
//!
//! The string match is confined to [`classify_failure`]; everything above it
//! works with [`FailureKind`] and [`InitOutcome`].

use std::future::Future;

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

#[cfg(all(test, feature = "csr", target_arch = "wasm32"))]
#[path = "module_wasm_test.rs"]
mod module_wasm_test;

/// Message prefix the game module uses for rejections that are not errors.
pub const BENIGN_FAILURE_PREFIX: &str =
    "Using exceptions for control flow, don't mind me. This isn't actually an error!";

/// How the shell treats a rejected initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Control-flow signal from the module; swallowed.
    Benign,
    /// Genuine failure; re-raised to the page.
    Fatal,
}

/// Settled result of the module initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Ready,
    Failed(FailureKind),
}

/// Failure value produced by a game module initializer.
pub trait InitFailure {
    /// Human-readable message, if the failure carries one.
    fn message(&self) -> Option<String>;
}

impl InitFailure for String {
    fn message(&self) -> Option<String> {
        Some(self.clone())
    }
}

/// An externally compiled game with an asynchronous initializer.
pub trait GameModule {
    type Error: InitFailure;

    fn init(&self) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Classify a rejection by its message. Failures without a message are fatal.
pub fn classify_failure(message: Option<&str>) -> FailureKind {
    match message {
        Some(msg) if msg.starts_with(BENIGN_FAILURE_PREFIX) => FailureKind::Benign,
        _ => FailureKind::Fatal,
    }
}

#[cfg(feature = "csr")]
pub use compiled::CompiledGame;

#[cfg(feature = "csr")]
mod compiled {
    use wasm_bindgen::prelude::*;

    use super::{GameModule, InitFailure};

    // Output of the game's wasm-bindgen build; the default export is its init.
    #[wasm_bindgen(module = "/ld57wasm/ld57_depths.js")]
    extern "C" {
        #[wasm_bindgen(js_name = default, catch)]
        async fn init_game_module() -> Result<JsValue, JsValue>;
    }

    /// The compiled Depths game module.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct CompiledGame;

    impl GameModule for CompiledGame {
        type Error = JsValue;

        async fn init(&self) -> Result<(), JsValue> {
            init_game_module().await.map(|_| ())
        }
    }

    impl InitFailure for JsValue {
        fn message(&self) -> Option<String> {
            // Reflect.get throws on primitives, which then count as fatal.
            match js_sys::Reflect::get(self, &JsValue::from_str("message")) {
                Ok(value) => value.as_string(),
                Err(_) => None,
            }
        }
    }
}
