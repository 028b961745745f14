//! # depths-shell
//!
//! Leptos + WASM browser host for the separately compiled Depths game module.
//!
//! The shell mounts a small UI tree (a fixed `<canvas>` the game renders into
//! and a score overlay), then starts the game module's asynchronous
//! initializer. Game simulation and rendering live entirely in that module;
//! this crate only owns the page surface, the score counter, and the startup
//! lifecycle.
//!
//! Browser-only code sits behind the `csr` feature so the pure logic builds
//! and tests natively.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod module;
pub mod state;

/// Page-load entry point.
///
/// Runs once per page: panic hook, configuration, logger, mount, optional
/// surface check, then the game module initializer. Returning `Err` throws
/// to the page's unhandled-error path.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();

    let (config, config_err) = match config::ShellConfig::from_location() {
        Ok(config) => (config, None),
        Err(err) => (config::ShellConfig::default(), Some(err)),
    };
    if console_log::init_with_level(config.log_level).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(err) = config_err {
        log::warn!("ignoring page configuration: {err}");
    }

    bootstrap::mount(&config).map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;

    if config.verify_surface {
        if let Err(err) = bootstrap::verify_surface() {
            log::warn!("canvas surface check failed: {err}");
        }
    }

    match bootstrap::bootstrap_module(module::CompiledGame) {
        Ok(()) => log::debug!("game module {}", bootstrap::bootstrap_phase()),
        Err(err) => log::warn!("game module not started: {err}"),
    }
    Ok(())
}
