//! Page bootstrap: mount the UI tree and start the game module.
//!
//! ARCHITECTURE
//! ============
//! Mounting is synchronous, so the canvas is in the document before the
//! module initializer's continuation can run. The initializer is not awaited
//! by the mount and does not await it; the two proceed independently.
//!
//! [`ModuleBootstrap`] holds the pure lifecycle logic and is driven by tests
//! with scripted modules. The `csr` functions bind it to the real document and
//! the compiled module.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::config::SurfaceSpec;
use crate::module::{FailureKind, GameModule, InitFailure, InitOutcome, classify_failure};
use crate::state::lifecycle::{BootPhase, LifecycleError, ModuleLifecycle};

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

#[cfg(all(test, feature = "csr", target_arch = "wasm32"))]
#[path = "bootstrap_wasm_test.rs"]
mod bootstrap_wasm_test;

/// Failures mounting the shell or checking its canvas surface.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("no document available")]
    NoDocument,
    #[error("root container #{id} not found")]
    RootMissing { id: String },
    #[error("root container #{id} is not an HTML element")]
    RootNotHtml { id: String },
    #[error("invalid selector: {selector}")]
    InvalidSelector { selector: String },
    #[error("element #{id} is not a canvas")]
    SurfaceNotCanvas { id: String },
    #[error("expected exactly one {selector}, found {found}")]
    SurfaceCount { selector: String, found: u32 },
    #[error("canvas is {}x{}, expected {}x{}", found.0, found.1, expected.0, expected.1)]
    SurfaceSize { expected: (u32, u32), found: (u32, u32) },
}

/// Check what the document holds at the canvas selector against `spec`.
///
/// `size` is `None` when the element at the id is not a canvas.
pub fn check_surface(spec: &SurfaceSpec, found: u32, size: Option<(u32, u32)>) -> Result<(), ShellError> {
    if found != 1 {
        return Err(ShellError::SurfaceCount { selector: spec.selector(), found });
    }
    let Some(size) = size else {
        return Err(ShellError::SurfaceNotCanvas { id: spec.id.to_owned() });
    };
    if size != spec.size() {
        return Err(ShellError::SurfaceSize { expected: spec.size(), found: size });
    }
    Ok(())
}

/// Single-start driver for a game module initializer.
#[derive(Clone, Debug, Default)]
pub struct ModuleBootstrap {
    lifecycle: Rc<RefCell<ModuleLifecycle>>,
}

impl ModuleBootstrap {
    /// Current lifecycle phase, shared by all clones.
    pub fn phase(&self) -> BootPhase {
        self.lifecycle.borrow().phase()
    }

    /// Start `module` and return the future that settles it.
    ///
    /// The lifecycle moves to `Initializing` before this returns, so a second
    /// call fails without touching the module. The future resolves to the
    /// terminal phase for success and benign failures, and hands back the
    /// module's own failure value when it is fatal.
    pub fn start<M>(&self, module: M) -> Result<impl Future<Output = Result<BootPhase, M::Error>> + use<M>, LifecycleError>
    where
        M: GameModule,
    {
        self.lifecycle.borrow_mut().begin()?;
        let lifecycle = Rc::clone(&self.lifecycle);

        Ok(async move {
            match module.init().await {
                Ok(()) => Ok(lifecycle.borrow_mut().settle(InitOutcome::Ready)),
                Err(failure) => {
                    let message = failure.message();
                    let kind = classify_failure(message.as_deref());
                    let phase = lifecycle.borrow_mut().settle(InitOutcome::Failed(kind));
                    match kind {
                        FailureKind::Benign => Ok(phase),
                        FailureKind::Fatal => {
                            log::error!(
                                "game module initialization failed: {}",
                                message.as_deref().unwrap_or("<no message>")
                            );
                            Err(failure)
                        }
                    }
                }
            }
        })
    }
}

#[cfg(feature = "csr")]
pub use browser::{bootstrap_module, bootstrap_phase, mount, verify_surface};

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};

    use super::{ModuleBootstrap, ShellError, check_surface};
    use crate::app::App;
    use crate::config::{CANVAS_SURFACE, ShellConfig};
    use crate::module::GameModule;
    use crate::state::lifecycle::{BootPhase, LifecycleError};

    thread_local! {
        static MODULE_BOOTSTRAP: ModuleBootstrap = ModuleBootstrap::default();
    }

    fn document() -> Result<web_sys::Document, ShellError> {
        web_sys::window().and_then(|w| w.document()).ok_or(ShellError::NoDocument)
    }

    /// Render [`App`] into the page's root container.
    pub fn mount(config: &ShellConfig) -> Result<(), ShellError> {
        let document = document()?;
        let root = document
            .get_element_by_id(config.root_id)
            .ok_or_else(|| ShellError::RootMissing { id: config.root_id.to_owned() })?;
        let root = root
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| ShellError::RootNotHtml { id: config.root_id.to_owned() })?;

        // The tree lives for the whole page.
        leptos::mount::mount_to(root, App).forget();
        log::debug!("mounted shell into #{}", config.root_id);
        Ok(())
    }

    /// Development check that the mounted canvas honors the module contract.
    pub fn verify_surface() -> Result<(), ShellError> {
        let document = document()?;
        let selector = CANVAS_SURFACE.selector();
        let found = document
            .query_selector_all(&selector)
            .map_err(|_| ShellError::InvalidSelector { selector: selector.clone() })?
            .length();
        let size = document
            .get_element_by_id(CANVAS_SURFACE.id)
            .and_then(|el| match el.dyn_into::<web_sys::HtmlCanvasElement>() {
                Ok(canvas) => Some((canvas.width(), canvas.height())),
                Err(_) => None,
            });
        check_surface(&CANVAS_SURFACE, found, size)
    }

    /// Start the game module once per page without waiting for it.
    ///
    /// Fatal failures reject an unobserved promise so they surface on the
    /// page's unhandled-rejection path with the module's original value.
    pub fn bootstrap_module<M>(module: M) -> Result<(), LifecycleError>
    where
        M: GameModule + 'static,
        M::Error: Into<JsValue> + 'static,
    {
        let init = MODULE_BOOTSTRAP.with(|boot| boot.start(module))?;
        let settled = wasm_bindgen_futures::future_to_promise(async move {
            init.await.map(|_| JsValue::UNDEFINED).map_err(Into::into)
        });
        drop(settled);
        Ok(())
    }

    /// Lifecycle phase of this page's game module.
    pub fn bootstrap_phase() -> BootPhase {
        MODULE_BOOTSTRAP.with(ModuleBootstrap::phase)
    }
}
