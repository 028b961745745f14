//! Drawing surface handed to the external game module.
//!
//! The module finds this element by id once its initializer runs and renders
//! into it; the shell never draws here itself.

use leptos::prelude::*;

use crate::config::CANVAS_SURFACE;

/// Fixed-size `<canvas>` at the id the game module expects.
#[component]
pub fn GameCanvas() -> impl IntoView {
    view! {
        <canvas
            id={CANVAS_SURFACE.id}
            class={CANVAS_SURFACE.class}
            width={CANVAS_SURFACE.width.to_string()}
            height={CANVAS_SURFACE.height.to_string()}
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
