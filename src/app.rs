//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::game_view::GameView;
use crate::config::PAGE_TITLE;

/// Root component mounted into the page's root container.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <GameView/>
    }
}
