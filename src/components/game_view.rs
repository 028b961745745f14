//! Game view: canvas surface plus the score overlay.
//!
//! DESIGN
//! ======
//! The score signal is created here and dies with the view. Label formatting
//! lives in plain helpers so it can be tested without a DOM.

use leptos::prelude::*;

use crate::components::game_canvas::GameCanvas;
use crate::state::score::ScoreState;

#[cfg(test)]
#[path = "game_view_test.rs"]
mod game_view_test;

pub fn score_heading(score: u64) -> String {
    format!("Score: {score}")
}

pub fn increment_label(score: u64) -> String {
    format!("count is {score}")
}

/// Apply one increment action to `score` and log the new value.
pub fn increment(score: RwSignal<ScoreState>) {
    score.update(|s| {
        let value = s.increment();
        log::info!("score incremented to {value}");
    });
}

#[component]
pub fn GameView() -> impl IntoView {
    let score = RwSignal::new(ScoreState::default());

    let heading = move || score_heading(score.get().value());
    let label = move || increment_label(score.get().value());

    view! {
        <div class="gamectr">
            <GameCanvas/>
            <div class="inner">
                <h2>{heading}</h2>
                <div class="card inner">
                    <button on:click=move |_| increment(score)>{label}</button>
                </div>
            </div>
        </div>
    }
}
