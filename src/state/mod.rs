//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `score` is the only UI state; `lifecycle` tracks the game module's startup
//! and is deliberately not wired into any component.

pub mod lifecycle;
pub mod score;
