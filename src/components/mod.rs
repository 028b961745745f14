//! UI components mounted by the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `game_view` owns the score overlay; `game_canvas` renders the drawing
//! surface the external game module looks up by id.

pub mod game_canvas;
pub mod game_view;
