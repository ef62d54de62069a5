//! Top-level control flow.
//!
//! `run` opens the window, builds the triangle scene, drives the render loop
//! until the window closes, then tears everything down. `run_scene` is the
//! same sequence over any `Platform`/`GlApi` pair.

mod render_loop;
mod run;
mod scene;

#[cfg(test)]
mod mock;

pub use render_loop::{run_until_closed, LoopState};
pub use run::{run, run_scene, RunError};
pub use scene::TriangleScene;
