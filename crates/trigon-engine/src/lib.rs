//! Trigon engine crate.
//!
//! Brings up an OpenGL 3.3 core context, uploads a single triangle and draws
//! it until the window is closed. The GL call surface and the windowing layer
//! sit behind small traits so the whole sequence can run headless in tests.

pub mod core;
pub mod geometry;
pub mod gl;
pub mod logging;
pub mod shader;
pub mod window;

pub use crate::core::{run, RunError};
