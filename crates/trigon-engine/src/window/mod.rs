//! Window + GL context bootstrap.
//!
//! Owns the `winit` EventLoop and Window together with the `glutin` surface
//! and context, and exposes them to the render loop through `Platform`.

mod config;
mod error;
mod platform;
mod runtime;

pub use config::WindowConfig;
pub use error::BootstrapError;
pub use platform::Platform;
pub use runtime::WindowRuntime;
