use winit::dpi::LogicalSize;

/// Window/context configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    /// Requested core-profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            size: LogicalSize::new(640.0, 480.0),
            gl_version: (3, 3),
        }
    }
}
