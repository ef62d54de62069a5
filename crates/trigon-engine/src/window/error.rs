use std::fmt;

/// Fatal failure before the render loop starts.
#[derive(Debug)]
pub enum BootstrapError {
    /// The windowing library could not be initialized.
    Init(anyhow::Error),
    /// Window, GL config, context or surface creation failed.
    Window(anyhow::Error),
    /// GL entry points could not be loaded for the created context.
    Loader(String),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Init(e) => write!(f, "windowing init error: {e:#}"),
            BootstrapError::Window(e) => write!(f, "window creation error: {e:#}"),
            BootstrapError::Loader(reason) => write!(f, "GL loader error: {reason}"),
        }
    }
}

impl std::error::Error for BootstrapError {}
