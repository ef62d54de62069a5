/// Windowing operations the render loop depends on.
///
/// Bootstrap (library init, window creation, making the context current and
/// loading GL entry points) happens before a `Platform` value exists.
pub trait Platform {
    /// Close flag: set once the user or the OS asked the window to close.
    fn should_close(&self) -> bool;

    /// Presents the back buffer.
    fn swap_buffers(&mut self);

    /// Dispatches pending window events without blocking.
    fn poll_events(&mut self);

    /// Releases the window, context and windowing library.
    fn terminate(self)
    where
        Self: Sized;
}
