use crate::input::Key;

/// What the frame loop needs from a window with a current GL context.
pub trait Window {
    /// Drains pending platform events. A quit request sets the close latch.
    fn poll_events(&mut self);

    /// Presents the back buffer.
    fn swap_buffers(&mut self);

    fn is_key_down(&self, key: Key) -> bool;

    /// Once true, stays true for the lifetime of the window.
    fn should_close(&self) -> bool;

    fn request_close(&mut self);
}
