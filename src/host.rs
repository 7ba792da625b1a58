//! Host collaborators: the window hosting the canvas and the display clock.

/// The window and the canvas element inside it.
pub trait Surface {
    /// Inner size of the hosting window, in CSS pixels.
    fn window_size(&self) -> (u32, u32);

    /// Set the canvas drawing-buffer size in pixels.
    fn resize_canvas(&mut self, width: u32, height: u32);

    /// Position the canvas inside the window, in CSS pixels.
    fn place_canvas(&mut self, left: f64, top: f64);
}

/// Capability to run the frame callback once more before the next repaint.
pub trait Scheduler {
    fn request_frame(&mut self);
}
