use crate::error::PlacementError;
use crate::placement::WindowPlacement;
use crate::visibility::Bounds;

/// The window operations placement persistence needs from its host.
///
/// [`crate::native::Win32Window`] is the real implementation. Everything in
/// this crate is written against the trait so the restore and clamping logic
/// can run without a desktop session.
pub trait HostWindow {
    /// Reads the window's current native placement record.
    fn placement(&self) -> Result<WindowPlacement, PlacementError>;

    /// Hands a placement record to the OS for this window.
    fn set_placement(&self, placement: &WindowPlacement) -> Result<(), PlacementError>;

    /// Current outer position and size of the window.
    fn bounds(&self) -> Result<Bounds, PlacementError>;

    /// Moves the window without resizing it.
    fn move_to(&self, left: i32, top: i32) -> Result<(), PlacementError>;

    /// Whether the window is currently maximized.
    fn is_maximized(&self) -> bool;

    /// Whether the window is currently minimized.
    fn is_minimized(&self) -> bool;

    /// Bounding rectangle of all monitors together.
    fn virtual_screen(&self) -> Bounds;
}
