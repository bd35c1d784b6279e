use crate::host::HostWindow;
use log::{debug, warn};

/// A rectangle given by its origin and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }
}

/// Translates `window` so that it lies inside `screen`.
///
/// # Behavior
/// - A window hanging past the right or bottom edge is shifted back so that
///   edge lines up with the screen edge.
/// - A window starting left of or above the screen is then clamped to the
///   screen's left/top edge. This runs after the right/bottom correction and
///   wins over it.
/// - The size is never changed. A window wider or taller than the whole
///   virtual screen therefore ends up aligned to the left/top edge and still
///   hangs off the right/bottom.
///
/// The result is a fixed point: clamping it again returns it unchanged.
pub fn clamp_to_screen(window: Bounds, screen: Bounds) -> Bounds {
    let mut clamped = window;

    if window.right() > screen.right() {
        clamped.left = screen.right().saturating_sub(window.width);
    }
    if window.bottom() > screen.bottom() {
        clamped.top = screen.bottom().saturating_sub(window.height);
    }
    if clamped.left < screen.left {
        clamped.left = screen.left;
    }
    if clamped.top < screen.top {
        clamped.top = screen.top;
    }

    clamped
}

/// Snaps a window that is partially off screen back onto the virtual screen.
///
/// Only windows in the normal show state are moved. A maximized window's
/// outer rectangle overhangs its monitor by the resize border, and a
/// minimized window has no on-screen rectangle to fix.
///
/// Failures to read or move the window are logged and otherwise ignored; the
/// window stays where it is.
pub fn ensure_visible<W: HostWindow + ?Sized>(window: &W) {
    if window.is_maximized() || window.is_minimized() {
        debug!("Window is maximized or minimized, leaving it in place");
        return;
    }

    let current = match window.bounds() {
        Ok(b) => b,
        Err(e) => {
            warn!("Failed to read window bounds: {}", e);
            return;
        }
    };
    let screen = window.virtual_screen();
    let target = clamp_to_screen(current, screen);

    if target == current {
        debug!("Window {:?} already inside virtual screen {:?}", current, screen);
        return;
    }

    match window.move_to(target.left, target.top) {
        Ok(()) => debug!(
            "Moved window from ({}, {}) to ({}, {}) to fit virtual screen {:?}",
            current.left, current.top, target.left, target.top, screen
        ),
        Err(e) => warn!("Failed to move window onto screen: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Bounds = Bounds::new(0, 0, 800, 600);

    #[test]
    fn shifts_back_from_bottom_right() {
        let out = clamp_to_screen(Bounds::new(1000, 1000, 200, 200), SCREEN);
        assert_eq!(out, Bounds::new(600, 400, 200, 200));
    }

    #[test]
    fn clamps_top_left() {
        let out = clamp_to_screen(Bounds::new(-50, -50, 100, 100), SCREEN);
        assert_eq!(out, Bounds::new(0, 0, 100, 100));
    }

    #[test]
    fn leaves_visible_window_alone() {
        let w = Bounds::new(10, 20, 300, 200);
        assert_eq!(clamp_to_screen(w, SCREEN), w);
    }

    #[test]
    fn oversized_window_keeps_top_left_edge() {
        let out = clamp_to_screen(Bounds::new(100, 100, 1000, 700), SCREEN);
        assert_eq!(out, Bounds::new(0, 0, 1000, 700));
    }

    #[test]
    fn honours_negative_virtual_screen_origin() {
        let screen = Bounds::new(-1920, 0, 3840, 1080);
        let out = clamp_to_screen(Bounds::new(-2000, 900, 400, 300), screen);
        assert_eq!(out, Bounds::new(-1920, 780, 400, 300));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let w = Bounds::new(i32::MAX - 10, i32::MAX - 10, 100, 100);
        assert_eq!(w.right(), i32::MAX);
        let out = clamp_to_screen(w, SCREEN);
        assert_eq!(out, Bounds::new(700, 500, 100, 100));

        let huge = Bounds::new(i32::MIN, 0, i32::MAX, 10);
        assert_eq!(clamp_to_screen(huge, SCREEN).left, 0);
    }

    #[test]
    fn clamping_is_idempotent() {
        let cases = [
            Bounds::new(1000, 1000, 200, 200),
            Bounds::new(-50, -50, 100, 100),
            Bounds::new(100, 100, 1000, 700),
            Bounds::new(700, -10, 200, 50),
            Bounds::new(5, 5, 10, 10),
        ];
        for w in cases {
            let once = clamp_to_screen(w, SCREEN);
            assert_eq!(clamp_to_screen(once, SCREEN), once, "input {:?}", w);
        }
    }
}
