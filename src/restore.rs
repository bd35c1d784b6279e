use crate::codec::decode_placement;
use crate::host::HostWindow;
use crate::placement::{WindowPlacement, NATIVE_RECORD_SIZE, SHOW_NORMAL};
use log::{debug, warn};

/// Prepares a stored placement for `SetWindowPlacement`.
///
/// # Behavior
/// - `length` is set to the native record size and `flags` to zero.
/// - A minimized show state becomes normal; windows never reopen minimized.
/// - `min_position` and `max_position` are copied from `current`, the live
///   window's placement. They depend on the present display setup, not on
///   anything the previous session should carry over.
/// - `normal_position` and any other show state are kept as stored.
pub fn sanitize(stored: WindowPlacement, current: &WindowPlacement) -> WindowPlacement {
    let mut placement = stored;
    placement.length = NATIVE_RECORD_SIZE;
    placement.flags = 0;
    if placement.is_minimized() {
        placement.show_cmd = SHOW_NORMAL;
    }
    placement.min_position = current.min_position;
    placement.max_position = current.max_position;
    placement
}

/// Restores a window to the placement saved in `stored`.
///
/// The stored text is decoded with [`decode_placement`] (so an empty or
/// corrupt value restores the default placement), sanitized against the
/// window's live placement and applied. If the monitor the window was closed
/// on is gone, the OS moves the window onto a visible monitor itself.
///
/// Nothing is returned: when the live placement cannot be read or the OS
/// refuses the new one, the failure is logged and the window is left as it
/// was.
pub fn restore_window_placement<W: HostWindow + ?Sized>(window: &W, stored: Option<&str>) {
    let current = match window.placement() {
        Ok(p) => p,
        Err(e) => {
            warn!("Failed to read current window placement: {}", e);
            return;
        }
    };

    let placement = sanitize(decode_placement(stored), &current);

    match window.set_placement(&placement) {
        Ok(()) => debug!("Applied window placement {:?}", placement),
        Err(e) => warn!("Failed to apply window placement: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{Point, Rect, SHOW_MAXIMIZED, SHOW_MINIMIZED};

    fn current() -> WindowPlacement {
        WindowPlacement {
            length: NATIVE_RECORD_SIZE,
            flags: 0,
            show_cmd: SHOW_NORMAL,
            min_position: Point::new(5, 5),
            max_position: Point::new(9, 9),
            normal_position: Rect::new(0, 0, 10, 10),
        }
    }

    #[test]
    fn sanitize_overrides_volatile_fields() {
        let stored = WindowPlacement {
            length: 7,
            flags: 3,
            show_cmd: SHOW_MINIMIZED,
            min_position: Point::new(1, 1),
            max_position: Point::new(2, 2),
            normal_position: Rect::new(20, 30, 620, 530),
        };
        let out = sanitize(stored, &current());
        assert_eq!(out.length, NATIVE_RECORD_SIZE);
        assert_eq!(out.flags, 0);
        assert_eq!(out.show_cmd, SHOW_NORMAL);
        assert_eq!(out.min_position, Point::new(5, 5));
        assert_eq!(out.max_position, Point::new(9, 9));
        assert_eq!(out.normal_position, Rect::new(20, 30, 620, 530));
    }

    #[test]
    fn sanitize_keeps_maximized() {
        let stored = WindowPlacement {
            show_cmd: SHOW_MAXIMIZED,
            ..WindowPlacement::default()
        };
        assert_eq!(sanitize(stored, &current()).show_cmd, SHOW_MAXIMIZED);
    }

    #[test]
    fn sanitize_default_record() {
        let out = sanitize(WindowPlacement::default(), &current());
        assert_eq!(out.normal_position, Rect::new(100, 100, 700, 900));
        assert_eq!(out.length, 44);
    }
}
