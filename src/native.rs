//! Win32 implementation of [`HostWindow`].
//!
//! The placement record is converted field by field into the `windows`
//! crate's `WINDOWPLACEMENT`; both have the same layout.

use crate::error::PlacementError;
use crate::host::HostWindow;
use crate::placement::{Point, Rect, WindowPlacement};
use crate::visibility::Bounds;
use log::{info, warn};
use std::ffi::c_void;
use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::UI::WindowsAndMessaging::*;

/// A top-level window identified by its native handle.
#[derive(Debug, Clone, Copy)]
pub struct Win32Window {
    hwnd: HWND,
}

impl Win32Window {
    /// Wraps `hwnd` after checking that it refers to an existing window.
    pub fn from_raw(hwnd: isize) -> Result<Self, PlacementError> {
        let handle = HWND(hwnd as *mut c_void);
        if unsafe { IsWindow(handle).as_bool() } {
            Ok(Self { hwnd: handle })
        } else {
            Err(PlacementError::InvalidHandle(hwnd))
        }
    }

    /// The current foreground window, if there is one.
    pub fn foreground() -> Option<Self> {
        unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.0.is_null() {
                warn!("No active window detected.");
                None
            } else {
                let mut buffer = [0u16; 256];
                let length = GetWindowTextW(hwnd, &mut buffer);
                let title = String::from_utf16_lossy(&buffer[..length as usize]);
                info!("Active window detected: '{}'.", title);
                Some(Self { hwnd })
            }
        }
    }

    pub fn raw(&self) -> isize {
        self.hwnd.0 as isize
    }

    fn ensure_valid(&self) -> Result<(), PlacementError> {
        if unsafe { IsWindow(self.hwnd).as_bool() } {
            Ok(())
        } else {
            Err(PlacementError::InvalidHandle(self.raw()))
        }
    }
}

impl HostWindow for Win32Window {
    fn placement(&self) -> Result<WindowPlacement, PlacementError> {
        let mut native = WINDOWPLACEMENT {
            length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowPlacement(self.hwnd, &mut native)? };
        Ok(from_native(&native))
    }

    fn set_placement(&self, placement: &WindowPlacement) -> Result<(), PlacementError> {
        self.ensure_valid()?;
        let native = to_native(placement);
        unsafe { SetWindowPlacement(self.hwnd, &native)? };
        Ok(())
    }

    /// Outer window rectangle from `GetWindowRect`.
    fn bounds(&self) -> Result<Bounds, PlacementError> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(self.hwnd, &mut rect)? };
        Ok(Bounds::new(
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
        ))
    }

    /// Moves the window with `SetWindowPos`, keeping its size, Z-order and
    /// activation state.
    fn move_to(&self, left: i32, top: i32) -> Result<(), PlacementError> {
        self.ensure_valid()?;
        unsafe {
            SetWindowPos(
                self.hwnd,
                HWND_TOP,
                left,
                top,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )?;
        }
        info!(
            "Moved window (HWND: {:?}) to position ({}, {}).",
            self.hwnd.0, left, top
        );
        Ok(())
    }

    fn is_maximized(&self) -> bool {
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    fn is_minimized(&self) -> bool {
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    /// Virtual screen rectangle from `GetSystemMetrics`.
    fn virtual_screen(&self) -> Bounds {
        unsafe {
            Bounds::new(
                GetSystemMetrics(SM_XVIRTUALSCREEN),
                GetSystemMetrics(SM_YVIRTUALSCREEN),
                GetSystemMetrics(SM_CXVIRTUALSCREEN),
                GetSystemMetrics(SM_CYVIRTUALSCREEN),
            )
        }
    }
}

fn from_native(native: &WINDOWPLACEMENT) -> WindowPlacement {
    WindowPlacement {
        length: native.length as i32,
        flags: native.flags.0 as i32,
        show_cmd: native.showCmd as i32,
        min_position: Point::new(native.ptMinPosition.x, native.ptMinPosition.y),
        max_position: Point::new(native.ptMaxPosition.x, native.ptMaxPosition.y),
        normal_position: Rect::new(
            native.rcNormalPosition.left,
            native.rcNormalPosition.top,
            native.rcNormalPosition.right,
            native.rcNormalPosition.bottom,
        ),
    }
}

fn to_native(placement: &WindowPlacement) -> WINDOWPLACEMENT {
    WINDOWPLACEMENT {
        length: placement.length as u32,
        flags: WINDOWPLACEMENT_FLAGS(placement.flags as u32),
        showCmd: placement.show_cmd as u32,
        ptMinPosition: POINT {
            x: placement.min_position.x,
            y: placement.min_position.y,
        },
        ptMaxPosition: POINT {
            x: placement.max_position.x,
            y: placement.max_position.y,
        },
        rcNormalPosition: RECT {
            left: placement.normal_position.left,
            top: placement.normal_position.top,
            right: placement.normal_position.right,
            bottom: placement.normal_position.bottom,
        },
    }
}
