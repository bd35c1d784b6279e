use serde::{Deserialize, Serialize};

/// `showCmd` value for a window shown in its normal (restored) state.
pub const SHOW_NORMAL: i32 = 1;
/// `showCmd` value for a minimized window.
pub const SHOW_MINIMIZED: i32 = 2;
/// `showCmd` value for a maximized window.
pub const SHOW_MAXIMIZED: i32 = 3;

/// Byte size of the native placement record. The OS rejects a record whose
/// `length` does not match this value.
pub const NATIVE_RECORD_SIZE: i32 = std::mem::size_of::<WindowPlacement>() as i32;

/// A screen coordinate, laid out like the Win32 `POINT`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    #[serde(alias = "X")]
    pub x: i32,
    #[serde(alias = "Y")]
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A screen rectangle given by its edges, laid out like the Win32 `RECT`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    #[serde(alias = "Left")]
    pub left: i32,
    #[serde(alias = "Top")]
    pub top: i32,
    #[serde(alias = "Right")]
    pub right: i32,
    #[serde(alias = "Bottom")]
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Position, size and show state of a top-level window.
///
/// The field order and widths match the Win32 `WINDOWPLACEMENT` record
/// exactly, so a value can be handed to `SetWindowPlacement` after a plain
/// field-for-field conversion. The serialized keys (`length`, `flags`,
/// `showCmd`, `minPosition`, `maxPosition`, `normalPosition`) are the
/// persisted text format and must not change.
///
/// Only `normal_position` and `show_cmd` carry application state across
/// sessions. The other fields are either rewritten before the record is
/// applied or taken from the live window (see [`crate::restore::sanitize`]).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPlacement {
    pub length: i32,
    pub flags: i32,
    #[serde(rename = "showCmd")]
    pub show_cmd: i32,
    #[serde(rename = "minPosition")]
    pub min_position: Point,
    #[serde(rename = "maxPosition")]
    pub max_position: Point,
    #[serde(rename = "normalPosition")]
    pub normal_position: Rect,
}

impl Default for WindowPlacement {
    fn default() -> Self {
        Self {
            length: 0,
            flags: 0,
            show_cmd: SHOW_NORMAL,
            min_position: Point::new(-32000, -32000),
            max_position: Point::new(-1, -1),
            normal_position: Rect::new(100, 100, 700, 900),
        }
    }
}

impl WindowPlacement {
    pub fn is_minimized(&self) -> bool {
        self.show_cmd == SHOW_MINIMIZED
    }
}
