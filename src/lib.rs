//! Persist and restore the placement of a desktop window across sessions.
//!
//! Typical use from a host application:
//! - when the window handle becomes available, call
//!   [`restore_window_placement`] with the text saved last time and then
//!   [`ensure_visible`];
//! - before the window is destroyed, store the text returned by
//!   [`placement_string`].

pub mod cli;
pub mod codec;
pub mod error;
pub mod host;
#[cfg(target_os = "windows")]
pub mod native;
pub mod placement;
pub mod restore;
pub mod settings;
pub mod visibility;

pub use codec::{decode_placement, encode_placement, parse_placement, placement_string};
pub use error::PlacementError;
pub use host::HostWindow;
pub use placement::{Point, Rect, WindowPlacement, NATIVE_RECORD_SIZE};
pub use restore::{restore_window_placement, sanitize};
pub use visibility::{clamp_to_screen, ensure_visible, Bounds};
