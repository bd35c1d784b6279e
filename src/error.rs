use std::error::Error;
use std::fmt;

/// Errors raised while reading, writing or applying a window placement.
#[derive(Debug)]
pub enum PlacementError {
    /// A Win32 call failed.
    #[cfg(target_os = "windows")]
    Native(windows::core::Error),
    /// The placement text could not be encoded or decoded.
    Json(serde_json::Error),
    /// The handle does not refer to an existing window.
    InvalidHandle(isize),
    /// Reading or writing the settings file failed.
    Io(std::io::Error),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(target_os = "windows")]
            PlacementError::Native(err) => write!(f, "Windows API error: {}", err),
            PlacementError::Json(err) => write!(f, "Placement text error: {}", err),
            PlacementError::InvalidHandle(hwnd) => {
                write!(f, "Invalid window handle: 0x{:X}", hwnd)
            }
            PlacementError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            #[cfg(target_os = "windows")]
            PlacementError::Native(err) => Some(err),
            PlacementError::Json(err) => Some(err),
            PlacementError::InvalidHandle(_) => None,
            PlacementError::Io(err) => Some(err),
        }
    }
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for PlacementError {
    fn from(err: windows::core::Error) -> Self {
        PlacementError::Native(err)
    }
}

impl From<serde_json::Error> for PlacementError {
    fn from(err: serde_json::Error) -> Self {
        PlacementError::Json(err)
    }
}

impl From<std::io::Error> for PlacementError {
    fn from(err: std::io::Error) -> Self {
        PlacementError::Io(err)
    }
}
