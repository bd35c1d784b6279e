use crate::error::PlacementError;
use crate::host::HostWindow;
use crate::placement::WindowPlacement;
use log::{debug, warn};

/// Encodes a placement record as the persisted JSON text.
pub fn encode_placement(placement: &WindowPlacement) -> Result<String, PlacementError> {
    Ok(serde_json::to_string(placement)?)
}

/// Strictly parses placement text.
///
/// Missing keys fall back to their default values and unknown keys are
/// ignored, but malformed JSON or a value of the wrong type is an error.
pub fn parse_placement(text: &str) -> Result<WindowPlacement, PlacementError> {
    Ok(serde_json::from_str::<WindowPlacement>(text)?)
}

/// Decodes stored placement text, never failing.
///
/// # Behavior
/// - `None`, an empty string or whitespace-only text yields
///   [`WindowPlacement::default`].
/// - Text that [`parse_placement`] rejects also yields the default record.
///   The parse error is logged at `warn` and dropped, so corrupted settings
///   can never stop a window from opening.
pub fn decode_placement(text: Option<&str>) -> WindowPlacement {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            debug!("No stored window placement, using defaults");
            return WindowPlacement::default();
        }
    };

    match parse_placement(text) {
        Ok(placement) => placement,
        Err(e) => {
            warn!("Discarding unreadable window placement: {}", e);
            WindowPlacement::default()
        }
    }
}

/// Reads the window's current placement and returns it as persisted text.
///
/// Call this right before the window is destroyed and store the returned
/// string wherever the application keeps its settings. A failure to read
/// the native placement is returned to the caller unchanged.
pub fn placement_string<W: HostWindow + ?Sized>(window: &W) -> Result<String, PlacementError> {
    let placement = window.placement()?;
    encode_placement(&placement)
}
