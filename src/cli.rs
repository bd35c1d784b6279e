use crate::settings::DEFAULT_SETTINGS_FILE;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(author, version, about = "Save and restore a window's placement", long_about = None)]
pub struct CliArgs {
    /// Store the target window's placement in the settings file.
    #[arg(long = "save", action = ArgAction::SetTrue)]
    pub save: bool,

    /// Restore the stored placement and snap the window onto the screen.
    #[arg(long = "restore", action = ArgAction::SetTrue)]
    pub restore: bool,

    /// Only move the window back inside the virtual screen.
    #[arg(long = "ensure-visible", action = ArgAction::SetTrue)]
    pub ensure_visible: bool,

    /// Print the target window's placement text.
    #[arg(long = "print", action = ArgAction::SetTrue)]
    pub print: bool,

    /// Placement text to restore instead of the stored one.
    #[arg(long = "placement")]
    pub placement: Option<String>,

    /// Window handle, decimal or 0x-prefixed hex. Defaults to the foreground window.
    #[arg(long = "hwnd", value_parser = parse_handle)]
    pub hwnd: Option<isize>,

    #[arg(long = "settings", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: String,
}

/// Parses a window handle given as decimal or `0x` hex.
pub fn parse_handle(value: &str) -> Result<isize, String> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => isize::from_str_radix(hex, 16),
        None => value.parse::<isize>(),
    };
    parsed.map_err(|e| format!("invalid window handle '{}': {}", value, e))
}
