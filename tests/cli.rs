use clap::Parser;
use window_placement::cli::{parse_handle, CliArgs};

#[test]
fn parses_action_flags() {
    let args = CliArgs::parse_from(["prog", "--restore", "--ensure-visible"]);
    assert!(args.restore);
    assert!(args.ensure_visible);
    assert!(!args.save);
    assert!(!args.print);
}

#[test]
fn parses_save_and_print() {
    let args = CliArgs::parse_from(["prog", "--save", "--print"]);
    assert!(args.save);
    assert!(args.print);
}

#[test]
fn settings_default() {
    let args = CliArgs::parse_from(["prog", "--save"]);
    assert_eq!(args.settings, "settings.json");
    assert_eq!(args.hwnd, None);
    assert_eq!(args.placement, None);
}

#[test]
fn settings_custom() {
    let args = CliArgs::parse_from(["prog", "--save", "--settings", "app.json"]);
    assert_eq!(args.settings, "app.json");
}

#[test]
fn parses_decimal_hwnd() {
    let args = CliArgs::parse_from(["prog", "--print", "--hwnd", "65804"]);
    assert_eq!(args.hwnd, Some(65804));
}

#[test]
fn parses_hex_hwnd() {
    let args = CliArgs::parse_from(["prog", "--print", "--hwnd", "0x1010C"]);
    assert_eq!(args.hwnd, Some(0x1010C));
}

#[test]
fn rejects_bad_hwnd() {
    assert!(parse_handle("window").is_err());
    assert!(CliArgs::try_parse_from(["prog", "--hwnd", "0xZZ"]).is_err());
}

#[test]
fn parses_placement_text() {
    let args = CliArgs::parse_from(["prog", "--restore", "--placement", "{\"showCmd\":3}"]);
    assert_eq!(args.placement.as_deref(), Some("{\"showCmd\":3}"));
}
