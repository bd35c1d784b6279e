use clap::Parser;
use log::{info, warn};
use window_placement::cli::CliArgs;
use window_placement::settings::load_settings_from;

/// Entry point for the `window-placement` command-line host.
///
/// # Behavior
/// - Initializes file logging at the level stored in the settings file.
/// - Resolves the target window (`--hwnd`, or the foreground window).
/// - Runs the requested actions in lifecycle order: `--print`, `--save`,
///   `--restore`, `--ensure-visible`.
///
/// # Notes
/// - Restoring and clamping never fail the process; problems are only logged.
fn main() {
    let args = CliArgs::parse();

    ensure_logging_initialized(&args.settings);

    info!("Starting window-placement...");

    if !(args.print || args.save || args.restore || args.ensure_visible) {
        warn!("No action requested");
        eprintln!("Nothing to do: pass --print, --save, --restore or --ensure-visible");
        return;
    }

    run(&args);
}

#[cfg(target_os = "windows")]
fn run(args: &CliArgs) {
    use window_placement::native::Win32Window;
    use window_placement::settings::save_settings_to;
    use window_placement::{ensure_visible, placement_string, restore_window_placement};

    let window = match args.hwnd {
        Some(hwnd) => match Win32Window::from_raw(hwnd) {
            Ok(w) => w,
            Err(e) => {
                warn!("{}", e);
                eprintln!("{}", e);
                return;
            }
        },
        None => match Win32Window::foreground() {
            Some(w) => w,
            None => {
                eprintln!("No foreground window to operate on");
                return;
            }
        },
    };
    info!("Target window: 0x{:X}", window.raw());

    if args.print || args.save {
        match placement_string(&window) {
            Ok(text) => {
                if args.print {
                    println!("{}", text);
                }
                if args.save {
                    let mut settings = load_settings_from(&args.settings);
                    settings.window_placement = text;
                    match save_settings_to(&settings, &args.settings) {
                        Ok(()) => info!("Saved window placement to {}", args.settings),
                        Err(e) => {
                            warn!("Failed to save settings: {}", e);
                            eprintln!("Failed to save settings: {}", e);
                        }
                    }
                }
            }
            Err(e) => {
                warn!("Failed to read window placement: {}", e);
                eprintln!("Failed to read window placement: {}", e);
            }
        }
    }

    if args.restore {
        let stored = match &args.placement {
            Some(text) => text.clone(),
            None => load_settings_from(&args.settings).window_placement,
        };
        restore_window_placement(&window, Some(stored.as_str()));
        ensure_visible(&window);
        info!("Restored window placement");
    } else if args.ensure_visible {
        ensure_visible(&window);
    }
}

#[cfg(not(target_os = "windows"))]
fn run(_args: &CliArgs) {
    warn!("window placement is only available on Windows");
    eprintln!("window placement is only available on Windows");
}

/// Initializes `log4rs` with a file appender writing to `window_placement.log`.
///
/// The level comes from the `log_level` entry of the settings file and
/// defaults to `info`. If the logger cannot be set up the program keeps
/// running without logging.
fn ensure_logging_initialized(settings_path: &str) {
    use log::LevelFilter;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    let settings = load_settings_from(settings_path);
    let level = match settings.log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    };

    let logfile = match FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} - {l} - {m}{n}")))
        .append(false)
        .build("window_placement.log")
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to create log file: {}", e);
            return;
        }
    };

    let config = match Config::builder()
        .appender(Appender::builder().build("file", Box::new(logfile)))
        .build(Root::builder().appender("file").build(level))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build log configuration: {}", e);
            return;
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
