//! Logger setup for the binary

use log::LevelFilter;

/// Level for a run: silent under the TUI, `Debug` when verbose, else `Warn`
#[must_use]
pub const fn level_for(verbose: bool, tui: bool) -> LevelFilter {
    if tui {
        LevelFilter::Off
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize `env_logger` at `level`
///
/// `RUST_LOG` overrides the level unless logging is off, since stderr output
/// would draw over the alternate screen. Calling it again after a logger is
/// installed is a no-op.
pub fn init_logger(level: LevelFilter) {

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if level != LevelFilter::Off {
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
