//! Browser console logging.
//!
//! `tracing` events are forwarded to the `log` facade (no subscriber is
//! installed in the browser) and printed by `console_log`.

use std::str::FromStr;

use log::LevelFilter;

/// Install the panic hook and the console logger. Safe to call repeatedly.
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Trace);
    set_level("info");
}

/// Change the maximum level at runtime. Unknown names fall back to `info`.
pub fn set_level(level: &str) {
    log::set_max_level(level_filter(level));
}

fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}
