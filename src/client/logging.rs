//! Routes log output and panics to the browser console.
//!
//! `tracing` events reach the console through its `log` feature.

use crate::common::CONFIG;
use log::Level;

pub fn init() {
    console_error_panic_hook::set_once();

    let level = console_level(&CONFIG.log_filter);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logging already initialized: {err}").into());
    }
}

/// Picks the console level out of an env-filter style string such as
/// `warn,qe_web=debug`. The crate's own directive wins over a bare default.
fn console_level(filter: &str) -> Level {
    let mut default = None;

    for directive in filter.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some(("qe_web", level)) => {
                if let Ok(level) = level.parse() {
                    return level;
                }
            }
            Some(_) => {}
            None => default = directive.parse().ok().or(default),
        }
    }

    default.unwrap_or(Level::Info)
}
