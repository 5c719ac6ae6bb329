//! Colored `[module]` log lines on stderr.
//!
//! stdout only ever carries rendered markup or admin HTML, so it can be piped
//! into a template. `debug!` lines appear with `--verbose`.
//!
//! ```ignore
//! log!("store"; "removed {} options", count);
//! debug!("save"; "document {}: {:?}", doc, outcome);
//! ```

use owo_colors::{OwoColorize, Style};
use std::fmt;
use std::io::{Write, stderr};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {
        $crate::logger::write_line($module, format_args!($($arg)*))
    };
}

/// Like [`log!`], printed only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::write_line($module, format_args!($($arg)*))
        }
    };
}

pub fn write_line(module: &str, message: fmt::Arguments<'_>) {
    let tag = format!("[{module}]");
    writeln!(stderr().lock(), "{} {}", tag.style(style_for(module)), message).ok();
}

/// Output-producing modules are blue, modules that write the store green.
fn style_for(module: &str) -> Style {
    let style = Style::new().bold();
    match module {
        "render" | "inject" | "schema" => style.bright_blue(),
        "store" | "save" | "settings" => style.bright_green(),
        "error" => style.bright_red(),
        _ => style.bright_yellow(),
    }
}
