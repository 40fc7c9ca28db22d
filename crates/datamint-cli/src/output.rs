use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = if is_json() {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{s}");
    Ok(())
}

/// One colored status line on stderr (plain in JSON mode).
pub fn status(ok: bool, msg: &str) {
    if is_json() {
        let _ = writeln!(io::stderr(), "{msg}");
        return;
    }
    let mut err = StandardStream::stderr(ColorChoice::Auto);
    let color = if ok { Color::Green } else { Color::Red };
    let _ = err.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(err, "{msg}");
    let _ = err.reset();
}
