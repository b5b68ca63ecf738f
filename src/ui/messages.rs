//! User facing status lines: info/success/warning on stdout, errors on stderr.

use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", Style::new().bold().fg(colour).paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", styled(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(Colour::Red, ICON_ERR, msg));
}
