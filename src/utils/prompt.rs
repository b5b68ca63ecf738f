//! Interactive stdin prompts.

use crate::ui::messages::warning;
use std::io::{self, IsTerminal, Write};

/// Ask a yes/no confirmation from the user. Anything but y/yes is a no.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Read the dashboard password. Input is hidden on a terminal; piped
/// stdin is read as a plain line.
pub fn read_password() -> io::Result<String> {
    if io::stdin().is_terminal() {
        return rpassword::prompt_password("Enter Password: ");
    }

    print!("Enter Password: ");
    io::stdout().flush()?;

    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}
