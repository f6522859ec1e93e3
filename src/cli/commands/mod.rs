//! CLI command handlers for `cgpacalc`.
//!
//! Each subcommand is implemented in its own submodule. Handlers print `✓`/`✗`
//! status lines and exit with status 1 on failure.

pub mod admin;
pub mod config;
pub mod curriculum;
pub mod import;
pub mod student;

use cgpa_calc::error;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

/// Report a failed command and exit with status 1
pub fn fail(message: &str) -> ! {
    error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}
