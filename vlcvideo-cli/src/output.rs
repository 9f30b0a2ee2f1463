// vlcvideo-cli/src/output.rs
//
// Terminal output helpers. Colors are used only when stdout supports them.

use owo_colors::OwoColorize;
use std::fmt::Display;
use vlcvideo_core::HostValue;

use crate::error::CliResult;

fn colors_enabled() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(40);
    if colors_enabled() {
        println!("{}", line.bright_blue());
        println!(" {}", text.bold());
        println!("{}", line.bright_blue());
    } else {
        println!("{}", line);
        println!(" {}", text);
        println!("{}", line);
    }
}

/// Print a section title under a heading
pub fn print_section(text: &str) {
    if colors_enabled() {
        println!("\n{}", text.bold().underline());
    } else {
        println!("\n{}", text);
    }
}

/// Print a label/value line, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    if colors_enabled() {
        println!("{}: {}", label.bright_cyan(), value);
    } else {
        println!("{}: {}", label, value);
    }
}

/// Print a host value as plain text or JSON.
pub fn print_value(value: &HostValue, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

/// Print a host value as indented JSON.
pub fn print_value_pretty(value: &HostValue) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
