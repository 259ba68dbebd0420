//! Info command: currency name lookup.

use crate::cli::ui::{self, StyleType};
use crate::directory;

pub fn run(code: &str) {
    let display_code = code.trim().to_ascii_uppercase();
    match directory::name_of(code) {
        Some(name) => println!(
            "{} {}",
            ui::style_text(&format!("{display_code}:"), StyleType::ResultLabel),
            name
        ),
        None => println!(
            "{}",
            ui::style_text(
                &format!("Currency '{display_code}' not found in our database"),
                StyleType::Error
            )
        ),
    }
}
