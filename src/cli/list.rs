//! List command: table of well-known currencies.

use crate::cli::ui::{self, StyleType};
use crate::directory;

pub fn run() {
    println!(
        "{}",
        ui::style_text("Available Currencies", StyleType::Title)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Currency")]);

    for (code, name) in directory::all() {
        table.add_row(vec![code, name]);
    }

    println!("{table}");
    println!(
        "{}",
        ui::style_text(
            "Other codes may work too if the rate provider knows them.",
            StyleType::Subtle
        )
    );
}
