//! Conversion command: runs the converter and renders the result panel.

use anyhow::Result;

use crate::cli::ui::{self, StyleType};
use crate::convert::{ConversionRequest, ConversionResult, Converter};
use crate::directory;
use crate::rates::RateProvider;

pub async fn run(request: &ConversionRequest, provider: &dyn RateProvider) -> Result<()> {
    let converter = Converter::new(provider);

    let spinner = ui::new_fetch_spinner("Fetching exchange rates...");
    let result = converter.convert(request).await;
    spinner.finish_and_clear();

    display_result(&result?);
    Ok(())
}

fn display_result(result: &ConversionResult) {
    let from_name = directory::name_of(result.from.as_str()).unwrap_or("Unknown currency");
    let to_name = directory::name_of(result.to.as_str()).unwrap_or("Unknown currency");

    ui::print_separator();
    println!("{}", ui::style_text("Conversion Result", StyleType::Title));
    println!(
        "{} {:.2} {} ({})",
        ui::style_text("Amount:", StyleType::ResultLabel),
        result.amount,
        result.from,
        from_name
    );
    println!(
        "{} {} {} ({})",
        ui::style_text("Result:", StyleType::ResultLabel),
        ui::style_text(&format!("{:.2}", result.converted), StyleType::ResultValue),
        result.to,
        to_name
    );
    println!(
        "{}",
        ui::style_text(
            &format!("Rate: 1 {} = {:.4} {}", result.from, result.rate, result.to),
            StyleType::Subtle
        )
    );
    println!(
        "{}",
        ui::style_text(
            &format!("Time: {}", result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")),
            StyleType::Subtle
        )
    );
}
