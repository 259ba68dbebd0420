//! Interactive shell: prompt for a command, run it, repeat.

use std::io::{self, Write};

use anyhow::Result;

use crate::cli::ui::{self, StyleType};
use crate::cli::{convert, info, list};
use crate::convert::ConversionRequest;
use crate::rates::RateProvider;

#[derive(Debug, PartialEq)]
pub enum ShellCommand {
    Convert,
    List,
    Info,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "convert" => ShellCommand::Convert,
            "list" => ShellCommand::List,
            "info" => ShellCommand::Info,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            "" => ShellCommand::Empty,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

pub async fn run(provider: &dyn RateProvider) -> Result<()> {
    println!(
        "{}",
        ui::style_text("Currency Converter", StyleType::Title)
    );
    println!("Convert between world currencies with live rates.");
    println!(
        "{}",
        ui::style_text(
            "Type 'convert' to start, 'help' for commands, 'quit' to exit.",
            StyleType::Subtle
        )
    );

    loop {
        // EOF on stdin ends the session like an explicit quit.
        let Some(line) = prompt("\nEnter command (or 'help'): ")? else {
            break;
        };

        match ShellCommand::parse(&line) {
            ShellCommand::Quit => {
                println!("Goodbye!");
                break;
            }
            ShellCommand::Help => print_help(),
            ShellCommand::List => list::run(),
            ShellCommand::Info => {
                let Some(code) = prompt("Enter currency code (e.g. USD): ")? else {
                    break;
                };
                info::run(&code);
            }
            ShellCommand::Convert => {
                if !run_conversion(provider).await? {
                    break;
                }
            }
            ShellCommand::Empty => {}
            ShellCommand::Unknown(cmd) => {
                print_error(&format!(
                    "Unknown command '{cmd}'. Type 'help' for available commands."
                ));
            }
        }
    }

    Ok(())
}

/// One convert interaction. Returns `Ok(false)` when stdin is exhausted.
async fn run_conversion(provider: &dyn RateProvider) -> Result<bool> {
    let Some(amount_str) = prompt("Enter amount to convert: ")? else {
        return Ok(false);
    };
    let amount: f64 = match amount_str.parse() {
        Ok(value) => value,
        Err(_) => {
            print_error("Please enter a valid number.");
            return Ok(true);
        }
    };

    let Some(from) = prompt("From currency (e.g. USD): ")? else {
        return Ok(false);
    };
    let Some(to) = prompt("To currency (e.g. EUR): ")? else {
        return Ok(false);
    };

    let request = match ConversionRequest::new(amount, &from, &to) {
        Ok(request) => request,
        Err(e) => {
            print_error(&e.to_string());
            return Ok(true);
        }
    };

    // Conversion failures are reported and the shell keeps going.
    if let Err(e) = convert::run(&request, provider).await {
        print_error(&format!("Conversion failed: {e}"));
    }
    Ok(true)
}

fn print_help() {
    println!("{}", ui::style_text("Available commands", StyleType::Title));
    println!("  convert  - Convert an amount between two currencies");
    println!("  list     - Show available currencies");
    println!("  info     - Show the name of a currency code");
    println!("  help     - Show this message");
    println!("  quit     - Exit the program");
}

fn print_error(message: &str) {
    println!("{}", ui::style_text(message, StyleType::Error));
}

/// Prints a prompt and reads one trimmed line; `None` means EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
