//! CLI entry point for cambio
//!
//! Provides command-line interface for listing the current exchange
//! rates, one-shot conversions, and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use std::rc::Rc;

use cambio::core::convert;
use cambio::rates::{RateProvider, RateSource, EXCHANGE_RATES_URL};
use cambio::ui::App;

#[derive(Parser)]
#[command(name = "cambio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List current exchange rates
    Rates {
        /// Page to scrape rates from
        #[arg(short, long, default_value = EXCHANGE_RATES_URL)]
        url: String,
    },

    /// Convert a quantity between two currencies
    Convert {
        /// Quantity in the source currency
        amount: f64,

        /// Source currency code
        from: String,

        /// Target currency code
        to: String,

        /// Page to scrape rates from
        #[arg(short, long, default_value = EXCHANGE_RATES_URL)]
        url: String,
    },

    /// Launch the converter window
    Gui {
        /// Page to scrape rates from
        #[arg(short, long, default_value = EXCHANGE_RATES_URL)]
        url: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rates { url } => list_rates(&url)?,
        Commands::Convert {
            amount,
            from,
            to,
            url,
        } => convert_once(amount, &from, &to, &url)?,
        Commands::Gui { url } => launch_gui(&url)?,
    }

    Ok(())
}

/// Fetch the rate table and print it
fn list_rates(url: &str) -> anyhow::Result<()> {
    println!("{} Fetching rates: {}", "→".cyan(), url);

    let source = RateSource::with_url(url)?;
    let table = source.table();

    println!(
        "{} Loaded {} currencies at {}\n",
        "✓".green(),
        table.len(),
        table.fetched_at().format("%H:%M:%S")
    );

    // Display each rate in document order
    for code in table.names() {
        let rate = table.rate(code).unwrap_or_default();
        println!("{} → {}", code.cyan().bold(), rate);
    }

    println!("\n{} Total: {} currencies", "✓".green(), table.len());

    Ok(())
}

/// One-shot conversion against a freshly fetched table
fn convert_once(amount: f64, from: &str, to: &str, url: &str) -> anyhow::Result<()> {
    let source = RateSource::with_url(url)?;

    match convert(&source.table(), amount, from, to) {
        Ok(value) => {
            println!(
                "{} {} {} = {} {}",
                "✓".green().bold(),
                amount,
                from.cyan(),
                value,
                to.cyan()
            );
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Fetch the initial table, then hand over to the GTK4 window
fn launch_gui(url: &str) -> anyhow::Result<()> {
    println!("{} Fetching rates: {}", "→".cyan(), url);

    let source = RateSource::with_url(url)?;
    println!("{} Loaded {} currencies", "✓".green(), source.names().len());

    let app = App::new(Rc::new(source));
    app.run();

    Ok(())
}
