// Primate Paradise - virtual zoo console
//
// Loads the enclosure from its flat file, logs the user in as staff or
// visitor, and hands the store to the matching menu loop.

mod ui;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use primate_paradise::Enclosure;

/// Flat file holding the persisted enclosure, one record per line.
const ENCLOSURE_FILE: &str = "enclosure.txt";

fn main() -> Result<()> {
    let data_path = Path::new(ENCLOSURE_FILE);

    // A malformed file aborts startup; a missing one starts an empty zoo.
    let mut enclosure = if data_path.exists() {
        let enclosure = Enclosure::load(data_path)
            .with_context(|| format!("failed to load {}", ENCLOSURE_FILE))?;
        println!(
            "{} Loaded {} primates from {}\n",
            "✓".green(),
            enclosure.len(),
            ENCLOSURE_FILE
        );
        enclosure
    } else {
        println!(
            "{} No {} found - starting with an empty enclosure\n",
            "ℹ".blue(),
            ENCLOSURE_FILE
        );
        Enclosure::new()
    };

    match ui::login()? {
        ui::Role::Staff => ui::run_staff(&mut enclosure, data_path)?,
        ui::Role::Visitor => ui::run_visitor(&mut enclosure)?,
    }

    println!("\nThank you for visiting Primate Paradise!");
    Ok(())
}
