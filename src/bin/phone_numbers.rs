#![forbid(unsafe_code)]

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use multi_clone::{logging, text_extract::phone_line_report};
use tracing::debug;

/// Print each line of a text file with its phone number in canonical form.
///
/// Only numbers with the area code in brackets are recognized, e.g. `(705)555-1212`.
#[derive(Debug, Parser)]
#[command(name = "phone-numbers", version)]
struct Cli {
    /// Text file with one candidate phone number per line.
    #[arg(default_value = "phone-numbers.txt")]
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init("phone_numbers=info");

    let cli = Cli::parse();
    let contents = fs::read_to_string(&cli.file)
        .with_context(|| format!("Could not read {}", cli.file.display()))?;

    debug!("Read {} line(s) from {}", contents.lines().count(), cli.file.display());

    for (index, line) in contents.lines().enumerate() {
        println!("{}", phone_line_report(index, line));
    }

    Ok(())
}
