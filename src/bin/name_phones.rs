#![forbid(unsafe_code)]

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use multi_clone::{logging, text_extract::extract_contact};

/// Print the name and phone number of every `NAME=... PHONE=...` line in a file.
#[derive(Debug, Parser)]
#[command(name = "name-phones", version)]
struct Cli {
    #[arg(default_value = "muppets.txt")]
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init("name_phones=info");

    let cli = Cli::parse();
    let contents = fs::read_to_string(&cli.file)
        .with_context(|| format!("Could not read {}", cli.file.display()))?;

    for contact in contents.lines().filter_map(extract_contact) {
        println!("{contact}");
    }

    Ok(())
}
