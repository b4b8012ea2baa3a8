#![warn(clippy::pedantic)]
//! CLI entry point for dungeon_gen.
//! Usage: cargo run -p dungeon_gen -- [--input adventure.yaml] [--header newdb.h] [--source newdb.c]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_data::validate_dungeon;
use dungeon_gen::{DEFAULT_HEADER, DEFAULT_INPUT, DEFAULT_SOURCE, OutputPaths, generate, load_dungeon, write_tables};
use log::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "Compile the dungeon description into static C tables.")]
struct Cli {
    /// Dungeon description (YAML) to compile.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Declarations file to write.
    #[arg(long, default_value = DEFAULT_HEADER)]
    header: PathBuf,
    /// Definitions file to write; it includes the declarations by file name.
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,
    /// Print both artifacts to stdout instead of writing them.
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    info!("Start: loading dungeon from {}", cli.input.display());
    let dungeon = load_dungeon(&cli.input).with_context(|| format!("while loading {}", cli.input.display()))?;
    for problem in validate_dungeon(&dungeon) {
        warn!("{problem}");
    }

    let paths = OutputPaths::new(cli.header, cli.source);
    let tables = generate(&dungeon, &paths.header_include());

    if cli.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(tables.header.as_bytes())?;
        stdout.write_all(tables.source.as_bytes())?;
        return Ok(());
    }

    write_tables(&tables, &paths).context("while writing generated tables")?;
    info!(
        "generated {} class messages and {} obituaries",
        dungeon.class_count(),
        dungeon.maximum_deaths()
    );
    Ok(())
}
