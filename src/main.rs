use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use runez::Options;

#[derive(Parser)]
#[command(name = "runez")]
#[command(about = "Archive UTF-8 text as a table of its characters plus one index byte per character")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Archive a file (compress is the default mode)
    runez notes.txt -o notes.rz

    # Restore it
    runez -d notes.rz -o notes.txt

    # Pipe through, listing the symbol table on stderr
    cat notes.txt | runez -D | runez -d -D
"#)]
struct Cli {
    /// Compress text to the archive format (default)
    #[arg(short = 'c', long, conflicts_with = "decompress")]
    compress: bool,

    /// Decompress the archive format to text
    #[arg(short = 'd', long)]
    decompress: bool,

    /// Log the symbol table and index assignments to stderr
    #[arg(short = 'D', long)]
    debug: bool,

    /// File to read instead of stdin
    input: Option<PathBuf>,

    /// File to write instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(LevelFilter::Warn);
    if cli.debug {
        logger.filter_module("runez", LevelFilter::Debug);
    }
    logger.parse_default_env();
    logger.init();

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("could not open {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    };
    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("could not create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    let options = Options::new().diagnostics(cli.debug);
    if cli.decompress {
        runez::decode(input, output, &options).context("decompression failed")?;
    } else {
        runez::encode(input, output, &options).context("compression failed")?;
    }
    Ok(())
}
