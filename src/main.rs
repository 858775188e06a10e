//! treehuff CLI
//! Usage:
//!   treehuff compress   <input_file> <output_file> [-v|-vv]
//!   treehuff decompress <input_file> <output_file> [-v|-vv]

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use treehuff::{CodecConfig, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "treehuff")]
#[command(version)]
#[command(about = "Huffman compressor with a tree header", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Diagnostic detail: -v prints the code table, -vv traces every byte
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress INPUT into OUTPUT
    Compress { input: PathBuf, output: PathBuf },
    /// Decompress INPUT into OUTPUT
    Decompress { input: PathBuf, output: PathBuf },
}

fn main() {
    let args = Args::parse();
    let verbosity = Verbosity::from_occurrences(args.verbose);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let config = CodecConfig::with_verbosity(verbosity);
    let result = match &args.command {
        Command::Compress { input, output } => treehuff::compress_file(input, output, &config),
        Command::Decompress { input, output } => treehuff::decompress_file(input, output, &config),
    };

    match result {
        Ok(summary) => {
            println!("Done. {} bytes → {} bytes", summary.bytes_in, summary.bytes_out);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
