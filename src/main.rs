//! CLI entry point for husk

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use husk::{Envelope, print_envelope, scan_archive};

#[derive(Parser, Debug)]
#[command(name = "husk")]
#[command(about = "Print an archive's directory tree as JSON, reading headers only")]
#[command(version)]
struct Args {
    /// Archive file to inspect (.tar, .tar.gz, .tgz, .zip)
    path: PathBuf,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,

    /// Emit the file's contents as a text document instead of scanning it
    /// as an archive
    #[arg(long)]
    text: bool,

    /// Language tag attached to --text output
    #[arg(long, default_value = "plaintext", requires = "text")]
    language: String,
}

fn main() {
    let args = Args::parse();

    let envelope = if args.text {
        text_envelope(&args)
    } else {
        match scan_archive(&args.path) {
            Ok(root) => Envelope::tree(root),
            Err(e) => Envelope::error(format!("Failed to open archive: {}", e)),
        }
    };

    if let Err(e) = print_envelope(&envelope, args.pretty) {
        eprintln!("husk: error writing output: {}", e);
        process::exit(1);
    }

    // The error envelope is the output, not a diagnostic; still signal
    // failure through the exit status for shell consumers
    if envelope.is_error() {
        process::exit(1);
    }
}

fn text_envelope(args: &Args) -> Envelope {
    match fs::read(&args.path) {
        Ok(bytes) if bytes.is_empty() => Envelope::error("Empty file"),
        Ok(bytes) => Envelope::text(String::from_utf8_lossy(&bytes), args.language.clone()),
        Err(e) => Envelope::error(format!("Failed to read file: {}", e)),
    }
}
