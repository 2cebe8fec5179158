//! flow-diagram CLI entry point.
//!
//! Reads postings (JSON or text form) from a file or stdin and writes the
//! laid-out diagram as JSON or SVG.
//!
//! `RUST_LOG=debug` shows layout decisions.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use flow_diagram::{InputFormat, OutputFormat, Result, render_dsl};

/// Ledger postings to a flow diagram.
#[derive(Parser, Debug)]
#[command(
    name = "flow-diagram",
    version = env!("FLOW_DIAGRAM_VERSION"),
    about = "Lay out ledger postings as a flow diagram (JSON or SVG)"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Input format: json or text (detected when omitted)
    #[arg(short = 'i', long = "input-format")]
    input_format: Option<String>,

    /// Output format: json or svg
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: String,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = match cli.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let input = cli
        .input_format
        .as_deref()
        .map(str::parse::<InputFormat>)
        .transpose()?;
    let output: OutputFormat = cli.format.parse()?;
    let rendered = render_dsl(&text, input, output)?;

    match cli.output {
        Some(ref path) => fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.is_empty() && !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
