//! unprofile CLI - profile-export fragment parsing tool.
//!
//! Reads the extraction collaborator's fragment JSON (an array of pages,
//! each with a `fragments` array), runs the parsing pipeline, and writes the
//! structured profile record to stdout. On failure an error envelope
//! `{"error": "..."}` goes to stderr and the process exits with code 1.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use unprofile::{parse_pages_with_options, to_json, JsonFormat, PageFragments, ParseOptions};

#[derive(Parser)]
#[command(name = "unprofile")]
#[command(version)]
#[command(about = "Parse LinkedIn profile-export fragments into a profile record", long_about = None)]
struct Cli {
    /// Input fragment JSON file, or "-" for stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Disable parallel section parsing
    #[arg(long)]
    sequential: bool,

    /// Fail when the document contains unrecognized section headings
    #[arg(long)]
    strict_unknown: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(message) => {
            let envelope = serde_json::json!({ "error": message });
            eprintln!("{}", envelope);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let raw = read_input(&cli.input).map_err(|e| e.to_string())?;

    let pages: Vec<PageFragments> =
        serde_json::from_str(&raw).map_err(|e| format!("invalid fragment JSON: {}", e))?;
    log::debug!("read {} pages from {}", pages.len(), cli.input.display());

    let mut options = ParseOptions::new();
    if cli.sequential {
        options = options.sequential();
    }

    let record = parse_pages_with_options(&pages, options).map_err(|e| e.to_string())?;

    if cli.strict_unknown {
        if let Some(warning) = record.warnings.iter().find(|w| w.field == "section") {
            return Err(warning.message.clone());
        }
    }

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    to_json(&record, format).map_err(|e| e.to_string())
}

fn read_input(path: &PathBuf) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}
