//! Scan a Saved OCR Response
//!
//! Reads an OCR.space JSON response from disk, looks up one person and prints
//! the resulting shift as JSON.
//!
//! Usage:
//!   cargo run --release --bin roster-scan -- response.json "G.C. SOTO"
//!   cargo run --release --bin roster-scan -- response.json SOTO config.json
//!
//! Set `RUST_LOG=debug` to see the layout decisions.

use roster_oxide::config::RosterConfig;
use roster_oxide::ocr::parse_page;
use roster_oxide::roster::RosterScanner;
use std::fs;
use std::path::PathBuf;

struct ScanArgs {
    response: PathBuf,
    name: String,
    config: Option<PathBuf>,
}

impl ScanArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        match args.as_slice() {
            [response, name] => Some(Self {
                response: PathBuf::from(response),
                name: name.clone(),
                config: None,
            }),
            [response, name, config] => Some(Self {
                response: PathBuf::from(response),
                name: name.clone(),
                config: Some(PathBuf::from(config)),
            }),
            _ => None,
        }
    }
}

fn run(args: &ScanArgs) -> roster_oxide::Result<String> {
    let config = match &args.config {
        Some(path) => RosterConfig::from_file(path)?,
        None => RosterConfig::default(),
    };

    let json = fs::read_to_string(&args.response)?;
    let page = parse_page(&json)?;
    log::debug!(
        "Loaded {}: {} lines, {} chars of text",
        args.response.display(),
        page.lines().len(),
        page.full_text().len()
    );

    RosterScanner::new(config).scan_today(&page, &args.name).to_json()
}

fn main() {
    env_logger::init();

    let Some(args) = ScanArgs::from_args() else {
        eprintln!("Usage: roster-scan <response.json> <name> [config.json]");
        std::process::exit(2);
    };

    match run(&args) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    }
}
