//! Command-line interface for annot
//! This binary renders annotation document files as line-oriented reports.
//!
//! Usage:
//!   annot report `<path>` [--format `<format>`]  - Render a document file as a report
//!   annot demo                                 - Annotate the bundled demo text and print its report
//!   annot validate `<path>`                      - Check a document file against the model invariants

use clap::{Arg, Command};
use std::io::Write;

use annot::annot::loading;
use annot::annot::reporting;
use annot::annot::testing;

fn main() {
    let matches = Command::new("annot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A viewer for linguistic annotation documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("report")
                .about("Render a document file as a line-oriented report")
                .arg(
                    Arg::new("path")
                        .help("Path to the document file (.json, .yaml or .yml)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Annotate the bundled demo text and print its report"),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a document file against the model invariants")
                .arg(
                    Arg::new("path")
                        .help("Path to the document file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("report", report_matches)) => {
            let path = report_matches.get_one::<String>("path").unwrap();
            let format = report_matches.get_one::<String>("format").unwrap();
            handle_report_command(path, format);
        }
        Some(("demo", _)) => {
            handle_demo_command();
        }
        Some(("validate", validate_matches)) => {
            let path = validate_matches.get_one::<String>("path").unwrap();
            handle_validate_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the report command
fn handle_report_command(path: &str, format: &str) {
    let document = loading::load_document(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match format {
        "text" => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = reporting::render_report(&document, &mut out) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
                eprintln!("Error: failed to serialize document: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Error: unknown output format '{}' (expected 'text' or 'json')", other);
            std::process::exit(1);
        }
    }
}

/// Handle the demo command
fn handle_demo_command() {
    let annotator = testing::demo_annotator();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = reporting::run(&annotator, testing::DEMO_TEXT, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    let _ = out.flush();
}

/// Handle the validate command
fn handle_validate_command(path: &str) {
    let document = loading::load_document(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let chain_count = document
        .coref_chains
        .as_ref()
        .map(|c| c.chains.len())
        .unwrap_or(0);
    println!(
        "OK: {} sentences, {} coreference chains",
        document.sentences.len(),
        chain_count
    );
}
