//! Command-line interface for rst
//! This binary parses markup from a file or standard input and dumps the
//! resulting document tree for inspection.
//!
//! Usage:
//!   rst dump `<path>` [--format `<format>`]   - Parse a file and dump the tree
//!   rst dump                                - Parse standard input

use clap::{Arg, Command};
use std::fs::File;
use std::io::{self, BufReader};

use rst::formats::to_treeviz_str;
use rst::{ast::Fragment, parse_fragment};

fn main() {
    let matches = Command::new("rst")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting parsed markup trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dump")
                .about("Parse markup and print the document tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to parse; '-' or omitted reads standard input")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json')")
                        .default_value("treeviz"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("dump", dump_matches)) => {
            let path = dump_matches
                .get_one::<String>("path")
                .map(String::as_str)
                .unwrap_or("-");
            let format = dump_matches.get_one::<String>("format").unwrap();
            handle_dump_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the dump command
fn handle_dump_command(path: &str, format: &str) {
    let fragment = parse_input(path);

    match format {
        "treeviz" => print!("{}", to_treeviz_str(&fragment)),
        "json" => {
            let output = serde_json::to_string_pretty(&fragment).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

fn parse_input(path: &str) -> Fragment {
    if path == "-" {
        let stdin = io::stdin();
        return parse_fragment(stdin.lock(), "-");
    }
    let file = File::open(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });
    parse_fragment(BufReader::new(file), path)
}
