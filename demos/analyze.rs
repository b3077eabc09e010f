//! Command-line interface for palette_audit
//!
//! Analyzes colors given as arguments and/or loaded from a highlighter
//! cache file, printing the full report as JSON to stdout and a short
//! summary to stderr.

use palette_audit::{analyze_palette, parse_samples, samples_from_cache, Rgb};
use std::{env, path::PathBuf, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut background_arg = String::from("0,0,0");
    let mut cache_path = None;
    let mut color_args = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bg" => {
                i += 1;
                match args.get(i) {
                    Some(value) => background_arg = value.clone(),
                    None => {
                        eprintln!("Error: --bg requires a value");
                        process::exit(1);
                    }
                }
            }
            "--cache" => {
                i += 1;
                match args.get(i) {
                    Some(value) => cache_path = Some(PathBuf::from(value)),
                    None => {
                        eprintln!("Error: --cache requires a path");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if arg.starts_with("--") => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
            arg => color_args.push(arg.to_string()),
        }
        i += 1;
    }

    if color_args.is_empty() && cache_path.is_none() {
        print_help(&args[0]);
        process::exit(1);
    }

    let background: Rgb = match background_arg.parse() {
        Ok(rgb) => rgb,
        Err(error) => {
            eprintln!("Error parsing --bg: {}", error);
            process::exit(1);
        }
    };

    // Bad literals are skipped; the rest of the batch continues
    let (mut samples, errors) =
        parse_samples(color_args.iter().map(String::as_str));
    for error in &errors {
        eprintln!("Skipping invalid color: {}", error);
    }

    // A cache failure aborts only the cache-derived portion
    if let Some(path) = cache_path {
        match samples_from_cache(&path) {
            Ok(cached) => samples.extend(cached),
            Err(error) => eprintln!("Failed to load cache: {}", error),
        }
    }

    if samples.is_empty() {
        eprintln!("No valid colors to analyze.");
        process::exit(1);
    }

    let report = analyze_palette(&samples, background);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Error serializing report: {}", error);
            process::exit(1);
        }
    }

    eprintln!();
    eprintln!("Palette Summary:");
    eprintln!("  Background: {}", report.background.hex);
    eprintln!("  Colors analyzed: {}", report.colors.len());
    eprintln!(
        "  Randomness: {:.1}/100 ({})",
        report.randomness.total,
        report.randomness.interpretation.label()
    );
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] [COLOR]...", program_name);
    eprintln!();
    eprintln!("Analyze RGB colors in LAB space against a background color.");
    eprintln!();
    eprintln!("Colors are 'R,G,B', 'R G B', or RRGGBB hex (with/without '#').");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --bg COLOR       Background color (default: 0,0,0)");
    eprintln!("  --cache PATH     Load identifier colors from a highlighter cache file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} \"255,0,0\"", program_name);
    eprintln!("  {} ff0000 aabbcc --bg \"30,30,30\"", program_name);
    eprintln!("  {} --cache ~/.cache/nvim/semhl.lua --bg 1e1e1e", program_name);
}
