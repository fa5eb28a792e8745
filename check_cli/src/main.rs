//! # StructCheck CLI
//!
//! Terminal front-end for the compliance engine. Two modes:
//!
//! - `check_cli <request.json>` - read a JSON member request, print the
//!   compliance report as JSON (the same seam a web/API layer uses)
//! - `check_cli` - interactive beam demo with prompted inputs
//!
//! The rendering here is intentionally plain text; richer report output
//! (HTML/PDF) belongs to the external report renderer.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use check_core::checks::beam::{check, BeamInput};
use check_core::checks::{evaluate, MemberItem};
use check_core::loads::{LoadCase, LoadType};
use check_core::report::ComplianceReport;
use check_core::table::CodeTable;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn run_request_file(path: &str) -> ExitCode {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: cannot read '{path}': {e}");
            return ExitCode::FAILURE;
        }
    };

    let item: MemberItem = match serde_json::from_str(&contents) {
        Ok(item) => item,
        Err(e) => {
            eprintln!("Error: '{path}' is not a valid member request: {e}");
            return ExitCode::FAILURE;
        }
    };

    match evaluate(&item, CodeTable::shared()) {
        Ok(report) => {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: cannot serialize report: {e}");
                    return ExitCode::FAILURE;
                }
            }
            if report.passes() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &ComplianceReport) {
    println!("═══════════════════════════════════════════════");
    println!("  COMPLIANCE REPORT: {} ({})", report.label, report.member_type);
    println!("═══════════════════════════════════════════════");
    println!();
    println!("Governing combination: {}", report.governing_combination);
    println!();
    for clause in &report.clauses {
        println!(
            "  {} {:<45} {:>10.2} vs {:>10.2}  [{}]",
            if clause.passed { "✓" } else { "✗" },
            clause.description,
            clause.computed,
            clause.limit,
            clause.clause,
        );
    }
    println!();
    println!("═══════════════════════════════════════════════");
    println!("  RESULT: {}", report.status());
    if let Some(governing) = report.governing_clause() {
        println!("  Governs: {}", governing.description);
    }
    println!("═══════════════════════════════════════════════");
}

fn run_interactive() -> ExitCode {
    println!("StructCheck CLI - IS 456 Compliance Checker");
    println!("===========================================");
    println!();
    println!("Beam check with default M20/Fe500 and 3 x 16 mm bars.");
    println!();

    let span_m = prompt_f64("Beam span (m) [4.0]: ", 4.0);
    let width_mm = prompt_f64("Section width (mm) [230]: ", 230.0);
    let depth_mm = prompt_f64("Section depth (mm) [450]: ", 450.0);
    let dead = prompt_f64("Dead load (kN/m) [10.0]: ", 10.0);
    let live = prompt_f64("Live load (kN/m) [8.0]: ", 8.0);

    let input = BeamInput {
        span_m,
        width_mm,
        depth_mm,
        load_case: LoadCase::new("CLI loads")
            .with_load(LoadType::Dead, dead)
            .with_load(LoadType::Live, live),
        include_self_weight: true,
        ..BeamInput::default()
    };

    match check(&input, CodeTable::shared()) {
        Ok(report) => {
            println!();
            print_report(&report);
            println!();
            println!("JSON output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{json}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("Usage: check_cli [request.json]");
            println!();
            println!("With a file argument, reads a JSON member request and prints");
            println!("the compliance report as JSON. Without one, runs an");
            println!("interactive beam check.");
            ExitCode::SUCCESS
        }
        Some(path) => run_request_file(path),
        None => run_interactive(),
    }
}
