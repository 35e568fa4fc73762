//! finer CLI — driving adapter for the action-selection engine.
//!
//! Subcommands:
//! - `select <catalog> <action> [key=value...] [--untyped key] [--trace]` —
//!   run selection against a catalog config
//! - `check <catalog>` — validate a catalog config loads without errors
//! - `info <catalog>` — list registered actions and overload shapes

use std::process;
use std::sync::Arc;

use finer::{
    ArgumentSet, CandidateSignature, CatalogConfig, MatchVerdict, SelectionOutcome, Selector,
};
use finer_http::infer_type;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "select" => cmd_select(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "info" => cmd_info(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_select(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("select requires a catalog file path and an action name".into());
    }

    let config = load_config(&args[0])?;
    let action = &args[1];
    let (arguments, trace) = parse_arguments(&args[2..])?;

    let catalog = config
        .build()
        .map_err(|e| format!("catalog load failed: {e}"))?;
    let selector = Selector::new(Arc::new(catalog));

    if trace {
        print_trace(&selector.select_with_trace(action, &arguments));
    } else {
        print_outcome(&selector.select(action, &arguments));
    }

    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("check requires a catalog file path".into());
    }

    let config = load_config(&args[0])?;
    config
        .build()
        .map_err(|e| format!("catalog invalid: {e}"))?;

    println!("Catalog valid");
    Ok(())
}

fn cmd_info(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("info requires a catalog file path".into());
    }

    let config = load_config(&args[0])?;
    let catalog = config
        .build()
        .map_err(|e| format!("catalog invalid: {e}"))?;

    println!("Registered actions:");
    for action in catalog.actions() {
        println!("  {action}");
        for signature in catalog.candidates_for(action) {
            println!("    {}", signature.shape());
        }
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Input parsing
// ═══════════════════════════════════════════════════════════════════════════════

fn load_config(path: &str) -> Result<CatalogConfig, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("could not read {path}: {e}"))?;

    if path.ends_with(".json") {
        serde_json::from_str(&text).map_err(|e| format!("could not parse {path}: {e}"))
    } else {
        serde_yaml::from_str(&text).map_err(|e| format!("could not parse {path}: {e}"))
    }
}

/// Parse `key=value` pairs (types inferred the same way the HTTP adapter
/// infers them), `--untyped key` entries, and the `--trace` flag.
fn parse_arguments(args: &[String]) -> Result<(ArgumentSet, bool), String> {
    let mut set = ArgumentSet::new();
    let mut trace = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => trace = true,
            "--untyped" => {
                let name = args
                    .get(i + 1)
                    .ok_or("--untyped requires an argument name")?;
                set = set.with_untyped(name.clone());
                i += 1;
            }
            pair => {
                let (name, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("expected key=value, got \"{pair}\""))?;
                set = set.with_typed(name.to_string(), infer_type(value));
            }
        }
        i += 1;
    }

    Ok((set, trace))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Output
// ═══════════════════════════════════════════════════════════════════════════════

fn print_outcome(outcome: &SelectionOutcome) {
    match outcome {
        SelectionOutcome::Selected(signature) => println!("{}", signature.shape()),
        SelectionOutcome::NoMatch => println!("(no match)"),
        SelectionOutcome::Ambiguous(tied) => {
            println!("ambiguous between:");
            for signature in tied {
                println!("  {}", signature.shape());
            }
        }
    }
}

fn print_trace(trace: &finer::SelectionTrace) {
    for candidate in &trace.candidates {
        match &candidate.verdict {
            MatchVerdict::Qualified { score, .. } => {
                println!(
                    "{}: exact={} assignable={} unknown={}",
                    candidate.shape, score.exact, score.assignable, score.unknown
                );
            }
            MatchVerdict::Disqualified { reason } => {
                println!("{}: disqualified ({reason})", candidate.shape);
            }
        }
        for parameter in &candidate.parameters {
            let tier = parameter
                .tier
                .map_or_else(|| "-".to_string(), |t| t.to_string());
            println!(
                "  {}: declared {}, supplied {} [{tier}]",
                parameter.parameter, parameter.declared, parameter.supplied
            );
        }
    }

    println!();
    match &trace.outcome {
        SelectionOutcome::Selected(signature) => println!("selected: {}", signature.shape()),
        SelectionOutcome::NoMatch => println!("outcome: no match"),
        SelectionOutcome::Ambiguous(tied) => {
            let shapes: Vec<String> = tied.iter().map(CandidateSignature::shape).collect();
            println!("outcome: ambiguous between {}", shapes.join(", "));
        }
    }
}

fn print_usage() {
    eprintln!(
        "finer — overload selection for dispatch targets

USAGE:
    finer select <catalog> <action> [key=value...] [--untyped key] [--trace]
    finer check  <catalog>
    finer info   <catalog>

Catalog files may be YAML or JSON (by extension). Argument value types are
inferred like the HTTP adapter infers request values: integers, floats, and
booleans by parse, strings otherwise."
    );
}
