//! unitconv command line
//!
//! ```text
//! $ unitconv 3 meters in cm
//! 3 meters = 300 centimeters
//! ```
//!
//! Exit codes:
//! - 0: converted
//! - 1: output could not be written
//! - 2: malformed query
//! - 3: unit not recognized
//! - 4: incompatible units
//!
//! Logs go to stderr. `UNITCONV_LOG` takes a tracing filter (e.g.
//! `UNITCONV_LOG=debug`); without it the level is `warn`, or `debug` with
//! `--verbose`.

use std::process::ExitCode;
use clap::Parser;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, error, event, Level};
use tracing_subscriber::EnvFilter;
use unitconv_core::ErrorReport;
use unitconv_units::{ConvertError, Converter, Family, UnitRegistry};

const LOG_ENV: &str = "UNITCONV_LOG";

const DEFAULT_LEVEL: Level = Level::WARN;
const VERBOSE_LEVEL: Level = Level::DEBUG;
/// `report_error` prints every failure; its log line shows only with -v
const FAILURE_LEVEL: Level = Level::DEBUG;

#[derive(Parser, Debug)]
#[command(
    name = "unitconv",
    version,
    about = "Convert quantities between units",
    long_about = "Convert a free-text quantity such as \"3 meters in cm\" or \"20F in C\". \
                  Without a target unit a sensible default is used."
)]
struct Args {
    /// Query words, joined with spaces
    query: Vec<String>,

    /// Print the result (or the error) as JSON
    #[arg(long)]
    json: bool,

    /// List every known unit with its aliases
    #[arg(long)]
    list: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn log_level(verbose: bool) -> Level {
    if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level(verbose).into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The query to convert; no words at all is a malformed query
fn query_text(args: &Args) -> Result<String, ConvertError> {
    let query = args.query.join(" ");
    if query.trim().is_empty() {
        return Err(ConvertError::MalformedQuery("empty query".to_string()));
    }
    Ok(query)
}

fn exit_code(err: &ConvertError) -> u8 {
    match err {
        ConvertError::MalformedQuery(_) => 2,
        ConvertError::UnitNotRecognized(_) => 3,
        ConvertError::IncompatibleUnits { .. } => 4,
    }
}

fn print_json(value: &JsonValue) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Every recognized form of each unit, grouped by family
fn list_units(registry: &UnitRegistry) -> Vec<(Family, Vec<(String, Vec<String>)>)> {
    Family::ALL
        .iter()
        .map(|&family| {
            let units = registry
                .by_family(family)
                .into_iter()
                .map(|unit| {
                    let mut forms: Vec<String> = Vec::new();
                    for form in unit.recognized_forms() {
                        if !forms.contains(&form) {
                            forms.push(form);
                        }
                    }
                    (unit.key.clone(), forms)
                })
                .collect();
            (family, units)
        })
        .collect()
}

fn run_list(json: bool) -> ExitCode {
    let listing = list_units(UnitRegistry::global());

    if json {
        let mut families = Map::new();
        for (family, units) in listing {
            let units: Map<String, JsonValue> = units
                .into_iter()
                .map(|(key, forms)| (key, JsonValue::from(forms)))
                .collect();
            families.insert(family.name().to_string(), JsonValue::Object(units));
        }
        return print_json(&JsonValue::Object(families));
    }

    for (family, units) in listing {
        println!("{}", family);
        for (key, forms) in units {
            println!("  {:<20} {}", key, forms.join(", "));
        }
    }
    ExitCode::SUCCESS
}

fn report_error(err: &ConvertError, json: bool) -> ExitCode {
    event!(FAILURE_LEVEL, code = err.code(), "{}", err);

    if json {
        let report: ErrorReport = err.report();
        match serde_json::to_value(&report) {
            Ok(value) => {
                print_json(&value);
            }
            Err(e) => error!("failed to serialize error report: {}", e),
        }
    } else {
        eprintln!("unitconv: {}", err);
    }
    ExitCode::from(exit_code(err))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list {
        return run_list(args.json);
    }

    let outcome = query_text(&args).and_then(|query| {
        debug!(query = %query, "converting");
        Converter::default().conversion(&query)
    });

    match outcome {
        Ok(conversion) => {
            debug!(
                source = %conversion.source,
                target = %conversion.target,
                result = %conversion.result,
                "converted"
            );
            if args.json {
                match serde_json::to_value(&conversion) {
                    Ok(value) => print_json(&value),
                    Err(e) => {
                        error!("failed to serialize conversion: {}", e);
                        ExitCode::FAILURE
                    }
                }
            } else {
                println!("{}", conversion.text);
                ExitCode::SUCCESS
            }
        }
        Err(err) => report_error(&err, args.json),
    }
}
