//! param_check - validate one value against an ad hoc parameter descriptor
//!
//! Usage: param_check --kind <type> [--range <text>] <value>

use clap::Parser;
use param_engine::literal::scan_int;
use param_engine::{lint_table, logging, LintReport, ParamKind, Parameter, ParameterEngine, Value};
use std::process::ExitCode;

/// Exit status for a descriptor built from bad `--kind`/`--range` input
const DESCRIPTOR_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "param_check")]
#[command(about = "Validate a value against a typed parameter descriptor")]
#[command(version)]
struct Cli {
    /// Parameter type, e.g. int, enum, bit_list
    #[arg(long, required_unless_present_any = ["list_kinds", "diagnostics"])]
    kind: Option<ParamKind>,

    /// Range text for the descriptor, e.g. "0:65535" or "a | b | c"
    #[arg(long)]
    range: Option<String>,

    /// Print the validated value as JSON
    #[arg(long)]
    json: bool,

    /// List the supported parameter types and exit
    #[arg(long)]
    list_kinds: bool,

    /// Print build profile and logging configuration and exit
    #[arg(long)]
    diagnostics: bool,

    /// Value to check; true/false and numerals are typed, anything else is text
    #[arg(allow_hyphen_values = true, required_unless_present_any = ["list_kinds", "diagnostics"])]
    value: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_global_logging() {
        eprintln!("Warning: logging unavailable: {}", e);
    }

    if cli.diagnostics {
        println!("{}", logging::get_system_diagnostics());
        return ExitCode::SUCCESS;
    }

    if cli.list_kinds {
        for kind in ParamKind::ALL {
            println!("{}", kind);
        }
        return ExitCode::SUCCESS;
    }

    let (Some(kind), Some(text)) = (cli.kind, cli.value.as_deref()) else {
        eprintln!("Error: --kind and a value are required");
        return ExitCode::FAILURE;
    };

    let mut param = Parameter::new("value", kind);
    if let Some(range) = cli.range {
        param = param.with_range(range);
    }

    if let Err(report) = check_descriptor(&param) {
        eprintln!("Error: invalid descriptor for {}", kind);
        for finding in report.errors() {
            eprintln!("  {}", finding.error);
        }
        return ExitCode::from(DESCRIPTOR_ERROR);
    }

    let engine = ParameterEngine::new();
    let mut value = lex_value(text);

    if !engine.validate(&param, &mut value) {
        println!("REJECTED: '{}' is not a valid {}", text, kind);
        if let Some(range) = param.range_text().filter(|r| !r.is_empty()) {
            println!("  range: {}", range);
        }
        return ExitCode::FAILURE;
    }

    println!("ACCEPTED: '{}' is a valid {}", text, kind);
    if cli.json {
        match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize value: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_canonical(kind, &value);
    }

    ExitCode::SUCCESS
}

/// Lint the ad hoc descriptor so malformed ranges are reported, not validated
fn check_descriptor(param: &Parameter) -> Result<(), LintReport> {
    let report = lint_table(std::slice::from_ref(param));
    if report.has_errors() {
        Err(report)
    } else {
        Ok(())
    }
}

/// Integers follow the range literal grammar (`0x10`, `010`); other numerals are reals
fn lex_value(text: &str) -> Value {
    match text {
        "true" => return Value::bool(true),
        "false" => return Value::bool(false),
        _ => {}
    }

    if let Some((integer, consumed)) = scan_int(text) {
        if consumed == text.len() {
            return Value::number(integer as f64);
        }
    }

    match text.parse::<f64>() {
        Ok(number) if number.is_finite() => Value::number(number),
        _ => Value::text(text),
    }
}

fn print_canonical(kind: ParamKind, value: &Value) {
    match kind {
        ParamKind::Enum => {
            if let Some(index) = value.enum_index() {
                println!("  index: {}", index);
            }
        }
        ParamKind::Multi => println!("  mask: {:#x}", value.aux()),
        ParamKind::Mac | ParamKind::Addr => {
            if let Some(bytes) = value.as_bytes() {
                let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
                println!("  bytes: {}", hex.join(" "));
            }
            if let Some(address) = value.address() {
                println!("  address: {}", address);
            }
        }
        ParamKind::Ip4 => {
            if let Some(packed) = value.as_integer() {
                println!("  packed: {:#010x}", packed);
            }
        }
        ParamKind::BitList => println!("  bitmap: {}", value),
        _ => println!("  value: {}", value),
    }
}
