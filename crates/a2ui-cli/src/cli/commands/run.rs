use a2ui_core::config::load_suite;
use a2ui_core::engine::run_suite;
use a2ui_core::report::{console, json, junit};
use a2ui_matchers::BuiltinMatcher;
use std::path::Path;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::exit_codes;

pub fn run(args: RunArgs) -> anyhow::Result<i32> {
    let suite = match load_suite(&args.suite) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("✖ Invalid suite: {}", e);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };
    let base_dir = args.suite.parent().unwrap_or(Path::new("."));

    tracing::info!(suite = %suite.suite, cases = suite.cases.len(), "running suite");
    let report = run_suite(&suite, base_dir, BuiltinMatcher::from_spec);

    match args.format {
        OutputFormat::Text => console::print_report(&report),
        OutputFormat::Json if args.output.is_none() => {
            println!("{}", serde_json::to_string_pretty(&json::to_json(&report))?);
        }
        OutputFormat::Json => console::print_summary(&report),
    }
    if let Some(out) = &args.output {
        json::write_json(&report, out)?;
        eprintln!("JSON report written to {}", out.display());
    }
    if let Some(out) = &args.junit {
        junit::write_junit(&report, out)?;
        eprintln!("JUnit report written to {}", out.display());
    }

    Ok(if report.all_passed() {
        exit_codes::OK
    } else {
        exit_codes::TEST_FAILED
    })
}
