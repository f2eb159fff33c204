use a2ui_core::extract::parse_payload;
use a2ui_core::validate;
use a2ui_matchers::{BuiltinMatcher, SurfaceUpdateComponentMatcher};
use serde_json::{json, Value};
use std::io::Read;
use std::path::Path;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::exit_codes;

pub fn run(args: ValidateArgs) -> anyhow::Result<i32> {
    let message = match load_message(&args.file) {
        Ok(m) => m,
        Err(e) => {
            let errors = vec![format!("{e:#}")];
            print_report(&errors, &args, exit_codes::CONFIG_ERROR)?;
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let matchers = inline_matcher(&args);
    let errors = validate(&message, &matchers);
    tracing::debug!(
        file = %args.file.display(),
        matchers = matchers.len(),
        errors = errors.len(),
        "validated message"
    );

    let exit_code = if errors.is_empty() {
        exit_codes::OK
    } else {
        exit_codes::TEST_FAILED
    };
    print_report(&errors, &args, exit_code)?;
    Ok(exit_code)
}

fn load_message(path: &Path) -> anyhow::Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| anyhow::anyhow!("failed to read stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?
    };
    parse_payload(&text).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
}

fn inline_matcher(args: &ValidateArgs) -> Vec<BuiltinMatcher> {
    let Some(component_type) = &args.component else {
        return Vec::new();
    };
    let mut matcher = SurfaceUpdateComponentMatcher::new(component_type.clone());
    if let Some(property) = &args.property {
        matcher = matcher.with_property(property.clone());
    }
    if let Some(raw) = &args.value {
        matcher = matcher.with_value(parse_expected_value(raw));
    }
    vec![matcher.into()]
}

/// `--value` is JSON when it parses as JSON, otherwise a plain string.
fn parse_expected_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn print_report(errors: &[String], args: &ValidateArgs, exit_code: i32) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Json => {
            let doc = build_validate_json(errors, args, exit_code);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            // Text format is always printed to stderr (human-readable)
            if errors.is_empty() {
                eprintln!("✔ Validation OK");
                return Ok(());
            }
            eprintln!(
                "✖ Validation failed ({} error{})",
                errors.len(),
                if errors.len() != 1 { "s" } else { "" }
            );
            eprintln!();
            for e in errors {
                eprintln!("  - {}", e);
            }
        }
    }
    Ok(())
}

fn build_validate_json(errors: &[String], args: &ValidateArgs, exit_code: i32) -> Value {
    let mut args_list: Vec<String> = vec![
        args.file.display().to_string(),
        "--format".into(),
        args.format.as_str().into(),
    ];
    for (flag, value) in [
        ("--component", &args.component),
        ("--property", &args.property),
        ("--value", &args.value),
    ] {
        if let Some(v) = value {
            args_list.push(flag.into());
            args_list.push(v.clone());
        }
    }

    json!({
        "schema_version": 1,
        "ok": errors.is_empty(),
        "exit_code": exit_code,
        "tool": {
            "name": "a2ui-eval",
            "version": env!("CARGO_PKG_VERSION")
        },
        "command": {
            "name": "validate",
            "args": args_list
        },
        "errors": errors,
        "summary": {
            "errors": errors.len()
        }
    })
}
