use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "a2ui-eval",
    version,
    about = "Validate A2UI protocol messages and evaluate generated UI payloads"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a single protocol message
    Validate(ValidateArgs),
    /// Run an evaluation suite
    Run(RunArgs),
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Message file, or `-` for stdin. Raw model responses are accepted too.
    pub file: PathBuf,

    /// Also require a component of this type in the surface update
    #[arg(long)]
    pub component: Option<String>,

    /// Property the component must define (needs --component)
    #[arg(long, requires = "component")]
    pub property: Option<String>,

    /// Expected property value as JSON; bare text is taken as a string
    #[arg(long, requires = "property")]
    pub value: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "A2UI_EVAL_FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(long, env = "A2UI_EVAL_SUITE")]
    pub suite: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "A2UI_EVAL_FORMAT")]
    pub format: OutputFormat,

    /// Write a JUnit XML report
    #[arg(long)]
    pub junit: Option<PathBuf>,

    /// Write the JSON report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}
