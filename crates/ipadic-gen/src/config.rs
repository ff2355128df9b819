use std::path::PathBuf;

use clap::Parser;
use ipadic_subset::DEFAULT_OUTPUT;

/// Generate the placeholder IPADIC subset dictionary as JSON
#[derive(Debug, Parser)]
#[command(name = "ipadic-gen", version)]
pub struct Cli {
    /// Output file path
    #[arg(default_value = DEFAULT_OUTPUT, allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Anything after the output path is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Read the written file back and check the entry count
    #[arg(long)]
    pub verify: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub verify: bool,
    pub log_json: bool,
    pub ignored_args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            verify: false,
            log_json: false,
            ignored_args: Vec::new(),
        }
    }
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output: cli.output,
            verify: cli.verify,
            log_json: cli.log_json,
            ignored_args: cli.extra,
        }
    }
}
