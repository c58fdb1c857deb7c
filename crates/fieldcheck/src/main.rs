mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use fieldcheck_schema::RegistryConfig;

use crate::cmd::{Command, RunContext};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "fieldcheck", version, about = "Validate EAN codes and movie records")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "FIELDCHECK_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Reject unknown fields in JSON records.
    #[arg(long, env = "FIELDCHECK_STRICT", global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let ctx = RunContext {
        format: cli.format.unwrap_or_else(OutputFormat::default_for_stdout),
        registry: RegistryConfig {
            strict_mode: cli.strict,
            ..RegistryConfig::default()
        },
    };
    let result = cmd::run(cli.command, ctx);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(code = err.code, "command failed");
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
