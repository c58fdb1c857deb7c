use std::io::IsTerminal;

use clap::{Args, Subcommand, ValueEnum};
use fieldcheck_ean::EanVariant;
use fieldcheck_schema::RegistryConfig;

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod demo;
pub mod ean;
pub mod movie;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an EAN-8 or EAN-13 code.
    Ean(EanArgs),
    /// Validate a movie record given as JSON.
    Movie(MovieArgs),
    /// Run the sample constructions and print each outcome.
    Demo(DemoArgs),
    /// Show version information.
    Version(VersionArgs),
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    pub format: OutputFormat,
    pub registry: RegistryConfig,
}

pub fn run(command: Command, ctx: RunContext) -> CliResult<i32> {
    match command {
        Command::Ean(args) => ean::run(args, ctx),
        Command::Movie(args) => movie::run(args, ctx),
        Command::Demo(args) => demo::run(args, ctx),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum VariantArg {
    Ean8,
    #[default]
    Ean13,
}

impl From<VariantArg> for EanVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Ean8 => EanVariant::Ean8,
            VariantArg::Ean13 => EanVariant::Ean13,
        }
    }
}

#[derive(Args, Debug)]
pub struct EanArgs {
    /// Code to validate, or `-` to read it from stdin.
    pub value: String,
    /// Expected code length.
    #[arg(long, value_enum, default_value_t = VariantArg::Ean13)]
    pub variant: VariantArg,
    /// Treat VALUE as a JSON record `{"value": "..."}` instead of a bare code.
    #[arg(long)]
    pub record: bool,
}

#[derive(Args, Debug)]
pub struct MovieArgs {
    /// Movie record as JSON. Read from stdin when omitted.
    #[arg(long)]
    pub json: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct DemoArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Read all of stdin, refusing to wait on an interactive terminal.
pub(crate) fn read_stdin(what: &str) -> CliResult<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::new(
            USAGE,
            format!("no {what} given and stdin is a terminal"),
        ));
    }
    std::io::read_to_string(stdin).map_err(|err| io_error(&format!("failed reading {what}"), err))
}
