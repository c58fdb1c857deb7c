use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

const SCHEMA_BASE: &str = "https://schemas.3leaps.dev/fieldcheck/cli/v1";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn schema_id(name: &str) -> String {
    format!("{SCHEMA_BASE}/{name}.schema.json")
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    schema_id: String,
    #[serde(flatten)]
    body: &'a T,
}

/// A validated record ready for printing.
pub struct Report<'a, T: Serialize> {
    /// Output schema name, e.g. `ean-result`.
    pub kind: &'a str,
    /// JSON body.
    pub body: &'a T,
    /// Human-readable field/value rows for table and pretty output.
    pub rows: Vec<(&'static str, String)>,
    /// Single-line value for raw output.
    pub raw: String,
}

pub fn print_report<T: Serialize>(report: &Report<'_, T>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = Envelope {
                schema_id: schema_id(report.kind),
                body: report.body,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in &report.rows {
                table.add_row(vec![field.to_string(), value.clone()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let line = report
                .rows
                .iter()
                .map(|(field, value)| format!("{field}={value}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{line}");
        }
        OutputFormat::Raw => {
            println!("{}", report.raw);
        }
    }
}

/// Render an optional text field for table and pretty output.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
