//! Process command - split a single document file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use serde_json::Value;
use tracing::{debug, info};

use hdsplit_core::{HeaderDetailSplitter, SplitterConfig};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (plain-text document, or a JSON record with --record)
    #[arg(required = true)]
    input: PathBuf,

    /// Treat the input as a JSON record instead of a bare document
    #[arg(long)]
    record: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of output records
    Json,
    /// One JSON record per line
    Jsonl,
    /// CSV with a union-of-keys header row
    Csv,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let splitter = HeaderDetailSplitter::new(config)?;
    let raw = fs::read_to_string(&args.input)?;

    let records = if args.record {
        let record: Value = serde_json::from_str(&raw)?;
        splitter.split_record(&record)?
    } else {
        splitter.split_text(&raw)
    };

    debug!("Split into {} records in {:?}", records.len(), start.elapsed());

    let output = format_records(&records, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} records written to {}",
            style("✓").green(),
            records.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Load the splitter configuration, falling back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<SplitterConfig> {
    Ok(if let Some(path) = config_path {
        SplitterConfig::from_file(std::path::Path::new(path))?
    } else {
        SplitterConfig::default()
    })
}

pub(crate) fn format_records(records: &[Value], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Jsonl => {
            let lines = records
                .iter()
                .map(serde_json::to_string)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(lines.join("\n"))
        }
        OutputFormat::Csv => format_csv(records),
    }
}

fn format_csv(records: &[Value]) -> anyhow::Result<String> {
    // union of keys across all records, in first-seen order
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        if let Some(map) = record.as_object() {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    // the csv crate rejects empty records
    if columns.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&columns)?;

    for record in records {
        let map = record.as_object();
        let row: Vec<String> = columns
            .iter()
            .map(|col| {
                map.and_then(|m| m.get(col))
                    .map(render_csv_value)
                    .unwrap_or_default()
            })
            .collect();
        wtr.write_record(&row)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn render_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
