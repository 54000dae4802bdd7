//! Command line handling and output rendering for the `statsdesc` binary.

use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;

use crate::collections::{MetricDescriptorCollection, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One aligned line per descriptor
    #[default]
    Table,
    /// Pretty printed JSON array of descriptors
    Json,
}

/// Fetches the statistics description from the configured server and prints
/// one line per metric descriptor.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "statsdesc", version)]
pub struct CliArgs {
    /// Configuration file path (defaults to ./config.yaml)
    #[arg(short, long, env = "STATSDESC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long)]
    pub print_schema: bool,
}

/// Render the collection in the requested format.
pub fn render(
    collection: &MetricDescriptorCollection,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let records = collection
                .iter()
                .map(|d| d.to_map().map(Value::Object))
                .collect::<Result<Vec<Value>, _>>()?;
            serde_json::to_string_pretty(&records)
        }
        OutputFormat::Table => Ok(render_table(collection)),
    }
}

fn render_table(collection: &MetricDescriptorCollection) -> String {
    const HEADER: [&str; 5] = ["GROUP", "IDENTIFIER", "TYPE", "UNITS", "NAME"];

    let rows: Vec<[&str; 5]> = collection
        .iter()
        .map(|d| {
            [
                d.group.as_str(),
                d.identifier.as_str(),
                d.figure_type.as_str(),
                d.units.as_str(),
                d.label(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str; 5]| -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i + 1 == cells.len() {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
        }
        line
    };

    let mut out = format_row(&HEADER);
    for row in &rows {
        out.push('\n');
        out.push_str(&format_row(row));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FigureType, MetricDescriptor, Units};
    use serde_json::json;

    fn collection() -> MetricDescriptorCollection {
        let mut col = MetricDescriptorCollection::new();
        col.add(MetricDescriptor::new(
            "userTime",
            "system",
            "User Time",
            FigureType::Accumulated,
            Units::Seconds,
        ));
        col.add(MetricDescriptor::new(
            "httpConnections",
            "client",
            "Client Connections",
            FigureType::Current,
            Units::Number,
        ));
        col
    }

    #[test]
    fn test_parse_defaults() {
        let args = CliArgs::try_parse_from(["statsdesc"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(!args.print_schema);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::try_parse_from([
            "statsdesc",
            "--config",
            "/etc/statsdesc.yaml",
            "-f",
            "json",
            "--print-schema",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/statsdesc.yaml")));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.print_schema);
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::try_parse_from(["statsdesc", "--config"]).is_err());
        assert!(CliArgs::try_parse_from(["statsdesc", "--format", "yaml"]).is_err());
        assert!(CliArgs::try_parse_from(["statsdesc", "--verbose"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render(&collection(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "GROUP   IDENTIFIER       TYPE         UNITS    NAME"
        );
        assert_eq!(
            lines[1],
            "system  userTime         accumulated  seconds  User Time"
        );
        assert_eq!(
            lines[2],
            "client  httpConnections  current      number   Client Connections"
        );
    }

    #[test]
    fn test_render_json_keeps_order() {
        let rendered = render(&collection(), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["identifier"], json!("userTime"));
        assert_eq!(value[1]["identifier"], json!("httpConnections"));
        assert_eq!(value[1]["type"], json!("current"));
    }

    #[test]
    fn test_render_empty_collection() {
        let col = MetricDescriptorCollection::new();
        assert_eq!(render(&col, OutputFormat::Json).unwrap(), "[]");
        assert_eq!(
            render(&col, OutputFormat::Table).unwrap(),
            "GROUP  IDENTIFIER  TYPE  UNITS  NAME"
        );
    }
}
