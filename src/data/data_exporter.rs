use anyhow::{anyhow, Result};
use std::fmt;
use tracing::info;

use crate::ui::layout_sequencer::TableLayout;

/// Export formats offered by the export menu. Any other name is accepted
/// and passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Sql,
    Other(String),
}

impl ExportFormat {
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(anyhow!("Export format name is empty"));
        }

        Ok(match name.to_ascii_lowercase().as_str() {
            "csv" => ExportFormat::Csv,
            "sql" => ExportFormat::Sql,
            _ => ExportFormat::Other(name.to_string()),
        })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Sql => write!(f, "SQL"),
            ExportFormat::Other(name) => write!(f, "{}", name.to_uppercase()),
        }
    }
}

pub struct DataExporter;

impl DataExporter {
    /// Accept an export request. Nothing is written; the request is logged
    /// and the parsed format is returned to the caller.
    pub fn export(format_name: &str, layout: &TableLayout) -> Result<ExportFormat> {
        let format = ExportFormat::parse(format_name)?;
        info!(
            target: "export",
            "Exporting as {} ({} rendered rows)", format, layout.row_count()
        );
        Ok(format)
    }
}
