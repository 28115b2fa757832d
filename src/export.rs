//! Binding view export (CSV / JSON)
//!
//! Pure serialization functions, no filesystem I/O. The caller writes the
//! returned string to disk.

use crate::error::ExportResult;
use crate::view::KeyBindingView;
use std::path::Path;

/// Column headers, matching the JSON field names
pub const COLUMNS: [&str; 8] = [
    "Area",
    "Category",
    "Action",
    "PrimaryDevice",
    "PrimaryKey",
    "SecondaryDevice",
    "SecondaryKey",
    "BindEdVariable",
];

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension for this format (without leading dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(ExportFormat::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(ExportFormat::Json)
        } else {
            None
        }
    }

    /// Serialize views in this format
    pub fn render(&self, views: &[KeyBindingView]) -> ExportResult<String> {
        match self {
            ExportFormat::Csv => to_csv(views),
            ExportFormat::Json => Ok(to_json(views)),
        }
    }
}

/// Cell values of one view in [`COLUMNS`] order. A missing secondary is an empty cell.
pub fn row_cells(view: &KeyBindingView) -> [&str; 8] {
    [
        view.area.as_str(),
        view.category.as_str(),
        view.action.as_str(),
        view.primary_device.as_str(),
        view.primary_key.as_str(),
        view.secondary_device.as_deref().unwrap_or(""),
        view.secondary_key.as_deref().unwrap_or(""),
        view.bind_ed_variable.as_str(),
    ]
}

/// Serialize views as RFC 4180 CSV with a header row.
pub fn to_csv(views: &[KeyBindingView]) -> ExportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for view in views {
        writer.write_record(row_cells(view))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Serialize views as a JSON array of objects; a missing secondary is `null`.
pub fn to_json(views: &[KeyBindingView]) -> String {
    serde_json::to_string_pretty(views).unwrap_or_else(|_| "[]".to_string())
}
