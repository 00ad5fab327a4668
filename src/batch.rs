//! Batch input: many texts from one file.
//!
//! Accepts either a JSON array of objects or JSON lines (one object per
//! line). Each object must carry a string `text` field; anything else is
//! skipped, counted and logged, never sent to the analyzer.

use std::path::Path;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BatchError {
    #[error("failed to read batch file: {path}")]
    #[diagnostic(
        code(sentiscope::batch::read),
        help("Check that the file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("batch file is not a JSON array: {message}")]
    #[diagnostic(
        code(sentiscope::batch::format),
        help(
            "Use a JSON array of objects with a \"text\" field, or JSON lines \
             with one such object per line."
        )
    )]
    Format { message: String },
}

pub type BatchResult<T> = std::result::Result<T, BatchError>;

/// A record that was not analysed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Zero-based record index (array position or line number).
    pub index: usize,
    pub reason: String,
}

/// Parsed batch input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Texts to analyse, in input order.
    pub texts: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.texts.len() + self.skipped.len()
    }

    fn accept(&mut self, index: usize, record: Result<serde_json::Value, String>) {
        let reason = match record {
            Err(message) => message,
            Ok(value) => match value.get("text") {
                Some(serde_json::Value::String(text)) if !text.trim().is_empty() => {
                    self.texts.push(text.clone());
                    return;
                }
                Some(serde_json::Value::String(_)) => "empty text".to_string(),
                Some(_) => "text is not a string".to_string(),
                None => "missing text field".to_string(),
            },
        };
        tracing::warn!(index, reason = %reason, "skipping batch record");
        self.skipped.push(SkippedRecord { index, reason });
    }
}

/// Read and parse a batch file.
pub fn load_records(path: &Path) -> BatchResult<BatchReport> {
    let content = std::fs::read_to_string(path).map_err(|e| BatchError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let report = parse_records(&content)?;
    tracing::info!(
        path = %path.display(),
        accepted = report.texts.len(),
        skipped = report.skipped.len(),
        "loaded batch records"
    );
    Ok(report)
}

/// Parse batch content already in memory.
pub fn parse_records(content: &str) -> BatchResult<BatchReport> {
    let mut report = BatchReport::default();

    if content.trim_start().starts_with('[') {
        let records: Vec<serde_json::Value> =
            serde_json::from_str(content).map_err(|e| BatchError::Format {
                message: e.to_string(),
            })?;
        for (index, record) in records.into_iter().enumerate() {
            report.accept(index, Ok(record));
        }
        return Ok(report);
    }

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"));
        report.accept(index, record);
    }
    Ok(report)
}
