//! Tabular feedback source: a header row followed by response rows.

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

pub const CLASS_COLUMN: &str = "What class?";
pub const WENT_WELL_COLUMN: &str = "What went well?";
pub const IMPROVEMENTS_COLUMN: &str = "What are some ideas to improve it?";

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to parse sheet: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Sheet has no header row")]
    MissingHeader,
    #[error("No column matching '{0}'")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;

/// Feedback collected for one class, ready to be summarized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub went_well: String,
    pub improvements: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Parses a JSON array of rows. Cells may be strings, numbers, booleans
    /// or null and are rendered as text.
    pub fn from_json(json: &str) -> Result<Self> {
        let grid: Vec<Vec<Value>> = serde_json::from_str(json)?;
        Self::from_grid(grid)
    }

    pub fn from_grid(grid: Vec<Vec<Value>>) -> Result<Self> {
        let mut rows = grid
            .into_iter()
            .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
        let headers = rows.next().ok_or(SheetError::MissingHeader)?;
        let rows: Vec<_> = rows.collect();
        debug!("loaded sheet with {} columns and {} rows", headers.len(), rows.len());
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of the column whose header is exactly `name`.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SheetError::MissingColumn(name.to_string()))
    }

    /// Index of the first column whose header contains `fragment`.
    pub fn column_containing(&self, fragment: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.contains(fragment))
            .ok_or_else(|| SheetError::MissingColumn(fragment.to_string()))
    }

    /// Distinct non-empty class ids, in first-seen order.
    pub fn classes(&self) -> Result<Vec<String>> {
        let col = self.column(CLASS_COLUMN)?;
        let mut seen = Vec::new();
        for value in self.rows.iter().filter_map(|row| row.get(col)) {
            if !value.is_empty() && !seen.contains(value) {
                seen.push(value.clone());
            }
        }
        Ok(seen)
    }

    /// Joins the feedback of every row belonging to `class_id`.
    pub fn feedback_for(&self, class_id: &str) -> Result<Feedback> {
        let class_col = self.column(CLASS_COLUMN)?;
        let went_well_col = self.column_containing(WENT_WELL_COLUMN)?;
        let improvements_col = self.column(IMPROVEMENTS_COLUMN)?;

        let rows: Vec<_> = self
            .rows
            .iter()
            .filter(|row| row.get(class_col).is_some_and(|c| c == class_id))
            .collect();
        if rows.is_empty() {
            warn!("no responses found for class '{class_id}'");
        }

        let join = |col: usize| {
            rows.iter()
                .map(|row| row.get(col).map_or(String::new(), |c| c.replace('\n', " ")))
                .collect::<Vec<_>>()
                .join(" ")
        };

        Ok(Feedback {
            went_well: join(went_well_col),
            improvements: join(improvements_col),
        })
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
