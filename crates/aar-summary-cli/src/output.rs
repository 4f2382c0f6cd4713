use aar_summary_engine::{Document, HtmlSink, TextSink, render};
use anyhow::{Context, Result};
use log::info;
use std::{
    io::{self, Write},
    path::Path,
};

use crate::cli::Format;

pub fn format_document(doc: &Document, title: &str, format: Format) -> Result<String> {
    Ok(match format {
        Format::Html => render(doc, HtmlSink::new(title)),
        Format::Text => render(doc, TextSink::new()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(doc)?;
            json.push('\n');
            json
        }
    })
}

/// Writes `content` to `path`, or stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
