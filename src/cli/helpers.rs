//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use clap::ValueEnum;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::set::UniqueCollection;
use crate::core::Config;

/// Raw field values for one PC, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub model: String,
    pub year: i32,
    pub manufacturer: String,
    pub components: UniqueCollection<String>,
}

/// Parse a `MODEL|YEAR|MANUFACTURER|COMP1,COMP2` record spec
///
/// Fields are trimmed. The component list may be empty, and repeated
/// components collapse. Only the syntax is checked here; domain validation
/// belongs to the factory.
pub fn parse_pc_spec(spec: &str) -> std::result::Result<RawRecord, String> {
    let parts: Vec<&str> = spec.split('|').map(str::trim).collect();
    let [model, year, manufacturer, components] = parts.as_slice() else {
        return Err(format!(
            "expected 4 '|'-separated fields (MODEL|YEAR|MANUFACTURER|COMPONENTS), found {}",
            parts.len()
        ));
    };

    let year = year
        .parse::<i32>()
        .map_err(|_| format!("year '{}' is not an integer", year))?;

    let components = components
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();

    Ok(RawRecord {
        model: model.to_string(),
        year,
        manufacturer: manufacturer.to_string(),
        components,
    })
}

/// Pick the output format: `--format` first, then config, then the text report
pub fn resolve_format(global: &GlobalOpts, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = global.format {
        return Ok(format);
    }
    match config.default_format.as_deref() {
        Some(name) => OutputFormat::from_str(name, true)
            .map_err(|_| miette::miette!("Unknown default_format '{}' in config (use report, md or json)", name)),
        None => Ok(OutputFormat::default()),
    }
}

/// Write the content to a file, creating parent directories as needed
pub fn write_file(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).into_diagnostic()?;
    }
    let file = File::create(path).into_diagnostic()?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).into_diagnostic()?;
    writer.flush().into_diagnostic()?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Report written");
    Ok(())
}

/// Write to the given file, or stdout when no path is given
pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            write_file(content, path)?;
            println!("Report written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
