//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use shoelace::{AreaError, DigPlanError, Point};

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML vertex list: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("line {line}: expected \"x,y\" or \"x y\", got {text:?}")]
    BadVertexLine { line: usize, text: String },

    #[error("unknown mode {0:?} (see `shoelace modes`)")]
    UnknownMode(String),

    #[error(transparent)]
    Area(#[from] AreaError),

    #[error(transparent)]
    DigPlan(#[from] DigPlanError),

    #[error("{0} of {1} modes failed")]
    ModesFailed(usize, usize),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// How to read a vertex file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Pick from the file extension, then from the content
    Auto,
    Text,
    Json,
    Yaml,
}

/// A vertex in a JSON or YAML file: `[x, y]` or `{x: .., y: ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum VertexRecord {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<VertexRecord> for Point {
    fn from(record: VertexRecord) -> Self {
        match record {
            VertexRecord::Pair([x, y]) => Point::new(x, y),
            VertexRecord::Named { x, y } => Point::new(x, y),
        }
    }
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, CliError> {
    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io { path: "stdin".to_string(), source })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_string(), source })?
    };
    log::info!("read {} bytes from {}", content.len(), path);
    Ok(content)
}

/// Resolve `Auto` using the file extension, falling back to a look at the
/// first non-blank character.
pub fn detect_format(path: &str, content: &str, format: InputFormat) -> InputFormat {
    if format != InputFormat::Auto {
        return format;
    }

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => return InputFormat::Json,
        Some("yaml") | Some("yml") => return InputFormat::Yaml,
        Some("txt") => return InputFormat::Text,
        _ => {}
    }

    let trimmed = content.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return InputFormat::Json;
    }
    match trimmed.strip_prefix('-') {
        // negative coordinate, not a YAML sequence item
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') => InputFormat::Text,
        Some(_) => InputFormat::Yaml,
        None => InputFormat::Text,
    }
}

/// Parse a vertex list in the given (already resolved) format.
pub fn parse_vertices(content: &str, format: InputFormat) -> Result<Vec<Point>, CliError> {
    let points = match format {
        InputFormat::Json => {
            let records: Vec<VertexRecord> = serde_json::from_str(content)?;
            records.into_iter().map(Point::from).collect()
        }
        InputFormat::Yaml => {
            let records: Vec<VertexRecord> = serde_yaml::from_str(content)?;
            records.into_iter().map(Point::from).collect()
        }
        InputFormat::Text | InputFormat::Auto => parse_text_vertices(content)?,
    };
    log::debug!("parsed {} vertices", points.len());
    Ok(points)
}

/// One vertex per line, `x,y` or `x y`. Blank lines and `#` comments are
/// skipped.
fn parse_text_vertices(content: &str) -> Result<Vec<Point>, CliError> {
    let mut points = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let bad = || CliError::BadVertexLine { line: i + 1, text: raw.to_string() };
        let fields: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        let [x, y] = fields.as_slice() else {
            return Err(bad());
        };
        let x: f64 = x.parse().map_err(|_| bad())?;
        let y: f64 = y.parse().map_err(|_| bad())?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Print whole numbers without a trailing `.0`.
pub fn format_area(area: f64) -> String {
    if area.fract() == 0.0 && area.abs() < 1e15 {
        format!("{}", area as i64)
    } else {
        format!("{}", area)
    }
}
