//! Area command implementation.

use serde::Serialize;

use shoelace::{AreaError, AreaMode, Polygon};

use super::common::{
    detect_format, format_area, parse_vertices, read_input, CliError, InputFormat, OutputFormat,
};

/// One mode's outcome in JSON output.
#[derive(Serialize)]
struct JsonModeResult {
    mode: &'static str,
    counts_cells: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonAreaOutput {
    vertices: usize,
    clockwise: bool,
    results: Vec<JsonModeResult>,
}

/// Resolve a `--mode` value: a single mode name or `all`.
pub fn resolve_modes(name: &str) -> Result<Vec<AreaMode>, CliError> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(AreaMode::all().to_vec());
    }
    AreaMode::from_name(name)
        .map(|mode| vec![mode])
        .ok_or_else(|| CliError::UnknownMode(name.to_string()))
}

/// Execute the area command.
pub fn cmd_area(
    path: &str,
    mode_name: &str,
    format: OutputFormat,
    input_format: InputFormat,
) -> Result<(), CliError> {
    let modes = resolve_modes(mode_name)?;
    let content = read_input(path)?;
    let input_format = detect_format(path, &content, input_format);
    log::info!("reading vertices as {:?}", input_format);
    let polygon = Polygon::new(parse_vertices(&content, input_format)?);

    // A single mode propagates its error directly
    if let [mode] = modes.as_slice() {
        let area = polygon.area(*mode)?;
        match format {
            OutputFormat::Text => println!("{}", format_area(area)),
            OutputFormat::Json => {
                let output = JsonAreaOutput {
                    vertices: polygon.len(),
                    clockwise: polygon.is_clockwise(),
                    results: vec![JsonModeResult {
                        mode: mode.name(),
                        counts_cells: mode.counts_cells(),
                        area: Some(area),
                        error: None,
                    }],
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        return Ok(());
    }

    let results: Vec<(AreaMode, Result<f64, AreaError>)> = modes
        .iter()
        .map(|&mode| (mode, polygon.area(mode)))
        .collect();
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();

    match format {
        OutputFormat::Text => {
            for (mode, result) in &results {
                match result {
                    Ok(area) => println!("{:<12} {}{}", mode.name(), format_area(*area), unit_suffix(*mode)),
                    Err(e) => println!("{:<12} error: {}", mode.name(), e),
                }
            }
        }
        OutputFormat::Json => {
            let output = JsonAreaOutput {
                vertices: polygon.len(),
                clockwise: polygon.is_clockwise(),
                results: results
                    .iter()
                    .map(|(mode, result)| JsonModeResult {
                        mode: mode.name(),
                        counts_cells: mode.counts_cells(),
                        area: result.as_ref().ok().copied(),
                        error: result.as_ref().err().map(|e| e.to_string()),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if failed > 0 {
        return Err(CliError::ModesFailed(failed, results.len()));
    }
    Ok(())
}

/// Cell-counting modes get a unit next to the number.
fn unit_suffix(mode: AreaMode) -> &'static str {
    if mode.counts_cells() { " cells" } else { "" }
}

/// Execute the modes command.
pub fn cmd_modes() {
    println!("Available modes:");
    for mode in AreaMode::all() {
        println!("  {:<12} {}", mode.name(), mode.description());
    }
}
