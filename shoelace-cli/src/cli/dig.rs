//! Dig command implementation.

use serde::Serialize;

use shoelace::DigPlan;

use super::area::resolve_modes;
use super::common::{format_area, read_input, CliError, OutputFormat};

#[derive(Serialize)]
struct JsonDigOutput {
    steps: usize,
    trench_length: i64,
    volume: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    areas: Vec<JsonDigArea>,
}

#[derive(Serialize)]
struct JsonDigArea {
    mode: &'static str,
    area: f64,
}

/// Execute the dig command.
pub fn cmd_dig(
    path: &str,
    hex: bool,
    mode_name: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let content = read_input(path)?;
    let plan = if hex {
        DigPlan::parse_hex(&content)?
    } else {
        DigPlan::parse(&content)?
    };
    log::info!("dig plan: {} steps, {} cells of trench", plan.steps().len(), plan.trench_length());

    let volume = plan.lagoon_volume()?;

    let modes = match mode_name {
        Some(name) => resolve_modes(name)?,
        None => Vec::new(),
    };
    let mut areas = Vec::with_capacity(modes.len());
    for mode in modes {
        areas.push(JsonDigArea { mode: mode.name(), area: plan.area(mode)? });
    }

    match format {
        OutputFormat::Text => {
            println!("{}", volume);
            for a in &areas {
                println!("{:<12} {}", a.mode, format_area(a.area));
            }
        }
        OutputFormat::Json => {
            let output = JsonDigOutput {
                steps: plan.steps().len(),
                trench_length: plan.trench_length(),
                volume,
                areas,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
