//! Dig plans: trench instructions that outline a lagoon on a grid.
//!
//! A plan is one instruction per line:
//!
//! ```text
//! R 6 (#70c710)
//! D 5 (#0dc571)
//! L 2 (#5713f0)
//! ```
//!
//! Read plainly, each line digs `METERS` cells in direction `DIR`. The
//! color code can also be read as a second, much larger plan: its first
//! five hex digits are the distance and the last digit the direction
//! (`0`=R, `1`=D, `2`=L, `3`=U).
//!
//! The trench is a rectilinear loop of cell centers, so the lagoon volume
//! (trench plus interior) is a lattice-cell count.

use crate::area::{lattice_cell_count, polygon_area, AreaMode};
use crate::error::DigPlanError;
use crate::geometry::Point;

/// Digging direction. Screen orientation: `Down` increases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_letter(s: &str) -> Option<Direction> {
        match s {
            "U" => Some(Direction::Up),
            "D" => Some(Direction::Down),
            "L" => Some(Direction::Left),
            "R" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Direction encoded as the last digit of a color code.
    pub fn from_hex_digit(c: char) -> Option<Direction> {
        match c {
            '0' => Some(Direction::Right),
            '1' => Some(Direction::Down),
            '2' => Some(Direction::Left),
            '3' => Some(Direction::Up),
            _ => None,
        }
    }

    /// Unit step (dx, dy).
    #[inline]
    pub fn offset(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// One trench instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigStep {
    pub dir: Direction,
    pub meters: i64,
}

/// A closed trench loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigPlan {
    steps: Vec<DigStep>,
}

impl DigPlan {
    /// Parse using the `DIR METERS` fields. The color code is optional and
    /// ignored.
    pub fn parse(input: &str) -> Result<DigPlan, DigPlanError> {
        let steps = plan_lines(input)
            .map(|(line, text)| -> Result<DigStep, DigPlanError> {
                let mut parts = text.split_whitespace();
                let dir_text = parts.next().ok_or(DigPlanError::MissingField { line, field: "direction" })?;
                let dir = Direction::from_letter(dir_text).ok_or_else(|| DigPlanError::UnknownDirection {
                    line,
                    found: dir_text.to_string(),
                })?;

                let mag_text = parts.next().ok_or(DigPlanError::MissingField { line, field: "distance" })?;
                let meters = mag_text.parse::<u32>().map_err(|_| DigPlanError::InvalidDistance {
                    line,
                    found: mag_text.to_string(),
                })?;

                Ok(DigStep { dir, meters: i64::from(meters) })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_steps(steps)
    }

    /// Parse using only the color codes (`(#DDDDDd)`).
    pub fn parse_hex(input: &str) -> Result<DigPlan, DigPlanError> {
        let steps = plan_lines(input)
            .map(|(line, text)| -> Result<DigStep, DigPlanError> {
                let color = text
                    .split_whitespace()
                    .nth(2)
                    .ok_or(DigPlanError::MissingField { line, field: "color code" })?;
                decode_color(line, color)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_steps(steps)
    }

    /// Build a plan from steps, checking that it returns to its start.
    pub fn from_steps(steps: Vec<DigStep>) -> Result<DigPlan, DigPlanError> {
        if steps.is_empty() {
            return Err(DigPlanError::Empty);
        }

        let (x, y) = steps.iter().fold((0i64, 0i64), |(x, y), step| {
            let (dx, dy) = step.dir.offset();
            (x + dx * step.meters, y + dy * step.meters)
        });
        if (x, y) != (0, 0) {
            return Err(DigPlanError::NotClosed { x, y });
        }

        Ok(DigPlan { steps })
    }

    pub fn steps(&self) -> &[DigStep] {
        &self.steps
    }

    /// Total trench length in cells.
    pub fn trench_length(&self) -> i64 {
        self.steps.iter().map(|s| s.meters).sum()
    }

    /// Corner cells of the trench, one per step, shifted so the smallest
    /// x and y are both 1.
    pub fn vertices(&self) -> Vec<(i64, i64)> {
        let mut x = 0i64;
        let mut y = 0i64;
        let mut min_x = 0i64;
        let mut min_y = 0i64;

        let raw: Vec<(i64, i64)> = self
            .steps
            .iter()
            .map(|step| {
                let (dx, dy) = step.dir.offset();
                x += dx * step.meters;
                y += dy * step.meters;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                (x, y)
            })
            .collect();

        let x_offset = 1 - min_x;
        let y_offset = 1 - min_y;
        raw.into_iter().map(|(x, y)| (x + x_offset, y + y_offset)).collect()
    }

    /// Cells dug out: the trench itself plus everything it encloses.
    pub fn lagoon_volume(&self) -> Result<i64, DigPlanError> {
        Ok(lattice_cell_count(&self.vertices())?)
    }

    /// Area of the trench polygon under any mode.
    pub fn area(&self, mode: AreaMode) -> Result<f64, DigPlanError> {
        let points: Vec<Point> = self.vertices().into_iter().map(Point::from).collect();
        Ok(polygon_area(&points, mode)?)
    }
}

/// Non-blank lines with their 1-based line numbers.
fn plan_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty())
}

fn decode_color(line: usize, color: &str) -> Result<DigStep, DigPlanError> {
    let invalid = || DigPlanError::InvalidColor { line, found: color.to_string() };

    let hex = color
        .strip_prefix("(#")
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let (dist_s, dir_s) = hex.split_at(5);
    // from_str_radix alone would take a leading sign
    if !dist_s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let meters = i64::from_str_radix(dist_s, 16).map_err(|_| invalid())?;
    let dir = dir_s
        .chars()
        .next()
        .and_then(Direction::from_hex_digit)
        .ok_or_else(invalid)?;

    Ok(DigStep { dir, meters })
}
