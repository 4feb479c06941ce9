//! Core geometry types for shoelace.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! In JS you'd write: `const point = { x: 1.0, y: 2.0 }`
//! In Rust, we define a `struct` with explicit types.
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = like console.log, lets you print with `{:?}`
//! - `Clone` = can duplicate the value (like spread: `{...obj}`)
//! - `Copy` = can copy implicitly (small stack values only)
//! - `PartialEq` = can compare with `==`

use crate::area::{polygon_area, AreaMode};
use crate::error::AreaError;

/// A 2D vertex with x,y coordinates.
///
/// Integer grid coordinates are stored as `f64` too - every integer up to
/// 2^53 is represented exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned bounding box of a vertex list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// An implicitly closed polygon: the last vertex connects back to the first.
///
/// ## Rust Lesson #4: Ownership & Vec
///
/// This struct OWNS its vertices. The area functions only ever BORROW them
/// (`&[Point]`), so computing an area can never change the caller's data.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are whole numbers.
    #[inline]
    pub fn is_lattice(&self) -> bool {
        self.x.fract() == 0.0 && self.y.fract() == 0.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

impl BoundingBox {
    /// Bounding box of `points`, or `None` for an empty slice.
    pub fn of(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some(Self { min_x, min_y, max_x, max_y })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Build a polygon from anything convertible to a `Point`.
    ///
    /// ```
    /// use shoelace::Polygon;
    ///
    /// let square = Polygon::from_coords([(0_i64, 0_i64), (2, 0), (2, 2), (0, 2)]);
    /// assert_eq!(square.vertices.len(), 4);
    /// ```
    pub fn from_coords<I, P>(coords: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::new(coords.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(&self.vertices)
    }

    /// Signed shoelace area.
    ///
    /// Positive for counter-clockwise winding (y up), negative for clockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.vertices)
    }

    /// In screen space (y down) the meaning flips: a "clockwise" polygon here
    /// is drawn counter-clockwise on screen.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Area of this polygon under the given mode.
    pub fn area(&self, mode: AreaMode) -> Result<f64, AreaError> {
        polygon_area(&self.vertices, mode)
    }
}

/// Twice the signed area: `Σ (x_i * y_{i+1} - x_{i+1} * y_i)` with the last
/// vertex wrapping to the first.
pub fn shoelace_sum(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y;
        sum -= points[j].x * points[i].y;
    }
    sum
}

/// Calculate signed area of a point sequence using the shoelace formula.
///
/// Returns 0.0 for fewer than 3 points.
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    shoelace_sum(points) / 2.0
}
