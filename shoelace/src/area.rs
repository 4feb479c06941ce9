//! Polygon area under four counting modes.
//!
//! All modes share the same closing/summation step (the shoelace sum over
//! consecutive vertices, last wrapping to first). They differ only in how
//! vertex coordinates are adjusted before that sum:
//!
//! - [`AreaMode::Continuous`] - no adjustment, plain geometric area.
//! - [`AreaMode::CellBumpRounded`] - shift every vertex away from the
//!   bounding box's near corner, then round to the lattice.
//! - [`AreaMode::CellBumpEdgewise`] - push every edge half a cell outward.
//! - [`AreaMode::CellBumpSimplified`] - integer-only: add each edge's
//!   lattice steps to the doubled area.
//!
//! The three cell modes treat integer vertices as cell centers and count
//! enclosed cells. They are separate empirical corrections and are only
//! guaranteed to agree on axis-aligned (rectilinear) polygons.
//!
//! Self-intersecting polygons are accepted; the number returned for them
//! has no geometric meaning.

use log::{debug, trace};

use crate::error::AreaError;
use crate::geometry::{BoundingBox, Point, shoelace_sum};

/// Offset added before scaling in [`cell_bump_rounded`].
const ROUNDED_BUMP_BIAS: f64 = 0.25;

/// How far [`cell_bump_edgewise`] pushes each edge outward.
const HALF_CELL: f64 = 0.5;

/// Available area modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaMode {
    Continuous,
    CellBumpRounded,
    CellBumpEdgewise,
    CellBumpSimplified,
}

impl AreaMode {
    /// Get all available modes.
    pub fn all() -> &'static [AreaMode] {
        &[
            AreaMode::Continuous,
            AreaMode::CellBumpRounded,
            AreaMode::CellBumpEdgewise,
            AreaMode::CellBumpSimplified,
        ]
    }

    /// Get mode name as string.
    pub fn name(&self) -> &'static str {
        match self {
            AreaMode::Continuous => "continuous",
            AreaMode::CellBumpRounded => "rounded",
            AreaMode::CellBumpEdgewise => "edgewise",
            AreaMode::CellBumpSimplified => "simplified",
        }
    }

    /// One-line description for `shoelace modes`.
    pub fn description(&self) -> &'static str {
        match self {
            AreaMode::Continuous => "Exact geometric area of the polygon",
            AreaMode::CellBumpRounded => "Bounding-box scaled bump, rounded to the lattice",
            AreaMode::CellBumpEdgewise => "Each edge pushed half a cell outward",
            AreaMode::CellBumpSimplified => "Integer-only: doubled area plus edge steps",
        }
    }

    /// Parse mode from name string.
    ///
    /// Accepts the short name as well as the `cell-bump-*` long form.
    pub fn from_name(name: &str) -> Option<AreaMode> {
        let name = name.to_lowercase();
        let short = name.strip_prefix("cell-bump-").unwrap_or(&name);
        match short {
            "continuous" => Some(AreaMode::Continuous),
            "rounded" => Some(AreaMode::CellBumpRounded),
            "edgewise" => Some(AreaMode::CellBumpEdgewise),
            "simplified" => Some(AreaMode::CellBumpSimplified),
            _ => None,
        }
    }

    /// Whether the result counts lattice cells rather than geometric area.
    pub fn counts_cells(&self) -> bool {
        !matches!(self, AreaMode::Continuous)
    }
}

impl std::fmt::Display for AreaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the area of the closed polygon `points` under `mode`.
///
/// Never mutates `points`. Fails with [`AreaError::InvalidInput`] for
/// fewer than 3 vertices and [`AreaError::NonFiniteCoordinate`] for NaN or
/// infinite coordinates, before any mode-specific checks.
///
/// ```
/// use shoelace::{polygon_area, AreaMode, Point};
///
/// let square: Vec<Point> = [(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// assert_eq!(polygon_area(&square, AreaMode::Continuous).unwrap(), 4.0);
/// assert_eq!(polygon_area(&square, AreaMode::CellBumpSimplified).unwrap(), 9.0);
/// ```
pub fn polygon_area(points: &[Point], mode: AreaMode) -> Result<f64, AreaError> {
    let area = match mode {
        AreaMode::Continuous => continuous_area(points),
        AreaMode::CellBumpRounded => cell_bump_rounded(points),
        AreaMode::CellBumpEdgewise => cell_bump_edgewise(points),
        AreaMode::CellBumpSimplified => cell_bump_simplified(points),
    }?;
    debug!("{} area of {} vertices: {}", mode, points.len(), area);
    Ok(area)
}

/// Plain shoelace area: `|Σ (x_i * y_{i+1} - x_{i+1} * y_i)| / 2`.
pub fn continuous_area(points: &[Point]) -> Result<f64, AreaError> {
    validate(points)?;
    Ok(shoelace_sum(points).abs() / 2.0)
}

/// Bounding-box scaled bump.
///
/// Each coordinate moves by `(coord - min + 0.25) / extent` along its axis,
/// is rounded to the nearest integer (ties to even), and the shoelace sum
/// runs on the result. Fails with [`AreaError::DegenerateBoundingBox`] when
/// all vertices share an x or a y coordinate.
pub fn cell_bump_rounded(points: &[Point]) -> Result<f64, AreaError> {
    validate(points)?;
    let Some(bbox) = BoundingBox::of(points) else {
        return Err(AreaError::InvalidInput { count: points.len() });
    };

    let width = bbox.width();
    let height = bbox.height();
    if width == 0.0 || height == 0.0 {
        return Err(AreaError::DegenerateBoundingBox { width, height });
    }

    let x_scale = 1.0 / width;
    let y_scale = 1.0 / height;
    debug!(
        "rounded bump: bbox ({}, {})..({}, {}), scale ({}, {})",
        bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y, x_scale, y_scale
    );

    let bumped: Vec<Point> = points
        .iter()
        .map(|p| {
            let x = p.x + (p.x - bbox.min_x + ROUNDED_BUMP_BIAS) * x_scale;
            let y = p.y + (p.y - bbox.min_y + ROUNDED_BUMP_BIAS) * y_scale;
            Point::new(x.round_ties_even(), y.round_ties_even())
        })
        .collect();
    debug!("rounded bump: adjusted vertices {:?}", bumped);

    Ok(shoelace_sum(&bumped).abs() / 2.0)
}

/// Edge-wise half-cell closing.
///
/// Every edge is moved half a unit along its outward normal. Each axis is
/// handled on its own: an endpoint's coordinate shifts by `±0.5` according
/// to the sign of the outward normals of the two edges meeting there, so a
/// corner lands on the outer corner of its cell and a straight run stays
/// on the cell boundary. Orientation comes from the sign of the raw
/// shoelace sum, so winding order does not matter.
///
/// Exact cell count for rectilinear lattice polygons; an approximation for
/// slanted edges.
pub fn cell_bump_edgewise(points: &[Point]) -> Result<f64, AreaError> {
    validate(points)?;
    let n = points.len();

    let orientation = if shoelace_sum(points) < 0.0 { -1.0 } else { 1.0 };
    let normals: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            let dx = step_sign(b.x - a.x);
            let dy = step_sign(b.y - a.y);
            (orientation * dy, -orientation * dx)
        })
        .collect();

    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let prev = (i + n - 1) % n;

        let start = push_outward(points[i], normals[prev], normals[i]);
        let end = push_outward(points[j], normals[i], normals[j]);
        trace!("edge {}: ({}, {}) -> ({}, {})", i, start.x, start.y, end.x, end.y);

        sum += start.x * end.y;
        sum -= end.x * start.y;
    }
    debug!("edgewise bump: orientation {}, doubled area {}", orientation, sum);

    Ok(sum.abs() / 2.0)
}

/// Integer-only edge bump.
///
/// Requires lattice vertices; see [`lattice_cell_count`].
pub fn cell_bump_simplified(points: &[Point]) -> Result<f64, AreaError> {
    validate(points)?;
    let mut lattice = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        if !p.is_lattice() {
            return Err(AreaError::NonLatticeVertex { index });
        }
        lattice.push((to_lattice(p.x)?, to_lattice(p.y)?));
    }
    Ok(lattice_cell_count(&lattice)? as f64)
}

/// Number of unit cells enclosed by a lattice polygon whose vertices are
/// cell centers.
///
/// Per edge, accumulates the shoelace cross term and the number of lattice
/// steps along the edge (`gcd(|dx|, |dy|)`, which is just the length for an
/// axis-aligned edge). The result is `(|Σ cross| + Σ steps) / 2 + 1`: the
/// interior points plus the boundary points (Pick's theorem).
///
/// Sums run in `i128`; a count that does not fit in `i64` is
/// [`AreaError::Overflow`].
pub fn lattice_cell_count(points: &[(i64, i64)]) -> Result<i64, AreaError> {
    let n = points.len();
    if n < 3 {
        return Err(AreaError::InvalidInput { count: n });
    }

    let mut cross = 0i128;
    let mut steps = 0i128;
    for i in 0..n {
        let (x1, y1) = widen(points[i]);
        let (x2, y2) = widen(points[(i + 1) % n]);
        // each product is below 2^126, so only the running sums can overflow
        let term = x1 * y2 - x2 * y1;
        cross = cross.checked_add(term).ok_or(AreaError::Overflow)?;
        steps = steps
            .checked_add(gcd((x2 - x1).abs(), (y2 - y1).abs()))
            .ok_or(AreaError::Overflow)?;
    }
    debug!("lattice count: doubled area {}, boundary steps {}", cross, steps);

    let doubled = cross.checked_abs().and_then(|c| c.checked_add(steps)).ok_or(AreaError::Overflow)?;
    i64::try_from(doubled / 2 + 1).map_err(|_| AreaError::Overflow)
}

#[inline]
fn widen((x, y): (i64, i64)) -> (i128, i128) {
    (i128::from(x), i128::from(y))
}

/// Whole-number coordinate as `i64`, rejecting values the cast would saturate.
fn to_lattice(v: f64) -> Result<i64, AreaError> {
    // 2^63 is exact in f64; i64::MIN is -2^63
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if (-LIMIT..LIMIT).contains(&v) {
        Ok(v as i64)
    } else {
        Err(AreaError::Overflow)
    }
}

fn validate(points: &[Point]) -> Result<(), AreaError> {
    if points.len() < 3 {
        return Err(AreaError::InvalidInput { count: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(AreaError::NonFiniteCoordinate { index });
    }
    Ok(())
}

/// Like `f64::signum`, but zero stays zero.
#[inline]
fn step_sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
fn push_outward(p: Point, incoming: (f64, f64), outgoing: (f64, f64)) -> Point {
    Point::new(
        p.x + HALF_CELL * step_sign(incoming.0 + outgoing.0),
        p.y + HALF_CELL * step_sign(incoming.1 + outgoing.1),
    )
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TRENCH: [(i64, i64); 14] = [
        (1, 0), (7, 0), (7, 5), (5, 5), (5, 7), (7, 7), (7, 9),
        (2, 9), (2, 7), (1, 7), (1, 5), (3, 5), (3, 2), (1, 2),
    ];

    const NOTCHED: [(i64, i64); 8] = [
        (1, 1), (3, 1), (3, 3), (5, 3), (5, 1), (7, 1), (7, 5), (1, 5),
    ];

    const BRIDGE: [(i64, i64); 8] = [
        (1, 6), (7, 6), (7, 1), (5, 1), (5, 3), (3, 3), (3, 1), (1, 1),
    ];

    const PENTAGON: [(i64, i64); 5] = [(2, 1), (10, 1), (8, 6), (11, 7), (7, 10)];

    const SQUARE: [(i64, i64); 4] = [(1, 1), (3, 1), (3, 3), (1, 3)];

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn area(coords: &[(i64, i64)], mode: AreaMode) -> f64 {
        polygon_area(&pts(coords), mode).unwrap()
    }

    #[test]
    fn mode_names_roundtrip() {
        for mode in AreaMode::all() {
            assert_eq!(AreaMode::from_name(mode.name()), Some(*mode));
        }
        assert_eq!(AreaMode::from_name("cell-bump-edgewise"), Some(AreaMode::CellBumpEdgewise));
        assert_eq!(AreaMode::from_name("Rounded"), Some(AreaMode::CellBumpRounded));
        assert_eq!(AreaMode::from_name("pixel"), None);
        assert!(!AreaMode::Continuous.counts_cells());
        assert!(AreaMode::CellBumpSimplified.counts_cells());
    }

    // ------------------------------------------------------------------
    // Continuous
    // ------------------------------------------------------------------

    #[test]
    fn continuous_square() {
        assert_eq!(area(&SQUARE, AreaMode::Continuous), 4.0);
    }

    #[test]
    fn continuous_known_shapes() {
        assert_eq!(area(&[(0, 0), (7, 0), (7, 3), (0, 3)], AreaMode::Continuous), 21.0);
        assert_eq!(area(&[(0, 0), (6, 0), (0, 4)], AreaMode::Continuous), 12.0);
        // trapezoid: (6 + 2) / 2 * 3
        assert_eq!(area(&[(0, 0), (6, 0), (4, 3), (2, 3)], AreaMode::Continuous), 12.0);
        assert_eq!(area(&NOTCHED, AreaMode::Continuous), 20.0);
        assert_eq!(area(&PENTAGON, AreaMode::Continuous), 41.0);
        assert_eq!(area(&TRENCH, AreaMode::Continuous), 42.0);
    }

    #[test]
    fn continuous_regular_polygon() {
        let n = 12;
        let r = 3.0;
        let poly: Vec<Point> = (0..n)
            .map(|i| {
                let t = i as f64 * std::f64::consts::TAU / n as f64;
                Point::new(r * t.cos(), r * t.sin())
            })
            .collect();
        let expected = 0.5 * n as f64 * r * r * (std::f64::consts::TAU / n as f64).sin();
        let got = continuous_area(&poly).unwrap();
        assert!((got - expected).abs() < 1e-9, "expected {}, got {}", expected, got);
    }

    #[test]
    fn continuous_fractional_vertices() {
        let poly = vec![
            Point::new(0.5, 0.5),
            Point::new(2.5, 0.5),
            Point::new(2.5, 1.75),
            Point::new(0.5, 1.75),
        ];
        assert_eq!(continuous_area(&poly).unwrap(), 2.5);
    }

    #[test]
    fn continuous_rotation_and_reversal_invariant() {
        let mut rng = StdRng::seed_from_u64(18);
        for _ in 0..50 {
            let n: usize = rng.random_range(3..12);
            // random convex polygon: sorted angles on a circle
            let mut angles: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..std::f64::consts::TAU)).collect();
            angles.sort_by(|a, b| a.total_cmp(b));
            let poly: Vec<Point> = angles
                .iter()
                .map(|t| Point::new((10.0 * t.cos()).round(), (10.0 * t.sin()).round()))
                .collect();
            let base = continuous_area(&poly).unwrap();

            let shift = rng.random_range(0..n);
            let mut rotated = poly.clone();
            rotated.rotate_left(shift);
            assert_eq!(continuous_area(&rotated).unwrap(), base);

            let mut reversed = poly.clone();
            reversed.reverse();
            assert_eq!(continuous_area(&reversed).unwrap(), base);
        }
    }

    #[test]
    fn self_intersecting_still_returns_number() {
        // bow-tie: the two lobes cancel
        let bowtie = [(0, 0), (2, 2), (2, 0), (0, 2)];
        assert_eq!(area(&bowtie, AreaMode::Continuous), 0.0);
    }

    // ------------------------------------------------------------------
    // Input validation
    // ------------------------------------------------------------------

    #[test]
    fn fewer_than_three_vertices_rejected() {
        for mode in AreaMode::all() {
            let err = polygon_area(&pts(&[(0, 0), (1, 1)]), *mode).unwrap_err();
            assert_eq!(err, AreaError::InvalidInput { count: 2 });
            let err = polygon_area(&[], *mode).unwrap_err();
            assert_eq!(err, AreaError::InvalidInput { count: 0 });
        }
        assert_eq!(
            lattice_cell_count(&[(0, 0)]),
            Err(AreaError::InvalidInput { count: 1 })
        );
    }

    #[test]
    fn non_finite_rejected() {
        let poly = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0), Point::new(1.0, 1.0)];
        for mode in AreaMode::all() {
            assert_eq!(
                polygon_area(&poly, *mode),
                Err(AreaError::NonFiniteCoordinate { index: 1 })
            );
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let poly = pts(&TRENCH);
        let before = poly.clone();
        for mode in AreaMode::all() {
            let _ = polygon_area(&poly, *mode);
        }
        assert_eq!(poly, before);
    }

    // ------------------------------------------------------------------
    // Rounded bump
    // ------------------------------------------------------------------

    #[test]
    fn rounded_bump_known_values() {
        assert_eq!(area(&SQUARE, AreaMode::CellBumpRounded), 9.0);
        assert_eq!(area(&[(1, 1), (5, 1), (5, 5), (1, 5)], AreaMode::CellBumpRounded), 25.0);
        assert_eq!(area(&BRIDGE, AreaMode::CellBumpRounded), 36.0);
        assert_eq!(area(&NOTCHED, AreaMode::CellBumpRounded), 26.0);
        assert_eq!(area(&PENTAGON, AreaMode::CellBumpRounded), 50.5);
        assert_eq!(area(&TRENCH, AreaMode::CellBumpRounded), 56.0);
    }

    #[test]
    fn rounded_bump_degenerate_bbox() {
        let vertical = pts(&[(3, 0), (3, 5), (3, 9)]);
        assert_eq!(
            cell_bump_rounded(&vertical),
            Err(AreaError::DegenerateBoundingBox { width: 0.0, height: 9.0 })
        );

        let horizontal = pts(&[(0, 2), (4, 2), (9, 2)]);
        assert!(matches!(
            cell_bump_rounded(&horizontal),
            Err(AreaError::DegenerateBoundingBox { height, .. }) if height == 0.0
        ));
    }

    #[test]
    fn degenerate_bbox_only_matters_for_rounded() {
        let line = pts(&[(3, 0), (3, 5), (3, 9)]);
        assert_eq!(continuous_area(&line).unwrap(), 0.0);
        assert!(cell_bump_edgewise(&line).is_ok());
        assert!(cell_bump_simplified(&line).is_ok());
    }

    // ------------------------------------------------------------------
    // Edge-wise and simplified bumps
    // ------------------------------------------------------------------

    #[test]
    fn trench_counts_62_cells() {
        assert_eq!(area(&TRENCH, AreaMode::CellBumpEdgewise), 62.0);
        assert_eq!(area(&TRENCH, AreaMode::CellBumpSimplified), 62.0);
    }

    #[test]
    fn square_counts_nine_cells() {
        // 3x3 block of cell centers from (1,1) to (3,3)
        assert_eq!(area(&SQUARE, AreaMode::CellBumpEdgewise), 9.0);
        assert_eq!(area(&SQUARE, AreaMode::CellBumpSimplified), 9.0);
    }

    #[test]
    fn rectilinear_shapes_agree() {
        for (shape, cells) in [(&NOTCHED[..], 33.0), (&BRIDGE[..], 40.0), (&TRENCH[..], 62.0)] {
            assert_eq!(area(shape, AreaMode::CellBumpEdgewise), cells);
            assert_eq!(area(shape, AreaMode::CellBumpSimplified), cells);
        }
    }

    #[test]
    fn collinear_vertex_does_not_change_count() {
        let mut with_midpoint = TRENCH.to_vec();
        with_midpoint.insert(1, (4, 0));
        assert_eq!(area(&with_midpoint, AreaMode::CellBumpEdgewise), 62.0);
        assert_eq!(area(&with_midpoint, AreaMode::CellBumpSimplified), 62.0);
    }

    #[test]
    fn cell_modes_invariant_under_translation_and_reversal() {
        let mut rng = StdRng::seed_from_u64(2023);
        for shape in [&TRENCH[..], &NOTCHED[..], &BRIDGE[..], &SQUARE[..]] {
            let expected = area(shape, AreaMode::CellBumpSimplified);
            for _ in 0..20 {
                let dx = rng.random_range(-1000..1000);
                let dy = rng.random_range(-1000..1000);
                let mut moved: Vec<(i64, i64)> = shape.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
                assert_eq!(area(&moved, AreaMode::CellBumpEdgewise), expected);
                assert_eq!(area(&moved, AreaMode::CellBumpSimplified), expected);

                moved.reverse();
                assert_eq!(area(&moved, AreaMode::CellBumpEdgewise), expected);
                assert_eq!(area(&moved, AreaMode::CellBumpSimplified), expected);
            }
        }
    }

    #[test]
    fn slanted_edges_disagree() {
        let triangle = [(0, 0), (4, 0), (0, 4)];
        // interior 3 + boundary 12
        assert_eq!(area(&triangle, AreaMode::CellBumpSimplified), 15.0);
        assert_eq!(area(&triangle, AreaMode::CellBumpEdgewise), 12.375);
    }

    #[test]
    fn simplified_rejects_fractional_vertices() {
        let poly = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 1.5)];
        assert_eq!(
            cell_bump_simplified(&poly),
            Err(AreaError::NonLatticeVertex { index: 2 })
        );
    }

    #[test]
    fn lattice_count_large_coordinates() {
        let big = [(0, 0), (1_000_000, 0), (1_000_000, 1_000_000), (0, 1_000_000)];
        assert_eq!(lattice_cell_count(&big).unwrap(), 1_000_001 * 1_000_001);
    }

    #[test]
    fn lattice_count_past_i64_products() {
        // 3e9 * 3e9 overflows i64, the count itself does not
        let side = 3_000_000_000_i64;
        let square = [(0, 0), (side, 0), (side, side), (0, side)];
        let expected = (side + 1) * (side + 1);
        assert_eq!(lattice_cell_count(&square).unwrap(), expected);
        assert_eq!(area(&square, AreaMode::CellBumpSimplified), expected as f64);
    }

    #[test]
    fn lattice_count_too_large_is_overflow() {
        let side = 4_000_000_000_i64;
        let square = [(0, 0), (side, 0), (side, side), (0, side)];
        assert_eq!(lattice_cell_count(&square), Err(AreaError::Overflow));
        assert_eq!(
            polygon_area(&pts(&square), AreaMode::CellBumpSimplified),
            Err(AreaError::Overflow)
        );

        let extreme = [(i64::MIN, i64::MIN), (i64::MAX, i64::MIN), (i64::MAX, i64::MAX)];
        assert_eq!(lattice_cell_count(&extreme), Err(AreaError::Overflow));
    }

    #[test]
    fn simplified_rejects_coordinates_beyond_i64() {
        let poly = vec![Point::new(0.0, 0.0), Point::new(1e19, 0.0), Point::new(0.0, 4.0)];
        assert!(poly[1].is_lattice());
        assert_eq!(cell_bump_simplified(&poly), Err(AreaError::Overflow));

        let poly = vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, -1e19)];
        assert_eq!(cell_bump_simplified(&poly), Err(AreaError::Overflow));
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(7, 0), 7);
    }
}
