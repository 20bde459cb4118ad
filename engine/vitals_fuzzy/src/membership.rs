//! Piecewise-linear membership functions.
//!
//! Both shapes are total over finite input: breakpoints that coincide
//! (`a == b`, `c == d`, or the triangle's `b == c`) switch the matching
//! ramp to a step instead of dividing by zero. A `NaN` reading has no
//! membership anywhere and evaluates to `0.0`.

use std::fmt;

use serde::Serialize;

/// Degree to which `x` belongs to the trapezoid `[a, b, c, d]`.
///
/// Rises linearly over `[a, b]`, is exactly `1.0` over `[b, c]` and falls
/// linearly over `[c, d]`. Outside `[a, d]` the result is `0.0`.
pub fn trapezoid(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    let left = rising_edge(x, a, b);
    let right = falling_edge(x, c, d);
    left.min(1.0).min(right).max(0.0)
}

/// Degree to which `x` belongs to the triangle `[a, b, c]` peaking at `b`.
pub fn triangle(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    let left = rising_edge(x, a, b);
    let right = falling_edge(x, b, c);
    left.min(right).max(0.0)
}

#[inline]
fn rising_edge(x: f64, start: f64, top: f64) -> f64 {
    if start == top {
        if x >= start {
            1.0
        } else {
            0.0
        }
    } else {
        (x - start) / (top - start)
    }
}

#[inline]
fn falling_edge(x: f64, top: f64, end: f64) -> f64 {
    if top == end {
        if x <= top {
            1.0
        } else {
            0.0
        }
    } else {
        (end - x) / (end - top)
    }
}

/// Shape of a single fuzzy set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FuzzySetShape {
    /// Breakpoints `a <= b <= c <= d`; full membership over `[b, c]`.
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
    /// Breakpoints `a <= b <= c`; full membership only at `b`.
    Triangle { a: f64, b: f64, c: f64 },
}

impl FuzzySetShape {
    pub const fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Self {
        FuzzySetShape::Trapezoid { a, b, c, d }
    }

    pub const fn triangle(a: f64, b: f64, c: f64) -> Self {
        FuzzySetShape::Triangle { a, b, c }
    }

    /// Evaluate the membership degree of `x`, always in `[0, 1]`.
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            FuzzySetShape::Trapezoid { a, b, c, d } => trapezoid(x, a, b, c, d),
            FuzzySetShape::Triangle { a, b, c } => triangle(x, a, b, c),
        }
    }

    /// Breakpoints in declaration order.
    pub fn breakpoints(&self) -> Vec<f64> {
        match *self {
            FuzzySetShape::Trapezoid { a, b, c, d } => vec![a, b, c, d],
            FuzzySetShape::Triangle { a, b, c } => vec![a, b, c],
        }
    }

    /// Interval outside of which the degree is always zero.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            FuzzySetShape::Trapezoid { a, d, .. } => (a, d),
            FuzzySetShape::Triangle { a, c, .. } => (a, c),
        }
    }

    /// True when breakpoints are finite and non-decreasing.
    pub fn is_well_formed(&self) -> bool {
        let points = self.breakpoints();
        points.iter().all(|p| p.is_finite()) && points.windows(2).all(|w| w[0] <= w[1])
    }
}

impl fmt::Display for FuzzySetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FuzzySetShape::Trapezoid { .. } => "trapezoid",
            FuzzySetShape::Triangle { .. } => "triangle",
        };
        let points: Vec<String> = self.breakpoints().iter().map(|p| p.to_string()).collect();
        write!(f, "{name}({})", points.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn trapezoid_left_step_when_a_equals_b() {
        assert_eq!(trapezoid(10.0, 10.0, 10.0, 15.0, 18.0), 1.0);
        assert_eq!(trapezoid(9.99, 10.0, 10.0, 15.0, 18.0), 0.0);
    }

    #[test]
    fn trapezoid_right_step_when_c_equals_d() {
        assert_eq!(trapezoid(35.0, 30.0, 35.0, 40.0, 40.0), 1.0);
        assert_eq!(trapezoid(40.0, 30.0, 35.0, 40.0, 40.0), 1.0);
        assert_eq!(trapezoid(40.01, 30.0, 35.0, 40.0, 40.0), 0.0);
    }

    #[test]
    fn trapezoid_ramps_are_linear() {
        assert!((trapezoid(16.5, 10.0, 10.0, 15.0, 18.0) - 0.5).abs() < EPS);
        assert!((trapezoid(32.5, 30.0, 35.0, 40.0, 40.0) - 0.5).abs() < EPS);
        assert_eq!(trapezoid(18.0, 10.0, 10.0, 15.0, 18.0), 0.0);
    }

    #[test]
    fn triangle_peak_and_feet() {
        assert_eq!(triangle(22.0, 18.0, 22.0, 25.0), 1.0);
        assert_eq!(triangle(25.0, 25.0, 27.0, 30.0), 0.0);
        assert_eq!(triangle(27.0, 25.0, 27.0, 30.0), 1.0);
        assert_eq!(triangle(30.0, 25.0, 27.0, 30.0), 0.0);
    }

    #[test]
    fn triangle_with_left_step_starts_at_full_membership() {
        assert_eq!(triangle(0.0, 0.0, 0.0, 0.5), 1.0);
        assert!((triangle(0.25, 0.0, 0.0, 0.5) - 0.5).abs() < EPS);
        assert_eq!(triangle(-0.1, 0.0, 0.0, 0.5), 0.0);
    }

    #[test]
    fn fully_degenerate_triangle_is_a_singleton() {
        assert_eq!(triangle(3.0, 3.0, 3.0, 3.0), 1.0);
        assert_eq!(triangle(3.1, 3.0, 3.0, 3.0), 0.0);
        assert_eq!(triangle(2.9, 3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn nan_has_no_membership() {
        assert_eq!(trapezoid(f64::NAN, 0.0, 1.0, 2.0, 3.0), 0.0);
        assert_eq!(triangle(f64::NAN, 0.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn shape_dispatches_to_primitive() {
        let tri = FuzzySetShape::triangle(60.0, 80.0, 100.0);
        assert!((tri.degree(75.0) - 0.75).abs() < EPS);
        let trap = FuzzySetShape::trapezoid(8.0, 10.0, 12.0, 12.0);
        assert_eq!(trap.degree(11.0), 1.0);
        assert_eq!(trap.support(), (8.0, 12.0));
    }

    #[test]
    fn well_formedness_checks_ordering() {
        assert!(FuzzySetShape::trapezoid(1.0, 1.0, 2.0, 2.0).is_well_formed());
        assert!(!FuzzySetShape::triangle(3.0, 2.0, 4.0).is_well_formed());
        assert!(!FuzzySetShape::triangle(0.0, f64::INFINITY, 4.0).is_well_formed());
    }

    #[test]
    fn display_lists_breakpoints() {
        assert_eq!(
            FuzzySetShape::trapezoid(5.5, 6.5, 7.0, 7.0).to_string(),
            "trapezoid(5.5, 6.5, 7, 7)"
        );
        assert_eq!(
            FuzzySetShape::triangle(18.0, 22.0, 25.0).to_string(),
            "triangle(18, 22, 25)"
        );
    }

    #[test]
    fn shape_serializes_with_kind_tag() {
        let json = serde_json::to_value(FuzzySetShape::triangle(6.0, 7.0, 8.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "triangle", "a": 6.0, "b": 7.0, "c": 8.0 })
        );
    }
}
