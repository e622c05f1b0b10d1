//! # Geometry Formulas
//!
//! Areas, volumes and right triangles. Curved-shape results are rounded to
//! two decimals; straight-edged shapes are exact.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub area: f64,
    pub circumference: f64,
}

pub fn circle(radius: f64) -> Circle {
    Circle {
        area: round_to(PI * radius * radius, 2),
        circumference: round_to(2.0 * PI * radius, 2),
    }
}

pub fn triangle_area(base: f64, height: f64) -> f64 {
    base * height / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub area: f64,
    pub perimeter: f64,
}

pub fn rectangle(length: f64, width: f64) -> Rectangle {
    Rectangle {
        area: length * width,
        perimeter: 2.0 * (length + width),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub volume: f64,
    pub surface_area: f64,
}

pub fn sphere(radius: f64) -> Solid {
    Solid {
        volume: round_to(4.0 / 3.0 * PI * radius.powi(3), 2),
        surface_area: round_to(4.0 * PI * radius.powi(2), 2),
    }
}

pub fn cylinder(radius: f64, height: f64) -> Solid {
    Solid {
        volume: round_to(PI * radius * radius * height, 2),
        surface_area: round_to(2.0 * PI * radius * (radius + height), 2),
    }
}

/// All three sides of a right triangle, `c` being the hypotenuse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightTriangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Solve for whichever side is missing. Exactly two sides must be given,
/// and a leg must be shorter than the hypotenuse.
pub fn pythagorean(a: Option<f64>, b: Option<f64>, c: Option<f64>) -> CalcResult<RightTriangle> {
    let leg_from = |hyp: f64, leg: f64, missing: &str| -> CalcResult<f64> {
        if leg >= hyp {
            return Err(CalcError::invalid_input(
                missing,
                "",
                "The hypotenuse must be longer than either leg",
            ));
        }
        Ok((hyp * hyp - leg * leg).sqrt())
    };

    let (a, b, c) = match (a, b, c) {
        (Some(a), Some(b), None) => (a, b, (a * a + b * b).sqrt()),
        (Some(a), None, Some(c)) => (a, leg_from(c, a, "b")?, c),
        (None, Some(b), Some(c)) => (leg_from(c, b, "a")?, b, c),
        _ => {
            return Err(CalcError::invalid_input(
                "sides",
                "",
                "Enter exactly two of the three sides",
            ))
        }
    };

    Ok(RightTriangle {
        a: round_to(a, 2),
        b: round_to(b, 2),
        c: round_to(c, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle() {
        let result = circle(5.0);
        assert_eq!(result.area, 78.54);
        assert_eq!(result.circumference, 31.42);
    }

    #[test]
    fn test_straight_shapes() {
        assert_eq!(triangle_area(10.0, 4.0), 20.0);
        let r = rectangle(3.0, 4.5);
        assert_eq!(r.area, 13.5);
        assert_eq!(r.perimeter, 15.0);
    }

    #[test]
    fn test_solids() {
        let s = sphere(3.0);
        assert_eq!(s.volume, 113.1);
        assert_eq!(s.surface_area, 113.1);

        let c = cylinder(2.0, 5.0);
        assert_eq!(c.volume, 62.83);
        assert_eq!(c.surface_area, 87.96);
    }

    #[test]
    fn test_pythagorean() {
        let t = pythagorean(Some(3.0), Some(4.0), None).unwrap();
        assert_eq!((t.a, t.b, t.c), (3.0, 4.0, 5.0));

        let t = pythagorean(None, Some(12.0), Some(13.0)).unwrap();
        assert_eq!(t.a, 5.0);

        assert!(pythagorean(Some(5.0), None, Some(3.0)).is_err());
        assert!(pythagorean(Some(1.0), Some(1.0), Some(1.0)).is_err());
        assert!(pythagorean(Some(1.0), None, None).is_err());
    }
}
