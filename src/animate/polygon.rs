use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::DiceError;

/// A position on the drawing surface, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Regular polygon whose first vertex points straight along +y before any
/// rotation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon {
    sides: u32,
    center: Point,
    radius: f64,
}

impl Polygon {
    /// Needs at least 3 sides and a finite radius above 0.
    pub fn new(sides: u32, center: Point, radius: f64) -> Result<Self, DiceError> {
        if sides < 3 {
            return Err(DiceError::InvalidArgument(format!(
                "a polygon needs at least 3 sides, got {sides}"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(DiceError::InvalidArgument(format!(
                "polygon radius must be a positive number, got {radius}"
            )));
        }
        Ok(Self {
            sides,
            center,
            radius,
        })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
    pub fn center(&self) -> Point {
        self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Vertex positions rotated by `phase_offset` radians.
    pub fn vertices(&self, phase_offset: f64) -> Vec<Point> {
        let step = TAU / self.sides as f64;

        (0..self.sides)
            .map(|i| {
                let angle = FRAC_PI_2 + i as f64 * step + phase_offset;
                Point::new(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                )
            })
            .collect()
    }
}

/// Computes a single animation frame of a regular polygon.
pub fn compute_frame(
    display_sides: u32,
    center: Point,
    radius: f64,
    phase_offset: f64,
) -> Result<Vec<Point>, DiceError> {
    Ok(Polygon::new(display_sides, center, radius)?.vertices(phase_offset))
}
