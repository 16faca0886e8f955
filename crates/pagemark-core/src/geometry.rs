use serde::{Deserialize, Serialize};

/// A 2D point in page units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned box anchored at its minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Box spanning `width` x `height` from `origin`.
    pub fn from_origin(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin, Point::new(origin.x + width, origin.y + height))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// Map an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Rotate `point` around `pivot` by `degrees`.
///
/// Positive angles turn counter-clockwise in a y-up space. Any multiple of
/// 360 returns `point` exactly, with no floating-point drift.
pub fn rotate_point(point: Point, pivot: Point, degrees: f64) -> Point {
    if normalize_degrees(degrees) == 0.0 {
        return point;
    }

    let rad = degrees.to_radians();
    let (sin_r, cos_r) = rad.sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;

    Point::new(
        pivot.x + dx * cos_r - dy * sin_r,
        pivot.y + dx * sin_r + dy * cos_r,
    )
}
