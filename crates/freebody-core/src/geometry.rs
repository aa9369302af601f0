//! Geometric primitives for diagram layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - The top-left corner of a box placed by its center
//! - [`normalize_degrees`] - Folds an angle into `[0, 360)`
//!
//! # Coordinate System
//!
//! Freebody uses a coordinate system consistent with SVG and the HTML canvas:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │      ╲
//!     │       ╲  +angle (clockwise)
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **Y-axis**: Increases downward
//! - **Angles**: Degrees measured from the positive x-axis, increasing
//!   clockwise on screen. A direction of 90 degrees points straight down.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use freebody_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns true if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the point reached by travelling `length` units from this point
    /// in the direction `angle_deg`.
    ///
    /// The result is `self + length * (cos a, sin a)` with `a` converted to
    /// radians; see the [module documentation](self) for the angle convention.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freebody_core::geometry::Point;
    /// let tip = Point::new(100.0, 100.0).offset_polar(90.0, 50.0);
    /// assert!((tip.x() - 100.0).abs() < 1e-4);
    /// assert!((tip.y() - 150.0).abs() < 1e-4);
    /// ```
    pub fn offset_polar(self, angle_deg: f32, length: f32) -> Self {
        let angle_rad = angle_deg.to_radians();
        Self {
            x: self.x + length * angle_rad.cos(),
            y: self.y + length * angle_rad.sin(),
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a square size with equal sides
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if either dimension is zero or negative
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Represents a rectangular bounding box, kept as its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }
}

/// Folds an angle in degrees into the half-open range `[0, 360)`.
///
/// ```
/// # use freebody_core::geometry::normalize_degrees;
/// assert_eq!(normalize_degrees(-60.0), 300.0);
/// assert_eq!(normalize_degrees(450.0), 90.0);
/// ```
pub fn normalize_degrees(angle_deg: f32) -> f32 {
    let normalized = angle_deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 { 0.0 } else { normalized }
}
