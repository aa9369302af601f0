//! Geometry of the inclined-plane scene.
//!
//! Everything here is a pure function of the surface size, the slope angle
//! and the [`LayoutConfig`]; drawing happens in the parent module.

use freebody_core::geometry::{Point, Size};

use crate::{config::LayoutConfig, render::RenderError};

/// Fraction of the incline width and height by which the block sits
/// up-slope from the anchor.
const BLOCK_OFFSET_RATIO: f32 = 0.3;

/// Positions of the incline triangle and the block for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclineLayout {
    angle: f32,
    anchor: Point,
    width: f32,
    height: f32,
    block_center: Point,
}

impl InclineLayout {
    /// Computes the layout for a slope of `angle` degrees on a surface of
    /// `surface` size.
    ///
    /// The anchor is the middle of the incline base, at half the surface
    /// width and `anchor_y_ratio` of its height. The triangle is
    /// `incline_height` tall and `incline_height / tan(angle)` wide.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DegenerateIncline`] when `angle` is not a finite
    /// number strictly between 0 and 90, and
    /// [`RenderError::NonFiniteGeometry`] if the result would contain a
    /// non-finite coordinate.
    pub fn compute(surface: Size, angle: f32, layout: &LayoutConfig) -> Result<Self, RenderError> {
        if !angle.is_finite() || angle <= 0.0 || angle >= 90.0 {
            return Err(RenderError::DegenerateIncline { angle });
        }

        let height = layout.incline_height();
        let width = height / angle.to_radians().tan();

        let anchor = Point::new(
            surface.width() / 2.0,
            surface.height() * layout.anchor_y_ratio(),
        );
        let block_center = Point::new(
            anchor.x() - width * BLOCK_OFFSET_RATIO,
            anchor.y() - height * BLOCK_OFFSET_RATIO,
        );

        if !width.is_finite() || !anchor.is_finite() || !block_center.is_finite() {
            return Err(RenderError::NonFiniteGeometry);
        }

        Ok(Self {
            angle,
            anchor,
            width,
            height,
            block_center,
        })
    }

    /// Middle of the incline base.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Horizontal extent of the incline base.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center of mass of the block; all forces start here.
    pub fn block_center(&self) -> Point {
        self.block_center
    }

    /// Triangle vertices: base left, base right, apex above base left.
    pub fn vertices(&self) -> [Point; 3] {
        let half_width = self.width / 2.0;
        [
            Point::new(self.anchor.x() - half_width, self.anchor.y()),
            Point::new(self.anchor.x() + half_width, self.anchor.y()),
            Point::new(self.anchor.x() - half_width, self.anchor.y() - self.height),
        ]
    }

    /// Rotation that lays the block flush on the slope.
    pub fn block_rotation(&self) -> f32 {
        -self.angle
    }

    /// The three forces acting on the block, in drawing order.
    pub fn forces(&self, force_length: f32) -> [ForceVector; 3] {
        [
            ForceVector::new(Force::Gravity, 90.0, force_length),
            ForceVector::new(Force::Normal, -(90.0 - self.angle), 0.9 * force_length),
            ForceVector::new(Force::Friction, 180.0 + self.angle, 0.4 * force_length),
        ]
    }
}

/// The forces drawn on an inclined-plane diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Force {
    /// Weight, straight down.
    Gravity,
    /// Support force, perpendicular to the slope.
    Normal,
    /// Friction, up the slope against the assumed sliding direction.
    Friction,
}

impl Force {
    /// Label written next to the arrow tip.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gravity => "mg",
            Self::Normal => "N",
            Self::Friction => "F_tr",
        }
    }
}

/// A force with its screen direction (degrees) and drawn length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceVector {
    force: Force,
    direction: f32,
    length: f32,
}

impl ForceVector {
    fn new(force: Force, direction: f32, length: f32) -> Self {
        Self {
            force,
            direction,
            length,
        }
    }

    pub fn force(&self) -> Force {
        self.force
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn length(&self) -> f32 {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn layout_for(angle: f32) -> Result<InclineLayout, RenderError> {
        InclineLayout::compute(Size::new(800.0, 600.0), angle, &LayoutConfig::default())
    }

    #[test]
    fn test_thirty_degree_layout() {
        let layout = layout_for(30.0).unwrap();

        assert_eq!(layout.anchor(), Point::new(400.0, 420.0));
        assert_approx_eq!(f32, layout.width(), 259.807_6, epsilon = 1e-2);
        assert_eq!(layout.height(), 150.0);

        let center = layout.block_center();
        assert_approx_eq!(f32, center.x(), 400.0 - 259.807_6 * 0.3, epsilon = 1e-2);
        assert_approx_eq!(f32, center.y(), 375.0, epsilon = 1e-3);
        assert_eq!(layout.block_rotation(), -30.0);
    }

    #[test]
    fn test_vertices() {
        let layout = layout_for(45.0).unwrap();
        let [left, right, apex] = layout.vertices();
        let half = layout.width() / 2.0;

        assert_approx_eq!(f32, left.x(), 400.0 - half);
        assert_approx_eq!(f32, left.y(), 420.0);
        assert_approx_eq!(f32, right.x(), 400.0 + half);
        assert_approx_eq!(f32, right.y(), 420.0);
        assert_approx_eq!(f32, apex.x(), left.x());
        assert_approx_eq!(f32, apex.y(), 270.0);
    }

    #[test]
    fn test_forces() {
        let layout = layout_for(30.0).unwrap();
        let [gravity, normal, friction] = layout.forces(100.0);

        assert_eq!(gravity.force(), Force::Gravity);
        assert_eq!(gravity.direction(), 90.0);
        assert_eq!(gravity.length(), 100.0);

        assert_eq!(normal.force(), Force::Normal);
        assert_eq!(normal.direction(), -60.0);
        assert_approx_eq!(f32, normal.length(), 90.0);

        assert_eq!(friction.force(), Force::Friction);
        assert_eq!(friction.direction(), 210.0);
        assert_approx_eq!(f32, friction.length(), 40.0);
    }

    #[test]
    fn test_force_labels() {
        assert_eq!(Force::Gravity.label(), "mg");
        assert_eq!(Force::Normal.label(), "N");
        assert_eq!(Force::Friction.label(), "F_tr");
    }

    #[test]
    fn test_degenerate_angles_rejected() {
        for angle in [0.0, 90.0, -10.0, 120.0, f32::NAN, f32::INFINITY] {
            let result = layout_for(angle);
            assert!(
                matches!(result, Err(RenderError::DegenerateIncline { .. })),
                "angle {angle} should be rejected"
            );
        }
    }

    #[test]
    fn test_tiny_angle_overflows_width() {
        // Passes the angle guard, but h / tan(angle) is infinite in f32.
        assert_eq!(layout_for(1e-40), Err(RenderError::NonFiniteGeometry));
    }

    #[test]
    fn test_custom_layout_config() {
        let config = LayoutConfig::new(0.5, 200.0, 40.0, 100.0);
        let layout = InclineLayout::compute(Size::new(600.0, 400.0), 45.0, &config).unwrap();

        assert_eq!(layout.anchor(), Point::new(300.0, 200.0));
        assert_approx_eq!(f32, layout.width(), 200.0, epsilon = 1e-3);
    }

    proptest! {
        #[test]
        fn prop_width_matches_tangent(angle in 0.5f32..89.5) {
            let layout = layout_for(angle).unwrap();
            let expected = 150.0 / angle.to_radians().tan();

            prop_assert!(layout.width() > 0.0);
            prop_assert!((layout.width() - expected).abs() <= expected * 1e-5);
        }
    }
}
