use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::Curve2d;

/// An axis-aligned (optionally rotated) elliptical arc in the plane.
///
/// `P(θ) = center + R(rotation) * (x_radius * cos θ, y_radius * sin θ)`
/// where θ sweeps from `start_angle` towards `end_angle`, counter-clockwise
/// unless `clockwise` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseArc {
    center: Point2,
    x_radius: f64,
    y_radius: f64,
    start_angle: f64,
    end_angle: f64,
    clockwise: bool,
    rotation: f64,
}

impl EllipseArc {
    /// Creates a new elliptical arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `x_radius` - Radius along the (rotated) x axis, must be positive
    /// * `y_radius` - Radius along the (rotated) y axis, must be positive
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    /// * `clockwise` - Sweep direction
    /// * `rotation` - Rotation of the ellipse axes in radians
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is not positive or any value is non-finite.
    pub fn new(
        center: Point2,
        x_radius: f64,
        y_radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> Result<Self> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::NonFinite("ellipse center").into());
        }
        if !start_angle.is_finite() || !end_angle.is_finite() || !rotation.is_finite() {
            return Err(GeometryError::NonFinite("ellipse angle").into());
        }
        let radii_valid = x_radius.is_finite() && y_radius.is_finite();
        if !radii_valid || x_radius < TOLERANCE || y_radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("ellipse radii must be positive".into()).into(),
            );
        }
        Ok(Self {
            center,
            x_radius,
            y_radius,
            start_angle,
            end_angle,
            clockwise,
            rotation,
        })
    }

    /// Creates a circular arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or any value is non-finite.
    pub fn circular(
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Result<Self> {
        Self::new(center, radius, radius, start_angle, end_angle, clockwise, 0.0)
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the signed sweep angle actually traversed by the arc.
    ///
    /// A start/end pair that differs by a whole turn sweeps a full ellipse;
    /// an identical pair sweeps nothing.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        let mut delta = self.end_angle - self.start_angle;
        let same_points = delta.abs() < f64::EPSILON;

        delta = delta.rem_euclid(TAU);
        if delta < f64::EPSILON {
            delta = if same_points { 0.0 } else { TAU };
        }

        if self.clockwise && !same_points {
            if (delta - TAU).abs() < f64::EPSILON {
                delta = -TAU;
            } else {
                delta -= TAU;
            }
        }
        delta
    }
}

impl Curve2d for EllipseArc {
    fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + t * self.sweep();
        let x = self.x_radius * angle.cos();
        let y = self.y_radius * angle.sin();
        let (sin, cos) = self.rotation.sin_cos();
        Point2::new(
            self.center.x + x * cos - y * sin,
            self.center.y + x * sin + y * cos,
        )
    }

    fn divisions(&self, resolution: usize) -> usize {
        resolution * 2
    }
}
