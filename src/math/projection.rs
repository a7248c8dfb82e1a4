//! Projections used by the built-in scenes.

use cgmath::{Deg, Matrix4};

/// A centered orthographic projection of a `width` by `height` volume.
///
/// View-space depths in `[-near, -far]` are mapped into `[0, 1]`, so content authored at
/// `z = 0` still lands inside the clip volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    pub width: f32,
    pub height: f32,
    pub near: f32,
    pub far: f32,
}

impl Orthographic {
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 1.0;

    /// Creates a projection with the fixed near and far planes.
    pub fn new(width: f32, height: f32) -> Self {
        Orthographic {
            width,
            height,
            near: Self::NEAR,
            far: Self::FAR,
        }
    }

    /// Returns the bounds `(left, right, bottom, top)` of the visible area.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let (hw, hh) = (self.width * 0.5, self.height * 0.5);
        (-hw, hw, -hh, hh)
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        let range = self.near - self.far;

        #[rustfmt::skip]
        let m = Matrix4::new(
            2.0 / self.width, 0.0, 0.0, 0.0,
            0.0, 2.0 / self.height, 0.0, 0.0,
            0.0, 0.0, 1.0 / range, 0.0,
            0.0, 0.0, self.near / range, 1.0,
        );

        m
    }
}

/// Right-handed perspective projection with a vertical field of view in degrees.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    cgmath::perspective(Deg(fovy), aspect, near, far)
}
