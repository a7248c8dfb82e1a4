use crate::math::prelude::*;
use crate::math::One;

/// `Transform` stores the position, uniform scale and rotation of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub scale: f32,
    pub rotation: Quaternion<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vector3::new(0.0, 0.0, 0.0),
            scale: 1.0,
            rotation: Quaternion::one(),
        }
    }
}

impl Transform {
    /// Creates a transform at `position` with unit scale and no rotation.
    pub fn from_position<T>(position: T) -> Self
    where
        T: Into<Vector3<f32>>,
    {
        Transform {
            position: position.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn translate<T>(&mut self, disp: T)
    where
        T: Into<Vector3<f32>>,
    {
        self.position += disp.into();
    }

    #[inline]
    pub fn rotate<T>(&mut self, rotate: T)
    where
        T: Into<Quaternion<f32>>,
    {
        self.rotation = rotate.into() * self.rotation;
    }

    /// Gets the matrix from local space to world space. Points are rotated first, then
    /// scaled, then translated.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_scale(self.scale)
            * Matrix4::from(self.rotation)
    }

    /// Transforms `point` from local space to world space.
    pub fn transform_point<T>(&self, point: T) -> Vector3<f32>
    where
        T: Into<Vector3<f32>>,
    {
        let v = point.into();
        (self.model_matrix() * v.extend(1.0)).truncate()
    }
}
