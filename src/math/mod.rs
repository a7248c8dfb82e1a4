//! This module contains the math utils that mainly comes from `cgmath`.

pub use cgmath::*;

pub mod color;
pub use self::color::Color;

pub mod projection;
pub use self::projection::Orthographic;

pub mod prelude {
    pub use super::color::Color;
    pub use super::projection::Orthographic;
    pub use cgmath::prelude::*;
    pub use cgmath::{Deg, Matrix4, Point3, Quaternion, Rad, Vector2, Vector3, Vector4};
}
