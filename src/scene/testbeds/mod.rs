//! The built-in test beds.

pub mod colored_quad;
pub mod textured_cube;
pub mod textured_quad;

pub use self::colored_quad::ColoredQuad;
pub use self::textured_cube::TexturedCube;
pub use self::textured_quad::TexturedQuad;
