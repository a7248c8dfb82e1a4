//! Plain descriptions shared by the wrappers and the backends.

use std::fmt;

use crate::math::prelude::{Matrix4, Vector4};

macro_rules! impl_id {
    ($name: ident) => {
        /// Opaque object name issued by the graphics driver.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub(crate) fn new(raw: u32) -> Self {
                $name(raw)
            }

            #[inline]
            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

impl_id!(BufferId);
impl_id!(VertexArrayId);
impl_id!(ShaderId);
impl_id!(ProgramId);
impl_id!(TextureId);

/// The bind point of a buffer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// Source of vertex attributes.
    Array,
    /// Source of vertex indices.
    ElementArray,
}

/// Hint about how often the buffer storage will be re-specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    StaticDraw,
    DynamicDraw,
    StreamDraw,
}

impl Default for BufferUsage {
    fn default() -> Self {
        BufferUsage::StaticDraw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// The component type of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Byte,
    UByte,
    Short,
    UShort,
    Int,
    UInt,
    Float,
}

impl AttributeType {
    /// Size of one component in bytes.
    pub fn size(self) -> u32 {
        match self {
            AttributeType::Byte | AttributeType::UByte => 1,
            AttributeType::Short | AttributeType::UShort => 2,
            AttributeType::Int | AttributeType::UInt | AttributeType::Float => 4,
        }
    }
}

/// Describes how one vertex attribute is read out of the bytes of a vertex buffer.
///
/// Offsets and strides are never validated against the buffer, overlapping or out-of-range
/// descriptors are a content error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// The attribute slot (`layout(location = ..)`) in the vertex shader.
    pub slot: u32,
    /// Number of components, 1 to 4.
    pub size: u8,
    pub kind: AttributeType,
    pub normalized: bool,
    /// Distance in bytes between two consecutive vertices.
    pub stride: u32,
    /// Byte offset of the first component inside a vertex.
    pub offset: u32,
}

impl VertexAttribute {
    /// Creates a non-normalized float attribute.
    pub fn float(slot: u32, size: u8, stride: u32, offset: u32) -> Self {
        VertexAttribute {
            slot,
            size,
            kind: AttributeType::Float,
            normalized: false,
            stride,
            offset,
        }
    }
}

/// A value that could be uploaded into a uniform variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    I32(i32),
    F32(f32),
    Vector4f([f32; 4]),
    Matrix4f([[f32; 4]; 4]),
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        UniformValue::I32(v)
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::F32(v)
    }
}

impl From<Vector4<f32>> for UniformValue {
    fn from(v: Vector4<f32>) -> Self {
        UniformValue::Vector4f(v.into())
    }
}

impl From<Matrix4<f32>> for UniformValue {
    fn from(v: Matrix4<f32>) -> Self {
        UniformValue::Matrix4f(v.into())
    }
}

/// Server-side capabilities that could be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Blend,
    DepthTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SourceAlpha,
    OneMinusSourceAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureWrap {
    Repeat,
    ClampToEdge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

/// How polygons are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    Fill,
    Line,
}

/// The primitive-submission forms supported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Triangle list read through the bound element buffer.
    IndexedTriangles,
    /// Triangle list read straight from the vertex attributes.
    Triangles,
}

/// A rectangle in framebuffer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Describes the implementation behind the graphics context.
#[derive(Debug, Clone, Default)]
pub struct ContextInfo {
    pub version: String,
    pub vendor: String,
    pub renderer: String,
    pub shading_language: String,
}
