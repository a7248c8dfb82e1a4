//! Buffer objects holding vertex attributes or vertex indices.

use std::marker::PhantomData;
use std::mem;

use byteorder::{ByteOrder, NativeEndian};

use crate::errors::*;

use super::context::GraphicsContext;
use super::types::{BufferId, BufferTarget, BufferUsage};
use super::Bindable;

/// The element type stored in a buffer, which also decides its bind point.
pub trait BufferElement: Copy {
    const TARGET: BufferTarget;

    fn encode(elements: &[Self]) -> Vec<u8>;

    fn decode(bytes: &[u8]) -> Vec<Self>;
}

impl BufferElement for f32 {
    const TARGET: BufferTarget = BufferTarget::Array;

    fn encode(elements: &[Self]) -> Vec<u8> {
        let mut bytes = vec![0; elements.len() * mem::size_of::<f32>()];
        for (i, v) in elements.iter().enumerate() {
            NativeEndian::write_f32(&mut bytes[i * 4..], *v);
        }

        bytes
    }

    fn decode(bytes: &[u8]) -> Vec<Self> {
        bytes.chunks(4).map(NativeEndian::read_f32).collect()
    }
}

impl BufferElement for u32 {
    const TARGET: BufferTarget = BufferTarget::ElementArray;

    fn encode(elements: &[Self]) -> Vec<u8> {
        let mut bytes = vec![0; elements.len() * mem::size_of::<u32>()];
        for (i, v) in elements.iter().enumerate() {
            NativeEndian::write_u32(&mut bytes[i * 4..], *v);
        }

        bytes
    }

    fn decode(bytes: &[u8]) -> Vec<Self> {
        bytes.chunks(4).map(NativeEndian::read_u32).collect()
    }
}

/// Owns one buffer object.
pub struct BufferObject<T: BufferElement> {
    id: BufferId,
    usage: BufferUsage,
    len: usize,
    _phantom: PhantomData<T>,
}

/// A buffer of `f32` vertex attributes, bound to the array target.
pub type VertexBuffer = BufferObject<f32>;

/// A buffer of `u32` vertex indices, bound to the element array target.
pub type IndexBuffer = BufferObject<u32>;

impl<T: BufferElement> BufferObject<T> {
    /// Allocates a new buffer object with no storage.
    pub fn create(ctx: &mut GraphicsContext, usage: BufferUsage) -> Result<Self> {
        let id = unsafe { ctx.visitor().create_buffer()? };
        trace!("{} created for {:?}.", id, T::TARGET);

        Ok(BufferObject {
            id,
            usage,
            len: 0,
            _phantom: PhantomData,
        })
    }

    #[inline]
    pub fn id(&self) -> BufferId {
        self.id
    }

    #[inline]
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }

    /// Number of elements of the last upload.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size in bytes of the last upload.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.len * mem::size_of::<T>()
    }

    /// Binds this buffer and re-specifies its whole storage with `elements`.
    ///
    /// The elements are copied before they are handed to the driver, so the source
    /// slice is free to go once this returns. The buffer is left bound.
    pub fn data(&mut self, ctx: &mut GraphicsContext, elements: &[T]) -> Result<()> {
        let bytes = T::encode(elements);

        unsafe {
            let visitor = ctx.visitor();
            visitor.bind_buffer(T::TARGET, Some(self.id))?;
            visitor.buffer_data(T::TARGET, &bytes, self.usage)?;
        }

        self.len = elements.len();
        Ok(())
    }

    /// Binds this buffer and reads its storage back.
    pub fn read(&self, ctx: &mut GraphicsContext) -> Result<Vec<T>> {
        let bytes = unsafe {
            let visitor = ctx.visitor();
            visitor.bind_buffer(T::TARGET, Some(self.id))?;
            visitor.read_buffer(T::TARGET, self.byte_size())?
        };

        Ok(T::decode(&bytes))
    }

    /// Releases the buffer object.
    pub fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        trace!("{} destroyed.", self.id);
        unsafe { ctx.visitor().delete_buffer(self.id) }
    }
}

impl<T: BufferElement> Bindable for BufferObject<T> {
    fn bind(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().bind_buffer(T::TARGET, Some(self.id)) }
    }

    fn reset(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().bind_buffer(T::TARGET, None) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode() {
        let bytes = f32::encode(&[1.0, -2.5]);
        assert_eq!(bytes.len(), 8);
        assert_eq!(f32::decode(&bytes), vec![1.0, -2.5]);

        let bytes = u32::encode(&[0, 1, 3, 0xFFFF_FFFF]);
        assert_eq!(bytes.len(), 16);
        assert_eq!(u32::decode(&bytes), vec![0, 1, 3, 0xFFFF_FFFF]);
    }
}
