use smallvec::SmallVec;

use crate::errors::*;

use super::context::GraphicsContext;
use super::types::{VertexArrayId, VertexAttribute};
use super::Bindable;

/// Owns one vertex array object, which records how attributes are read out of vertex
/// buffers, and which element buffer is used for indexed draws.
pub struct VertexArray {
    id: VertexArrayId,
    attributes: SmallVec<[VertexAttribute; 4]>,
}

impl VertexArray {
    pub fn create(ctx: &mut GraphicsContext) -> Result<Self> {
        let id = unsafe { ctx.visitor().create_vertex_array()? };
        trace!("{} created.", id);

        Ok(VertexArray {
            id,
            attributes: SmallVec::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> VertexArrayId {
        self.id
    }

    /// The attributes enabled so far, in the order they have been enabled.
    #[inline]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Enables the slot of every attribute in `attributes`.
    ///
    /// Each attribute latches the vertex buffer that is bound *now*. Binding another
    /// buffer later does not change where an enabled attribute reads from. This vertex
    /// array must be bound.
    pub fn enable_attributes(
        &mut self,
        ctx: &mut GraphicsContext,
        attributes: &[VertexAttribute],
    ) -> Result<()> {
        for v in attributes {
            unsafe {
                ctx.visitor().enable_vertex_attribute(v)?;
            }

            self.attributes.retain(|a| a.slot != v.slot);
            self.attributes.push(*v);
        }

        Ok(())
    }

    pub fn destroy(self, ctx: &mut GraphicsContext) -> Result<()> {
        trace!("{} destroyed.", self.id);
        unsafe { ctx.visitor().delete_vertex_array(self.id) }
    }
}

impl Bindable for VertexArray {
    fn bind(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().bind_vertex_array(Some(self.id)) }
    }

    fn reset(&self, ctx: &mut GraphicsContext) -> Result<()> {
        unsafe { ctx.visitor().bind_vertex_array(None) }
    }
}
