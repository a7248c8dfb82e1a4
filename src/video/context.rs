use crate::errors::*;

use super::backends::headless::{HeadlessProbe, HeadlessVisitor};
use super::backends::{self, Visitor};
use super::types::ContextInfo;

/// The explicit form of the global state of a graphics context.
///
/// There is exactly one `GraphicsContext` per window, and it lives on the thread that
/// created the window. Objects are never shared between contexts.
pub struct GraphicsContext {
    visitor: Box<dyn Visitor>,
}

impl GraphicsContext {
    pub fn new(visitor: Box<dyn Visitor>) -> Self {
        GraphicsContext { visitor }
    }

    /// Creates a context backed by the OpenGL functions loaded from the current window.
    pub fn gl() -> Result<Self> {
        Ok(GraphicsContext::new(backends::new()?))
    }

    /// Creates a context without any display, and a probe that observes its state.
    pub fn headless() -> (Self, HeadlessProbe) {
        let visitor = HeadlessVisitor::new();
        let probe = visitor.probe();
        (GraphicsContext::new(Box::new(visitor)), probe)
    }

    #[inline]
    pub fn info(&self) -> ContextInfo {
        self.visitor.info()
    }

    /// Direct access to the backend. Calls into it are only sound while the context is
    /// current on this thread, which is guaranteed by the existence of `self`.
    #[inline]
    pub(crate) fn visitor(&mut self) -> &mut dyn Visitor {
        self.visitor.as_mut()
    }
}
