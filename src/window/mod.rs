//! Represents an OpenGL context and the window or environment around it.

pub mod events;

mod backends;

pub mod prelude {
    pub use super::events::{Event, Key};
    pub use super::{Window, WindowParams};
}

use serde::{Deserialize, Serialize};

use crate::errors::*;

use self::backends::Visitor;
use self::events::Event;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: (u32, u32),
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "easel".to_owned(),
            size: (1280, 768),
            multisample: 2,
            vsync: false,
        }
    }
}

/// The window and the OpenGL context created with it.
pub struct Window {
    visitor: Box<dyn Visitor>,
}

impl Window {
    /// Opens a window with a OpenGL 3.3 core context, makes it current and loads the
    /// GL functions from it.
    pub fn new(params: WindowParams) -> Result<Self> {
        let visitor = backends::new(params)?;
        Ok(Window { visitor })
    }

    /// Creates a window without any display. Every call to `poll_events` hands out the
    /// next frame of `frames`, and `Event::Closed` once they are exhausted.
    pub fn headless(params: WindowParams, frames: Vec<Vec<Event>>) -> Self {
        Window {
            visitor: backends::new_headless(params, frames),
        }
    }

    /// Returns the size in pixels of the framebuffer.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.visitor.dimensions()
    }

    /// Appends the events that happened since the last call into `events`.
    #[inline]
    pub fn poll_events(&mut self, events: &mut Vec<Event>) {
        self.visitor.poll_events(events)
    }

    /// Presents the back buffer.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }
}
