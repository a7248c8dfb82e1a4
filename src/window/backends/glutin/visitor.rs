use gl;
use glutin;
use glutin::GlContext;

use crate::errors::*;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    pub fn new(params: WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title)
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.0),
                f64::from(params.size.1),
            ));

        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (3, 3)))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)?;
        let mut visitor = GlutinVisitor {
            window,
            events_loop,
        };

        visitor.events_loop.poll_events(|_| {});

        unsafe {
            visitor.window.make_current()?;
            gl::load_with(|symbol| visitor.window.get_proc_address(symbol) as *const _);
        }

        let (width, height) = visitor.dimensions();
        info!("Window {:?} created with framebuffer {}x{}.", visitor.window.id(), width, height);
        Ok(visitor)
    }
}

impl Visitor for GlutinVisitor {
    fn dimensions(&self) -> (u32, u32) {
        let dpr = self.window.get_hidpi_factor();
        match self.window.get_inner_size() {
            Some(size) => {
                let size = size.to_physical(dpr);
                (size.width as u32, size.height as u32)
            }
            None => (0, 0),
        }
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let dpr = self.window.get_hidpi_factor();
        let window = &self.window;

        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v, dpr) {
                // The drawable of the context follows the window on some platforms only.
                if let Event::Resized(w, h) = e {
                    window.resize(glutin::dpi::PhysicalSize::new(f64::from(w), f64::from(h)));
                }

                events.push(e);
            }
        });
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }
}
