mod glutin;
mod headless;

use crate::errors::*;

use super::events::Event;
use super::WindowParams;

pub trait Visitor {
    fn dimensions(&self) -> (u32, u32);
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn swap_buffers(&self) -> Result<()>;
}

pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::glutin::GlutinVisitor::new(params)?;
    Ok(Box::new(visitor))
}

pub fn new_headless(params: WindowParams, frames: Vec<Vec<Event>>) -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new(params, frames))
}
