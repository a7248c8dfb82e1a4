use std::collections::VecDeque;

use crate::errors::*;

use super::super::events::Event;
use super::super::WindowParams;
use super::Visitor;

pub struct HeadlessVisitor {
    dimensions: (u32, u32),
    frames: VecDeque<Vec<Event>>,
}

impl HeadlessVisitor {
    pub fn new(params: WindowParams, frames: Vec<Vec<Event>>) -> Self {
        HeadlessVisitor {
            dimensions: params.size,
            frames: frames.into(),
        }
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        match self.frames.pop_front() {
            Some(frame) => {
                for v in frame {
                    if let Event::Resized(w, h) = v {
                        self.dimensions = (w, h);
                    }

                    events.push(v);
                }
            }
            None => events.push(Event::Closed),
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }
}
