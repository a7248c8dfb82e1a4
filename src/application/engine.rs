use std::time::Duration;

use crate::assets::AssetLoader;
use crate::errors::*;
use crate::overlay::Overlay;
use crate::scene::registry::TestBedRegistry;
use crate::video::backends::headless::HeadlessProbe;
use crate::video::{GraphicsContext, Renderer};
use crate::window::events::{Event, Key};
use crate::window::Window;

use super::settings::{EngineParams, Settings};
use super::time::TimeSystem;

/// `Engine` is the root object of the harness. It owns the window, the renderer, the
/// registry of test beds and the optional overlay, and takes care of the execution
/// order and life-time management of them.
pub struct Engine {
    window: Window,
    renderer: Renderer,
    registry: TestBedRegistry,
    overlay: Option<Box<dyn Overlay>>,
    time: TimeSystem,
    assets: AssetLoader,
    params: EngineParams,
    alive: bool,
}

impl Engine {
    /// Opens the window described by `settings`, or a headless one without any events
    /// if `settings.headless` is set.
    pub fn new(settings: Settings) -> Result<Self> {
        if settings.headless {
            let (engine, _) = Engine::headless(settings, Vec::new())?;
            return Ok(engine);
        }

        let window = Window::new(settings.window.clone())?;
        let ctx = GraphicsContext::gl()?;
        Engine::from_parts(window, ctx, settings)
    }

    /// Creates an engine with a headless window fed by the scripted `frames` of events,
    /// and returns a probe to inspect its graphics context.
    pub fn headless(settings: Settings, frames: Vec<Vec<Event>>) -> Result<(Self, HeadlessProbe)> {
        let window = Window::headless(settings.window.clone(), frames);
        let (ctx, probe) = GraphicsContext::headless();
        let engine = Engine::from_parts(window, ctx, settings)?;
        Ok((engine, probe))
    }

    fn from_parts(window: Window, ctx: GraphicsContext, settings: Settings) -> Result<Self> {
        info!("Initializes engine with {:#?}.", settings);

        let renderer = Renderer::new(ctx, window.dimensions())?;
        let time = TimeSystem::new(&settings.engine);

        Ok(Engine {
            window,
            renderer,
            registry: TestBedRegistry::new(),
            overlay: None,
            time,
            assets: AssetLoader::new(settings.assets),
            params: settings.engine,
            alive: true,
        })
    }

    #[inline]
    pub fn registry(&self) -> &TestBedRegistry {
        &self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut TestBedRegistry {
        &mut self.registry
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    #[inline]
    pub fn assets(&self) -> &AssetLoader {
        &self.assets
    }

    #[inline]
    pub fn time(&self) -> &TimeSystem {
        &self.time
    }

    #[inline]
    pub fn time_mut(&mut self) -> &mut TimeSystem {
        &mut self.time
    }

    /// Constructs the overlay with the renderer, which could only happen after the
    /// graphics context has been created. A previous overlay is disposed first.
    pub fn attach_overlay<F>(&mut self, func: F) -> Result<()>
    where
        F: FnOnce(&mut Renderer) -> Result<Box<dyn Overlay>>,
    {
        if let Some(overlay) = self.overlay.take() {
            overlay.dispose(&mut self.renderer)?;
        }

        self.overlay = Some(func(&mut self.renderer)?);
        Ok(())
    }

    #[inline]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Shutdown the whole harness at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.alive = false;
    }

    /// Runs the main loop of `Engine`, this will block the working thread until the
    /// window has been closed. Everything that has been created on the graphics context
    /// is released before this returns.
    pub fn run(mut self) -> Result<Self> {
        let result = self.load().and_then(|_| self.main_loop());
        let shutdown = self.unload();

        result?;
        shutdown?;
        Ok(self)
    }

    fn load(&mut self) -> Result<()> {
        let dimensions = self.window.dimensions();
        self.renderer.resize(dimensions)?;

        match self.params.testbed.clone() {
            Some(name) => {
                self.registry
                    .activate_by_name(&name, &mut self.renderer, &self.assets)?
            }
            None => {
                if !self.registry.is_empty() {
                    self.registry.activate(0, &mut self.renderer, &self.assets)?;
                }
            }
        }

        self.renderer.enable_blend()
    }

    fn main_loop(&mut self) -> Result<()> {
        let mut events = Vec::new();

        while self.alive {
            let dt = self.time.advance();

            self.window.poll_events(&mut events);
            for v in events.drain(..) {
                self.on_event(v)?;
            }

            if !self.alive {
                break;
            }

            self.advance(dt)?;
            self.window.swap_buffers()?;
        }

        Ok(())
    }

    fn advance(&mut self, dt: Duration) -> Result<()> {
        if let Some(ref mut overlay) = self.overlay {
            overlay.update(dt)?;
        }

        self.registry.update(dt)?;

        self.renderer.begin_frame()?;
        self.registry.render(&mut self.renderer, dt)?;

        // The overlay always goes on top of the scene.
        if let Some(ref mut overlay) = self.overlay {
            overlay.render(&mut self.renderer)?;
        }

        self.renderer.end_frame()?;
        Ok(())
    }

    fn on_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Resized(width, height) => self.renderer.resize((width, height)),

            Event::Closed | Event::KeyDown(Key::Escape) => {
                self.alive = false;
                Ok(())
            }

            Event::KeyDown(Key::F1) => {
                self.renderer.toggle_debug_draw();
                Ok(())
            }

            Event::KeyDown(Key::Tab) => self.registry.next(&mut self.renderer, &self.assets),

            Event::KeyDown(key) => match key.digit() {
                Some(n) if n >= 1 && (n as usize) <= self.registry.len() => {
                    self.registry
                        .activate(n as usize - 1, &mut self.renderer, &self.assets)
                }
                _ => Ok(()),
            },
        }
    }

    /// Unloads the active test bed, disposes the overlay and then the renderer, while
    /// the context is still alive.
    fn unload(&mut self) -> Result<()> {
        self.registry.deactivate(&mut self.renderer)?;

        if let Some(overlay) = self.overlay.take() {
            overlay.dispose(&mut self.renderer)?;
        }

        self.renderer.dispose()
    }
}
