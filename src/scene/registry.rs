use std::time::Duration;

use crate::assets::AssetLoader;
use crate::errors::*;
use crate::video::Renderer;

use super::TestBed;

/// Keeps the test beds by name, and at most one of them loaded.
#[derive(Default)]
pub struct TestBedRegistry {
    testbeds: Vec<Box<dyn TestBed>>,
    active: Option<usize>,
}

impl TestBedRegistry {
    pub fn new() -> Self {
        TestBedRegistry::default()
    }

    /// Registers a test bed and returns its index. A test bed with the same name is
    /// replaced, unless it is the active one.
    pub fn add<T: TestBed + 'static>(&mut self, testbed: T) -> usize {
        if let Some(index) = self.position(testbed.name()) {
            if self.active != Some(index) {
                warn!("TestBed '{}' has been replaced.", testbed.name());
                self.testbeds[index] = Box::new(testbed);
                return index;
            }

            warn!("TestBed '{}' is active and could not be replaced.", testbed.name());
            return index;
        }

        self.testbeds.push(Box::new(testbed));
        self.testbeds.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.testbeds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.testbeds.is_empty()
    }

    /// The names of registered test beds, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.testbeds.iter().map(|v| v.name()).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.testbeds.iter().position(|v| v.name() == name)
    }

    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&dyn TestBed> {
        self.active.map(|index| self.testbeds[index].as_ref())
    }

    /// Switches to the test bed at `index`. The active test bed is unloaded before the
    /// next one is loaded. Activating the active test bed does nothing.
    pub fn activate(
        &mut self,
        index: usize,
        renderer: &mut Renderer,
        assets: &AssetLoader,
    ) -> Result<()> {
        if index >= self.testbeds.len() {
            return Err(Error::TestBedUndefined(format!("#{}", index)));
        }

        if self.active == Some(index) {
            return Ok(());
        }

        self.deactivate(renderer)?;

        let testbed = &mut self.testbeds[index];
        info!("Loads TestBed '{}'.", testbed.name());
        testbed.load(renderer, assets)?;

        self.active = Some(index);
        Ok(())
    }

    /// Switches to the test bed named `name`.
    pub fn activate_by_name(
        &mut self,
        name: &str,
        renderer: &mut Renderer,
        assets: &AssetLoader,
    ) -> Result<()> {
        match self.position(name) {
            Some(index) => self.activate(index, renderer, assets),
            None => Err(Error::TestBedUndefined(name.to_owned())),
        }
    }

    /// Switches to the test bed registered after the active one, wrapping around.
    pub fn next(&mut self, renderer: &mut Renderer, assets: &AssetLoader) -> Result<()> {
        if self.testbeds.is_empty() {
            return Ok(());
        }

        let index = match self.active {
            Some(index) => (index + 1) % self.testbeds.len(),
            None => 0,
        };

        self.activate(index, renderer, assets)
    }

    /// Unloads the active test bed, if there is one.
    pub fn deactivate(&mut self, renderer: &mut Renderer) -> Result<()> {
        if let Some(index) = self.active.take() {
            let testbed = &mut self.testbeds[index];
            info!("Unloads TestBed '{}'.", testbed.name());
            testbed.unload(renderer)?;
        }

        Ok(())
    }

    pub fn update(&mut self, dt: Duration) -> Result<()> {
        if let Some(index) = self.active {
            self.testbeds[index].update(dt)?;
        }

        Ok(())
    }

    pub fn render(&mut self, renderer: &mut Renderer, dt: Duration) -> Result<()> {
        if let Some(index) = self.active {
            self.testbeds[index].render(renderer, dt)?;
        }

        Ok(())
    }
}
