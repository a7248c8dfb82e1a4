//! Opens a window with every built-in test bed registered.
//!
//! Settings are read from `easel.json` in the working directory if it exists. Press
//! `Tab` or `1` to `3` to switch scenes, `F1` for wireframe and `Escape` to quit.

extern crate easel;
extern crate env_logger;
#[macro_use]
extern crate log;

use std::path::Path;

use easel::prelude::*;

const SETTINGS: &str = "easel.json";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = if Path::new(SETTINGS).exists() {
        Settings::load(SETTINGS)?
    } else {
        Settings::default()
    };

    let mut engine = Engine::new(settings)?;
    engine.registry_mut().add(ColoredQuad::new());
    engine.registry_mut().add(TexturedQuad::new());
    engine.registry_mut().add(TexturedCube::new());

    engine.attach_overlay(|renderer| Ok(Box::new(MenuBar::new(renderer)?)))?;
    engine.run()?;

    info!("Exiting....");
    Ok(())
}
