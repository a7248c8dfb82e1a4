//! Functions for loading harness settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::window::WindowParams;

/// A structure containing configuration data for the harness, which are used to
/// specify hardware setup stuff to create the window and other context information.
///
/// Every field is optional in the JSON form, missing ones take their default values:
///
/// ```json
/// {
///     "window": { "title": "easel", "size": [1280, 768] },
///     "engine": { "max_fps": 60, "testbed": "Textured Cube" },
///     "assets": "assets"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowParams,
    pub engine: EngineParams,
    /// The root directory of shader and texture assets.
    pub assets: PathBuf,
    /// Runs without a display and without a real OpenGL context.
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowParams::default(),
            engine: EngineParams::default(),
            assets: PathBuf::from("assets"),
            headless: false,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads settings from the JSON file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Settings::from_json(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// If fps goes lower than this, time will appear to slow. Zero disables it.
    pub min_fps: u32,
    /// The main loop sleeps if fps is higher than this. Zero disables it.
    pub max_fps: u32,
    /// How many frames to average for timestep smoothing. Zero disables it.
    pub time_smooth_step: u32,
    /// The name of the test bed that is loaded at start, the first registered one if
    /// not specified.
    pub testbed: Option<String>,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            min_fps: 0,
            max_fps: 60,
            time_smooth_step: 0,
            testbed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial() {
        let settings = Settings::from_json(
            r#"{ "window": { "title": "demo" }, "engine": { "testbed": "Textured Cube" } }"#,
        )
        .unwrap();

        assert_eq!(settings.window.title, "demo");
        assert_eq!(settings.window.size, (1280, 768));
        assert_eq!(settings.engine.testbed, Some("Textured Cube".to_owned()));
        assert_eq!(settings.engine.max_fps, 60);
        assert_eq!(settings.assets, PathBuf::from("assets"));
        assert!(!settings.headless);
    }

    #[test]
    fn malformed() {
        match Settings::from_json("{ \"headless\": 1 }") {
            Err(Error::Settings(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
