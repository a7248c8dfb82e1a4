//! Reads the shader sources and images the scenes are made of.
//!
//! Assets are plain files below one root directory:
//!
//! ```text
//! <root>/shaders/<name>.glsl
//! <root>/textures/<file>
//! ```
//!
//! Reading a file that does not exist is always an `Error::AssetNotFound`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::*;

/// A decoded image with 8-bit RGBA pixels, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Image {
    /// Decodes PNG or JPEG `bytes`, converting the pixels into RGBA8.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();

        Ok(Image {
            width,
            height,
            pixels: image.into_raw(),
        })
    }
}

/// Names the pair of shader assets that are linked into one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderInfo {
    pub vertex_name: String,
    pub fragment_name: String,
}

impl ShaderInfo {
    pub fn new<T1, T2>(vertex_name: T1, fragment_name: T2) -> Self
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        ShaderInfo {
            vertex_name: vertex_name.into(),
            fragment_name: fragment_name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetLoader {
    root: PathBuf,
}

impl AssetLoader {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        AssetLoader { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the shader source `name`.
    pub fn shader_path(&self, name: &str) -> PathBuf {
        self.root.join("shaders").join(format!("{}.glsl", name))
    }

    /// Returns the path of the texture file `name`.
    pub fn texture_path<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.root.join("textures").join(name)
    }

    pub fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>> {
        let path = path.as_ref();
        debug!("Reads asset {:?}.", path);
        fs::read(path).map_err(|err| Self::map_err(path, err))
    }

    /// Reads an UTF-8 text file.
    pub fn read_text<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        debug!("Reads asset {:?}.", path);
        fs::read_to_string(path).map_err(|err| Self::map_err(path, err))
    }

    pub fn read_image<P: AsRef<Path>>(&self, path: P) -> Result<Image> {
        let bytes = self.read_bytes(path)?;
        Image::decode(&bytes)
    }

    fn map_err(path: &Path, err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::AssetNotFound(path.to_owned())
        } else {
            err.into()
        }
    }
}
