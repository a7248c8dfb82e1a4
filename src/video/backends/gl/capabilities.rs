use std::cmp;
use std::ffi;

use gl;
use gl::types::*;

use crate::errors::*;
use crate::video::types::ContextInfo;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses a `GL_VERSION` string, e.g. "4.6.0 NVIDIA 535.54" or "OpenGL ES 3.2 Mesa".
    pub fn parse(desc: &str) -> Result<Version> {
        let (es, desc) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            (true, &desc[13..])
        } else {
            (false, desc)
        };

        let desc = desc
            .split(' ')
            .next()
            .ok_or_else(|| Error::Backend("[GL] Version string is malformed.".to_owned()))?;

        let mut iter = desc.split('.');
        let mut next = || -> Result<u8> {
            iter.next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| Error::Backend(format!("[GL] Version {:?} is malformed.", desc)))
        };

        let major = next()?;
        let minor = next()?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

/// Describes the current OpenGL context.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub version: Version,
    pub info: ContextInfo,
}

impl Capabilities {
    /// Queries the current OpenGL context.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Capabilities> {
        let info = ContextInfo {
            version: string(gl::VERSION)?,
            vendor: string(gl::VENDOR)?,
            renderer: string(gl::RENDERER)?,
            shading_language: string(gl::SHADING_LANGUAGE_VERSION)?,
        };

        let version = Version::parse(&info.version)?;
        Ok(Capabilities { version, info })
    }

    /// Vertex array objects, explicit attribute locations and GLSL 330 are required.
    pub fn check(&self) -> Result<()> {
        if self.version >= Version::GL(3, 3) || self.version >= Version::ES(3, 0) {
            Ok(())
        } else {
            Err(Error::Requirement(format!(
                "OpenGL 3.3 or OpenGL ES 3.0 (found {:?})",
                self.version
            )))
        }
    }
}

unsafe fn string(name: GLenum) -> Result<String> {
    let desc = gl::GetString(name);
    if desc.is_null() {
        return Err(Error::Backend(format!("[GL] String {:#x} is unavailable.", name)));
    }

    String::from_utf8(ffi::CStr::from_ptr(desc as *const _).to_bytes().to_vec())
        .map_err(|_| Error::Backend("[GL] String is unformaled.".to_owned()))
}
