use std::path::PathBuf;

use crate::video::ShaderStage;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Window: {}", _0)]
    Window(String),
    #[fail(display = "Context: {}", _0)]
    Context(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Backend: {}", _0)]
    Backend(String),
    #[fail(display = "Failed to compile {} shader, errors: \n{}", stage, log)]
    ShaderCompile { stage: ShaderStage, log: String },
    #[fail(display = "Failed to link program, errors: \n{}", log)]
    ProgramLink { log: String },
    #[fail(display = "Asset {:?} does not exist.", _0)]
    AssetNotFound(PathBuf),
    #[fail(display = "IO: {}", _0)]
    Io(String),
    #[fail(display = "Failed to decode image, errors: {}", _0)]
    ImageDecode(String),
    #[fail(display = "Malformed settings: {}", _0)]
    Settings(String),
    #[fail(display = "TestBed \'{}\' is undefined.", _0)]
    TestBedUndefined(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

/// Returns early with a `Error::Backend`.
macro_rules! backend_bail {
    ($e:expr) => {
        return Err($crate::errors::Error::Backend($e.to_owned()))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::errors::Error::Backend(format!($fmt, $($arg)+)))
    };
}

/// Unwraps a result, or destroys the objects that have been created so far and returns
/// the error.
macro_rules! try_or_destroy {
    ($ctx:expr, $e:expr, $($object:expr),+) => {
        match $e {
            Ok(v) => v,
            Err(err) => {
                $($object.destroy($ctx)?;)+
                return Err(err);
            }
        }
    };
}

impl From<::std::io::Error> for Error {
    fn from(err: ::std::io::Error) -> Error {
        Error::Io(format!("{}", err))
    }
}

impl From<::image::ImageError> for Error {
    fn from(err: ::image::ImageError) -> Error {
        Error::ImageDecode(format!("{}", err))
    }
}

impl From<::serde_json::Error> for Error {
    fn from(err: ::serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}

impl From<::glutin::CreationError> for Error {
    fn from(err: ::glutin::CreationError) -> Error {
        Error::Window(format!("{}", err))
    }
}

impl From<::glutin::ContextError> for Error {
    fn from(err: ::glutin::ContextError) -> Error {
        Error::Context(format!("{}", err))
    }
}
