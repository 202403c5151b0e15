use std::error::Error;
use std::fmt;

use winit::error::{EventLoopError, OsError};

use crate::controllers::interactive::data::viewer_config::ViewerConfigError;

/// Fatal failures while bringing up or running the window.
#[derive(Debug)]
pub enum GuiError {
    Config(ViewerConfigError),
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
    Texture(pixels::TextureError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid viewer configuration: {}", err),
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Pixels(err) => write!(f, "pixels surface error: {}", err),
            Self::Texture(err) => write!(f, "pixels texture error: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Texture(err) => Some(err),
        }
    }
}

impl From<ViewerConfigError> for GuiError {
    fn from(err: ViewerConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}
