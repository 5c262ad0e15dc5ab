use std::time::Duration;

use people_api::PeopleApiError;
use thiserror::Error;

/// Geometry that cannot be laid out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("viewport {width}x{height} has no area")]
    EmptyViewport { width: u32, height: u32 },

    #[error(
        "viewport {width}x{height} is too small for {strategy}; needs at least {min_width}x{min_height}"
    )]
    ViewportTooSmall {
        strategy: &'static str,
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

/// Failure to obtain the directory listing.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("people API request failed: {0}")]
    Api(#[from] PeopleApiError),

    #[error("directory fetch did not finish within {0:?}")]
    Timeout(Duration),

    #[error("directory source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("directory listing unavailable: {0}")]
    Directory(#[from] SourceError),

    #[error("directory has {count} records but only {capacity} keystrokes are available")]
    DirectoryOverflow { count: usize, capacity: usize },

    #[error("box name '{name}' is already used on this page")]
    DuplicateBox { name: String },

    #[error("keystroke '{key_stroke}' is already bound on this page")]
    DuplicateKeyStroke { key_stroke: String },

    #[error("element targets unknown box '{name}'")]
    UnknownBox { name: String },

    #[error("keystroke '{key_stroke}' activates unknown form '{form_name}'")]
    UnknownForm {
        key_stroke: String,
        form_name: String,
    },
}
