//! # simpleicon
//!
//! A 100% Rust decoder and text renderer for SimpleIcon files.
//!
//! A SimpleIcon file is plain text holding a name, a format version, a size
//! and a string of `0`/`1` pixels, separated by `;;`:
//!
//! ```text
//! name;;version;;WIDTHxHEIGHT;;<bits>
//! ```
//!
//! ## Features
//!
//! - **Decoder**: Version 1 (row-major) and Version 2 (8-column chunks) layouts
//! - **Renderer**: Draws an icon as text with configurable glyphs
//!
//! ## Quick Start
//!
//! ### Decoding an icon
//!
//! ```rust
//! use simpleicon::icon_decode;
//!
//! let icon = icon_decode("Smiley;;1;;4x2;;11001111")?;
//! assert_eq!((icon.width(), icon.height()), (4, 2));
//! assert_eq!(icon.pixel(2, 0), Some(false));
//! # Ok::<(), simpleicon::IconError>(())
//! ```
//!
//! ### Rendering an icon
//!
//! ```rust
//! use simpleicon::{icon_decode, render};
//!
//! let icon = icon_decode("Smiley;;1;;4x2;;11001111")?;
//! print!("{}", render(&icon));
//! # Ok::<(), simpleicon::IconError>(())
//! ```

use thiserror::Error;

pub mod decoder;
pub mod header;
pub mod icon;
pub mod renderer;

pub use decoder::{decode_pixels, icon_decode, join_lines, load, load_from_reader};
pub use header::{FormatVersion, Header};
pub use icon::Icon;
pub use renderer::{render, render_to, render_with, write_to, RenderOptions};

/// Errors that can occur while loading a SimpleIcon.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source file is missing, unreadable or not valid UTF-8
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source text is not a well-formed SimpleIcon
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Ways in which SimpleIcon text can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The text did not split into exactly `name;;version;;size;;data`
    #[error("expected {expected} fields separated by \";;\", got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A numeric header field held something other than an unsigned integer
    #[error("invalid {field}: {value:?} is not an unsigned integer")]
    InvalidNumber { field: &'static str, value: String },

    /// The size field did not split into `WIDTHxHEIGHT`
    #[error("invalid size: expected WIDTHxHEIGHT, got {value:?}")]
    InvalidSize { value: String },

    /// A version number without a defined pixel layout
    #[error("unsupported version: {0} (expected 1 or 2)")]
    UnsupportedVersion(u32),

    /// Width or height is zero
    #[error("invalid dimensions: {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    /// Width, height or pixel count above the decoder limits
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    /// The data field ran out before every pixel was read
    #[error("truncated pixel data: need {needed} characters, got {actual}")]
    TruncatedData { needed: usize, actual: usize },
}

/// Result type for SimpleIcon operations.
pub type Result<T> = core::result::Result<T, IconError>;

/// Separator between the four header fields.
pub const SIMPLEICON_DELIMITER: &str = ";;";

/// Separator between width and height in the size field.
pub const SIZE_SEPARATOR: char = 'x';

/// Number of columns per chunk in the Version 2 layout.
pub const CHUNK_WIDTH: usize = 8;

/// The only data character that sets a pixel.
pub const SET_PIXEL: char = '1';

// Internal limits used by the header parser
pub(crate) const SIMPLEICON_DIMENSION_LIMIT: usize = 65_535;
pub(crate) const SIMPLEICON_PIXEL_LIMIT: usize = 64 * 1024 * 1024;
