use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::Chars;

use crate::{FormatError, FormatVersion, Header, Icon, Result, CHUNK_WIDTH, SET_PIXEL};

/// Decodes SimpleIcon source text into an [`Icon`].
///
/// This is the main entry point for decoding. The text may be wrapped over
/// any number of lines; lines are joined without a separator before the
/// header is parsed (see [`join_lines`]).
///
/// # Format
///
/// ```text
/// name;;version;;WIDTHxHEIGHT;;<bits>
/// ```
///
/// Only the character `1` sets a pixel. Every other character in the data
/// field, `0` included, leaves it unset. Characters beyond the last pixel
/// are ignored.
///
/// # Example
///
/// ```rust
/// use simpleicon::icon_decode;
///
/// let icon = icon_decode("Box;;2;;12x2;;\n11000110\n11111101\n0100\n1111")?;
/// let row0: String = icon.row(0).unwrap().iter().map(|&p| if p { '1' } else { '0' }).collect();
/// assert_eq!(row0, "110001100100");
/// # Ok::<(), simpleicon::IconError>(())
/// ```
///
/// # Errors
///
/// Returns [`IconError::Format`](crate::IconError::Format) if the header is
/// malformed or the data field holds fewer characters than pixels. A failed
/// decode never yields a partially filled icon.
#[must_use = "this returns the decoded Icon"]
pub fn icon_decode(text: &str) -> Result<Icon> {
    let joined = join_lines(text);
    let header = Header::parse(&joined)?;
    let pixels = decode_pixels(&header)?;
    Ok(Icon::new(
        header.name.to_string(),
        header.version,
        header.width,
        header.height,
        pixels,
    ))
}

/// Reads and decodes the SimpleIcon file at `path`.
///
/// The file is closed before decoding starts, on success and failure alike.
///
/// # Errors
///
/// Returns [`IconError::Io`](crate::IconError::Io) if the file cannot be
/// opened or read, or is not valid UTF-8, and
/// [`IconError::Format`](crate::IconError::Format) as for [`icon_decode`].
pub fn load(path: impl AsRef<Path>) -> Result<Icon> {
    let text = {
        let mut file = File::open(path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        text
    };
    icon_decode(&text)
}

/// Reads a SimpleIcon from any reader and decodes it.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Icon> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    icon_decode(&text)
}

/// Concatenates the lines of `text` with nothing in between.
///
/// Both `\n` and `\r\n` line endings are removed. Whitespace inside a line is
/// kept as is.
pub fn join_lines(text: &str) -> String {
    text.lines().collect()
}

/// Decodes the data field of `header` into row-major pixels.
///
/// # Errors
///
/// Returns [`FormatError::TruncatedData`] if the data field runs out before
/// every pixel has been read.
pub fn decode_pixels(header: &Header<'_>) -> core::result::Result<Vec<bool>, FormatError> {
    let (width, height) = (header.width, header.height);
    let mut pixels = vec![false; header.pixel_count()];
    let mut reader = BitReader::new(header.data, pixels.len());

    match header.version {
        FormatVersion::RowMajor => {
            for pixel in pixels.iter_mut() {
                *pixel = reader.next_bit()?;
            }
        }
        FormatVersion::Chunked => {
            for offset in (0..width).step_by(CHUNK_WIDTH) {
                let end = (offset + CHUNK_WIDTH).min(width);
                for row in 0..height {
                    let line = row * width;
                    for pixel in &mut pixels[line + offset..line + end] {
                        *pixel = reader.next_bit()?;
                    }
                }
            }
        }
    }

    Ok(pixels)
}

/// Sequential reader over the flat data string.
struct BitReader<'a> {
    data: &'a str,
    chars: Chars<'a>,
    needed: usize,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a str, needed: usize) -> Self {
        Self {
            data,
            chars: data.chars(),
            needed,
        }
    }

    fn next_bit(&mut self) -> core::result::Result<bool, FormatError> {
        match self.chars.next() {
            Some(ch) => Ok(ch == SET_PIXEL),
            None => Err(FormatError::TruncatedData {
                needed: self.needed,
                actual: self.data.chars().count(),
            }),
        }
    }
}
