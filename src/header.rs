use core::fmt;

use crate::{
    FormatError, SIMPLEICON_DELIMITER, SIMPLEICON_DIMENSION_LIMIT, SIMPLEICON_PIXEL_LIMIT,
    SIZE_SEPARATOR,
};

const FIELD_COUNT: usize = 4;

/// Pixel layout declared by the version field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    /// Version 1: one full row after another.
    RowMajor,
    /// Version 2: columns in chunks of at most 8, every row of a chunk
    /// before the next chunk.
    Chunked,
}

impl FormatVersion {
    /// Returns the number written in the version field.
    #[inline]
    pub fn number(self) -> u32 {
        match self {
            FormatVersion::RowMajor => 1,
            FormatVersion::Chunked => 2,
        }
    }
}

impl TryFrom<u32> for FormatVersion {
    type Error = FormatError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FormatVersion::RowMajor),
            2 => Ok(FormatVersion::Chunked),
            other => Err(FormatError::UnsupportedVersion(other)),
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The four fields of a SimpleIcon, borrowed from the joined source text.
///
/// Numeric fields are already validated; `data` is the untouched flat
/// pixel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub name: &'a str,
    pub version: FormatVersion,
    pub width: usize,
    pub height: usize,
    pub data: &'a str,
}

impl<'a> Header<'a> {
    /// Splits `text` on `;;` and validates the name, version and size fields.
    ///
    /// `text` must already be joined into a single line (see
    /// [`join_lines`](crate::join_lines)); no whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// - [`FormatError::FieldCount`] unless there are exactly 4 fields
    /// - [`FormatError::InvalidNumber`] for a non-numeric version, width or height
    /// - [`FormatError::InvalidSize`] unless the size is `WIDTHxHEIGHT`
    /// - [`FormatError::UnsupportedVersion`] for versions other than 1 and 2
    /// - [`FormatError::ZeroDimension`] / [`FormatError::DimensionsTooLarge`]
    pub fn parse(text: &'a str) -> Result<Self, FormatError> {
        let fields: Vec<&'a str> = text.split(SIMPLEICON_DELIMITER).collect();
        let [name, version, size, data] = fields[..] else {
            return Err(FormatError::FieldCount {
                expected: FIELD_COUNT,
                actual: fields.len(),
            });
        };

        let version = parse_unsigned::<u32>("version", version)?;

        let (width, height) = match size.split(SIZE_SEPARATOR).collect::<Vec<_>>()[..] {
            [width, height] => (
                parse_unsigned::<usize>("width", width)?,
                parse_unsigned::<usize>("height", height)?,
            ),
            _ => {
                return Err(FormatError::InvalidSize {
                    value: size.to_string(),
                })
            }
        };

        let version = FormatVersion::try_from(version)?;
        guard_dimensions(width, height)?;

        Ok(Header {
            name,
            version,
            width,
            height,
            data,
        })
    }

    /// Number of pixels the data field must provide.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

fn parse_unsigned<T: core::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, FormatError> {
    let invalid = || FormatError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    // `FromStr` for integers accepts a leading '+', the format does not
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

fn guard_dimensions(width: usize, height: usize) -> Result<(), FormatError> {
    if width == 0 || height == 0 {
        return Err(FormatError::ZeroDimension { width, height });
    }
    if width > SIMPLEICON_DIMENSION_LIMIT
        || height > SIMPLEICON_DIMENSION_LIMIT
        || width.saturating_mul(height) > SIMPLEICON_PIXEL_LIMIT
    {
        return Err(FormatError::DimensionsTooLarge { width, height });
    }
    Ok(())
}
