//! Line transformer: parse a `du` output line, scale its size, recolor it.
//!
//! One line in, one line out. The size token is parsed only to pick a color;
//! its text is re-emitted verbatim, so the output is byte-identical to the
//! input apart from the injected escape sequences.

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use thiserror::Error;

use crate::config::Config;
use crate::scheme::{Scheme, SchemeError};

/// Reference ceiling for the logarithmic scale: 512 GiB. Sizes at or above
/// this render with the top of the palette. Fixed rather than derived from
/// the stream, so coloring is deterministic and needs no buffering.
pub const MAX_EXPECTED_BYTES: f64 = 512.0 * 1024.0 * 1024.0 * 1024.0;

/// Errors raised while transforming a single line.
///
/// The two parse variants are recoverable: the caller emits the offending
/// line unmodified instead of aborting the stream.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The line has no whitespace separator between size and path.
    #[error("no whitespace separator in line")]
    UnparsableLine,

    /// The size token is not a valid non-negative number.
    #[error("invalid size token: {token}")]
    UnparsableSize {
        /// The token as it appeared in the line
        token: String,
    },

    /// The colorscheme rejected the normalized value; a logic fault.
    #[error(transparent)]
    InvalidValue(#[from] SchemeError),
}

/// Size unit of a `du` size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Plain integer, a count of blocks.
    Block,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

/// Human-readable suffixes as `du -h` prints them, binary multiples.
const SUFFIXES: &[(char, Unit)] = &[
    ('K', Unit::Kibi),
    ('M', Unit::Mebi),
    ('G', Unit::Gibi),
    ('T', Unit::Tebi),
    ('P', Unit::Pebi),
    ('E', Unit::Exbi),
    ('Z', Unit::Zebi),
    ('Y', Unit::Yobi),
];

impl Unit {
    fn multiplier(self, block_size: u64) -> f64 {
        let exponent = match self {
            Unit::Block => return block_size as f64,
            Unit::Kibi => 1,
            Unit::Mebi => 2,
            Unit::Gibi => 3,
            Unit::Tebi => 4,
            Unit::Pebi => 5,
            Unit::Exbi => 6,
            Unit::Zebi => 7,
            Unit::Yobi => 8,
        };
        1024f64.powi(exponent)
    }
}

/// One `du` output line, split into its size field and the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine<'a> {
    /// The size token exactly as it appeared.
    pub size_token: &'a str,
    /// Byte-equivalent magnitude, used only for color selection.
    pub bytes: f64,
    pub unit: Unit,
    /// Everything after the size token, separating whitespace included.
    pub rest: &'a str,
}

/// Split a size token into its numeric part and unit suffix.
fn split_unit(token: &str) -> (&str, Unit) {
    for &(suffix, unit) in SUFFIXES {
        if let Some(number) = token.strip_suffix(suffix) {
            return (number, unit);
        }
    }
    (token, Unit::Block)
}

/// Parse one line of `du` output into size and remainder.
pub fn parse_line(line: &str, block_size: u64) -> Result<ParsedLine<'_>, TransformError> {
    let split = line
        .find(char::is_whitespace)
        .ok_or(TransformError::UnparsableLine)?;
    let (size_token, rest) = line.split_at(split);

    let (number, unit) = split_unit(size_token);
    let value: f64 = number.parse().map_err(|_| TransformError::UnparsableSize {
        token: size_token.to_string(),
    })?;
    // f64 parsing accepts "inf" and "nan" spellings; neither is a size,
    // and negative sizes don't occur in du output.
    if !value.is_finite() || value < 0.0 {
        return Err(TransformError::UnparsableSize {
            token: size_token.to_string(),
        });
    }

    Ok(ParsedLine {
        size_token,
        bytes: value * unit.multiplier(block_size),
        unit,
        rest,
    })
}

/// Rescale a byte magnitude into `[0, 1]` logarithmically against
/// [`MAX_EXPECTED_BYTES`]. The `+ 1` offset keeps magnitude 0 at exactly 0.
pub fn normalize(bytes: f64) -> f64 {
    ((bytes + 1.0).ln() / (MAX_EXPECTED_BYTES + 1.0).ln()).clamp(0.0, 1.0)
}

/// Recolor one line: the size token is wrapped in a truecolor foreground
/// escape and a reset, everything else is preserved byte-for-byte.
///
/// With [`Scheme::None`] the line comes back unchanged, whatever its shape.
/// Parse failures are returned to the caller, which is expected to fall
/// back to emitting the original line.
pub fn transform(line: &str, config: &Config) -> Result<String, TransformError> {
    if config.scheme == Scheme::None {
        return Ok(line.to_string());
    }

    let parsed = parse_line(line, config.block_size)?;
    let value = normalize(parsed.bytes);
    let Some(rgb) = config.scheme.color_for(value)? else {
        return Ok(line.to_string());
    };

    let color = Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    };
    Ok(format!(
        "{}{}{}{}",
        SetForegroundColor(color),
        parsed.size_token,
        ResetColor,
        parsed.rest
    ))
}
