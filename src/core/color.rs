use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// Style classes used when no palette is configured.
pub const DEFAULT_COLOR_TOKENS: [&str; 6] = [
    "bar-blue",
    "bar-green",
    "bar-amber",
    "bar-purple",
    "bar-rose",
    "bar-teal",
];

/// Maps a stable key to a palette index in `[0, palette_size)`.
///
/// Hash: for each UTF-16 code unit `hash = hash * 31 + unit` with 32-bit
/// signed wraparound, then `|hash| % palette_size`. The absolute value is
/// taken in 64 bits so `i32::MIN` does not overflow. The result depends only
/// on integer arithmetic and is identical on every platform.
pub fn color_for_key(key: &str, palette_size: usize) -> GanttResult<usize> {
    if palette_size == 0 {
        return Err(GanttError::InvalidData(
            "palette size must be > 0".to_owned(),
        ));
    }
    let hash = key.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    let magnitude = i64::from(hash).unsigned_abs();
    Ok((magnitude % palette_size as u64) as usize)
}

/// One visual style, typically a CSS class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable, non-empty list of color tokens.
///
/// Palettes are passed in by the caller so tests and hosts can substitute
/// their own styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorToken>", into = "Vec<ColorToken>")]
pub struct ColorPalette {
    tokens: Vec<ColorToken>,
}

impl ColorPalette {
    pub fn new(tokens: Vec<ColorToken>) -> GanttResult<Self> {
        if tokens.is_empty() {
            return Err(GanttError::InvalidData(
                "color palette must contain at least one token".to_owned(),
            ));
        }
        Ok(Self { tokens })
    }

    pub fn from_names<I, S>(names: I) -> GanttResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(ColorToken::new).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[ColorToken] {
        &self.tokens
    }

    #[must_use]
    pub fn index_for(&self, key: &str) -> usize {
        // Non-empty by construction.
        color_for_key(key, self.tokens.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn token_for(&self, key: &str) -> &ColorToken {
        &self.tokens[self.index_for(key)]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_COLOR_TOKENS.iter().copied().map(ColorToken::new).collect(),
        }
    }
}

impl TryFrom<Vec<ColorToken>> for ColorPalette {
    type Error = GanttError;

    fn try_from(value: Vec<ColorToken>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorPalette> for Vec<ColorToken> {
    fn from(value: ColorPalette) -> Self {
        value.tokens
    }
}
