use std::fmt;
use std::str::FromStr;

/// A byte count parsed from a human size string such as `"8M"`, `"2G"`,
/// `"512K"` or a bare `"1048576"`.
///
/// Units are case-insensitive powers of 1024. Surrounding whitespace is
/// ignored, and so is whitespace between the number and its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSize(u64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ByteSizeError {
    #[error("Size string is empty")]
    Empty,

    #[error("Invalid size value: {0}")]
    InvalidNumber(String),

    #[error("Size value overflows: {0}")]
    Overflow(String),
}

impl ByteSize {
    pub const KIB: u64 = 1024;
    pub const MIB: u64 = 1024 * 1024;
    pub const GIB: u64 = 1024 * 1024 * 1024;

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl FromStr for ByteSize {
    type Err = ByteSizeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        let last = value.chars().last().ok_or(ByteSizeError::Empty)?;

        let (number, multiplier) = match last.to_ascii_lowercase() {
            'g' => (&value[..value.len() - 1], Self::GIB),
            'm' => (&value[..value.len() - 1], Self::MIB),
            'k' => (&value[..value.len() - 1], Self::KIB),
            _ => (value, 1),
        };

        let number: u64 = number
            .trim()
            .parse()
            .map_err(|_| ByteSizeError::InvalidNumber(raw.to_string()))?;

        number
            .checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| ByteSizeError::Overflow(raw.to_string()))
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ByteSize> for u64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}
