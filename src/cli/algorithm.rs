use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Crc32,
    Adler32,
    Fnv32,
    Fnva32,
    Crc64,
    Fnv64,
    Fnva64,
}

/// Output width of an algorithm's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u32")]
pub enum Width {
    Bits32,
    Bits64,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.bits()
    }
}

const FAMILY_32: [Algorithm; 4] = [
    Algorithm::Crc32,
    Algorithm::Adler32,
    Algorithm::Fnv32,
    Algorithm::Fnva32,
];

const FAMILY_64: [Algorithm; 3] = [Algorithm::Crc64, Algorithm::Fnv64, Algorithm::Fnva64];

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Self::Crc32,
        Self::Adler32,
        Self::Fnv32,
        Self::Fnva32,
        Self::Crc64,
        Self::Fnv64,
        Self::Fnva64,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc32 => "crc32",
            Self::Adler32 => "adler32",
            Self::Fnv32 => "fnv32",
            Self::Fnva32 => "fnva32",
            Self::Crc64 => "crc64",
            Self::Fnv64 => "fnv64",
            Self::Fnva64 => "fnva64",
        }
    }

    pub fn width(&self) -> Width {
        match self {
            Self::Crc32 | Self::Adler32 | Self::Fnv32 | Self::Fnva32 => Width::Bits32,
            Self::Crc64 | Self::Fnv64 | Self::Fnva64 => Width::Bits64,
        }
    }

    pub fn family(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC-32 (IEEE polynomial)",
            Self::Adler32 => "Adler-32 checksum",
            Self::Fnv32 => "FNV-1, 32-bit",
            Self::Fnva32 => "FNV-1a, 32-bit",
            Self::Crc64 => "CRC-64 (ISO polynomial)",
            Self::Fnv64 => "FNV-1, 64-bit",
            Self::Fnva64 => "FNV-1a, 64-bit",
        }
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    /// Names are routed by their `32`/`64` suffix to a width family, then
    /// matched exactly (case-sensitive) within it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family: &[Algorithm] = if s.ends_with("32") {
            &FAMILY_32
        } else if s.ends_with("64") {
            &FAMILY_64
        } else {
            return Err(HashError::unknown_algorithm(s));
        };

        family
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| HashError::unknown_algorithm(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
