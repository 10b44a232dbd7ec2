use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{crc64, fnv};
use crate::cli::Algorithm;
use crate::error::HashError;

/// A finished checksum, sized by the algorithm that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashValue {
    U32(u32),
    U64(u64),
}

impl fmt::LowerHex for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U32(value) => fmt::LowerHex::fmt(value, f),
            Self::U64(value) => fmt::LowerHex::fmt(value, f),
        }
    }
}

/// Unpadded lowercase hex.
impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:x}")
    }
}

pub fn hash_bytes(bytes: &[u8], algorithm: Algorithm) -> HashValue {
    match algorithm {
        Algorithm::Crc32 => HashValue::U32(crc32fast::hash(bytes)),
        Algorithm::Adler32 => HashValue::U32(adler::adler32_slice(bytes)),
        Algorithm::Fnv32 => HashValue::U32(fnv::fnv1_32(bytes)),
        Algorithm::Fnva32 => HashValue::U32(fnv::fnv1a_32(bytes)),
        Algorithm::Crc64 => HashValue::U64(crc64::crc64_iso(bytes)),
        Algorithm::Fnv64 => HashValue::U64(fnv::fnv1_64(bytes)),
        Algorithm::Fnva64 => HashValue::U64(fnv::fnv1a_64(bytes)),
    }
}

pub fn hash_file(path: &Path, algorithm: Algorithm) -> Result<String, HashError> {
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), %algorithm, "read file");

    Ok(hash_bytes(&bytes, algorithm).to_string())
}

/// Resolves `algorithm` before touching the filesystem, so an unknown name
/// never opens `path`.
pub fn hash_file_by_name(path: &Path, algorithm: &str) -> Result<String, HashError> {
    let algorithm = algorithm.parse::<Algorithm>()?;
    hash_file(path, algorithm)
}
