pub mod compute;
pub mod crc64;
pub mod fnv;

pub use compute::{HashValue, hash_bytes, hash_file, hash_file_by_name};
