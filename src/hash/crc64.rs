/// Reflected form of the ISO 3309 polynomial x^64 + x^4 + x^3 + x + 1.
const ISO_POLY_REFLECTED: u64 = 0xd800_0000_0000_0000;

const CRC64_ISO_TABLE: [u64; 256] = {
    let mut table = [0u64; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u64;
        let mut bit = 0;
        while bit < 8 {
            if crc & 1 == 1 {
                crc = (crc >> 1) ^ ISO_POLY_REFLECTED;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

pub fn crc64_iso(bytes: &[u8]) -> u64 {
    let mut hasher = Crc64Hasher::default();
    hasher.write(bytes);
    hasher.finish()
}

#[derive(Clone, Copy, Debug)]
pub struct Crc64Hasher(u64);

impl Default for Crc64Hasher {
    fn default() -> Self {
        Self(u64::MAX)
    }
}

impl Crc64Hasher {
    pub fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            let lookup_index = (self.0 as u8) ^ byte;
            self.0 = (self.0 >> 8) ^ CRC64_ISO_TABLE[lookup_index as usize];
        }
    }

    pub fn finish(self) -> u64 {
        !self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(crc64_iso(b""), 0);
    }

    #[test]
    fn single_byte() {
        assert_eq!(crc64_iso(b"a"), 0x3420_0000_0000_0000);
    }

    #[test]
    fn check_value() {
        assert_eq!(crc64_iso(b"123456789"), 0xb909_56c7_75a4_1001);
    }

    #[test]
    fn split_writes_match_one_shot() {
        let mut hasher = Crc64Hasher::default();
        hasher.write(b"1234");
        hasher.write(b"56789");
        assert_eq!(hasher.finish(), crc64_iso(b"123456789"));
    }
}
