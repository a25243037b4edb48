pub mod hmac_wrapper;
pub mod sha_wrapper;

use log::error;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zeroize::Zeroizing;

use crate::algorithm::{Algorithm, MAX_OUTPUT_LEN};

/// Fixed-length digest tagged with the algorithm that produced it.
///
/// Values are only built from a completed digest or HMAC call (or parsed
/// from hex), and are never mutated afterwards.
#[derive(Clone, Copy)]
pub struct HashValue {
    algorithm: Algorithm,
    bytes: [u8; MAX_OUTPUT_LEN],
}

impl HashValue {
    fn new(algorithm: Algorithm, bytes: &[u8]) -> HashValue {
        let mut result = HashValue {
            algorithm,
            bytes: [0; MAX_OUTPUT_LEN],
        };

        result.bytes[..bytes.len()].copy_from_slice(bytes);

        result
    }

    /// Parses a hex encoded digest of exactly `algorithm.output_len()` bytes.
    pub fn from_hex(algorithm: Algorithm, hex: &str) -> Result<HashValue, HashError> {
        let bytes = match hex::decode(hex.trim()) {
            Ok(bytes) => bytes,
            Err(error) => return Err(HashError::InvalidHash(error.to_string())),
        };

        if bytes.len() != algorithm.output_len() {
            return Err(HashError::InvalidHash(format!(
                "expected {} bytes for {}, got {}",
                algorithm.output_len(),
                algorithm,
                bytes.len()
            )));
        }

        Ok(HashValue::new(algorithm, &bytes))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.output_len()]
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl AsRef<[u8]> for HashValue {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for HashValue {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for HashValue {}

impl std::hash::Hash for HashValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.algorithm, state);
        std::hash::Hash::hash(self.as_bytes(), state);
    }
}

impl std::fmt::Display for HashValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for HashValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(std::format_args!("HashValue({}:{})", self.algorithm, self.to_hex()))
    }
}

impl Serialize for HashValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("HashValue", 2)?;
        state.serialize_field("algorithm", &self.algorithm)?;
        state.serialize_field("hash", &self.to_hex())?;
        state.end()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum HashError {
    /// Non-zero status from the hashing primitive, preserved as returned.
    PrimitiveFailure(i32),
    InvalidHash(String),
}

impl HashError {
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::PrimitiveFailure(code) => Some(*code),
            Self::InvalidHash(_) => None,
        }
    }
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::PrimitiveFailure(code) => f.write_fmt(std::format_args!(
                "Hash primitive failed with status {} (-0x{:04X})",
                code,
                code.unsigned_abs()
            )),
            Self::InvalidHash(msg) => f.write_fmt(std::format_args!("Invalid hash: {}", msg)),
        };
    }
}

impl std::error::Error for HashError {}

/// Scratch output buffer, wiped when dropped.
pub(crate) type OutputBuffer = Zeroizing<[u8; MAX_OUTPUT_LEN]>;

pub(crate) fn output_buffer() -> OutputBuffer {
    Zeroizing::new([0; MAX_OUTPUT_LEN])
}

/// Turns a primitive status and its output buffer into the caller visible result.
///
/// On failure the buffer is dropped (and wiped) here, so nothing the primitive
/// wrote can reach the caller.
pub(crate) fn project(
    algorithm: Algorithm,
    status: Result<(), i32>,
    buffer: OutputBuffer,
) -> Result<HashValue, HashError> {
    match status {
        Ok(()) => Ok(HashValue::new(
            algorithm,
            &buffer[..algorithm.output_len()],
        )),
        Err(code) => {
            error!("{} primitive failed with status {}", algorithm, code);
            Err(HashError::PrimitiveFailure(code))
        }
    }
}

#[cfg(test)]
mod test {
    use super::{output_buffer, project, HashError, HashValue};
    use crate::algorithm::Algorithm;

    #[test]
    fn test_project_success() {
        let mut buffer = output_buffer();
        buffer[..28].fill(0x11);
        buffer[28..].fill(0x22);

        let value = project(Algorithm::Sha224, Ok(()), buffer).unwrap();
        assert_eq!(value.algorithm(), Algorithm::Sha224);
        assert_eq!(value.as_bytes(), &[0x11; 28][..]);
        assert_eq!(value.as_bytes().len(), 28);
    }

    #[test]
    fn test_project_failure_keeps_status() {
        let mut buffer = output_buffer();
        buffer.fill(0xAA);

        let error = project(Algorithm::Sha512, Err(-0x0010), buffer).unwrap_err();
        assert_eq!(error, HashError::PrimitiveFailure(-0x0010));
        assert_eq!(error.code(), Some(-0x0010));
    }

    #[test]
    fn test_equality_includes_algorithm() {
        let a = HashValue::new(Algorithm::Sha256, &[7; 32]);
        let b = HashValue::new(Algorithm::Sha256, &[7; 32]);
        let c = HashValue::new(Algorithm::Sha256, &[8; 32]);
        let d = HashValue::new(Algorithm::Sha224, &[7; 28]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_display_and_debug() {
        let value = HashValue::new(Algorithm::Sha224, &[0xAB; 28]);

        assert_eq!(value.to_string(), "ab".repeat(28));
        assert_eq!(format!("{:?}", value), format!("HashValue(sha224:{})", "ab".repeat(28)));
    }

    #[test]
    fn test_from_hex() {
        let hex = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        let value = HashValue::from_hex(Algorithm::Sha256, hex).unwrap();
        assert_eq!(value.to_hex(), hex);

        let upper = HashValue::from_hex(Algorithm::Sha256, &hex.to_uppercase()).unwrap();
        assert_eq!(value, upper);

        assert!(matches!(
            HashValue::from_hex(Algorithm::Sha224, hex),
            Err(HashError::InvalidHash(_))
        ));
        assert!(matches!(
            HashValue::from_hex(Algorithm::Sha256, "not hex"),
            Err(HashError::InvalidHash(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let error = HashError::PrimitiveFailure(-0x5100);
        assert_eq!(
            error.to_string(),
            "Hash primitive failed with status -20736 (-0x5100)"
        );
    }

    #[test]
    fn test_serialize() {
        let value = HashValue::new(Algorithm::Sha256, &[1; 32]);

        let encoded = bincode::serialize(&value).unwrap();
        let (algorithm, hash): (Algorithm, String) = bincode::deserialize(&encoded).unwrap();

        assert_eq!(algorithm, Algorithm::Sha256);
        assert_eq!(hash, "01".repeat(32));
    }
}
