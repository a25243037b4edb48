use log::trace;

use crate::algorithm::Algorithm;
use crate::primitive::{Primitive, RustCrypto};

use super::{output_buffer, project, HashError, HashValue};

/// Hashes `input` with `primitive`, selecting the 256 or 512 routine family
/// and its truncated mode from `algorithm`.
pub fn digest_with<P: Primitive + ?Sized>(
    primitive: &P,
    algorithm: Algorithm,
    input: &[u8],
) -> Result<HashValue, HashError> {
    trace!("{} digest of {} bytes", algorithm, input.len());

    let mut buffer = output_buffer();
    let output = &mut buffer[..algorithm.output_len()];

    let status = match algorithm {
        Algorithm::Sha224 | Algorithm::Sha256 => {
            primitive.sha256(input, output, algorithm.is_truncated())
        }
        Algorithm::Sha384 | Algorithm::Sha512 => {
            primitive.sha512(input, output, algorithm.is_truncated())
        }
    };

    project(algorithm, status, buffer)
}

pub fn digest(algorithm: Algorithm, input: &[u8]) -> Result<HashValue, HashError> {
    digest_with(&RustCrypto, algorithm, input)
}

pub fn sha224(input: &[u8]) -> Result<HashValue, HashError> {
    digest(Algorithm::Sha224, input)
}

pub fn sha256(input: &[u8]) -> Result<HashValue, HashError> {
    digest(Algorithm::Sha256, input)
}

pub fn sha384(input: &[u8]) -> Result<HashValue, HashError> {
    digest(Algorithm::Sha384, input)
}

pub fn sha512(input: &[u8]) -> Result<HashValue, HashError> {
    digest(Algorithm::Sha512, input)
}
