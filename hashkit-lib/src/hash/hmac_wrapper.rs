use log::trace;

use crate::algorithm::Algorithm;
use crate::primitive::{Primitive, RustCrypto, ERR_MD_BAD_INPUT_DATA};

use super::{output_buffer, project, HashError, HashValue};

/// Keyed hash of `input`. The algorithm is resolved to a digest descriptor
/// and the MAC is written straight into a buffer sized by that descriptor.
///
/// A descriptor for any other algorithm is rejected, so the result is only
/// ever tagged with the algorithm that computed it.
pub fn hmac_with<P: Primitive + ?Sized>(
    primitive: &P,
    algorithm: Algorithm,
    key: &[u8],
    input: &[u8],
) -> Result<HashValue, HashError> {
    trace!(
        "{} hmac of {} bytes with {} byte key",
        algorithm,
        input.len(),
        key.len()
    );

    let mut buffer = output_buffer();

    let status = match primitive.md_info_from_type(algorithm) {
        Some(md) if md.algorithm == algorithm && md.size == algorithm.output_len() => {
            primitive.md_hmac(md, key, input, &mut buffer[..md.size])
        }
        _ => Err(ERR_MD_BAD_INPUT_DATA),
    };

    project(algorithm, status, buffer)
}

pub fn hmac(algorithm: Algorithm, key: &[u8], input: &[u8]) -> Result<HashValue, HashError> {
    hmac_with(&RustCrypto, algorithm, key, input)
}

pub fn sha224_hmac(input: &[u8], key: &[u8]) -> Result<HashValue, HashError> {
    hmac(Algorithm::Sha224, key, input)
}

pub fn sha256_hmac(input: &[u8], key: &[u8]) -> Result<HashValue, HashError> {
    hmac(Algorithm::Sha256, key, input)
}

pub fn sha384_hmac(input: &[u8], key: &[u8]) -> Result<HashValue, HashError> {
    hmac(Algorithm::Sha384, key, input)
}

pub fn sha512_hmac(input: &[u8], key: &[u8]) -> Result<HashValue, HashError> {
    hmac(Algorithm::Sha512, key, input)
}
