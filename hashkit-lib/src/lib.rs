pub mod algorithm;
pub mod hash;
pub mod primitive;
pub mod version;

pub use zeroize;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use hash::hmac_wrapper::{hmac, hmac_with, sha224_hmac, sha256_hmac, sha384_hmac, sha512_hmac};
pub use hash::sha_wrapper::{digest, digest_with, sha224, sha256, sha384, sha512};
pub use hash::{HashError, HashValue};
pub use version::version;
