use hmac::{digest::KeyInit, Hmac, Mac};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::algorithm::Algorithm;

/// Status returned for a wrongly sized output buffer or an unusable key.
pub const ERR_MD_BAD_INPUT_DATA: i32 = -0x5100;

/// Message-digest descriptor handed to the keyed-MAC primitive.
#[derive(Debug, PartialEq, Eq)]
pub struct MdInfo {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub size: usize,
}

static MD_INFO: [MdInfo; 4] = [
    MdInfo {
        algorithm: Algorithm::Sha224,
        name: "SHA224",
        size: 28,
    },
    MdInfo {
        algorithm: Algorithm::Sha256,
        name: "SHA256",
        size: 32,
    },
    MdInfo {
        algorithm: Algorithm::Sha384,
        name: "SHA384",
        size: 48,
    },
    MdInfo {
        algorithm: Algorithm::Sha512,
        name: "SHA512",
        size: 64,
    },
];

/// Hashing library the engines dispatch to.
///
/// Every method is a single stateless call: implementations must not keep a
/// hashing context between calls, so one value can be shared across threads.
/// A non-zero status is reported as `Err(status)`.
pub trait Primitive: Send + Sync {
    /// SHA-256 routine family; `is224` selects the truncated SHA-224 mode.
    fn sha256(&self, input: &[u8], output: &mut [u8], is224: bool) -> Result<(), i32>;

    /// SHA-512 routine family; `is384` selects the truncated SHA-384 mode.
    fn sha512(&self, input: &[u8], output: &mut [u8], is384: bool) -> Result<(), i32>;

    fn md_info_from_type(&self, algorithm: Algorithm) -> Option<&'static MdInfo>;

    fn md_hmac(
        &self,
        md: &MdInfo,
        key: &[u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), i32>;

    fn version(&self) -> &'static str;
}

/// Primitive backed by the RustCrypto `sha2` and `hmac` crates.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCrypto;

fn digest_into<D: Digest>(input: &[u8], output: &mut [u8]) -> Result<(), i32> {
    if output.len() != <D as Digest>::output_size() {
        return Err(ERR_MD_BAD_INPUT_DATA);
    }

    let mut hasher = D::new();
    hasher.update(input);
    hasher.finalize_into(output.into());

    Ok(())
}

fn hmac_into<M: Mac + KeyInit>(key: &[u8], input: &[u8], output: &mut [u8]) -> Result<(), i32> {
    let mut mac = match <M as KeyInit>::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_error) => return Err(ERR_MD_BAD_INPUT_DATA),
    };
    mac.update(input);

    let tag = mac.finalize().into_bytes();
    if tag.len() != output.len() {
        return Err(ERR_MD_BAD_INPUT_DATA);
    }
    output.copy_from_slice(&tag);

    Ok(())
}

impl Primitive for RustCrypto {
    fn sha256(&self, input: &[u8], output: &mut [u8], is224: bool) -> Result<(), i32> {
        if is224 {
            digest_into::<Sha224>(input, output)
        } else {
            digest_into::<Sha256>(input, output)
        }
    }

    fn sha512(&self, input: &[u8], output: &mut [u8], is384: bool) -> Result<(), i32> {
        if is384 {
            digest_into::<Sha384>(input, output)
        } else {
            digest_into::<Sha512>(input, output)
        }
    }

    fn md_info_from_type(&self, algorithm: Algorithm) -> Option<&'static MdInfo> {
        MD_INFO.iter().find(|info| info.algorithm == algorithm)
    }

    fn md_hmac(
        &self,
        md: &MdInfo,
        key: &[u8],
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), i32> {
        if output.len() != md.size {
            return Err(ERR_MD_BAD_INPUT_DATA);
        }

        match md.algorithm {
            Algorithm::Sha224 => hmac_into::<Hmac<Sha224>>(key, input, output),
            Algorithm::Sha256 => hmac_into::<Hmac<Sha256>>(key, input, output),
            Algorithm::Sha384 => hmac_into::<Hmac<Sha384>>(key, input, output),
            Algorithm::Sha512 => hmac_into::<Hmac<Sha512>>(key, input, output),
        }
    }

    // Compatible release lines of the sha2 and hmac requirements in
    // hashkit-lib/Cargo.toml; bump together with the manifest.
    fn version(&self) -> &'static str {
        "RustCrypto sha2 0.10 / hmac 0.12"
    }
}

/// Primitive that always fails with `status` after scribbling over its output.
#[cfg(test)]
pub(crate) struct Failing {
    pub status: i32,
}

#[cfg(test)]
impl Failing {
    fn fail(&self, output: &mut [u8]) -> Result<(), i32> {
        output.fill(0xAA);
        Err(self.status)
    }
}

#[cfg(test)]
impl Primitive for Failing {
    fn sha256(&self, _input: &[u8], output: &mut [u8], _is224: bool) -> Result<(), i32> {
        self.fail(output)
    }

    fn sha512(&self, _input: &[u8], output: &mut [u8], _is384: bool) -> Result<(), i32> {
        self.fail(output)
    }

    fn md_info_from_type(&self, algorithm: Algorithm) -> Option<&'static MdInfo> {
        RustCrypto.md_info_from_type(algorithm)
    }

    fn md_hmac(
        &self,
        _md: &MdInfo,
        _key: &[u8],
        _input: &[u8],
        output: &mut [u8],
    ) -> Result<(), i32> {
        self.fail(output)
    }

    fn version(&self) -> &'static str {
        "failing"
    }
}
