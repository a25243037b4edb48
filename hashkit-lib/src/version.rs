use crate::primitive::{Primitive, RustCrypto};

/// Version strings of the linked hashing primitive and of this library.
pub fn version() -> (&'static str, &'static str) {
    (RustCrypto.version(), env!("CARGO_PKG_VERSION"))
}
