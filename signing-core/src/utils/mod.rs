// signing-core/src/utils/mod.rs

//! Small string helpers shared by the signing and verification paths.

pub mod hex;

pub use self::hex::{add_hex_prefix, decode_hex, strip_hex_prefix, strip_hex_prefix_and_lower};
