// signing-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Stateless primitives shared by every signing operation:
//!
//! - **Hashing**: Keccak-256 and the EIP-191 personal message hash via
//!   [`keccak256`] / [`personal_message_hash`].
//! - **ECDSA**: deterministic recoverable signing and public key recovery on
//!   secp256k1 via [`sign_hash`] / [`recover_public_key`].

pub mod ecdsa;
pub mod keccak;

// Re-exports for cleaner API access
pub use ecdsa::{
    recover_public_key, sign_hash, signing_key_from_slice, RecoverableSignature,
    LEGACY_V_OFFSET, SIGNATURE_LENGTH,
};
pub use keccak::{keccak256, personal_message_hash, PERSONAL_MESSAGE_PREFIX};
