// signing-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! # Key Features
//! - **Address Derivation**: Keccak-256 address from secp256k1 keys via [`EvmAddress`].
//! - **Signing**: Transactions and personal messages (EIP-191) via [`EvmSigner`] or the
//!   one-shot [`sign_transaction`] / [`sign_message`].
//! - **Verification**: Signed message records (version "1" raw hash, "2" personal hash) via
//!   [`verify_signed_message`].
//! - **Transaction Records**: Encoding-agnostic [`EncodableTransaction`] trait, with an
//!   alloy-backed [`LegacyTransaction`].

pub mod address;
pub mod message;
pub mod signer;
pub mod transaction;

// Re-exports for cleaner API access
pub use address::EvmAddress;
pub use message::{
    normalize_recovery_id, recover_address, verify_signed_message, MessageVersion, SignedMessage,
};
pub use signer::{sign_message, sign_transaction, EvmSigner};
pub use transaction::{EncodableTransaction, LegacyTransaction};
