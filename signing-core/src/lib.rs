// signing-core/src/lib.rs

//! Offline Ethereum signing: ECDSA over secp256k1 with Keccak-256.
//!
//! Three operations:
//!
//! - [`sign_transaction`]: sign a transaction record with a raw private key and
//!   return its serialized bytes.
//! - [`sign_message`]: sign a text message with the personal message (EIP-191)
//!   convention, returning a `0x`-prefixed 65-byte `r ‖ s ‖ v` hex string.
//! - [`verify_signed_message`]: check a [`SignedMessage`] record against the
//!   address it claims.
//!
//! ```
//! use signing_core::{sign_message, verify_signed_message, EvmAddress, SignedMessage};
//!
//! let key = [0x01u8; 32];
//! let sig = sign_message(&key, "hello").unwrap();
//! let address = EvmAddress::derive_from_slice(&key).unwrap();
//!
//! let record = SignedMessage::new(address, "hello", sig, "2");
//! assert!(verify_signed_message(&record).unwrap());
//! ```

pub mod chains;
pub mod crypto;
pub mod error;
pub mod utils;

pub use chains::evm::{
    sign_message, sign_transaction, verify_signed_message, EncodableTransaction, EvmAddress,
    EvmSigner, LegacyTransaction, MessageVersion, SignedMessage,
};
pub use crypto::{keccak256, personal_message_hash, RecoverableSignature};
pub use error::{CryptoError, SignerError, SignerResult};
