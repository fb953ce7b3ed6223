// signing-core/src/crypto/keccak.rs
//
// Keccak-256 Hashing
// Raw hash + EIP-191 "personal message" hash (version 0x45)

use tiny_keccak::{Hasher, Keccak};

/// Domain-separation prefix của EIP-191 personal message.
///
/// Độ dài message (decimal ASCII) được nối ngay sau prefix.
pub const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Keccak-256 (pre-standard SHA-3, dùng trong Ethereum)
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut hash);
    hash
}

/// Personal message hash (EIP-191)
///
/// # Algorithm
/// `keccak256("\x19Ethereum Signed Message:\n" ‖ len(message) ‖ message)`
///
/// `len` là độ dài **byte** của message, viết dạng decimal ASCII.
/// Phải khớp byte-for-byte với MetaMask / `personal_sign`.
pub fn personal_message_hash(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(PERSONAL_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize(&mut hash);
    hash
}
