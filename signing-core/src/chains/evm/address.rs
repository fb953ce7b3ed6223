// signing-core/src/chains/evm/address.rs
//
// EVM Address Module - Address Derivation & Comparison
// Keccak-256, secp256k1, EIP-55 (display only)

use crate::crypto::{keccak256, signing_key_from_slice};
use crate::error::SignerResult;
use crate::utils::strip_hex_prefix_and_lower;
use alloy::primitives::Address;
use k256::{ecdsa::VerifyingKey, elliptic_curve::sec1::ToEncodedPoint, PublicKey};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Zeroize: hash trung gian bị xóa sau khi dùng
/// - No Storage: Module này KHÔNG lưu private key
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Public Key → Address Bytes (20 bytes)
    // =========================================================================

    /// Derive 20 bytes address from a public key.
    ///
    /// # Algorithm (chuẩn Ethereum Yellow Paper)
    /// 1. `pub_key` → uncompressed SEC1 (65B)
    /// 2. Bỏ prefix byte 0x04 → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn from_public_key(public_key: &VerifyingKey) -> [u8; 20] {
        let encoded = PublicKey::from(public_key).to_encoded_point(false);
        let pub_key_raw = &encoded.as_bytes()[1..]; // Bỏ 0x04 prefix

        let mut hash = keccak256(pub_key_raw);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);

        hash.zeroize();

        address
    }

    // =========================================================================
    // PRIMARY API — Zeroizing (recommended)
    // =========================================================================

    /// Derive 20 bytes address from a **zeroizing private key**.
    ///
    /// Takes ownership of the key material wrapped in [`Zeroizing`], so the
    /// buffer is zeroed when this function returns.
    pub fn derive_bytes(priv_key: Zeroizing<Vec<u8>>) -> SignerResult<[u8; 20]> {
        Self::derive_bytes_from_slice(&priv_key)
    }

    /// Derive EIP-55 checksummed address string from a **zeroizing private key**.
    ///
    /// # Returns
    /// `"0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"` (mixed-case checksum)
    #[inline]
    pub fn derive(priv_key: Zeroizing<Vec<u8>>) -> SignerResult<String> {
        Self::derive_from_slice(&priv_key)
    }

    // =========================================================================
    // SECONDARY API — Borrowed slice (caller manages zeroing)
    // =========================================================================

    /// Derive 20 bytes address from a **borrowed byte slice**.
    ///
    /// # ⚠ Security Note
    /// The caller is responsible for zeroing `priv_key` after this call.
    pub fn derive_bytes_from_slice(priv_key: &[u8]) -> SignerResult<[u8; 20]> {
        let signing_key = signing_key_from_slice(priv_key)?;
        Ok(Self::from_public_key(signing_key.verifying_key()))
    }

    /// Derive EIP-55 checksummed address from a **borrowed byte slice**.
    #[inline]
    pub fn derive_from_slice(priv_key: &[u8]) -> SignerResult<String> {
        let bytes = Self::derive_bytes_from_slice(priv_key)?;
        Ok(Self::to_checksum_bytes(&bytes))
    }

    // =========================================================================
    // FORMATTING & COMPARISON
    // =========================================================================

    /// Lower-case hex, không có `0x` (dạng chuẩn để so sánh)
    #[inline]
    pub fn to_lower_hex(address: &[u8; 20]) -> String {
        hex::encode(address)
    }

    /// EIP-55 checksum, có `0x`
    #[inline]
    pub fn to_checksum_bytes(address: &[u8; 20]) -> String {
        Address::from_slice(address).to_checksum(None)
    }

    /// So sánh address người dùng khai báo với address đã derive.
    ///
    /// Không phân biệt hoa/thường, có hay không có `0x`. Chuỗi không hợp lệ
    /// (sai độ dài, ký tự lạ) đơn giản là không khớp.
    pub fn matches(claimed: &str, derived: &[u8; 20]) -> bool {
        strip_hex_prefix_and_lower(claimed) == Self::to_lower_hex(derived)
    }
}

// =============================================================================
// TESTS
// =============================================================================
