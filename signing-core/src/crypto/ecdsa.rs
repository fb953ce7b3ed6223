// signing-core/src/crypto/ecdsa.rs
//
// secp256k1 Recoverable ECDSA
// Deterministic signing (RFC 6979) + public key recovery

use crate::error::{CryptoError, SignerError, SignerResult};
use crate::utils::add_hex_prefix;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

/// Private key length in bytes
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Combined signature length: r (32) ‖ s (32) ‖ v (1)
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset of the legacy Ethereum `v` convention (27/28)
pub const LEGACY_V_OFFSET: u8 = 27;

/// Chữ ký ECDSA kèm recovery id.
///
/// `v` giữ nguyên giá trị nhận được: raw recovery id (0/1) khi vừa ký,
/// hoặc 27/28 khi đến từ nguồn bên ngoài.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature {
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
}

impl RecoverableSignature {
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Self { r, s, v }
    }

    /// Parse từ 65 bytes `r ‖ s ‖ v`.
    ///
    /// # Errors
    /// [`SignerError::Validation`] nếu độ dài khác 65.
    pub fn from_slice(bytes: &[u8]) -> SignerResult<Self> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignerError::Validation(format!(
                "Signature must be {} bytes, got {}",
                SIGNATURE_LENGTH,
                bytes.len()
            )));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    #[inline]
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    #[inline]
    pub fn v(&self) -> u8 {
        self.v
    }

    /// `r ‖ s ‖ v`
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// `0x` + 130 lower-case hex chars
    pub fn to_hex(&self) -> String {
        add_hex_prefix(&hex::encode(self.to_bytes()))
    }
}

/// Parse & validate private key (đúng 32 bytes, 0 < k < n).
///
/// `SigningKey` tự zeroize khi drop.
pub fn signing_key_from_slice(priv_key: &[u8]) -> SignerResult<SigningKey> {
    // k256 tự pad các slice ngắn hơn 32 bytes, nên kiểm tra độ dài trước
    if priv_key.len() != PRIVATE_KEY_LENGTH {
        return Err(CryptoError::InvalidKeyFormat(format!(
            "Private key must be {} bytes, got {}",
            PRIVATE_KEY_LENGTH,
            priv_key.len()
        ))
        .into());
    }

    SigningKey::from_slice(priv_key).map_err(|e| {
        CryptoError::InvalidKeyFormat(format!("Invalid secp256k1 private key: {}", e)).into()
    })
}

/// Ký hash 32 bytes (deterministic, low-S).
///
/// # Returns
/// `RecoverableSignature` với `v` là raw recovery id (0 hoặc 1), chưa cộng 27.
pub fn sign_hash(key: &SigningKey, hash: &[u8; 32]) -> SignerResult<RecoverableSignature> {
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(hash)
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

    let (r, s) = signature.split_bytes();

    Ok(RecoverableSignature {
        r: r.into(),
        s: s.into(),
        v: recovery_id.to_byte(),
    })
}

/// Recover public key từ `(hash, v, r, s)`.
///
/// `v` theo convention 27/28 (như `ecrecover`): recovery id = `v - 27`.
///
/// # Errors
/// - [`CryptoError::InvalidRecoveryId`] nếu `v` không phải 27/28
/// - [`CryptoError::RecoveryFailed`] nếu `r`/`s` ngoài khoảng hợp lệ
///   hoặc không recover được điểm
///
/// Chữ ký high-S được chấp nhận (như `ecrecover`).
pub fn recover_public_key(
    hash: &[u8; 32],
    v: u8,
    r: &[u8; 32],
    s: &[u8; 32],
) -> SignerResult<VerifyingKey> {
    let recovery_id = v
        .checked_sub(LEGACY_V_OFFSET)
        .filter(|id| *id <= 1)
        .and_then(RecoveryId::from_byte)
        .ok_or(CryptoError::InvalidRecoveryId(v))?;

    let mut rs = [0u8; 64];
    rs[..32].copy_from_slice(r);
    rs[32..].copy_from_slice(s);

    let signature = Signature::from_slice(&rs)
        .map_err(|e| CryptoError::RecoveryFailed(format!("Invalid r/s: {}", e)))?;

    // High-S vẫn hợp lệ với ecrecover: (r, n - s, v ^ 1) cùng public key.
    // k256 chỉ verify low-S nên đổi về dạng low-S trước khi recover.
    let (signature, recovery_id) = match signature.normalize_s() {
        Some(low) => (
            low,
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        ),
        None => (signature, recovery_id),
    };

    VerifyingKey::recover_from_prehash(hash, &signature, recovery_id)
        .map_err(|e| CryptoError::RecoveryFailed(e.to_string()).into())
}
