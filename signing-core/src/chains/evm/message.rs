// signing-core/src/chains/evm/message.rs
//
// Signed Message Verification
// Recover address từ (hash, v, r, s) rồi so với address người ký khai báo

use crate::chains::evm::address::EvmAddress;
use crate::crypto::{
    keccak256, personal_message_hash, recover_public_key, LEGACY_V_OFFSET, SIGNATURE_LENGTH,
};
use crate::error::SignerResult;
use crate::utils::decode_hex;
use log::debug;
use serde::{Deserialize, Serialize};

/// Scheme hash của signed message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageVersion {
    /// Legacy: `keccak256(msg)`, không prefix
    V1,
    /// Personal message (EIP-191): `keccak256("\x19Ethereum Signed Message:\n" ‖ len ‖ msg)`
    V2,
}

impl MessageVersion {
    /// Hash message theo scheme này
    pub fn hash(self, message: &[u8]) -> [u8; 32] {
        match self {
            MessageVersion::V1 => keccak256(message),
            MessageVersion::V2 => personal_message_hash(message),
        }
    }
}

impl From<&str> for MessageVersion {
    /// Chỉ đúng `"2"` là V2, mọi giá trị khác đều là V1.
    fn from(version: &str) -> Self {
        if version == "2" {
            MessageVersion::V2
        } else {
            MessageVersion::V1
        }
    }
}

/// Signed message record (JSON cho UI / export)
///
/// ```json
/// { "address": "0x...", "msg": "hello", "sig": "0x...", "version": "2" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    /// Address người ký khai báo (có/không `0x`, không phân biệt hoa thường)
    pub address: String,
    /// Plaintext message gốc
    pub msg: String,
    /// Chữ ký 65 bytes dạng hex
    pub sig: String,
    /// `"1"` hoặc `"2"`
    pub version: String,
}

impl SignedMessage {
    pub fn new(
        address: impl Into<String>,
        msg: impl Into<String>,
        sig: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            msg: msg.into(),
            sig: sig.into(),
            version: version.into(),
        }
    }

    #[inline]
    pub fn message_version(&self) -> MessageVersion {
        MessageVersion::from(self.version.as_str())
    }

    /// Shortcut cho [`verify_signed_message`]
    #[inline]
    pub fn verify(&self) -> SignerResult<bool> {
        verify_signed_message(self)
    }
}

/// Đưa recovery id raw (0/1) về convention 27/28.
///
/// Giá trị khác giữ nguyên; recovery primitive sẽ từ chối nếu không phải 27/28.
#[inline]
pub fn normalize_recovery_id(v: u8) -> u8 {
    match v {
        0 | 1 => v + LEGACY_V_OFFSET,
        other => other,
    }
}

/// Recover address 20 bytes từ hash và chữ ký 65 bytes (`v` = 27/28).
pub fn recover_address(hash: &[u8; 32], sig: &[u8; SIGNATURE_LENGTH]) -> SignerResult<[u8; 20]> {
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig[..32]);
    s.copy_from_slice(&sig[32..64]);

    let public_key = recover_public_key(hash, sig[64], &r, &s)?;
    Ok(EvmAddress::from_public_key(&public_key))
}

/// Verify signed message.
///
/// # Returns
/// - `Ok(true)` nếu address recover được khớp `record.address`
/// - `Ok(false)` nếu chữ ký không đúng 65 bytes, hoặc address không khớp
/// - `Err(Decode)` nếu `sig` không phải hex hợp lệ
/// - `Err(Crypto)` nếu `v`/`r`/`s` không recover được
pub fn verify_signed_message(record: &SignedMessage) -> SignerResult<bool> {
    let sig_bytes = decode_hex(&record.sig)?;

    let mut sig = match <[u8; SIGNATURE_LENGTH]>::try_from(sig_bytes) {
        Ok(sig) => sig,
        Err(bytes) => {
            debug!(
                "Rejecting signature of {} bytes (expected {})",
                bytes.len(),
                SIGNATURE_LENGTH
            );
            return Ok(false);
        }
    };

    sig[64] = normalize_recovery_id(sig[64]);

    let hash = record.message_version().hash(record.msg.as_bytes());
    let recovered = recover_address(&hash, &sig)?;

    let verified = EvmAddress::matches(&record.address, &recovered);
    debug!(
        "Verified {:?} message against {}: {}",
        record.message_version(),
        record.address,
        verified
    );
    Ok(verified)
}
