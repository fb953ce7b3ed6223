// signing-core/src/chains/evm/signer.rs
//
// EVM Signer Module - Offline Signing
// Hỗ trợ: Transaction (record tự encode), Personal Message (EIP-191), raw hash

use crate::chains::evm::address::EvmAddress;
use crate::chains::evm::transaction::EncodableTransaction;
use crate::crypto::{
    personal_message_hash, sign_hash, signing_key_from_slice, RecoverableSignature,
};
use crate::error::SignerResult;
use k256::ecdsa::SigningKey;
use log::{debug, trace};

/// EVM Signer - Secure Offline Signing
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: `SigningKey` tự động ghi đè bộ nhớ bằng 0 khi Drop
/// - **No Debug Leak**: Custom Debug impl không hiển thị private key
/// - **Memory Safety**: Rust ownership đảm bảo key không bị copy ngoài ý muốn
///
/// # Performance
/// - **Cached Address**: Địa chỉ được tính toán một lần khi khởi tạo
pub struct EvmSigner {
    signing_key: SigningKey,
    address: [u8; 20],
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị private key
impl std::fmt::Debug for EvmSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmSigner")
            .field("address", &EvmAddress::to_checksum_bytes(&self.address))
            .finish_non_exhaustive()
    }
}

impl Drop for EvmSigner {
    fn drop(&mut self) {
        // SigningKey bên trong sẽ tự động Zeroize
        trace!(
            "Dropped signer for address: {}",
            EvmAddress::to_checksum_bytes(&self.address)
        );
    }
}

impl EvmSigner {
    // =========================================================================
    // CONSTRUCTOR
    // =========================================================================

    /// Khởi tạo Signer với Private Key
    ///
    /// # Arguments
    /// * `priv_key` - Private key đúng 32 bytes
    pub fn new(priv_key: &[u8]) -> SignerResult<Self> {
        let signing_key = signing_key_from_slice(priv_key)?;
        let address = EvmAddress::from_public_key(signing_key.verifying_key());

        Ok(Self {
            signing_key,
            address,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Address 20 bytes
    #[inline]
    pub fn address(&self) -> [u8; 20] {
        self.address
    }

    /// Address dạng EIP-55 Checksum
    #[inline]
    pub fn address_checksummed(&self) -> String {
        EvmAddress::to_checksum_bytes(&self.address)
    }

    // =========================================================================
    // TRANSACTION SIGNING
    // =========================================================================

    /// Ký giao dịch Offline và trả về Raw Bytes
    ///
    /// 1. Lấy signing hash từ record
    /// 2. Ký (deterministic) → `(r, s, v)`
    /// 3. Gắn chữ ký vào record (in place)
    /// 4. Serialize theo format của record
    ///
    /// # Returns
    /// Raw transaction bytes sẵn sàng broadcast qua `eth_sendRawTransaction`
    pub fn sign_transaction<T>(&self, tx: &mut T) -> SignerResult<Vec<u8>>
    where
        T: EncodableTransaction + ?Sized,
    {
        let hash = tx.signing_hash();
        let signature = self.sign_hash(&hash)?;

        tx.apply_signature(&signature)?;
        let raw = tx.serialize()?;

        debug!(
            "Signed transaction for {} ({} bytes)",
            self.address_checksummed(),
            raw.len()
        );
        Ok(raw)
    }

    // =========================================================================
    // MESSAGE SIGNING (EIP-191)
    // =========================================================================

    /// Ký thông điệp (EIP-191 Personal Sign), trả về chữ ký dạng struct
    ///
    /// Tự động thêm prefix: "\x19Ethereum Signed Message:\n{len}{message}"
    pub fn sign_message_raw(&self, message: &str) -> SignerResult<RecoverableSignature> {
        let hash = personal_message_hash(message.as_bytes());
        self.sign_hash(&hash)
    }

    /// Ký thông điệp, trả về `0x` + hex của `r ‖ s ‖ v` (65 bytes)
    ///
    /// # Note
    /// `v` là raw recovery id (0/1), KHÔNG cộng 27. Phía verify sẽ normalize.
    pub fn sign_message(&self, message: &str) -> SignerResult<String> {
        let signature = self.sign_message_raw(message)?;

        debug!(
            "Signed personal message ({} bytes) for {}",
            message.len(),
            self.address_checksummed()
        );
        Ok(signature.to_hex())
    }

    // =========================================================================
    // HASH SIGNING (Low-level)
    // =========================================================================

    /// Ký hash trực tiếp (32 bytes)
    ///
    /// # Warning
    /// Chỉ sử dụng khi bạn đã tự hash dữ liệu theo chuẩn phù hợp.
    #[inline]
    pub fn sign_hash(&self, hash: &[u8; 32]) -> SignerResult<RecoverableSignature> {
        sign_hash(&self.signing_key, hash)
    }
}

// =============================================================================
// FREE FUNCTIONS - transient signer, key chỉ sống trong 1 lần gọi
// =============================================================================

/// Ký transaction bằng raw private key, trả về serialized bytes.
pub fn sign_transaction<T>(priv_key: &[u8], tx: &mut T) -> SignerResult<Vec<u8>>
where
    T: EncodableTransaction + ?Sized,
{
    EvmSigner::new(priv_key)?.sign_transaction(tx)
}

/// Ký personal message bằng raw private key, trả về `0x`-prefixed hex (65 bytes).
pub fn sign_message(priv_key: &[u8], message: &str) -> SignerResult<String> {
    EvmSigner::new(priv_key)?.sign_message(message)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::evm::transaction::LegacyTransaction;
    use crate::crypto::keccak256;
    use crate::error::{CryptoError, SignerError};
    use alloy::{
        consensus::{SignableTransaction, TxEnvelope, TxLegacy},
        eips::eip2718::Encodable2718,
        primitives::{Address, Bytes, TxKind, B256, U256},
        signers::{local::PrivateKeySigner, SignerSync},
    };

    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    const TEST_CHAIN_ID: u64 = 31337; // Anvil/Hardhat

    fn create_test_signer() -> EvmSigner {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        EvmSigner::new(&priv_key).expect("Create signer")
    }

    fn alloy_test_signer() -> PrivateKeySigner {
        PrivateKeySigner::from_slice(&hex::decode(TEST_PRIVATE_KEY).unwrap()).unwrap()
    }

    fn sample_tx() -> LegacyTransaction {
        LegacyTransaction::new(TxLegacy {
            chain_id: Some(TEST_CHAIN_ID),
            nonce: 0,
            gas_price: 1_000_000_000,
            gas_limit: 21_000,
            to: TxKind::Call(
                "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
                    .parse::<Address>()
                    .unwrap(),
            ),
            value: U256::from(1_000_000_000_000_000_000u128), // 1 ETH
            input: Bytes::new(),
        })
    }

    #[test]
    fn test_address_derivation() {
        let signer = create_test_signer();
        assert_eq!(signer.address_checksummed(), TEST_ADDRESS);
    }

    #[test]
    fn test_sign_message_format() {
        let signer = create_test_signer();
        let sig = signer.sign_message("Hello, Ethereum!").expect("Sign message");

        assert!(sig.starts_with("0x"));
        assert_eq!(sig.len(), 132);
        assert!(sig[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        // Byte cuối là raw recovery id
        let v = u8::from_str_radix(&sig[130..], 16).unwrap();
        assert!(v == 0 || v == 1);
    }

    #[test]
    fn test_sign_message_matches_alloy() {
        let signer = create_test_signer();
        let alloy_signer = alloy_test_signer();

        for message in ["", "hello", "Hello, Ethereum!"] {
            let ours = signer.sign_message_raw(message).unwrap();
            let theirs = alloy_signer.sign_message_sync(message.as_bytes()).unwrap();

            assert_eq!(U256::from_be_bytes(*ours.r()), theirs.r());
            assert_eq!(U256::from_be_bytes(*ours.s()), theirs.s());
            assert_eq!(ours.v() == 1, theirs.v());
        }
    }

    #[test]
    fn test_sign_message_free_fn_matches_signer() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let signer = create_test_signer();
        assert_eq!(
            sign_message(&priv_key, "gm").unwrap(),
            signer.sign_message("gm").unwrap()
        );
    }

    #[test]
    fn test_sign_hash() {
        let signer = create_test_signer();
        let hash = keccak256(b"raw");
        let sig = signer.sign_hash(&hash).expect("Sign hash");

        let recovered = alloy::primitives::Signature::from_scalars_and_parity(
            B256::from(*sig.r()),
            B256::from(*sig.s()),
            sig.v() == 1,
        )
        .recover_address_from_prehash(&B256::from(hash))
        .unwrap();
        assert_eq!(recovered.0 .0, signer.address());
    }

    #[test]
    fn test_sign_transaction() {
        let signer = create_test_signer();
        let mut tx = sample_tx();

        let raw_tx = signer.sign_transaction(&mut tx).expect("Sign tx");
        let hex_tx = hex::encode(&raw_tx);
        println!("Signed TX: 0x{}", hex_tx);

        assert!(tx.is_signed());
        assert!(hex_tx.starts_with("f8"));
    }

    #[test]
    fn test_sign_transaction_matches_alloy() {
        let mut tx = sample_tx();
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let ours = sign_transaction(&priv_key, &mut tx).unwrap();

        let unsigned = sample_tx().inner().clone();
        let alloy_signer = alloy_test_signer();
        let sig = alloy_signer
            .sign_hash_sync(&unsigned.signature_hash())
            .unwrap();
        let expected = TxEnvelope::from(unsigned.into_signed(sig)).encoded_2718();

        assert_eq!(ours, expected);
    }

    #[test]
    fn test_sign_transaction_deterministic() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let first = sign_transaction(&priv_key, &mut sample_tx()).unwrap();
        let second = sign_transaction(&priv_key, &mut sample_tx()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_transaction_dyn_record() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let mut tx = sample_tx();
        let record: &mut dyn EncodableTransaction = &mut tx;
        assert!(sign_transaction(&priv_key, record).is_ok());
    }

    #[test]
    fn test_invalid_private_key() {
        let invalid_key = [0u8; 31]; // 31 bytes instead of 32
        let result = EvmSigner::new(&invalid_key);
        assert!(matches!(
            result,
            Err(SignerError::Crypto(CryptoError::InvalidKeyFormat(_)))
        ));

        assert!(sign_message(&[0u8; 32], "hello").is_err());
        assert!(sign_transaction(&[0u8; 32], &mut sample_tx()).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let signer = create_test_signer();
        let debug_output = format!("{:?}", signer);

        assert!(!debug_output.contains(TEST_PRIVATE_KEY));
        assert!(debug_output.contains("EvmSigner"));
        assert!(debug_output.contains(TEST_ADDRESS));
    }
}
