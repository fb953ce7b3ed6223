// signing-core/src/chains/evm/transaction.rs
//
// Transaction Records - tách logic ký khỏi format encode
// Signer chỉ cần: signing hash → gắn chữ ký → serialize

use crate::crypto::RecoverableSignature;
use crate::error::{SignerError, SignerResult};
use alloy::{
    consensus::{SignableTransaction, TxEnvelope, TxLegacy},
    eips::eip2718::Encodable2718,
    primitives::{Signature, B256},
};

/// Transaction record có thể ký và serialize.
///
/// Record sở hữu toàn bộ format của mình (field order, chain id, RLP...).
/// Signer không biết gì về cấu trúc bên trong.
pub trait EncodableTransaction {
    /// Hash của pre-image cần ký (chưa có chữ ký)
    fn signing_hash(&self) -> [u8; 32];

    /// Gắn chữ ký vào các field signature của record (in place).
    ///
    /// `signature.v()` là raw recovery id (0/1); record tự áp convention
    /// riêng của nó (EIP-155, y-parity...).
    fn apply_signature(&mut self, signature: &RecoverableSignature) -> SignerResult<()>;

    /// Canonical serialized bytes của record đã ký
    fn serialize(&self) -> SignerResult<Vec<u8>>;
}

/// Legacy transaction (EIP-155 nếu có `chain_id`), encode bằng alloy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTransaction {
    tx: TxLegacy,
    signature: Option<Signature>,
}

impl LegacyTransaction {
    pub fn new(tx: TxLegacy) -> Self {
        Self {
            tx,
            signature: None,
        }
    }

    #[inline]
    pub fn inner(&self) -> &TxLegacy {
        &self.tx
    }

    #[inline]
    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

impl From<TxLegacy> for LegacyTransaction {
    fn from(tx: TxLegacy) -> Self {
        Self::new(tx)
    }
}

impl EncodableTransaction for LegacyTransaction {
    fn signing_hash(&self) -> [u8; 32] {
        self.tx.signature_hash().0
    }

    fn apply_signature(&mut self, signature: &RecoverableSignature) -> SignerResult<()> {
        let y_parity = match signature.v() {
            0 => false,
            1 => true,
            other => {
                return Err(SignerError::Validation(format!(
                    "Unsupported recovery id for transaction signature: {}",
                    other
                )))
            }
        };

        self.signature = Some(Signature::from_scalars_and_parity(
            B256::from(*signature.r()),
            B256::from(*signature.s()),
            y_parity,
        ));
        Ok(())
    }

    fn serialize(&self) -> SignerResult<Vec<u8>> {
        let signature = self
            .signature
            .ok_or_else(|| SignerError::Validation("Transaction is not signed".to_string()))?;

        let envelope = TxEnvelope::from(self.tx.clone().into_signed(signature));
        Ok(envelope.encoded_2718())
    }
}
