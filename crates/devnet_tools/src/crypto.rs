//! Delegation of all cryptographic computations: class hashing, transaction
//! hashing and signing. Nothing in here hashes or signs by itself; the
//! routines of `starknet-core` and `starknet-crypto` do.

#[cfg(test)]
#[path = "crypto_test.rs"]
mod crypto_test;

use lazy_static::lazy_static;
use starknet_api::core::{ChainId, ClassHash, CompiledClassHash, ContractAddress, Nonce};
use starknet_api::hash::StarkFelt;
use starknet_api::transaction::{Fee, TransactionHash, TransactionSignature, TransactionVersion};
use starknet_core::crypto::{compute_hash_on_elements, ecdsa_sign, EcdsaSignError};
use starknet_core::types::contract::{CompiledClass, ComputeClassHashError, SierraClass};
use starknet_crypto::FieldElement;

lazy_static! {
    // The transaction-hash prefix of declare transactions: "declare" as an
    // ascii felt. The correctness of this constant is enforced by a test.
    static ref DECLARE_PREFIX: FieldElement =
        FieldElement::from_byte_slice_be(b"declare").expect("'declare' is a valid felt.");
    /// The declare-transaction version this tool submits and hashes.
    pub static ref DECLARE_VERSION: TransactionVersion =
        TransactionVersion(StarkFelt::from(2_u8));
}

/// Computes the hashes of contract classes.
pub trait ClassHasher {
    /// Returns the class hash of a sierra contract class.
    fn class_hash(&self, class: &SierraClass) -> Result<ClassHash, ClassHashError>;
    /// Returns the hash of the casm compilation of a contract class.
    fn compiled_class_hash(&self, class: &CompiledClass)
        -> Result<CompiledClassHash, ClassHashError>;
}

/// An error raised by the delegated class-hash computation.
#[derive(Debug, thiserror::Error)]
pub enum ClassHashError {
    #[error("failed to compute class hash: {0}")]
    Compute(ComputeClassHashError),
}

/// The production [`ClassHasher`]: delegates to the hashing routines of
/// `starknet-core`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StarkClassHasher;

impl ClassHasher for StarkClassHasher {
    fn class_hash(&self, class: &SierraClass) -> Result<ClassHash, ClassHashError> {
        let hash = class.class_hash().map_err(ClassHashError::Compute)?;
        Ok(ClassHash(StarkFelt::from(hash)))
    }

    fn compiled_class_hash(
        &self,
        class: &CompiledClass,
    ) -> Result<CompiledClassHash, ClassHashError> {
        let hash = class.class_hash().map_err(ClassHashError::Compute)?;
        Ok(CompiledClassHash(StarkFelt::from(hash)))
    }
}

/// Signs transaction hashes on behalf of an account.
pub trait TransactionSigner {
    /// Returns the (r, s) signature over `transaction_hash`.
    fn sign(&self, transaction_hash: &TransactionHash)
        -> Result<TransactionSignature, SignError>;
}

/// An error raised by the delegated signing routine.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("failed to sign transaction hash: {0}")]
    Ecdsa(EcdsaSignError),
}

/// A [`TransactionSigner`] holding the account's private key in memory.
pub struct LocalKeySigner {
    private_key: FieldElement,
}

impl LocalKeySigner {
    pub fn new(private_key: StarkFelt) -> Self {
        LocalKeySigner { private_key: FieldElement::from(private_key) }
    }
}

impl TransactionSigner for LocalKeySigner {
    fn sign(
        &self,
        transaction_hash: &TransactionHash,
    ) -> Result<TransactionSignature, SignError> {
        let signature = ecdsa_sign(&self.private_key, &FieldElement::from(transaction_hash.0))
            .map_err(SignError::Ecdsa)?;
        Ok(TransactionSignature(vec![
            StarkFelt::from(signature.r),
            StarkFelt::from(signature.s),
        ]))
    }
}

/// An error raised when the configured chain id cannot be bound into the
/// transaction hash.
#[derive(Debug, thiserror::Error)]
#[error("chain id {0:?} does not fit in a felt")]
pub struct BadChainId(pub String);

/// Calculates the hash of a declare-v2 transaction, delegating the chained
/// hashing to `starknet-core`.
pub fn declare_transaction_hash(
    class_hash: ClassHash,
    compiled_class_hash: CompiledClassHash,
    sender_address: ContractAddress,
    max_fee: Fee,
    nonce: Nonce,
    chain_id: &ChainId,
) -> Result<TransactionHash, BadChainId> {
    let chain_id_felt = FieldElement::from_byte_slice_be(chain_id.0.as_bytes())
        .map_err(|_| BadChainId(chain_id.0.clone()))?;
    let hash = compute_hash_on_elements(&[
        *DECLARE_PREFIX,
        FieldElement::from(DECLARE_VERSION.0),
        FieldElement::from(*sender_address.0.key()),
        FieldElement::ZERO, // entry_point_selector
        compute_hash_on_elements(&[FieldElement::from(class_hash.0)]),
        FieldElement::from(StarkFelt::from(max_fee.0)),
        chain_id_felt,
        FieldElement::from(nonce.0),
        FieldElement::from(compiled_class_hash.0),
    ]);
    Ok(TransactionHash(StarkFelt::from(hash)))
}
