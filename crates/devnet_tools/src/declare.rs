//! The declare workflow: hashes an artifact pair, signs a declare transaction
//! and submits it through the gateway, then reads the declared state back for
//! diagnostics.

#[cfg(test)]
#[path = "declare_test.rs"]
mod declare_test;

use devnet_client::reader::FeederGatewayReader;
use devnet_client::writer::objects::transaction::{
    ContractClass, ContractClassError, DeclareType, DeclareV2Transaction,
};
use devnet_client::writer::GatewayWriter;
use devnet_client::ClientError;
use starknet_api::core::ClassHash;
use starknet_api::transaction::TransactionHash;
use tracing::info;

use crate::artifact::ContractArtifact;
use crate::config::Config;
use crate::crypto::{
    declare_transaction_hash, BadChainId, ClassHashError, ClassHasher, SignError,
    TransactionSigner, DECLARE_VERSION,
};

/// Errors raised by the declare workflow. Every step is a hard dependency on
/// the previous one succeeding; the first error aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum DeclareError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Hash(#[from] ClassHashError),
    #[error(transparent)]
    ChainId(#[from] BadChainId),
    #[error(transparent)]
    Sign(#[from] SignError),
    #[error(transparent)]
    Class(#[from] ContractClassError),
}

/// The identifiers of a successfully submitted declare transaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DeclaredClass {
    pub class_hash: ClassHash,
    pub transaction_hash: TransactionHash,
}

/// The submitted identifiers together with the diagnostic read-back of the
/// declared state.
#[derive(Debug)]
pub struct DeclareOutcome {
    pub declared: DeclaredClass,
    pub class: serde_json::Value,
    pub compiled_class: serde_json::Value,
    pub transaction: serde_json::Value,
    pub receipt: serde_json::Value,
}

/// Submits a declare transaction for `artifact` and returns the class hash
/// and the transaction hash of the submission.
pub async fn declare_class(
    config: &Config,
    artifact: &ContractArtifact,
    hasher: &dyn ClassHasher,
    signer: &dyn TransactionSigner,
    reader: &impl FeederGatewayReader,
    writer: &impl GatewayWriter,
) -> Result<DeclaredClass, DeclareError> {
    let class_hash = hasher.class_hash(&artifact.sierra)?;
    let compiled_class_hash = hasher.compiled_class_hash(&artifact.casm)?;
    info!("Declaring class {:?} from account {:?}.", class_hash, config.account.address);

    // The nonce is fetched fresh per submission. There is no idempotency
    // guard: racing a pending declare of the same account may submit a
    // conflicting nonce.
    let nonce = reader.nonce(config.account.address).await?;

    // The signature must cover the exact field values submitted below; both
    // the hash input and the payload read from the same locals.
    let transaction_hash = declare_transaction_hash(
        class_hash,
        compiled_class_hash,
        config.account.address,
        config.max_fee,
        nonce,
        &config.chain_id,
    )?;
    let signature = signer.sign(&transaction_hash)?;

    let tx = DeclareV2Transaction {
        contract_class: ContractClass::from_sierra(&artifact.sierra)?,
        compiled_class_hash,
        sender_address: config.account.address,
        nonce,
        max_fee: config.max_fee,
        version: *DECLARE_VERSION,
        signature,
        r#type: DeclareType::default(),
    };
    let response = writer.add_declare_transaction(&tx).await?;
    info!("Gateway acknowledged transaction {:?}.", response.transaction_hash);
    Ok(DeclaredClass { class_hash, transaction_hash: response.transaction_hash })
}

/// Runs the declare workflow and reads the declared state back. The read-back
/// queries are purely diagnostic and are only issued once the submission has
/// succeeded.
pub async fn declare_and_inspect(
    config: &Config,
    artifact: &ContractArtifact,
    hasher: &dyn ClassHasher,
    signer: &dyn TransactionSigner,
    reader: &impl FeederGatewayReader,
    writer: &impl GatewayWriter,
) -> Result<DeclareOutcome, DeclareError> {
    let declared = declare_class(config, artifact, hasher, signer, reader, writer).await?;
    let class = reader.class_by_hash(declared.class_hash).await?;
    let compiled_class = reader.compiled_class_by_hash(declared.class_hash).await?;
    let transaction = reader.transaction(declared.transaction_hash).await?;
    let receipt = reader.transaction_receipt(declared.transaction_hash).await?;
    Ok(DeclareOutcome { declared, class, compiled_class, transaction, receipt })
}
