use anyhow::Result;
use clap::Parser;
use devnet_client::reader::FeederGatewayClient;
use devnet_client::writer::GatewayClient;
use devnet_tools::artifact::ContractArtifact;
use devnet_tools::config::{Config, DeclareArgs};
use devnet_tools::crypto::{LocalKeySigner, StarkClassHasher};
use devnet_tools::declare::declare_and_inspect;
use starknet_crypto::FieldElement;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::try_from(DeclareArgs::parse())?;
    let artifact = ContractArtifact::load(&config.artifact_path)?;
    let reader = FeederGatewayClient::new(&config.host)?;
    let writer = GatewayClient::new(&config.host)?;
    let signer = LocalKeySigner::new(config.account.private_key);

    let outcome =
        declare_and_inspect(&config, &artifact, &StarkClassHasher, &signer, &reader, &writer)
            .await?;
    println!("class_hash: {:#x}", FieldElement::from(outcome.declared.class_hash.0));
    println!("transaction_hash: {:#x}", FieldElement::from(outcome.declared.transaction_hash.0));
    println!("class: {}", serde_json::to_string_pretty(&outcome.class)?);
    println!("compiled_class: {}", serde_json::to_string_pretty(&outcome.compiled_class)?);
    println!("transaction: {}", serde_json::to_string_pretty(&outcome.transaction)?);
    println!("receipt: {}", serde_json::to_string_pretty(&outcome.receipt)?);
    Ok(())
}
