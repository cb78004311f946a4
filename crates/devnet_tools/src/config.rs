//! Configuration of the declare tool, resolved once at process start.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use clap::Parser;
use starknet_api::core::{ChainId, ContractAddress};
use starknet_api::hash::StarkFelt;
use starknet_api::transaction::Fee;
use starknet_api::StarknetApiError;

/// The artifact the declare tool submits when no path is given.
pub const DEFAULT_ARTIFACT_PATH: &str =
    "test/artifacts/contracts/cairo1/contract.cairo/contract.json";

const DEFAULT_MAX_FEE: u128 = 10_u128.pow(16);

/// Command line and environment arguments of the declare tool.
#[derive(Parser, Debug)]
#[command(name = "declare", about = "Declares a contract class on a Starknet-like devnet.")]
pub struct DeclareArgs {
    /// Base URL of the devnet gateway.
    #[arg(long, env = "HOST")]
    pub host: String,
    /// Address of the account submitting the declare, as a hex felt.
    #[arg(long, env = "ACCOUNT_ADDRESS")]
    pub account_address: String,
    /// Private key of the account, as a hex felt.
    #[arg(long, env = "ACCOUNT_PRIVATE_KEY", hide_env_values = true)]
    pub account_private_key: String,
    /// Chain id the transaction hash is bound to.
    #[arg(long, env = "CHAIN_ID", default_value = "TESTNET")]
    pub chain_id: String,
    /// Maximal fee the account is willing to pay for the declare.
    #[arg(long, default_value_t = DEFAULT_MAX_FEE)]
    pub max_fee: u128,
    /// Path to the sierra artifact; its `.casm` sibling is loaded alongside.
    #[arg(default_value = DEFAULT_ARTIFACT_PATH)]
    pub artifact_path: PathBuf,
}

/// An account that can sign transactions.
#[derive(Debug, Clone)]
pub struct Account {
    pub address: ContractAddress,
    pub private_key: StarkFelt,
}

/// The resolved configuration of the declare tool, built once in `main` and
/// passed by parameter from there on.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub account: Account,
    pub chain_id: ChainId,
    pub max_fee: Fee,
    pub artifact_path: PathBuf,
}

/// Errors raised while resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("bad account address: {0}")]
    BadAccountAddress(#[source] StarknetApiError),
    #[error("bad account private key: {0}")]
    BadPrivateKey(#[source] StarknetApiError),
}

impl TryFrom<DeclareArgs> for Config {
    type Error = ConfigError;

    fn try_from(args: DeclareArgs) -> Result<Self, ConfigError> {
        let address_felt = StarkFelt::try_from(args.account_address.as_str())
            .map_err(ConfigError::BadAccountAddress)?;
        let address =
            ContractAddress::try_from(address_felt).map_err(ConfigError::BadAccountAddress)?;
        let private_key = StarkFelt::try_from(args.account_private_key.as_str())
            .map_err(ConfigError::BadPrivateKey)?;
        Ok(Config {
            host: args.host,
            account: Account { address, private_key },
            chain_id: ChainId(args.chain_id),
            max_fee: Fee(args.max_fee),
            artifact_path: args.artifact_path,
        })
    }
}
