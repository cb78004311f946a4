use anyhow::Result;
use clap::Parser;
use devnet_tools::devnet_api::{DevnetApi, DEFAULT_DEVNET_HOST};

/// Exercises a local devnet's deploy/invoke/call endpoints end to end.
#[derive(Parser, Debug)]
#[command(name = "smoke_test", about = "Deploys, invokes and calls a contract on a local devnet.")]
struct SmokeTestArgs {
    /// Base URL of the local devnet.
    #[arg(long, env = "HOST", default_value = DEFAULT_DEVNET_HOST)]
    host: String,
    /// Path (on the devnet host) of the contract artifact to deploy.
    #[arg(long, env = "ARTIFACT_PATH")]
    artifact_path: String,
    /// Method to invoke after deploying.
    #[arg(long, default_value = "increase_balance")]
    invoke_method: String,
    /// Keyword arguments of the invoked method, as a JSON object.
    #[arg(long, default_value = r#"{"amount": 1}"#)]
    invoke_kwargs: String,
    /// Read-only method to call after invoking.
    #[arg(long, default_value = "get_balance")]
    call_method: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = SmokeTestArgs::parse();
    let kwargs: serde_json::Value = serde_json::from_str(&args.invoke_kwargs)?;
    let api = DevnetApi::new(&args.host)?;

    let deployed = api.deploy(&args.artifact_path).await?;
    println!("deploy: address {:#x} ({})", deployed.address, deployed.address);
    let invoked = api.invoke(deployed.address, &args.invoke_method, kwargs).await?;
    println!("invoke: {invoked}");
    let called = api.call(deployed.address, &args.call_method).await?;
    println!("call: {called}");
    Ok(())
}
