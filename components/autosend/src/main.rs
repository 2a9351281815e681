use anyhow::Context;
use config::Config;
use dotenv::dotenv;
use ethers::prelude::*;
use log::{error, info};
use std::time::Duration;
use transaction_sender::{check_node_connection, send_ether};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();
    info!("Starting autosend...");

    let config = Config::new_from_env();

    let provider =
        Provider::<Http>::try_from(config.http_rpc_url.clone()).context("invalid HTTP_RPC_URL")?;
    let chain_id = match check_node_connection(&provider).await {
        Ok(chain_id) => chain_id,
        Err(e) => {
            error!("Failed to connect to the Ethereum network: {e:#}");
            std::process::exit(1);
        }
    };
    info!("Connected to chain {chain_id} at {}", config.http_rpc_url);

    loop {
        match send_ether(&config).await {
            Ok(_) => info!(
                "Successfully sent {} ETH to {}",
                config.send_amount_eth, config.recipient_address
            ),
            Err(e) => error!("Failed to send ether: {e:#}"),
        }

        tokio::time::sleep(Duration::from_secs(config.send_interval_secs)).await;
    }
}
