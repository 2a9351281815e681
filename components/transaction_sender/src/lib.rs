use anyhow::{anyhow, Context};
use config::Config;
use ethers::prelude::*;
use ethers::utils::{format_units, parse_ether};
use log::{debug, info};

/// A plain value transfer always costs exactly this much gas.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Builds the legacy transfer request. Value and gas limit are supplied by
/// the caller/constant, never computed.
pub fn build_eth_transfer(
    nonce: U256,
    to: Address,
    amount: U256,
    gas_price: U256,
    chain_id: u64,
) -> TransactionRequest {
    TransactionRequest::new()
        .nonce(nonce)
        .to(to)
        .value(amount)
        .gas(TRANSFER_GAS_LIMIT)
        .gas_price(gas_price)
        .chain_id(chain_id)
}

/// Startup probe. Errors here are fatal to the daemon.
pub async fn check_node_connection<M>(client: &M) -> anyhow::Result<U256>
where
    M: Middleware,
    M::Error: 'static,
{
    let chain_id = client
        .get_chainid()
        .await
        .context("failed to reach the Ethereum node")?;
    Ok(chain_id)
}

/// Fetches the sender's nonce and the current gas price, then signs and
/// submits the transfer through `client`. The returned pending transaction
/// resolves once a receipt is observed.
pub async fn submit_transfer<'a, M>(
    client: &'a M,
    from: Address,
    to: Address,
    amount: U256,
    chain_id: u64,
) -> anyhow::Result<PendingTransaction<'a, M::Provider>>
where
    M: Middleware,
    M::Error: 'static,
{
    let nonce = client.get_transaction_count(from, None).await?;
    let gas_price = client.get_gas_price().await?;
    info!("Current gas price: {} gwei", format_units(gas_price, "gwei")?);

    let tx = build_eth_transfer(nonce, to, amount, gas_price, chain_id);
    let pending = client.send_transaction(tx, None).await?;

    Ok(pending)
}

pub async fn send_ether(config: &Config) -> anyhow::Result<TransactionReceipt> {
    let provider = Provider::<Http>::try_from(config.http_rpc_url.clone())?;

    let wallet = config
        .sender_private_key
        .parse::<LocalWallet>()?
        .with_chain_id(config.chain_id);
    let client = SignerMiddleware::new(provider, wallet);

    let from: Address = config.sender_address.parse()?;
    let to: Address = config.recipient_address.parse()?;
    let amount = parse_ether(config.send_amount_eth.as_str())?;

    let pending = submit_transfer(&client, from, to, amount, config.chain_id).await?;
    let tx_hash = pending.tx_hash();
    info!("Transaction sent: {tx_hash:?}");

    let receipt = pending
        .await?
        .ok_or_else(|| anyhow!("transaction {tx_hash:?} dropped from the mempool"))?;
    debug!("Tx receipt: {}", serde_json::to_string(&receipt)?);
    info!(
        "Transaction confirmed in block {}",
        receipt.block_number.unwrap_or_default()
    );

    Ok(receipt)
}

#[tokio::test]
#[ignore = "requires a funded account and a live RPC endpoint"]
async fn it_makes_testnet_eth_transfers() -> anyhow::Result<()> {
    let config = Config::new_from_env();

    send_ether(&config).await?;

    Ok(())
}
