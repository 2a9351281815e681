use dotenv::dotenv;
use std::env;

pub const DEFAULT_CHAIN_ID: u64 = 1;
pub const DEFAULT_SEND_AMOUNT_ETH: &str = "0.01";
pub const DEFAULT_SEND_INTERVAL_SECS: u64 = 3600;

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub http_rpc_url: String,
    pub sender_address: String,
    pub sender_private_key: String,
    pub recipient_address: String,
    pub chain_id: u64,
    /// Amount per transfer, in ETH. Kept as a string and parsed to wei at
    /// the use site.
    pub send_amount_eth: String,
    pub send_interval_secs: u64,
}

impl Config {
    pub fn new_from_env() -> Config {
        dotenv().ok();

        let http_rpc_url = env::var("HTTP_RPC_URL").expect("HTTP_RPC_URL");
        let sender_address = env::var("SENDER_ADDRESS").expect("SENDER_ADDRESS");
        let sender_private_key = env::var("PRIVATE_KEY").expect("PRIVATE_KEY");
        let recipient_address = env::var("RECIPIENT_ADDRESS").expect("RECIPIENT_ADDRESS");

        let chain_id = match env::var("CHAIN_ID") {
            Ok(raw) => raw.parse().expect("CHAIN_ID must be an integer"),
            Err(_) => DEFAULT_CHAIN_ID,
        };
        let send_amount_eth =
            env::var("SEND_AMOUNT_ETH").unwrap_or_else(|_| DEFAULT_SEND_AMOUNT_ETH.to_string());
        let send_interval_secs = match env::var("SEND_INTERVAL_SECS") {
            Ok(raw) => raw.parse().expect("SEND_INTERVAL_SECS must be an integer"),
            Err(_) => DEFAULT_SEND_INTERVAL_SECS,
        };

        Config {
            http_rpc_url,
            sender_address,
            sender_private_key,
            recipient_address,
            chain_id,
            send_amount_eth,
            send_interval_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test so the env mutations don't race across threads.
    #[test]
    fn reads_env_with_defaults_and_overrides() {
        env::set_var("HTTP_RPC_URL", "http://localhost:8545");
        env::set_var("SENDER_ADDRESS", "0xBeafFE58538eAfe49d1E4455500BC659f5D37433");
        env::set_var(
            "PRIVATE_KEY",
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        );
        env::set_var(
            "RECIPIENT_ADDRESS",
            "0x608Bf7a39D943263c28417a6Cb966E9b269bD90F",
        );
        env::remove_var("CHAIN_ID");
        env::remove_var("SEND_AMOUNT_ETH");
        env::remove_var("SEND_INTERVAL_SECS");

        let config = Config::new_from_env();
        assert_eq!(config.http_rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.send_amount_eth, DEFAULT_SEND_AMOUNT_ETH);
        assert_eq!(config.send_interval_secs, DEFAULT_SEND_INTERVAL_SECS);

        env::set_var("CHAIN_ID", "11155111");
        env::set_var("SEND_AMOUNT_ETH", "0.5");
        env::set_var("SEND_INTERVAL_SECS", "60");

        let config = Config::new_from_env();
        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.send_amount_eth, "0.5");
        assert_eq!(config.send_interval_secs, 60);
    }
}
