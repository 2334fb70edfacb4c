//! Constants for the inspector
//!
//! This module contains the compiled-in chain table and the display
//! constants used throughout the inspector.

use crate::domain::Chain;

// Scaling and display
pub const NATIVE_DECIMALS: u8 = 18;
pub const NATIVE_DISPLAY_PRECISION: u8 = 4;
pub const TOKEN_DISPLAY_PRECISION: u8 = 2;
/// 10^77 is the largest power of ten that fits in a U256.
pub const MAX_SCALABLE_DECIMALS: u8 = 77;

// Address format
pub const ADDRESS_PREFIX: &str = "0x";
pub const ADDRESS_LENGTH: usize = 42;

// Display sentinels
pub const NATIVE_UNAVAILABLE: &str = "Err";
pub const TOKEN_NOT_APPLICABLE: &str = "N/A";
pub const TOKEN_ZERO: &str = "0.00";

// Network
pub const DEFAULT_CHAIN: Chain = Chain::Base;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Configuration keys
pub const CONFIG_FILE_ENV: &str = "CHAINSCOPE_CONFIG_FILE";
pub const DEFAULT_CHAIN_ENV: &str = "CHAINSCOPE_DEFAULT_CHAIN";
pub const TIMEOUT_ENV: &str = "CHAINSCOPE_TIMEOUT_SECS";
pub const LOG_LEVEL_ENV: &str = "CHAINSCOPE_LOG_LEVEL";
pub const RPC_OVERRIDE_ENV_PREFIX: &str = "CHAINSCOPE_RPC_";

// Supported chains
pub const SUPPORTED_CHAINS: &[&str] = &["BASE", "POLYGON", "BNB", "ETH", "ARBITRUM"];

/// Minimal ERC-20 ABI: the two read-only methods the inspector calls.
pub const ERC20_ABI_JSON: &str = r#"[
    {
        "constant": true,
        "inputs": [{"name": "owner", "type": "address"}],
        "name": "balanceOf",
        "outputs": [{"name": "", "type": "uint256"}],
        "stateMutability": "view",
        "type": "function"
    },
    {
        "constant": true,
        "inputs": [],
        "name": "decimals",
        "outputs": [{"name": "", "type": "uint8"}],
        "stateMutability": "view",
        "type": "function"
    }
]"#;

// Chain configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    pub chain: Chain,
    pub chain_id: u64,
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub block_explorer: &'static str,
    pub native_currency: &'static str,
    pub native_decimals: u8,
    pub usdc_address: Option<&'static str>,
}

pub static BASE_CONFIG: ChainSpec = ChainSpec {
    chain: Chain::Base,
    chain_id: 8453,
    name: "Base",
    rpc_url: "https://mainnet.base.org",
    block_explorer: "https://basescan.org",
    native_currency: "ETH",
    native_decimals: NATIVE_DECIMALS,
    usdc_address: Some("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
};

pub static POLYGON_CONFIG: ChainSpec = ChainSpec {
    chain: Chain::Polygon,
    chain_id: 137,
    name: "Polygon PoS",
    rpc_url: "https://polygon-rpc.com",
    block_explorer: "https://polygonscan.com",
    native_currency: "MATIC",
    native_decimals: NATIVE_DECIMALS,
    usdc_address: Some("0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359"),
};

pub static BNB_CONFIG: ChainSpec = ChainSpec {
    chain: Chain::Bnb,
    chain_id: 56,
    name: "BNB Smart Chain",
    rpc_url: "https://bsc-dataseed.binance.org",
    block_explorer: "https://bscscan.com",
    native_currency: "BNB",
    native_decimals: NATIVE_DECIMALS,
    // Only the Binance-Peg token exists here, not Circle-issued USDC.
    usdc_address: None,
};

pub static ETHEREUM_CONFIG: ChainSpec = ChainSpec {
    chain: Chain::Ethereum,
    chain_id: 1,
    name: "Ethereum Mainnet",
    rpc_url: "https://eth.llamarpc.com",
    block_explorer: "https://etherscan.io",
    native_currency: "ETH",
    native_decimals: NATIVE_DECIMALS,
    usdc_address: Some("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
};

pub static ARBITRUM_CONFIG: ChainSpec = ChainSpec {
    chain: Chain::Arbitrum,
    chain_id: 42161,
    name: "Arbitrum One",
    rpc_url: "https://arb1.arbitrum.io/rpc",
    block_explorer: "https://arbiscan.io",
    native_currency: "ETH",
    native_decimals: NATIVE_DECIMALS,
    usdc_address: Some("0xaf88d065e77c8cC2239327C5EDb3A432268e5831"),
};

/// Chain table in display order.
pub static CHAIN_SPECS: [&ChainSpec; 5] = [
    &BASE_CONFIG,
    &POLYGON_CONFIG,
    &BNB_CONFIG,
    &ETHEREUM_CONFIG,
    &ARBITRUM_CONFIG,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_table_matches_supported_list() {
        let identifiers: Vec<String> = CHAIN_SPECS.iter().map(|spec| spec.chain.to_string()).collect();
        assert_eq!(identifiers, SUPPORTED_CHAINS);
    }

    #[test]
    fn test_chain_ids_unique() {
        let mut ids: Vec<u64> = CHAIN_SPECS.iter().map(|spec| spec.chain_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CHAIN_SPECS.len());
    }

    #[test]
    fn test_exactly_one_chain_without_usdc() {
        let missing: Vec<Chain> = CHAIN_SPECS
            .iter()
            .filter(|spec| spec.usdc_address.is_none())
            .map(|spec| spec.chain)
            .collect();
        assert_eq!(missing, vec![Chain::Bnb]);
    }

    #[test]
    fn test_erc20_abi_parses() {
        let abi: ethers::abi::Abi = serde_json::from_str(ERC20_ABI_JSON)
            .expect("ERC-20 ABI should parse");
        assert!(abi.function("balanceOf").is_ok());
        assert!(abi.function("decimals").is_ok());
    }
}
