//! Token entity for the inspector

use crate::domain::entities::chain::Chain;
use crate::shared::error::InspectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ERC-20 tokens with known deployments on the supported chains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Token {
    Usdc,
    Usdt,
    Dai,
    Weth,
}

impl Token {
    pub const ALL: [Token; 4] = [Token::Usdc, Token::Usdt, Token::Dai, Token::Weth];

    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Usdc => "USDC",
            Token::Usdt => "USDT",
            Token::Dai => "DAI",
            Token::Weth => "WETH",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Token::Usdc => "USD Coin",
            Token::Usdt => "Tether USD",
            Token::Dai => "Dai Stablecoin",
            Token::Weth => "Wrapped Ether",
        }
    }

    /// Contract address on `chain`, if the token is deployed there.
    pub fn address_on(&self, chain: Chain) -> Option<&'static str> {
        match (self, chain) {
            (Token::Usdc, _) => chain.spec().usdc_address,

            (Token::Usdt, Chain::Base) => Some("0xfde4C96c8593536E31F229EA8f37b2ADa2699bb2"),
            (Token::Usdt, Chain::Polygon) => Some("0xc2132D05D31c914a87C6611C10748AEb04B58e8F"),
            (Token::Usdt, Chain::Bnb) => Some("0x55d398326f99059fF775485246999027B3197955"),
            (Token::Usdt, Chain::Ethereum) => Some("0xdAC17F958D2ee523a2206206994597C13D831ec7"),
            (Token::Usdt, Chain::Arbitrum) => Some("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),

            (Token::Dai, Chain::Base) => None,
            (Token::Dai, Chain::Polygon) => Some("0x8f3cf7ad23cd3cadbd9735aff958023239c6a063"),
            (Token::Dai, Chain::Bnb) => Some("0x1AF3F329e8BE154074D8769D1FFa4eE058B1DBc3"),
            (Token::Dai, Chain::Ethereum) => Some("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            (Token::Dai, Chain::Arbitrum) => Some("0xda10009cbd5d07dd0cecc66161fc93d7c9000da1"),

            (Token::Weth, Chain::Base) => Some("0x4200000000000000000000000000000000000006"),
            (Token::Weth, Chain::Polygon) => Some("0x7ceb23fd6bc0add59e62ac25578270cff1b9f619"),
            (Token::Weth, Chain::Bnb) => Some("0x2170Ed0880ac9A755fd29B2688956BD959F933F8"),
            (Token::Weth, Chain::Ethereum) => Some("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            (Token::Weth, Chain::Arbitrum) => Some("0x82af49447d8a07e3bd95bd0d56f35241523fbab1"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Token {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::ALL
            .into_iter()
            .find(|token| token.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InspectorError::config(format!("Unknown token: {}", s)))
    }
}
