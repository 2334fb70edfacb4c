//! Chain entity for the inspector

use crate::shared::constants::{
    ChainSpec, ARBITRUM_CONFIG, BASE_CONFIG, BNB_CONFIG, ETHEREUM_CONFIG, POLYGON_CONFIG,
};
use crate::shared::error::InspectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five supported EVM networks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chain {
    #[serde(rename = "BASE")]
    Base,
    #[serde(rename = "POLYGON")]
    Polygon,
    #[serde(rename = "BNB")]
    Bnb,
    #[serde(rename = "ETH")]
    Ethereum,
    #[serde(rename = "ARBITRUM")]
    Arbitrum,
}

impl Chain {
    pub const ALL: [Chain; 5] = [
        Chain::Base,
        Chain::Polygon,
        Chain::Bnb,
        Chain::Ethereum,
        Chain::Arbitrum,
    ];

    pub fn spec(&self) -> &'static ChainSpec {
        match self {
            Chain::Base => &BASE_CONFIG,
            Chain::Polygon => &POLYGON_CONFIG,
            Chain::Bnb => &BNB_CONFIG,
            Chain::Ethereum => &ETHEREUM_CONFIG,
            Chain::Arbitrum => &ARBITRUM_CONFIG,
        }
    }

    /// Canonical upper-case identifier, e.g. `"BASE"`.
    pub fn identifier(&self) -> &'static str {
        match self {
            Chain::Base => "BASE",
            Chain::Polygon => "POLYGON",
            Chain::Bnb => "BNB",
            Chain::Ethereum => "ETH",
            Chain::Arbitrum => "ARBITRUM",
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.spec().chain_id
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn rpc_url(&self) -> &'static str {
        self.spec().rpc_url
    }

    pub fn native_currency(&self) -> &'static str {
        self.spec().native_currency
    }

    pub fn native_decimals(&self) -> u8 {
        self.spec().native_decimals
    }

    pub fn block_explorer(&self) -> &'static str {
        self.spec().block_explorer
    }

    /// Explorer page for an address on this chain.
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.block_explorer(), address)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Chain {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        let chain = match normalized.as_str() {
            "BASE" => Chain::Base,
            "POLYGON" | "MATIC" => Chain::Polygon,
            "BNB" | "BSC" => Chain::Bnb,
            "ETH" | "ETHEREUM" | "MAINNET" => Chain::Ethereum,
            "ARBITRUM" | "ARB" => Chain::Arbitrum,
            other => match other.parse::<u64>() {
                Ok(id) => return Chain::try_from(id),
                Err(_) => return Err(InspectorError::unknown_chain(s)),
            },
        };
        Ok(chain)
    }
}

impl TryFrom<u64> for Chain {
    type Error = InspectorError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.chain_id() == chain_id)
            .ok_or_else(|| InspectorError::unknown_chain(chain_id.to_string()))
    }
}
