//! Chain registry
//!
//! Static lookup from a chain identifier to its endpoint, native currency and
//! token contracts. Pure data, no side effects.

use crate::domain::{Chain, Token};
use crate::shared::constants::{ChainSpec, CHAIN_SPECS};
use crate::shared::error::InspectorError;
use ethers::types::Address;

/// Full record for a chain identifier.
pub fn lookup(chain_id: &str) -> Result<&'static ChainSpec, InspectorError> {
    let chain: Chain = chain_id.parse()?;
    Ok(chain.spec())
}

/// Default RPC endpoint for a chain identifier.
pub fn endpoint_of(chain_id: &str) -> Result<&'static str, InspectorError> {
    lookup(chain_id).map(|spec| spec.rpc_url)
}

/// USDC contract on `chain`, or `None` when the token query must be skipped.
pub fn usdc_address_of(chain: Chain) -> Option<Address> {
    token_address_of(chain, Token::Usdc)
}

pub fn token_address_of(chain: Chain, token: Token) -> Option<Address> {
    let raw = token.address_on(chain)?;
    match raw.parse::<Address>() {
        Ok(address) => Some(address),
        Err(e) => {
            log::error!("Malformed {} address for {}: {} ({})", token, chain, raw, e);
            None
        }
    }
}

pub fn native_symbol_of(chain: Chain) -> &'static str {
    chain.native_currency()
}

/// All chain records in display order.
pub fn all() -> impl Iterator<Item = &'static ChainSpec> {
    CHAIN_SPECS.iter().copied()
}
