//! Balance inspector
//!
//! Owns the (chain, client) binding and runs the native and token queries
//! against it. Each query works on a snapshot of the binding, so a
//! concurrent chain switch never splits one inspection across two chains.

use crate::core::client::{ChainClient, ClientFactory, EthersClientFactory};
use crate::core::registry;
use crate::domain::{Chain, Token};
use crate::infrastructure::config::InspectorConfig;
use crate::infrastructure::logger::Logger;
use crate::shared::constants::{NATIVE_DISPLAY_PRECISION, TOKEN_DISPLAY_PRECISION};
use crate::shared::error::{AddressError, InspectorError};
use crate::shared::types::{
    BalanceReading, InspectorResult, InspectorState, Inspection, NativeBalance, TokenBalance,
};
use crate::shared::utils::{checksummed, validate_address};
use ethers::types::Address;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A chain together with the client pointed at it. Always replaced whole.
#[derive(Clone)]
struct Binding {
    state: InspectorState,
    client: Arc<dyn ChainClient>,
}

impl Binding {
    fn chain(&self) -> Chain {
        self.state.chain()
    }
}

pub struct BalanceInspector<F: ClientFactory> {
    factory: F,
    config: InspectorConfig,
    binding: RwLock<Binding>,
}

impl BalanceInspector<EthersClientFactory> {
    /// Inspector backed by JSON-RPC clients.
    pub fn from_config(config: InspectorConfig) -> InspectorResult<Self> {
        let factory = EthersClientFactory::new(config.request_timeout());
        Self::new(factory, config)
    }
}

impl<F: ClientFactory> BalanceInspector<F> {
    /// Create an inspector bound to the configured default chain.
    pub fn new(factory: F, config: InspectorConfig) -> InspectorResult<Self> {
        let chain = config.default_chain;
        let client = factory.connect(chain, config.endpoint_for(chain))?;
        log::debug!("Inspector starting on {} via {}", chain, client.endpoint());

        Ok(Self {
            factory,
            config,
            binding: RwLock::new(Binding {
                state: InspectorState::Idle(chain),
                client,
            }),
        })
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub async fn state(&self) -> InspectorState {
        self.binding.read().await.state
    }

    pub async fn current_chain(&self) -> Chain {
        self.binding.read().await.chain()
    }

    /// Endpoint of the bound client.
    pub async fn current_endpoint(&self) -> String {
        self.binding.read().await.client.endpoint()
    }

    async fn snapshot(&self) -> Binding {
        self.binding.read().await.clone()
    }

    /// Rebind to `chain_id`. On failure the previous binding is kept.
    pub async fn set_chain(&self, chain_id: &str) -> InspectorResult<Chain> {
        let chain: Chain = chain_id.parse()?;
        self.bind(chain).await.map(|binding| binding.chain())
    }

    async fn bind(&self, chain: Chain) -> InspectorResult<Binding> {
        let endpoint = self.config.endpoint_for(chain);
        let client = self.factory.connect(chain, endpoint).map_err(|e| {
            Logger::chain_switch_failed(chain, &e);
            e
        })?;

        let binding = Binding {
            state: InspectorState::Bound(chain),
            client,
        };
        *self.binding.write().await = binding.clone();

        Logger::chain_bound(chain, endpoint);
        Ok(binding)
    }

    pub fn validate_address(input: &str) -> Result<Address, AddressError> {
        validate_address(input)
    }

    pub async fn try_native_balance(&self, address: Address) -> InspectorResult<BalanceReading> {
        let binding = self.snapshot().await;
        native_on(&binding, address).await
    }

    /// `Ok(None)` when the bound chain has no USDC contract.
    pub async fn try_token_balance(&self, address: Address) -> InspectorResult<Option<BalanceReading>> {
        let binding = self.snapshot().await;
        token_on(&binding, Token::Usdc, address).await
    }

    pub async fn fetch_native_balance(&self, address: Address) -> NativeBalance {
        let binding = self.snapshot().await;
        native_balance(&binding, address).await
    }

    pub async fn fetch_token_balance(&self, address: Address) -> TokenBalance {
        self.fetch_token_balance_of(Token::Usdc, address).await
    }

    pub async fn fetch_token_balance_of(&self, token: Token, address: Address) -> TokenBalance {
        let binding = self.snapshot().await;
        token_balance(&binding, token, address).await
    }

    /// Validate `address_input`, rebind if `chain_id` differs from the bound
    /// chain, then read the native and USDC balances in that order.
    pub async fn inspect(&self, chain_id: &str, address_input: &str) -> InspectorResult<Inspection> {
        let address = validate_address(address_input)?;
        let chain: Chain = chain_id.parse()?;

        let current = self.snapshot().await;
        let binding = if current.chain() == chain {
            current
        } else {
            self.bind(chain).await?
        };

        Ok(inspect_on(&binding, address).await)
    }

    /// Switch chains and, when `last_address` is a valid address, refresh its
    /// balances on the new chain.
    pub async fn switch_chain(
        &self,
        chain_id: &str,
        last_address: Option<&str>,
    ) -> InspectorResult<Option<Inspection>> {
        let chain: Chain = chain_id.parse()?;
        let binding = self.bind(chain).await?;

        let address = match last_address.map(validate_address) {
            Some(Ok(address)) => address,
            Some(Err(e)) => {
                log::debug!("Not refreshing after switch to {}: {}", chain, e);
                return Ok(None);
            }
            None => return Ok(None),
        };

        Ok(Some(inspect_on(&binding, address).await))
    }

    /// Inspect one address on every supported chain with throwaway clients.
    /// The session binding is left as it was.
    pub async fn audit(&self, address_input: &str) -> InspectorResult<Vec<Inspection>> {
        let address = validate_address(address_input)?;
        let mut inspections = Vec::with_capacity(Chain::ALL.len());

        for chain in Chain::ALL {
            let inspection = match self.factory.connect(chain, self.config.endpoint_for(chain)) {
                Ok(client) => {
                    let binding = Binding {
                        state: InspectorState::Bound(chain),
                        client,
                    };
                    inspect_on(&binding, address).await
                }
                Err(e) => unreachable_chain(chain, address, &e),
            };
            inspections.push(inspection);
        }

        let failures = inspections
            .iter()
            .filter(|inspection| {
                !inspection.native.is_available()
                    || matches!(inspection.token, TokenBalance::Failed { .. })
            })
            .count();
        Logger::audit_completed(&checksummed(&address), inspections.len(), failures);

        Ok(inspections)
    }
}

async fn native_on(binding: &Binding, address: Address) -> InspectorResult<BalanceReading> {
    let chain = binding.chain();
    let raw = binding.client.native_balance(address).await?;
    BalanceReading::new(
        chain,
        chain.native_currency(),
        raw,
        chain.native_decimals(),
        NATIVE_DISPLAY_PRECISION,
    )
}

async fn token_on(
    binding: &Binding,
    token: Token,
    address: Address,
) -> InspectorResult<Option<BalanceReading>> {
    let chain = binding.chain();
    let Some(contract) = registry::token_address_of(chain, token) else {
        Logger::token_skipped(chain, token.symbol());
        return Ok(None);
    };

    let raw = binding.client.balance_of(contract, address).await?;
    let decimals = binding.client.decimals(contract).await?;
    let reading = BalanceReading::new(chain, token.symbol(), raw, decimals, TOKEN_DISPLAY_PRECISION)?;
    Ok(Some(reading))
}

async fn native_balance(binding: &Binding, address: Address) -> NativeBalance {
    match native_on(binding, address).await {
        Ok(reading) => NativeBalance::Available(reading),
        Err(e) => {
            Logger::query_degraded(binding.chain(), "native balance", &e);
            NativeBalance::Unavailable { reason: e.to_string() }
        }
    }
}

async fn token_balance(binding: &Binding, token: Token, address: Address) -> TokenBalance {
    match token_on(binding, token, address).await {
        Ok(Some(reading)) => TokenBalance::Available(reading),
        Ok(None) => TokenBalance::NotApplicable,
        Err(e) => {
            Logger::query_degraded(binding.chain(), token.symbol(), &e);
            TokenBalance::Failed { reason: e.to_string() }
        }
    }
}

/// Native then token, both always attempted.
async fn inspect_on(binding: &Binding, address: Address) -> Inspection {
    let chain = binding.chain();
    let native = native_balance(binding, address).await;
    let token = token_balance(binding, Token::Usdc, address).await;

    Inspection {
        chain,
        address: checksummed(&address),
        native_symbol: chain.native_currency().to_string(),
        native,
        token,
    }
}

fn unreachable_chain(chain: Chain, address: Address, error: &InspectorError) -> Inspection {
    Logger::query_degraded(chain, "connect", error);
    let token = match registry::usdc_address_of(chain) {
        Some(_) => TokenBalance::Failed { reason: error.to_string() },
        None => TokenBalance::NotApplicable,
    };

    Inspection {
        chain,
        address: checksummed(&address),
        native_symbol: chain.native_currency().to_string(),
        native: NativeBalance::Unavailable { reason: error.to_string() },
        token,
    }
}
