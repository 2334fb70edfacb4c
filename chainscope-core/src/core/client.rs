//! Network client seam
//!
//! `ChainClient` is the read-only capability the inspector needs from a node:
//! native balance plus two ERC-20 view calls. `EthersClient` provides it over
//! JSON-RPC with `ethers`.

use crate::domain::Chain;
use crate::shared::constants::ERC20_ABI_JSON;
use crate::shared::error::{ClientError, InspectorError};
use async_trait::async_trait;
use ethers::{
    abi::Abi,
    contract::{Contract, ContractError},
    core::types::{Address, U256},
    providers::{Http, Middleware, Provider},
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// RPC endpoint this client talks to.
    fn endpoint(&self) -> String;

    /// Native coin balance in the smallest unit.
    async fn native_balance(&self, owner: Address) -> Result<U256, ClientError>;

    /// `balanceOf(owner)` on an ERC-20 contract.
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ClientError>;

    /// `decimals()` on an ERC-20 contract.
    async fn decimals(&self, token: Address) -> Result<u8, ClientError>;
}

/// Builds a client bound to one endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait ClientFactory: Send + Sync {
    fn connect(&self, chain: Chain, endpoint: &str) -> Result<Arc<dyn ChainClient>, InspectorError>;
}

pub struct EthersClient {
    endpoint: String,
    provider: Arc<Provider<Http>>,
    erc20: Abi,
    timeout: Duration,
}

impl EthersClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, InspectorError> {
        let provider = Provider::<Http>::try_from(endpoint).map_err(|e| {
            InspectorError::config(format!("Failed to create HTTP provider for {}: {}", endpoint, e))
        })?;
        let erc20: Abi = serde_json::from_str(ERC20_ABI_JSON)?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            provider: Arc::new(provider),
            erc20,
            timeout,
        })
    }

    fn token_contract(&self, token: Address) -> Contract<Provider<Http>> {
        Contract::new(token, self.erc20.clone(), self.provider.clone())
    }

    async fn bounded<T, Fut>(&self, request: Fut) -> Result<T, ClientError>
    where
        Fut: Future<Output = Result<T, ClientError>>,
    {
        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| ClientError::Timeout(self.timeout))?
    }
}

fn classify(err: ContractError<Provider<Http>>) -> ClientError {
    match err {
        ContractError::ProviderError { e } => ClientError::network(e.to_string()),
        ContractError::MiddlewareError { e } => ClientError::network(e.to_string()),
        other => ClientError::contract(other.to_string()),
    }
}

#[async_trait]
impl ChainClient for EthersClient {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    async fn native_balance(&self, owner: Address) -> Result<U256, ClientError> {
        log::debug!("eth_getBalance {:?} via {}", owner, self.endpoint);
        self.bounded(async {
            self.provider
                .get_balance(owner, None)
                .await
                .map_err(ClientError::from)
        })
        .await
    }

    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ClientError> {
        log::debug!("balanceOf({:?}) on {:?} via {}", owner, token, self.endpoint);
        let call = self
            .token_contract(token)
            .method::<_, U256>("balanceOf", owner)
            .map_err(|e| ClientError::decode(e.to_string()))?;

        self.bounded(async { call.call().await.map_err(classify) }).await
    }

    async fn decimals(&self, token: Address) -> Result<u8, ClientError> {
        log::debug!("decimals() on {:?} via {}", token, self.endpoint);
        let call = self
            .token_contract(token)
            .method::<_, u8>("decimals", ())
            .map_err(|e| ClientError::decode(e.to_string()))?;

        self.bounded(async { call.call().await.map_err(classify) }).await
    }
}

/// Creates `EthersClient`s with a shared request timeout.
#[derive(Debug, Clone)]
pub struct EthersClientFactory {
    timeout: Duration,
}

impl EthersClientFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl ClientFactory for EthersClientFactory {
    fn connect(&self, chain: Chain, endpoint: &str) -> Result<Arc<dyn ChainClient>, InspectorError> {
        log::debug!("Connecting to {} at {}", chain, endpoint);
        let client = EthersClient::new(endpoint, self.timeout)?;
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EthersClient::new("https://mainnet.base.org", Duration::from_secs(5))
            .expect("Failed to create client");
        assert_eq!(client.endpoint(), "https://mainnet.base.org");
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let result = EthersClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(InspectorError::Config(_))));
    }

    #[test]
    fn test_factory_connect() {
        let factory = EthersClientFactory::new(Duration::from_secs(5));
        let client = factory
            .connect(Chain::Polygon, Chain::Polygon.rpc_url())
            .expect("Failed to connect");
        assert_eq!(client.endpoint(), "https://polygon-rpc.com");
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let client = EthersClient::new("http://127.0.0.1:1", Duration::from_millis(20)).unwrap();
        let result: Result<U256, ClientError> = client
            .bounded(std::future::pending::<Result<U256, ClientError>>())
            .await;
        assert_eq!(result, Err(ClientError::Timeout(Duration::from_millis(20))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_client_error() {
        let client = EthersClient::new("http://127.0.0.1:1", Duration::from_secs(5)).unwrap();
        let result = client.native_balance(Address::zero()).await;
        assert!(matches!(
            result,
            Err(ClientError::Network(_)) | Err(ClientError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_client() {
        let mut mock = MockChainClient::new();
        mock.expect_native_balance()
            .returning(|_| Ok(U256::from(7u64)));
        mock.expect_endpoint()
            .return_const("mock://node".to_string());

        let client: Arc<dyn ChainClient> = Arc::new(mock);
        assert_eq!(client.native_balance(Address::zero()).await, Ok(U256::from(7u64)));
        assert_eq!(client.endpoint(), "mock://node");
    }
}
