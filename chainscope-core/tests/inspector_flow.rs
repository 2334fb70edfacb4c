use async_trait::async_trait;
use chainscope_core::{
    registry, BalanceInspector, Chain, ChainClient, ClientError, ClientFactory, InspectorConfig,
    InspectorError, InspectorState, TokenBalance,
};
use ethers::types::{Address, U256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const HOLDER: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

/// One recorded network call: endpoint plus method name.
type CallLog = Arc<Mutex<Vec<(String, &'static str, Option<Address>)>>>;

/// Scripted node: fixed balances per endpoint, every call recorded.
struct ScriptedClient {
    endpoint: String,
    native: U256,
    usdc: HashMap<Address, U256>,
    calls: CallLog,
}

#[async_trait]
impl ChainClient for ScriptedClient {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    async fn native_balance(&self, _owner: Address) -> Result<U256, ClientError> {
        self.calls.lock().unwrap().push((self.endpoint.clone(), "eth_getBalance", None));
        Ok(self.native)
    }

    async fn balance_of(&self, token: Address, _owner: Address) -> Result<U256, ClientError> {
        self.calls.lock().unwrap().push((self.endpoint.clone(), "balanceOf", Some(token)));
        self.usdc
            .get(&token)
            .copied()
            .ok_or_else(|| ClientError::contract("execution reverted"))
    }

    async fn decimals(&self, token: Address) -> Result<u8, ClientError> {
        self.calls.lock().unwrap().push((self.endpoint.clone(), "decimals", Some(token)));
        Ok(6)
    }
}

/// Every chain holds 2.718281828 native and 1000.005 USDC, except Polygon
/// which holds 3 native and 42.1 USDC.
struct ScriptedFactory {
    calls: CallLog,
    connects: Arc<Mutex<Vec<Chain>>>,
}

impl ScriptedFactory {
    fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            connects: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ClientFactory for ScriptedFactory {
    fn connect(&self, chain: Chain, endpoint: &str) -> Result<Arc<dyn ChainClient>, InspectorError> {
        self.connects.lock().unwrap().push(chain);

        let (native, usdc_raw) = match chain {
            Chain::Polygon => (U256::from(3u64) * U256::exp10(18), U256::from(42_100_000u64)),
            _ => (U256::from(2_718_281_828_000_000_000u128), U256::from(1_000_005_000u64)),
        };
        let mut usdc = HashMap::new();
        if let Some(token) = registry::usdc_address_of(chain) {
            usdc.insert(token, usdc_raw);
        }

        Ok(Arc::new(ScriptedClient {
            endpoint: endpoint.to_string(),
            native,
            usdc,
            calls: self.calls.clone(),
        }))
    }
}

fn setup() -> (BalanceInspector<ScriptedFactory>, CallLog) {
    let factory = ScriptedFactory::new();
    let calls = factory.calls.clone();
    let inspector = BalanceInspector::new(factory, InspectorConfig::default())
        .expect("Failed to create inspector");
    (inspector, calls)
}

#[tokio::test]
async fn default_chain_valid_address_returns_rounded_balances() {
    let (inspector, calls) = setup();

    let inspection = inspector.inspect("BASE", HOLDER).await.unwrap();

    assert_eq!(inspection.native_symbol, "ETH");
    assert_eq!(inspection.native.display(), "2.7183");
    assert_eq!(inspection.token.display(), "1000.01");
    assert!(inspection.native.is_available());
    assert!(inspection.token.is_available());

    let methods: Vec<&str> = calls.lock().unwrap().iter().map(|(_, method, _)| *method).collect();
    assert_eq!(methods, vec!["eth_getBalance", "balanceOf", "decimals"]);
}

#[tokio::test]
async fn malformed_address_performs_no_network_calls() {
    let (inspector, calls) = setup();

    let result = inspector.inspect("BASE", "not-an-address").await;

    assert!(matches!(result, Err(InspectorError::InvalidAddress(_))));
    assert!(result.unwrap_err().is_input_error());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn switching_chains_uses_new_endpoint_and_token_contract() {
    let (inspector, calls) = setup();

    inspector.inspect("BASE", HOLDER).await.unwrap();
    calls.lock().unwrap().clear();

    inspector.set_chain("POLYGON").await.unwrap();
    let inspection = inspector.inspect("POLYGON", HOLDER).await.unwrap();

    assert_eq!(inspection.native_symbol, "MATIC");
    assert_eq!(inspection.native.display(), "3.0000");
    assert_eq!(inspection.token.display(), "42.10");

    let polygon_usdc = registry::usdc_address_of(Chain::Polygon);
    for (endpoint, method, token) in calls.lock().unwrap().iter() {
        assert_eq!(endpoint, "https://polygon-rpc.com", "{} went to the wrong node", method);
        if *method != "eth_getBalance" {
            assert_eq!(*token, polygon_usdc);
        }
    }
}

#[tokio::test]
async fn chain_without_usdc_is_always_not_applicable() {
    let (inspector, calls) = setup();

    for address in [HOLDER, "0x0000000000000000000000000000000000000000"] {
        let inspection = inspector.inspect("BNB", address).await.unwrap();
        assert_eq!(inspection.token, TokenBalance::NotApplicable);
        assert_eq!(inspection.token.display(), "N/A");
        assert_eq!(inspection.native_symbol, "BNB");
    }

    assert!(calls
        .lock()
        .unwrap()
        .iter()
        .all(|(_, method, _)| *method == "eth_getBalance"));
}

#[tokio::test]
async fn unknown_chain_is_reported_before_network_access() {
    let (inspector, calls) = setup();

    let result = inspector.inspect("SOLANA", HOLDER).await;

    assert_eq!(result, Err(InspectorError::UnknownChain("SOLANA".to_string())));
    assert!(result.unwrap_err().is_input_error());
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(inspector.state().await, InspectorState::Idle(Chain::Base));
}

#[tokio::test]
async fn audit_leaves_session_binding_alone() {
    let factory = ScriptedFactory::new();
    let connects = factory.connects.clone();
    let inspector = BalanceInspector::new(factory, InspectorConfig::default()).unwrap();
    inspector.set_chain("ARBITRUM").await.unwrap();

    let inspections = inspector.audit(HOLDER).await.unwrap();

    assert_eq!(inspections.len(), 5);
    assert_eq!(inspections[1].token.display(), "42.10");
    assert_eq!(inspections[2].token.display(), "N/A");
    assert_eq!(inspector.state().await, InspectorState::Bound(Chain::Arbitrum));
    assert_eq!(inspector.current_endpoint().await, "https://arb1.arbitrum.io/rpc");
    // startup + set_chain + one throwaway client per chain
    assert_eq!(connects.lock().unwrap().len(), 7);
}

#[tokio::test]
async fn rpc_overrides_are_used_for_binding() {
    let mut config = InspectorConfig::default();
    config
        .rpc_overrides
        .insert(Chain::Ethereum, "https://eth.internal.example".to_string());
    let factory = ScriptedFactory::new();
    let calls = factory.calls.clone();
    let inspector = BalanceInspector::new(factory, config).unwrap();

    inspector.inspect("ETH", HOLDER).await.unwrap();

    assert_eq!(inspector.current_endpoint().await, "https://eth.internal.example");
    assert!(calls
        .lock()
        .unwrap()
        .iter()
        .all(|(endpoint, _, _)| endpoint == "https://eth.internal.example"));
}
