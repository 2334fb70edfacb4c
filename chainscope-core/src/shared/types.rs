use crate::domain::Chain;
use crate::shared::constants::{NATIVE_UNAVAILABLE, TOKEN_NOT_APPLICABLE, TOKEN_ZERO};
use crate::shared::error::InspectorError;
use crate::shared::utils::format_units_rounded;
use chrono::{DateTime, Utc};
use ethers::types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

// Basic types for balance inspection
pub type DecimalString = String;
pub type ChecksummedAddress = String;

/// One normalized balance query result. Recomputed on every inspection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceReading {
    pub chain: Chain,
    pub symbol: String,
    /// Rounded for display.
    pub amount: DecimalString,
    /// Smallest-unit integer as returned by the node.
    pub raw: U256,
    pub decimals: u8,
    pub read_at: DateTime<Utc>,
}

impl BalanceReading {
    pub fn new(
        chain: Chain,
        symbol: impl Into<String>,
        raw: U256,
        decimals: u8,
        precision: u8,
    ) -> Result<Self, InspectorError> {
        Ok(Self {
            chain,
            symbol: symbol.into(),
            amount: format_units_rounded(raw, decimals, precision)?,
            raw,
            decimals,
            read_at: Utc::now(),
        })
    }
}

/// Native coin balance, or the reason it could not be read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NativeBalance {
    Available(BalanceReading),
    Unavailable { reason: String },
}

impl NativeBalance {
    pub fn display(&self) -> &str {
        match self {
            NativeBalance::Available(reading) => &reading.amount,
            NativeBalance::Unavailable { .. } => NATIVE_UNAVAILABLE,
        }
    }

    pub fn reading(&self) -> Option<&BalanceReading> {
        match self {
            NativeBalance::Available(reading) => Some(reading),
            NativeBalance::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.reading().is_some()
    }
}

impl fmt::Display for NativeBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Token balance. `Failed` is kept apart from a real zero balance even
/// though both render as `0.00`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TokenBalance {
    Available(BalanceReading),
    NotApplicable,
    Failed { reason: String },
}

impl TokenBalance {
    pub fn display(&self) -> &str {
        match self {
            TokenBalance::Available(reading) => &reading.amount,
            TokenBalance::NotApplicable => TOKEN_NOT_APPLICABLE,
            TokenBalance::Failed { .. } => TOKEN_ZERO,
        }
    }

    pub fn reading(&self) -> Option<&BalanceReading> {
        match self {
            TokenBalance::Available(reading) => Some(reading),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.reading().is_some()
    }
}

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Result of one `inspect` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inspection {
    pub chain: Chain,
    pub address: ChecksummedAddress,
    pub native_symbol: String,
    pub native: NativeBalance,
    pub token: TokenBalance,
}

impl Inspection {
    pub fn explorer_url(&self) -> String {
        self.chain.address_url(&self.address)
    }
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.address, self.chain.name())?;
        writeln!(f, "  {:<6} {}", self.native_symbol, self.native)?;
        writeln!(f, "  {:<6} {}", "USDC", self.token)?;
        write!(f, "  {}", self.explorer_url())
    }
}

/// Which chain the inspector is bound to, and whether it was chosen
/// explicitly or is still the startup default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InspectorState {
    Idle(Chain),
    Bound(Chain),
}

impl InspectorState {
    pub fn chain(&self) -> Chain {
        match self {
            InspectorState::Idle(chain) | InspectorState::Bound(chain) => *chain,
        }
    }
}

// Result types for better error handling
pub type InspectorResult<T> = Result<T, InspectorError>;
