//! Utility functions for the inspector
//!
//! Address validation and fixed-precision formatting of smallest-unit
//! integers.

use crate::shared::constants::{ADDRESS_LENGTH, ADDRESS_PREFIX, MAX_SCALABLE_DECIMALS};
use crate::shared::error::{AddressError, InspectorError};
use ethers::types::{Address, U256};

/// Validate Ethereum address format and parse it.
///
/// Checksum casing is not enforced: any mix of upper and lower case hex is
/// accepted.
pub fn validate_address(input: &str) -> Result<Address, AddressError> {
    if !input.starts_with(ADDRESS_PREFIX) {
        return Err(AddressError::MissingPrefix);
    }

    let length = input.chars().count();
    if length != ADDRESS_LENGTH {
        return Err(AddressError::InvalidLength(length));
    }

    let body = &input[ADDRESS_PREFIX.len()..];
    if let Some(bad) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidCharacter(bad));
    }

    let bytes = hex::decode(body).map_err(|_| AddressError::InvalidLength(length))?;
    Ok(Address::from_slice(&bytes))
}

/// EIP-55 checksummed rendering of an address.
pub fn checksummed(address: &Address) -> String {
    ethers::utils::to_checksum(address, None)
}

/// Format a smallest-unit integer as a decimal string with exactly
/// `precision` fractional digits, rounding half up.
pub fn format_units_rounded(value: U256, decimals: u8, precision: u8) -> Result<String, InspectorError> {
    if decimals > MAX_SCALABLE_DECIMALS {
        return Err(InspectorError::format(format!(
            "Cannot scale by {} decimals (max {})",
            decimals, MAX_SCALABLE_DECIMALS
        )));
    }
    if precision > MAX_SCALABLE_DECIMALS {
        return Err(InspectorError::format(format!("Precision {} too large", precision)));
    }

    let unit = U256::exp10(decimals as usize);
    let mut whole = value / unit;
    let remainder = value % unit;

    let mut fraction = if precision >= decimals {
        remainder * U256::exp10((precision - decimals) as usize)
    } else {
        let step = U256::exp10((decimals - precision) as usize);
        (remainder + step / 2) / step
    };

    // Rounding can carry into the integer part, e.g. 0.999999 -> 1.00
    let cap = U256::exp10(precision as usize);
    if fraction >= cap {
        whole += U256::one();
        fraction -= cap;
    }

    if precision == 0 {
        return Ok(whole.to_string());
    }

    Ok(format!(
        "{}.{:0>width$}",
        whole,
        fraction.to_string(),
        width = precision as usize
    ))
}
