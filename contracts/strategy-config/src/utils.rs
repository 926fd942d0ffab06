use crate::error::{ContractError, ContractResult};
use crate::state::{EvmAddress, MAX_BPS};

/// Hex digits in a 20-byte address
pub const EVM_ADDRESS_HEX_LEN: usize = 40;

/// Validate a `0x`-prefixed 20-byte hex address. Any casing is accepted;
/// the checksum is not verified.
pub fn validate_evm_address(address: &str, field_name: &str) -> ContractResult<EvmAddress> {
    let invalid = |reason: &str| ContractError::InvalidAddressFormat {
        field: field_name.to_string(),
        address: address.to_string(),
        reason: reason.to_string(),
    };

    let hex = address
        .strip_prefix("0x")
        .ok_or_else(|| invalid("expected prefix '0x'"))?;

    if hex.len() != EVM_ADDRESS_HEX_LEN {
        return Err(invalid("expected 40 hex characters"));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("non-hex character"));
    }

    Ok(EvmAddress(address.to_string()))
}

/// Validate a fee in basis points is within [0, 10000]
pub fn validate_fee_bps(fee: u64, field_name: &str) -> ContractResult<u64> {
    if fee > MAX_BPS {
        return Err(ContractError::FeeOutOfRange {
            field: field_name.to_string(),
            fee,
            max: MAX_BPS,
        });
    }
    Ok(fee)
}
