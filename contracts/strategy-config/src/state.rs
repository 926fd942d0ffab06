use crate::msg::{ConfigField, ConfigValue};
use crate::utils::validate_evm_address;
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 10000 bps = 100%
pub const MAX_BPS: u64 = 10_000;

// Polygon deployment defaults
pub const DEFAULT_GOVERNANCE_MULTISIG: &str = "0xc388750A661cC0B99784bAB2c55e1F38ff91643b";
/// wBTC
pub const DEFAULT_WANT: &str = "0x1bfd67037b42cf73acf2047067bd4f2c47d9bfd6";
/// amWBTC
pub const DEFAULT_LP_COMPONENT: &str = "0x5c2ed810328349100a66b82b78a1791b101c9d61";
/// wMATIC
pub const DEFAULT_REWARD_TOKEN: &str = "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270";
pub const DEFAULT_GOV_PERFORMANCE_FEE: u64 = 1000;
pub const DEFAULT_PERFORMANCE_FEE: u64 = 1000;
pub const DEFAULT_WITHDRAWAL_FEE: u64 = 50;
/// Multichain BadgerRegistry
pub const DEFAULT_REGISTRY: &str = "0xFda7eB6f8b7a9e9fCFd348042ae675d1d652454f";

/// A `0x`-prefixed, 20-byte hex address. Casing is kept as configured.
///
/// Built through `utils::validate_evm_address`; deserializing runs the same
/// check.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(transparent)]
pub struct EvmAddress(pub(crate) String);

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        validate_evm_address(&raw, "address").map_err(serde::de::Error::custom)
    }
}

impl EvmAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, so checksummed and lowercase forms match.
    pub fn same_account(&self, other: &EvmAddress) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated strategy deployment constants.
///
/// Only the primary values are stored; the protected token list and the
/// fee list are always derived from them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    /// Administrative multisig of the deployment
    pub governance_multisig: EvmAddress,
    /// Set while the multisig is a placeholder awaiting confirmation
    pub governance_needs_review: bool,
    pub want: EvmAddress,
    pub lp_component: EvmAddress,
    pub reward_token: EvmAddress,
    pub governance_performance_fee: u64,
    pub performance_fee: u64,
    pub withdrawal_fee: u64,
    /// External multichain registry contract
    pub registry: EvmAddress,
}

impl Config {
    /// Tokens the strategy must never sweep: want, LP component, reward.
    pub fn protected_tokens(&self) -> Vec<EvmAddress> {
        vec![
            self.want.clone(),
            self.lp_component.clone(),
            self.reward_token.clone(),
        ]
    }

    /// Fee schedule in the order consumers index it by.
    pub fn fees(&self) -> Vec<u64> {
        vec![
            self.governance_performance_fee,
            self.performance_fee,
            self.withdrawal_fee,
        ]
    }

    pub fn is_protected(&self, address: &EvmAddress) -> bool {
        self.protected_tokens()
            .iter()
            .any(|token| token.same_account(address))
    }

    pub fn get(&self, field: ConfigField) -> ConfigValue {
        match field {
            ConfigField::GovernanceMultisig => {
                ConfigValue::Address(self.governance_multisig.clone())
            }
            ConfigField::Want => ConfigValue::Address(self.want.clone()),
            ConfigField::LpComponent => ConfigValue::Address(self.lp_component.clone()),
            ConfigField::RewardToken => ConfigValue::Address(self.reward_token.clone()),
            ConfigField::ProtectedTokens => ConfigValue::AddressList(self.protected_tokens()),
            ConfigField::GovernancePerformanceFee => {
                ConfigValue::Fee(self.governance_performance_fee)
            }
            ConfigField::PerformanceFee => ConfigValue::Fee(self.performance_fee),
            ConfigField::WithdrawalFee => ConfigValue::Fee(self.withdrawal_fee),
            ConfigField::Fees => ConfigValue::FeeList(self.fees()),
            ConfigField::Registry => ConfigValue::Address(self.registry.clone()),
        }
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
