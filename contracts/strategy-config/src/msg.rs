use crate::error::{ContractError, ContractResult};
use crate::state::{
    Config, EvmAddress, DEFAULT_GOVERNANCE_MULTISIG, DEFAULT_GOV_PERFORMANCE_FEE,
    DEFAULT_LP_COMPONENT, DEFAULT_PERFORMANCE_FEE, DEFAULT_REGISTRY, DEFAULT_REWARD_TOKEN,
    DEFAULT_WANT, DEFAULT_WITHDRAWAL_FEE,
};
use crate::utils::{validate_evm_address, validate_fee_bps};
use cosmwasm_schema::{cw_serde, QueryResponses};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cw_serde]
pub struct InstantiateMsg {
    /// Administrative multisig of the deployment
    pub governance_multisig: String,
    /// Marks the multisig as a placeholder that still needs confirmation.
    /// Defaults to `true` when omitted.
    #[serde(default = "default_governance_needs_review")]
    pub governance_needs_review: bool,
    /// Primary asset of the strategy
    pub want: String,
    /// Wrapped asset held as part of the position
    pub lp_component: String,
    /// Token paid out as incentive
    pub reward_token: String,
    /// Governance share of performance, in bps
    pub governance_performance_fee: u64,
    /// Strategist share of performance, in bps
    pub performance_fee: u64,
    /// Fee charged on withdrawal, in bps
    pub withdrawal_fee: u64,
    /// External multichain registry contract
    pub registry: String,
}

fn default_governance_needs_review() -> bool {
    true
}

impl Default for InstantiateMsg {
    fn default() -> Self {
        InstantiateMsg {
            governance_multisig: DEFAULT_GOVERNANCE_MULTISIG.to_string(),
            governance_needs_review: default_governance_needs_review(),
            want: DEFAULT_WANT.to_string(),
            lp_component: DEFAULT_LP_COMPONENT.to_string(),
            reward_token: DEFAULT_REWARD_TOKEN.to_string(),
            governance_performance_fee: DEFAULT_GOV_PERFORMANCE_FEE,
            performance_fee: DEFAULT_PERFORMANCE_FEE,
            withdrawal_fee: DEFAULT_WITHDRAWAL_FEE,
            registry: DEFAULT_REGISTRY.to_string(),
        }
    }
}

impl InstantiateMsg {
    /// Checks every address and fee and builds the immutable config.
    /// The first invalid value aborts the whole load.
    pub fn validate(self) -> ContractResult<Config> {
        Ok(Config {
            governance_multisig: validate_evm_address(
                &self.governance_multisig,
                "governance_multisig",
            )?,
            governance_needs_review: self.governance_needs_review,
            want: validate_evm_address(&self.want, "want")?,
            lp_component: validate_evm_address(&self.lp_component, "lp_component")?,
            reward_token: validate_evm_address(&self.reward_token, "reward_token")?,
            governance_performance_fee: validate_fee_bps(
                self.governance_performance_fee,
                "governance_performance_fee",
            )?,
            performance_fee: validate_fee_bps(self.performance_fee, "performance_fee")?,
            withdrawal_fee: validate_fee_bps(self.withdrawal_fee, "withdrawal_fee")?,
            registry: validate_evm_address(&self.registry, "registry")?,
        })
    }
}

/// The registry accepts no transactions after instantiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the full configuration, derived lists included
    #[returns(ConfigResponse)]
    GetConfig {},
    /// Get a single field by name
    #[returns(ConfigValue)]
    Get { field: String },
    /// Get the tokens the strategy must never sweep
    #[returns(ProtectedTokensResponse)]
    GetProtectedTokens {},
    /// Get the fee schedule
    #[returns(FeesResponse)]
    GetFees {},
    /// Check whether an address is a protected token
    #[returns(bool)]
    IsProtected { address: String },
    /// List every recognised field name
    #[returns(Vec<String>)]
    GetFields {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub governance_multisig: EvmAddress,
    pub governance_needs_review: bool,
    pub want: EvmAddress,
    pub lp_component: EvmAddress,
    pub reward_token: EvmAddress,
    pub protected_tokens: Vec<EvmAddress>,
    pub governance_performance_fee: u64,
    pub performance_fee: u64,
    pub withdrawal_fee: u64,
    pub fees: Vec<u64>,
    pub registry: EvmAddress,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        ConfigResponse {
            protected_tokens: config.protected_tokens(),
            fees: config.fees(),
            governance_multisig: config.governance_multisig,
            governance_needs_review: config.governance_needs_review,
            want: config.want,
            lp_component: config.lp_component,
            reward_token: config.reward_token,
            governance_performance_fee: config.governance_performance_fee,
            performance_fee: config.performance_fee,
            withdrawal_fee: config.withdrawal_fee,
            registry: config.registry,
        }
    }
}

#[cw_serde]
pub struct ProtectedTokensResponse {
    pub protected_tokens: Vec<EvmAddress>,
}

#[cw_serde]
pub struct FeesResponse {
    pub governance_performance_fee: u64,
    pub performance_fee: u64,
    pub withdrawal_fee: u64,
    /// (governance_performance_fee, performance_fee, withdrawal_fee)
    pub fees: Vec<u64>,
}

/// Value of a single field, serialized as the bare value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ConfigValue {
    Address(EvmAddress),
    AddressList(Vec<EvmAddress>),
    Fee(u64),
    FeeList(Vec<u64>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    GovernanceMultisig,
    Want,
    LpComponent,
    RewardToken,
    ProtectedTokens,
    GovernancePerformanceFee,
    PerformanceFee,
    WithdrawalFee,
    Fees,
    Registry,
}

impl ConfigField {
    pub const ALL: [ConfigField; 10] = [
        ConfigField::GovernanceMultisig,
        ConfigField::Want,
        ConfigField::LpComponent,
        ConfigField::RewardToken,
        ConfigField::ProtectedTokens,
        ConfigField::GovernancePerformanceFee,
        ConfigField::PerformanceFee,
        ConfigField::WithdrawalFee,
        ConfigField::Fees,
        ConfigField::Registry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::GovernanceMultisig => "GovernanceMultisigAddress",
            ConfigField::Want => "WantTokenAddress",
            ConfigField::LpComponent => "LpComponentAddress",
            ConfigField::RewardToken => "RewardTokenAddress",
            ConfigField::ProtectedTokens => "ProtectedTokenSet",
            ConfigField::GovernancePerformanceFee => "GovernancePerformanceFeeBps",
            ConfigField::PerformanceFee => "PerformanceFeeBps",
            ConfigField::WithdrawalFee => "WithdrawalFeeBps",
            ConfigField::Fees => "FeeSet",
            ConfigField::Registry => "RegistryAddress",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Entity name, snake_case name and the deployment script constant all resolve.
impl FromStr for ConfigField {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s {
            "GovernanceMultisigAddress" | "governance_multisig" | "BADGER_DEV_MULTISIG" => {
                ConfigField::GovernanceMultisig
            }
            "WantTokenAddress" | "want" | "WANT" => ConfigField::Want,
            "LpComponentAddress" | "lp_component" | "LP_COMPONENT" => ConfigField::LpComponent,
            "RewardTokenAddress" | "reward_token" | "REWARD_TOKEN" => ConfigField::RewardToken,
            "ProtectedTokenSet" | "protected_tokens" | "PROTECTED_TOKENS" => {
                ConfigField::ProtectedTokens
            }
            "GovernancePerformanceFeeBps"
            | "governance_performance_fee"
            | "DEFAULT_GOV_PERFORMANCE_FEE" => ConfigField::GovernancePerformanceFee,
            "PerformanceFeeBps" | "performance_fee" | "DEFAULT_PERFORMANCE_FEE" => {
                ConfigField::PerformanceFee
            }
            "WithdrawalFeeBps" | "withdrawal_fee" | "DEFAULT_WITHDRAWAL_FEE" => {
                ConfigField::WithdrawalFee
            }
            "FeeSet" | "fees" | "FEES" => ConfigField::Fees,
            "RegistryAddress" | "registry" | "REGISTRY" => ConfigField::Registry,
            _ => {
                return Err(ContractError::UnknownField {
                    field: s.to_string(),
                })
            }
        };
        Ok(field)
    }
}
