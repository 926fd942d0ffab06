use crate::error::{ContractError, ContractResult};
use crate::msg::{ConfigField, ConfigResponse, FeesResponse, ProtectedTokensResponse};
use crate::state::CONFIG;
use crate::utils::validate_evm_address;
use cosmwasm_std::{to_json_binary, Binary, Deps};

pub fn query_config(deps: Deps) -> ContractResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&ConfigResponse::from(config)).map_err(|_| ContractError::SerializationError)
}

pub fn query_field(deps: Deps, field: String) -> ContractResult<Binary> {
    let field: ConfigField = field.parse()?;
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.get(field)).map_err(|_| ContractError::SerializationError)
}

pub fn query_protected_tokens(deps: Deps) -> ContractResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let response = ProtectedTokensResponse {
        protected_tokens: config.protected_tokens(),
    };
    to_json_binary(&response).map_err(|_| ContractError::SerializationError)
}

pub fn query_fees(deps: Deps) -> ContractResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let response = FeesResponse {
        fees: config.fees(),
        governance_performance_fee: config.governance_performance_fee,
        performance_fee: config.performance_fee,
        withdrawal_fee: config.withdrawal_fee,
    };
    to_json_binary(&response).map_err(|_| ContractError::SerializationError)
}

pub fn query_is_protected(deps: Deps, address: String) -> ContractResult<Binary> {
    let address = validate_evm_address(&address, "address")?;
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.is_protected(&address)).map_err(|_| ContractError::SerializationError)
}

pub fn query_fields() -> ContractResult<Binary> {
    let names: Vec<String> = ConfigField::ALL
        .iter()
        .map(|field| field.name().to_string())
        .collect();
    to_json_binary(&names).map_err(|_| ContractError::SerializationError)
}
