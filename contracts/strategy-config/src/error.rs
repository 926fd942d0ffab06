use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("invalid address for {field}: {address} ({reason})")]
    InvalidAddressFormat {
        field: String,
        address: String,
        reason: String,
    },

    #[error("fee {field} is {fee} bps, must be between 0 and {max}")]
    FeeOutOfRange { field: String, fee: u64, max: u64 },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Serialization error")]
    SerializationError,
}

pub type ContractResult<T> = Result<T, ContractError>;
