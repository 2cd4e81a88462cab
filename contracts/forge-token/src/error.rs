use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_controllers::AdminError;
use forge1155::TokenId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Owner(#[from] AdminError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("cannot mint")]
    CannotMint {},

    #[error("cannot burn")]
    CannotBurn {},

    #[error("tokens 0 - 2 each have a 1 min mint cooldown")]
    CooldownActive {},

    #[error("Token {token_id} cannot be self-minted, only tokens 0 - 2 can")]
    NotStarterToken { token_id: TokenId },

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},

    #[error("Burn batch is empty")]
    EmptyBatch {},

    #[error("Got {token_ids} token ids but {amounts} amounts")]
    LengthMismatch { token_ids: usize, amounts: usize },

    #[error("Insufficient balance of token {token_id}: {balance} < {amount}")]
    InsufficientBalance {
        token_id: TokenId,
        balance: Uint128,
        amount: Uint128,
    },

    #[error("Expired")]
    Expired {},

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },

    #[error("Cannot migrate from unsupported version: {previous_version}")]
    CannotMigrateVersion { previous_version: String },

    #[error("Semver parsing error: {0}")]
    SemVer(String),
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
