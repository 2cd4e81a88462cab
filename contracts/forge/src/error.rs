use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use forge1155::TokenId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Token {token_id} cannot be forged")]
    NoRecipe { token_id: TokenId },

    #[error("Forging token {token_id} needs one of each of {missing:?}")]
    MissingIngredients {
        token_id: TokenId,
        missing: Vec<TokenId>,
    },

    #[error("Only tokens 0 - 2 can be received in a trade, got {token_id}")]
    NotTradeable { token_id: TokenId },

    #[error("Cannot trade token {token_id} for itself")]
    SameToken { token_id: TokenId },

    #[error("Only forged tokens can be burnt, got {token_id}")]
    NotBurnable { token_id: TokenId },

    #[error("Amount must be greater than zero")]
    ZeroAmount {},

    #[error("Insufficient balance of token {token_id}: {balance} < {amount}")]
    InsufficientBalance {
        token_id: TokenId,
        balance: Uint128,
        amount: Uint128,
    },
}
