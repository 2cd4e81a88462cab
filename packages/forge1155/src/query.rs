use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};
use cw_utils::Expiration;

use crate::msg::TokenId;

#[cw_serde]
#[derive(QueryResponses)]
pub enum ForgeTokenQueryMsg {
    /// Returns the current balance of the given address, 0 if unset.
    #[returns(BalanceResponse)]
    Balance { owner: String, token_id: TokenId },
    /// Returns the current balance of the given address for a batch of tokens, 0 if unset.
    #[returns(BatchBalanceResponse)]
    BatchBalance {
        owner: String,
        token_ids: Vec<TokenId>,
    },
    /// Total amount of the token in circulation (minted minus burned), 0 if never minted.
    #[returns(SupplyResponse)]
    Supply { token_id: TokenId },
    /// The account that instantiated the contract.
    #[returns(OwnerResponse)]
    Owner {},
    /// The account allowed to mint and burn on behalf of anyone, if set.
    #[returns(ForgeAddressResponse)]
    ForgeAddress {},
    /// Self-service mint status of a starter token for the given address.
    #[returns(CooldownResponse)]
    MintCooldown { owner: String, token_id: TokenId },
    /// List all operators that can access all of the owner's tokens.
    #[returns(ApprovedForAllResponse)]
    ApprovedForAll {
        owner: String,
        /// unset or false will filter out expired approvals, you must set to true to see them
        include_expired: Option<bool>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Query approved status `owner` granted to `operator`.
    #[returns(IsApprovedForAllResponse)]
    IsApprovedForAll { owner: String, operator: String },

    /// With MetaData Extension.
    /// Query metadata of token
    #[returns(TokenInfoResponse)]
    TokenInfo { token_id: TokenId },

    /// With Enumerable extension.
    /// Returns all tokens owned by the given address, [] if unset.
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<TokenId>,
        limit: Option<u32>,
    },
    /// With Enumerable extension.
    /// Requires pagination. Lists all token_ids ever minted by the contract.
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<TokenId>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct BatchBalanceResponse {
    pub balances: Vec<Uint128>,
}

#[cw_serde]
pub struct SupplyResponse {
    pub supply: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: String,
}

#[cw_serde]
pub struct ForgeAddressResponse {
    pub forge: Option<String>,
}

#[cw_serde]
pub struct CooldownResponse {
    /// Block time of the last self-service mint, if any
    pub last_mint: Option<Timestamp>,
    /// Whether a self-service mint would be accepted in the current block
    pub ready: bool,
}

#[cw_serde]
pub struct Approval {
    /// Account that can transfer/send the token
    pub spender: String,
    /// When the Approval expires (maybe Expiration::never)
    pub expires: Expiration,
}

#[cw_serde]
pub struct ApprovedForAllResponse {
    pub operators: Vec<Approval>,
}

#[cw_serde]
pub struct IsApprovedForAllResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct TokenInfoResponse {
    /// Should be a url point to a json file
    pub url: String,
}

#[cw_serde]
pub struct TokensResponse {
    /// Contains token_ids in ascending order.
    /// If there are more than `limit`, use `start_after` in future queries
    /// to achieve pagination.
    pub tokens: Vec<TokenId>,
}
