use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};
use cw_utils::Expiration;

pub type TokenId = u64;

/// Token classes anyone may mint for free, one unit at a time.
pub const STARTER_TOKEN_IDS: [TokenId; 3] = [0, 1, 2];

/// Minimum number of seconds between two self-service mints of the same
/// starter token by the same account.
pub const MINT_COOLDOWN_SECONDS: u64 = 60;

pub fn is_starter_token(token_id: TokenId) -> bool {
    STARTER_TOKEN_IDS.contains(&token_id)
}

#[cw_serde]
pub enum ForgeTokenExecuteMsg {
    /// Mint is a privileged message to create new tokens of any id.
    /// Only the owner or the registered forge address may call it, and no
    /// cooldown applies.
    Mint {
        /// The recipient of the minted tokens
        to: String,
        token_id: TokenId,
        amount: Uint128,
        /// `None` means don't call the receiver interface
        msg: Option<Binary>,
    },
    /// MintStarter lets any account mint exactly one unit of a starter token
    /// (ids 0 - 2) to itself, at most once per cooldown window.
    MintStarter { token_id: TokenId },
    /// BurnBatch destroys tokens held by `from`. Only the forge address may
    /// call it. `token_ids` and `amounts` are paired by position; the whole
    /// batch fails if any balance is insufficient.
    BurnBatch {
        from: String,
        token_ids: Vec<TokenId>,
        amounts: Vec<Uint128>,
    },
    /// Register the contract that is allowed to mint and burn on behalf of
    /// any account. Only the owner may call it; a later call replaces the
    /// previous address.
    SetForgeAddress { forge: String },
    /// SendFrom is a base message to move tokens,
    /// if `env.sender` is the owner or has sufficient pre-approval.
    SendFrom {
        from: String,
        /// If `to` is not contract, `msg` should be `None`
        to: String,
        token_id: TokenId,
        amount: Uint128,
        /// `None` means don't call the receiver interface
        msg: Option<Binary>,
    },
    /// BatchSendFrom is a base message to move multiple types of tokens in batch,
    /// if `env.sender` is the owner or has sufficient pre-approval.
    BatchSendFrom {
        from: String,
        /// if `to` is not contract, `msg` should be `None`
        to: String,
        batch: Vec<(TokenId, Uint128)>,
        /// `None` means don't call the receiver interface
        msg: Option<Binary>,
    },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },
}
