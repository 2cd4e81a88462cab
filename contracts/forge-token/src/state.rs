use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use cw_utils::Expiration;
use forge1155::TokenId;

#[cw_serde]
pub struct Config {
    /// Metadata uri template shared by every token id
    pub uri: String,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// The instantiating account. Set once, never updated.
pub const OWNER: Admin = Admin::new("owner");
/// Store the forge address who have permission to mint and burn on behalf of anyone.
pub const FORGE: Item<Addr> = Item::new("forge");
/// Store the balance map, `(owner, token_id) -> balance`
pub const BALANCES: Map<(&Addr, TokenId), Uint128> = Map::new("balances");
/// Store the supply map, `token_id -> minted - burned`.
/// An entry exists for every token_id that was ever minted, which also
/// supports enumerating tokens.
pub const SUPPLY: Map<TokenId, Uint128> = Map::new("supply");
/// Store the last self-service mint, `(owner, token_id) -> block time`
pub const COOLDOWNS: Map<(&Addr, TokenId), Timestamp> = Map::new("cooldowns");
/// Store the approval status, `(owner, spender) -> expiration`
pub const APPROVES: Map<(&Addr, &Addr), Expiration> = Map::new("approves");
