use cosmwasm_schema::cw_serde;
use cw_storage_plus::Item;
use forge1155::ForgeTokenContract;

#[cw_serde]
pub struct Config {
    /// The token contract this forge burns from and mints into
    pub token: ForgeTokenContract,
}

pub const CONFIG: Item<Config> = Item::new("config");
