use cosmwasm_schema::cw_serde;

pub use forge1155::{ForgeTokenExecuteMsg as ExecuteMsg, ForgeTokenQueryMsg as QueryMsg};

#[cw_serde]
#[derive(Default)]
pub struct InstantiateMsg {
    /// Metadata uri returned by `TokenInfo` for every minted token.
    /// The instantiating account becomes the owner, the only one who can
    /// register the forge address.
    pub uri: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
