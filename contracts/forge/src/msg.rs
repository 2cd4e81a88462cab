use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use forge1155::TokenId;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the forge-token contract. Its owner still has to register
    /// this contract with `SetForgeAddress` before anything can be forged.
    pub token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Burn one of each ingredient of `token_id` and mint one `token_id` in return
    Forge { token_id: TokenId },
    /// Swap one `give` token for one starter token
    Trade { give: TokenId, receive: TokenId },
    /// Destroy forged tokens, nothing is given back
    Burn { token_id: TokenId, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Ingredients needed to forge the given token
    #[returns(RecipeResponse)]
    Recipe { token_id: TokenId },
    #[returns(RecipesResponse)]
    Recipes {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub token: String,
    /// Whether the token contract currently lists this contract as its forge
    pub authorized: bool,
}

#[cw_serde]
pub struct RecipeResponse {
    pub token_id: TokenId,
    pub ingredients: Vec<TokenId>,
}

#[cw_serde]
pub struct RecipesResponse {
    pub recipes: Vec<RecipeResponse>,
}
