#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;
use forge1155::{is_starter_token, Event, ForgeTokenContract, TokenId};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RecipeResponse, RecipesResponse,
};
use crate::recipe::{ingredients, is_forged_token, RECIPES};
use crate::state::{Config, CONFIG};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:forge";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tracks what a single forge call burnt and minted for the sender
struct ForgeEvent<'a> {
    action: &'a str,
    sender: &'a str,
    burnt: &'a [(TokenId, Uint128)],
    minted: Option<TokenId>,
}

impl<'a> Event for ForgeEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", self.action));
        rsp.attributes.push(attr("sender", self.sender));
        let burnt = self
            .burnt
            .iter()
            .map(|(token_id, amount)| format!("{}:{}", token_id, amount))
            .collect::<Vec<_>>()
            .join(",");
        rsp.attributes.push(attr("burnt", burnt));
        if let Some(minted) = self.minted {
            rsp.attributes.push(attr("minted", minted.to_string()));
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;
    CONFIG.save(
        deps.storage,
        &Config {
            token: ForgeTokenContract(token.clone()),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("token", token))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    match msg {
        ExecuteMsg::Forge { token_id } => execute_forge(deps, info, token_id),
        ExecuteMsg::Trade { give, receive } => execute_trade(deps, info, give, receive),
        ExecuteMsg::Burn { token_id, amount } => execute_burn(deps, info, token_id, amount),
    }
}

pub fn execute_forge(
    deps: DepsMut,
    info: MessageInfo,
    token_id: TokenId,
) -> Result<Response, ContractError> {
    let needed = ingredients(token_id).ok_or(ContractError::NoRecipe { token_id })?;
    let token = CONFIG.load(deps.storage)?.token;

    let balances = token.batch_balance(&deps.querier, &info.sender, needed.to_vec())?;
    let missing: Vec<TokenId> = needed
        .iter()
        .zip(balances)
        .filter(|(_, balance)| balance.is_zero())
        .map(|(id, _)| *id)
        .collect();
    if !missing.is_empty() {
        return Err(ContractError::MissingIngredients { token_id, missing });
    }

    let burnt: Vec<(TokenId, Uint128)> = needed.iter().map(|id| (*id, Uint128::one())).collect();
    burn_and_mint(&token, "forge", &info.sender, burnt, Some(token_id))
}

pub fn execute_trade(
    deps: DepsMut,
    info: MessageInfo,
    give: TokenId,
    receive: TokenId,
) -> Result<Response, ContractError> {
    if !is_starter_token(receive) {
        return Err(ContractError::NotTradeable { token_id: receive });
    }
    if give == receive {
        return Err(ContractError::SameToken { token_id: give });
    }
    let token = CONFIG.load(deps.storage)?.token;
    assert_balance(deps.as_ref(), &token, &info.sender, give, Uint128::one())?;

    burn_and_mint(
        &token,
        "trade",
        &info.sender,
        vec![(give, Uint128::one())],
        Some(receive),
    )
}

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    token_id: TokenId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if !is_forged_token(token_id) {
        return Err(ContractError::NotBurnable { token_id });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    let token = CONFIG.load(deps.storage)?.token;
    assert_balance(deps.as_ref(), &token, &info.sender, token_id, amount)?;

    burn_and_mint(&token, "burn", &info.sender, vec![(token_id, amount)], None)
}

fn assert_balance(
    deps: Deps,
    token: &ForgeTokenContract,
    owner: &Addr,
    token_id: TokenId,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = token.balance(&deps.querier, owner, token_id)?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            token_id,
            balance,
            amount,
        });
    }
    Ok(())
}

/// The burn always goes out before the mint, so the token contract rejects
/// the whole call if the sender no longer holds the burnt tokens.
fn burn_and_mint(
    token: &ForgeTokenContract,
    action: &str,
    sender: &Addr,
    burnt: Vec<(TokenId, Uint128)>,
    minted: Option<TokenId>,
) -> Result<Response, ContractError> {
    let (token_ids, amounts) = burnt.iter().cloned().unzip();
    let mut rsp = Response::new().add_message(token.burn_batch(sender, token_ids, amounts)?);
    if let Some(minted) = minted {
        rsp = rsp.add_message(token.mint(sender, minted, Uint128::one())?);
    }

    ForgeEvent {
        action,
        sender: sender.as_str(),
        burnt: &burnt,
        minted,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::Recipe { token_id } => to_json_binary(&query_recipe(token_id)?),
        QueryMsg::Recipes {} => to_json_binary(&query_recipes()),
    }
}

pub fn query_config(deps: Deps, env: Env) -> StdResult<ConfigResponse> {
    let token = CONFIG.load(deps.storage)?.token;
    let authorized = token.forge_address(&deps.querier)? == Some(env.contract.address);
    Ok(ConfigResponse {
        token: token.addr().into(),
        authorized,
    })
}

pub fn query_recipe(token_id: TokenId) -> StdResult<RecipeResponse> {
    let ingredients = ingredients(token_id)
        .ok_or_else(|| StdError::not_found(format!("recipe for {}", token_id)))?;
    Ok(RecipeResponse {
        token_id,
        ingredients: ingredients.to_vec(),
    })
}

pub fn query_recipes() -> RecipesResponse {
    let recipes = RECIPES
        .iter()
        .map(|(token_id, ingredients)| RecipeResponse {
            token_id: *token_id,
            ingredients: ingredients.to_vec(),
        })
        .collect();
    RecipesResponse { recipes }
}
