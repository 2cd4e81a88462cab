#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, OWNER};
use crate::{execute, query};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:forge-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a handler needs from the entry point, bundled to keep
/// signatures short
pub struct ExecuteEnv<'a> {
    pub deps: DepsMut<'a>,
    pub env: Env,
    pub info: MessageInfo,
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.set(deps.branch(), Some(info.sender.clone()))?;
    CONFIG.save(
        deps.storage,
        &Config {
            uri: msg.uri.unwrap_or_default(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let env = ExecuteEnv { deps, env, info };
    match msg {
        ExecuteMsg::Mint {
            to,
            token_id,
            amount,
            msg,
        } => execute::mint(env, to, token_id, amount, msg),
        ExecuteMsg::MintStarter { token_id } => execute::mint_starter(env, token_id),
        ExecuteMsg::BurnBatch {
            from,
            token_ids,
            amounts,
        } => execute::burn_batch(env, from, token_ids, amounts),
        ExecuteMsg::SetForgeAddress { forge } => execute::set_forge_address(env, forge),
        ExecuteMsg::SendFrom {
            from,
            to,
            token_id,
            amount,
            msg,
        } => execute::send_from(env, from, to, token_id, amount, msg),
        ExecuteMsg::BatchSendFrom {
            from,
            to,
            batch,
            msg,
        } => execute::batch_send_from(env, from, to, batch, msg),
        ExecuteMsg::ApproveAll { operator, expires } => {
            execute::approve_all(env, operator, expires)
        }
        ExecuteMsg::RevokeAll { operator } => execute::revoke_all(env, operator),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { owner, token_id } => {
            to_json_binary(&query::balance(deps, owner, token_id)?)
        }
        QueryMsg::BatchBalance { owner, token_ids } => {
            to_json_binary(&query::batch_balance(deps, owner, token_ids)?)
        }
        QueryMsg::Supply { token_id } => to_json_binary(&query::supply(deps, token_id)?),
        QueryMsg::Owner {} => to_json_binary(&query::owner(deps)?),
        QueryMsg::ForgeAddress {} => to_json_binary(&query::forge_address(deps)?),
        QueryMsg::MintCooldown { owner, token_id } => {
            to_json_binary(&query::mint_cooldown(deps, env, owner, token_id)?)
        }
        QueryMsg::IsApprovedForAll { owner, operator } => {
            to_json_binary(&query::is_approved_for_all(deps, env, owner, operator)?)
        }
        QueryMsg::ApprovedForAll {
            owner,
            include_expired,
            start_after,
            limit,
        } => to_json_binary(&query::approved_for_all(
            deps,
            env,
            owner,
            include_expired.unwrap_or(false),
            start_after,
            limit,
        )?),
        QueryMsg::TokenInfo { token_id } => to_json_binary(&query::token_info(deps, token_id)?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query::tokens(deps, owner, start_after, limit)?),
        QueryMsg::AllTokens { start_after, limit } => {
            to_json_binary(&query::all_tokens(deps, start_after, limit)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: stored.contract,
        });
    }

    let version: Version = CONTRACT_VERSION.parse()?;
    let storage_version: Version = stored.version.parse()?;
    if storage_version > version {
        return Err(ContractError::CannotMigrateVersion {
            previous_version: stored.version,
        });
    }

    if storage_version < version {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
