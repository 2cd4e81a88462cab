use std::collections::BTreeMap;

use cosmwasm_std::{Addr, Binary, DepsMut, Response, StdResult, SubMsg, Uint128};
use cw_utils::Expiration;
use forge1155::{
    is_starter_token, ApproveAllEvent, Event, ForgeAddressEvent, ForgeTokenBatchReceiveMsg,
    ForgeTokenReceiveMsg, StarterMintEvent, TokenId, TransferEvent, MINT_COOLDOWN_SECONDS,
};

use crate::{
    contract::ExecuteEnv,
    helpers::{guard_can_approve, guard_can_burn, guard_can_mint},
    state::{APPROVES, BALANCES, COOLDOWNS, FORGE, OWNER, SUPPLY},
    ContractError,
};

/// When from is None: mint new coins
/// When to is None: burn coins
/// When both are None: no token balance is changed, pointless but valid
///
/// Make sure permissions are checked before calling this.
fn transfer_inner<'a>(
    deps: &mut DepsMut,
    from: Option<&'a Addr>,
    to: Option<&'a Addr>,
    token_id: TokenId,
    amount: Uint128,
) -> Result<TransferEvent<'a>, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    if let Some(from_addr) = from {
        let balance = BALANCES
            .may_load(deps.storage, (from_addr, token_id))?
            .unwrap_or_default();
        let remaining =
            balance
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientBalance {
                    token_id,
                    balance,
                    amount,
                })?;
        if remaining.is_zero() {
            BALANCES.remove(deps.storage, (from_addr, token_id));
        } else {
            BALANCES.save(deps.storage, (from_addr, token_id), &remaining)?;
        }
    }

    if let Some(to_addr) = to {
        BALANCES.update(
            deps.storage,
            (to_addr, token_id),
            |balance: Option<Uint128>| -> StdResult<_> {
                Ok(balance.unwrap_or_default().checked_add(amount)?)
            },
        )?;
    }

    match (from, to) {
        (None, Some(_)) => {
            SUPPLY.update(deps.storage, token_id, |supply| -> StdResult<_> {
                Ok(supply.unwrap_or_default().checked_add(amount)?)
            })?;
        }
        (Some(_), None) => {
            SUPPLY.update(deps.storage, token_id, |supply| -> StdResult<_> {
                Ok(supply.unwrap_or_default().checked_sub(amount)?)
            })?;
        }
        _ => {}
    }

    Ok(TransferEvent {
        from: from.map(|x| x.as_str()),
        to: to.map(|x| x.as_str()),
        token_id,
        amount,
    })
}

pub fn mint(
    env: ExecuteEnv,
    to: String,
    token_id: TokenId,
    amount: Uint128,
    msg: Option<Binary>,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    guard_can_mint(deps.as_ref(), &info.sender)?;

    let to_addr = deps.api.addr_validate(&to)?;

    let mut rsp = Response::default();

    let event = transfer_inner(&mut deps, None, Some(&to_addr), token_id, amount)?;
    event.add_attributes(&mut rsp);

    if let Some(msg) = msg {
        rsp.messages = vec![SubMsg::new(
            ForgeTokenReceiveMsg {
                operator: info.sender.to_string(),
                from: None,
                amount,
                token_id,
                msg,
            }
            .into_cosmos_msg(to)?,
        )]
    }

    Ok(rsp)
}

pub fn mint_starter(env: ExecuteEnv, token_id: TokenId) -> Result<Response, ContractError> {
    let ExecuteEnv {
        mut deps,
        env,
        info,
    } = env;

    if !is_starter_token(token_id) {
        return Err(ContractError::NotStarterToken { token_id });
    }

    let now = env.block.time;
    if let Some(last) = COOLDOWNS.may_load(deps.storage, (&info.sender, token_id))? {
        if now < last.plus_seconds(MINT_COOLDOWN_SECONDS) {
            return Err(ContractError::CooldownActive {});
        }
    }
    COOLDOWNS.save(deps.storage, (&info.sender, token_id), &now)?;

    let mut rsp = Response::default();
    StarterMintEvent {
        minter: info.sender.as_str(),
        token_id,
        timestamp: now.seconds(),
    }
    .add_attributes(&mut rsp);

    let event = transfer_inner(
        &mut deps,
        None,
        Some(&info.sender),
        token_id,
        Uint128::one(),
    )?;
    event.add_attributes(&mut rsp);

    Ok(rsp)
}

pub fn burn_batch(
    env: ExecuteEnv,
    from: String,
    token_ids: Vec<TokenId>,
    amounts: Vec<Uint128>,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    guard_can_burn(deps.as_ref(), &info.sender)?;

    if token_ids.len() != amounts.len() {
        return Err(ContractError::LengthMismatch {
            token_ids: token_ids.len(),
            amounts: amounts.len(),
        });
    }
    if token_ids.is_empty() {
        return Err(ContractError::EmptyBatch {});
    }
    if amounts.iter().any(Uint128::is_zero) {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let from_addr = deps.api.addr_validate(&from)?;

    // check the whole batch up front, the same id may appear more than once
    let mut totals: BTreeMap<TokenId, Uint128> = BTreeMap::new();
    for (token_id, amount) in token_ids.iter().zip(amounts.iter()) {
        let total = totals.entry(*token_id).or_default();
        *total = total.checked_add(*amount)?;
    }
    for (token_id, amount) in totals {
        let balance = BALANCES
            .may_load(deps.storage, (&from_addr, token_id))?
            .unwrap_or_default();
        if balance < amount {
            return Err(ContractError::InsufficientBalance {
                token_id,
                balance,
                amount,
            });
        }
    }

    let mut rsp = Response::default();
    for (token_id, amount) in token_ids.into_iter().zip(amounts) {
        let event = transfer_inner(&mut deps, Some(&from_addr), None, token_id, amount)?;
        event.add_attributes(&mut rsp);
    }
    Ok(rsp)
}

pub fn set_forge_address(env: ExecuteEnv, forge: String) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;

    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let forge_addr = deps.api.addr_validate(&forge)?;
    FORGE.save(deps.storage, &forge_addr)?;

    let mut rsp = Response::default();
    ForgeAddressEvent {
        sender: info.sender.as_str(),
        forge: forge_addr.as_str(),
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn send_from(
    env: ExecuteEnv,
    from: String,
    to: String,
    token_id: TokenId,
    amount: Uint128,
    msg: Option<Binary>,
) -> Result<Response, ContractError> {
    let from_addr = env.deps.api.addr_validate(&from)?;
    let to_addr = env.deps.api.addr_validate(&to)?;

    let ExecuteEnv {
        mut deps,
        env,
        info,
    } = env;

    guard_can_approve(deps.as_ref(), &env, &from_addr, &info.sender)?;

    let mut rsp = Response::default();

    let event = transfer_inner(
        &mut deps,
        Some(&from_addr),
        Some(&to_addr),
        token_id,
        amount,
    )?;
    event.add_attributes(&mut rsp);

    if let Some(msg) = msg {
        rsp.messages = vec![SubMsg::new(
            ForgeTokenReceiveMsg {
                operator: info.sender.to_string(),
                from: Some(from),
                amount,
                token_id,
                msg,
            }
            .into_cosmos_msg(to)?,
        )]
    }

    Ok(rsp)
}

pub fn batch_send_from(
    env: ExecuteEnv,
    from: String,
    to: String,
    batch: Vec<(TokenId, Uint128)>,
    msg: Option<Binary>,
) -> Result<Response, ContractError> {
    let ExecuteEnv {
        mut deps,
        env,
        info,
    } = env;

    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;

    guard_can_approve(deps.as_ref(), &env, &from_addr, &info.sender)?;

    if batch.iter().any(|(_, amount)| amount.is_zero()) {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let mut rsp = Response::default();
    for (token_id, amount) in batch.iter() {
        let event = transfer_inner(
            &mut deps,
            Some(&from_addr),
            Some(&to_addr),
            *token_id,
            *amount,
        )?;
        event.add_attributes(&mut rsp);
    }

    if let Some(msg) = msg {
        rsp.messages = vec![SubMsg::new(
            ForgeTokenBatchReceiveMsg {
                operator: info.sender.to_string(),
                from: Some(from),
                batch,
                msg,
            }
            .into_cosmos_msg(to)?,
        )]
    };

    Ok(rsp)
}

pub fn approve_all(
    env: ExecuteEnv,
    operator: String,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, env } = env;

    // reject expired data as invalid
    let expires = expires.unwrap_or_default();
    if expires.is_expired(&env.block) {
        return Err(ContractError::Expired {});
    }

    // set the operator for us
    let operator_addr = deps.api.addr_validate(&operator)?;
    APPROVES.save(deps.storage, (&info.sender, &operator_addr), &expires)?;

    let mut rsp = Response::default();
    ApproveAllEvent {
        sender: info.sender.as_str(),
        operator: &operator,
        approved: true,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}

pub fn revoke_all(env: ExecuteEnv, operator: String) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;
    let operator_addr = deps.api.addr_validate(&operator)?;
    APPROVES.remove(deps.storage, (&info.sender, &operator_addr));

    let mut rsp = Response::default();
    ApproveAllEvent {
        sender: info.sender.as_str(),
        operator: &operator,
        approved: false,
    }
    .add_attributes(&mut rsp);
    Ok(rsp)
}
