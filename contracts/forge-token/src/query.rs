use cosmwasm_std::{Addr, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;
use cw_utils::{maybe_addr, Expiration};
use forge1155::{
    is_starter_token, Approval, ApprovedForAllResponse, BalanceResponse, BatchBalanceResponse,
    CooldownResponse, ForgeAddressResponse, IsApprovedForAllResponse, OwnerResponse,
    SupplyResponse, TokenId, TokenInfoResponse, TokensResponse, MINT_COOLDOWN_SECONDS,
};

use crate::{
    helpers::check_can_approve,
    state::{APPROVES, BALANCES, CONFIG, COOLDOWNS, FORGE, OWNER, SUPPLY},
};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

pub fn balance(deps: Deps, owner: String, token_id: TokenId) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;

    let balance = BALANCES
        .may_load(deps.storage, (&owner, token_id))?
        .unwrap_or_default();

    Ok(BalanceResponse { balance })
}

pub fn batch_balance(
    deps: Deps,
    owner: String,
    token_ids: Vec<TokenId>,
) -> StdResult<BatchBalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;

    let balances = token_ids
        .into_iter()
        .map(|token_id| -> StdResult<_> {
            Ok(BALANCES
                .may_load(deps.storage, (&owner, token_id))?
                .unwrap_or_default())
        })
        .collect::<StdResult<_>>()?;

    Ok(BatchBalanceResponse { balances })
}

pub fn supply(deps: Deps, token_id: TokenId) -> StdResult<SupplyResponse> {
    let supply = SUPPLY
        .may_load(deps.storage, token_id)?
        .unwrap_or_default();
    Ok(SupplyResponse { supply })
}

pub fn owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER
        .get(deps)?
        .ok_or_else(|| StdError::generic_err("owner is not set"))?;
    Ok(OwnerResponse {
        owner: owner.into(),
    })
}

pub fn forge_address(deps: Deps) -> StdResult<ForgeAddressResponse> {
    let forge = FORGE
        .may_load(deps.storage)?
        .map(|addr| addr.to_string());
    Ok(ForgeAddressResponse { forge })
}

pub fn mint_cooldown(
    deps: Deps,
    env: Env,
    owner: String,
    token_id: TokenId,
) -> StdResult<CooldownResponse> {
    let owner = deps.api.addr_validate(&owner)?;

    if !is_starter_token(token_id) {
        return Ok(CooldownResponse {
            last_mint: None,
            ready: false,
        });
    }

    let last_mint = COOLDOWNS.may_load(deps.storage, (&owner, token_id))?;
    let ready = match last_mint {
        Some(last) => env.block.time >= last.plus_seconds(MINT_COOLDOWN_SECONDS),
        None => true,
    };

    Ok(CooldownResponse { last_mint, ready })
}

fn build_approval(item: StdResult<(Addr, Expiration)>) -> StdResult<Approval> {
    item.map(|(addr, expires)| Approval {
        spender: addr.into(),
        expires,
    })
}

pub fn approved_for_all(
    deps: Deps,
    env: Env,
    owner: String,
    include_expired: bool,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ApprovedForAllResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let start_after = maybe_addr(deps.api, start_after)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(Bound::exclusive);

    let operators = APPROVES
        .prefix(&owner)
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|r| match r {
            Ok((_, expires)) => include_expired || !expires.is_expired(&env.block),
            Err(_) => true,
        })
        .take(limit)
        .map(build_approval)
        .collect::<StdResult<_>>()?;

    Ok(ApprovedForAllResponse { operators })
}

pub fn is_approved_for_all(
    deps: Deps,
    env: Env,
    owner: String,
    operator: String,
) -> StdResult<IsApprovedForAllResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let operator_addr = deps.api.addr_validate(&operator)?;

    let approved = check_can_approve(deps, &env, &owner_addr, &operator_addr)?;

    Ok(IsApprovedForAllResponse { approved })
}

pub fn token_info(deps: Deps, token_id: TokenId) -> StdResult<TokenInfoResponse> {
    if !SUPPLY.has(deps.storage, token_id) {
        return Err(StdError::not_found(format!("token {}", token_id)));
    }
    let url = CONFIG.load(deps.storage)?.uri;

    Ok(TokenInfoResponse { url })
}

pub fn tokens(
    deps: Deps,
    owner: String,
    start_after: Option<TokenId>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = BALANCES
        .prefix(&owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<_>>()?;

    Ok(TokensResponse { tokens })
}

pub fn all_tokens(
    deps: Deps,
    start_after: Option<TokenId>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = SUPPLY
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<_>>()?;

    Ok(TokensResponse { tokens })
}
