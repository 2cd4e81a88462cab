use cosmwasm_std::{Addr, Deps, Env, StdResult};

use crate::{
    state::{APPROVES, FORGE, OWNER},
    ContractError,
};

/// returns true if the sender can execute approve or reject on the contract
pub fn check_can_approve(deps: Deps, env: &Env, owner: &Addr, operator: &Addr) -> StdResult<bool> {
    // owner can approve
    if owner == operator {
        return Ok(true);
    }
    // operator can approve
    let op = APPROVES.may_load(deps.storage, (owner, operator))?;
    Ok(match op {
        Some(ex) => !ex.is_expired(&env.block),
        None => false,
    })
}

pub fn guard_can_approve(
    deps: Deps,
    env: &Env,
    owner: &Addr,
    operator: &Addr,
) -> Result<(), ContractError> {
    if !check_can_approve(deps, env, owner, operator)? {
        Err(ContractError::Unauthorized {})
    } else {
        Ok(())
    }
}

/// returns true if the sender is the registered forge address
pub fn is_forge(deps: Deps, sender: &Addr) -> StdResult<bool> {
    let forge = FORGE.may_load(deps.storage)?;
    Ok(forge.map_or(false, |forge| &forge == sender))
}

/// owner and forge can mint any token without cooldown
pub fn guard_can_mint(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if OWNER.is_admin(deps, sender)? || is_forge(deps, sender)? {
        Ok(())
    } else {
        Err(ContractError::CannotMint {})
    }
}

/// only forge can burn
pub fn guard_can_burn(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if is_forge(deps, sender)? {
        Ok(())
    } else {
        Err(ContractError::CannotBurn {})
    }
}
