use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};

use crate::msg::{ForgeTokenExecuteMsg, TokenId};
use crate::query::{BalanceResponse, BatchBalanceResponse, ForgeAddressResponse, ForgeTokenQueryMsg};

/// ForgeTokenContract is a wrapper around Addr that provides a lot of helpers
/// for working with a forge-token contract from another contract.
#[cw_serde]
pub struct ForgeTokenContract(pub Addr);

impl ForgeTokenContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ForgeTokenExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    /// Privileged mint, the calling contract must be the owner or forge address
    pub fn mint(&self, to: &Addr, token_id: TokenId, amount: Uint128) -> StdResult<CosmosMsg> {
        self.call(ForgeTokenExecuteMsg::Mint {
            to: to.to_string(),
            token_id,
            amount,
            msg: None,
        })
    }

    /// Privileged burn, the calling contract must be the forge address
    pub fn burn_batch(
        &self,
        from: &Addr,
        token_ids: Vec<TokenId>,
        amounts: Vec<Uint128>,
    ) -> StdResult<CosmosMsg> {
        self.call(ForgeTokenExecuteMsg::BurnBatch {
            from: from.to_string(),
            token_ids,
            amounts,
        })
    }

    pub fn balance(
        &self,
        querier: &QuerierWrapper,
        owner: &Addr,
        token_id: TokenId,
    ) -> StdResult<Uint128> {
        let res: BalanceResponse = querier.query_wasm_smart(
            self.addr(),
            &ForgeTokenQueryMsg::Balance {
                owner: owner.to_string(),
                token_id,
            },
        )?;
        Ok(res.balance)
    }

    pub fn batch_balance(
        &self,
        querier: &QuerierWrapper,
        owner: &Addr,
        token_ids: Vec<TokenId>,
    ) -> StdResult<Vec<Uint128>> {
        let res: BatchBalanceResponse = querier.query_wasm_smart(
            self.addr(),
            &ForgeTokenQueryMsg::BatchBalance {
                owner: owner.to_string(),
                token_ids,
            },
        )?;
        Ok(res.balances)
    }

    /// Read the currently registered forge address
    pub fn forge_address(&self, querier: &QuerierWrapper) -> StdResult<Option<Addr>> {
        let res: ForgeAddressResponse =
            querier.query_wasm_smart(self.addr(), &ForgeTokenQueryMsg::ForgeAddress {})?;
        Ok(res.forge.map(Addr::unchecked))
    }
}
