use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use derivative::Derivative;
use forge1155::{BalanceResponse, SupplyResponse, TokenId};

use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

fn contract_forge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    );
    Box::new(contract)
}

fn contract_forge_token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        forge_token::contract::execute,
        forge_token::contract::instantiate,
        forge_token::contract::query,
    )
    .with_migrate(forge_token::contract::migrate);
    Box::new(contract)
}

pub struct SuiteBuilder {
    register_forge: bool,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            register_forge: true,
        }
    }

    /// Leave the forge contract unknown to the token contract
    pub fn without_forge_registration(mut self) -> Self {
        self.register_forge = false;
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let mut app = App::default();
        let owner = app.api().addr_make("owner");

        let token_id = app.store_code(contract_forge_token());
        let token = app
            .instantiate_contract(
                token_id,
                owner.clone(),
                &forge_token::msg::InstantiateMsg::default(),
                &[],
                "ForgeToken",
                Some(owner.to_string()),
            )
            .unwrap();

        let forge_id = app.store_code(contract_forge());
        let forge = app
            .instantiate_contract(
                forge_id,
                owner.clone(),
                &InstantiateMsg {
                    token: token.to_string(),
                },
                &[],
                "Forge",
                None,
            )
            .unwrap();

        let mut suite = Suite {
            app,
            owner,
            token,
            forge,
        };
        if self.register_forge {
            let (owner, forge) = (suite.owner.clone(), suite.forge.clone());
            suite.set_forge_address(&owner, &forge).unwrap();
        }
        suite
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Suite {
    #[derivative(Debug = "ignore")]
    app: App,
    pub owner: Addr,
    pub token: Addr,
    pub forge: Addr,
}

impl Suite {
    pub fn new() -> Self {
        SuiteBuilder::new().build()
    }

    pub fn user(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    pub fn advance_seconds(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        });
    }

    pub fn set_forge_address(&mut self, sender: &Addr, forge: &Addr) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.token.clone(),
            &forge_token::msg::ExecuteMsg::SetForgeAddress {
                forge: forge.to_string(),
            },
            &[],
        )
    }

    pub fn mint(
        &mut self,
        sender: &Addr,
        to: &Addr,
        token_id: TokenId,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.token.clone(),
            &forge_token::msg::ExecuteMsg::Mint {
                to: to.to_string(),
                token_id,
                amount: Uint128::new(amount),
                msg: None,
            },
            &[],
        )
    }

    pub fn mint_starter(&mut self, sender: &Addr, token_id: TokenId) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.token.clone(),
            &forge_token::msg::ExecuteMsg::MintStarter { token_id },
            &[],
        )
    }

    /// Mint one of each starter token in `token_ids` for `sender`
    pub fn mint_starters(&mut self, sender: &Addr, token_ids: &[TokenId]) -> AnyResult<()> {
        for token_id in token_ids {
            self.mint_starter(sender, *token_id)?;
        }
        Ok(())
    }

    pub fn burn_batch(
        &mut self,
        sender: &Addr,
        from: &Addr,
        token_ids: Vec<TokenId>,
        amounts: Vec<u128>,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.token.clone(),
            &forge_token::msg::ExecuteMsg::BurnBatch {
                from: from.to_string(),
                token_ids,
                amounts: amounts.into_iter().map(Uint128::new).collect(),
            },
            &[],
        )
    }

    pub fn forge(&mut self, sender: &Addr, token_id: TokenId) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.forge.clone(),
            &ExecuteMsg::Forge { token_id },
            &[],
        )
    }

    pub fn trade(
        &mut self,
        sender: &Addr,
        give: TokenId,
        receive: TokenId,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.forge.clone(),
            &ExecuteMsg::Trade { give, receive },
            &[],
        )
    }

    pub fn burn(&mut self, sender: &Addr, token_id: TokenId, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.forge.clone(),
            &ExecuteMsg::Burn {
                token_id,
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn balance(&self, owner: &Addr, token_id: TokenId) -> AnyResult<u128> {
        let resp: BalanceResponse = self.app.wrap().query_wasm_smart(
            self.token.clone(),
            &forge_token::msg::QueryMsg::Balance {
                owner: owner.to_string(),
                token_id,
            },
        )?;
        Ok(resp.balance.u128())
    }

    pub fn supply(&self, token_id: TokenId) -> AnyResult<u128> {
        let resp: SupplyResponse = self.app.wrap().query_wasm_smart(
            self.token.clone(),
            &forge_token::msg::QueryMsg::Supply { token_id },
        )?;
        Ok(resp.supply.u128())
    }

    pub fn config(&self) -> AnyResult<ConfigResponse> {
        let resp = self
            .app
            .wrap()
            .query_wasm_smart(self.forge.clone(), &QueryMsg::Config {})?;
        Ok(resp)
    }
}
