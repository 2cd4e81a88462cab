use cosmwasm_std::{attr, Response, Uint128};

use crate::msg::TokenId;

/// A set of attributes describing one action, appended to a `Response`
pub trait Event {
    fn add_attributes(&self, rsp: &mut Response);
}

/// Tracks token transfer/mint/burn actions
pub struct TransferEvent<'a> {
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub token_id: TokenId,
    pub amount: Uint128,
}

impl<'a> Event for TransferEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "transfer"));
        rsp.attributes
            .push(attr("token_id", self.token_id.to_string()));
        rsp.attributes.push(attr("amount", self.amount.to_string()));
        if let Some(from) = self.from {
            rsp.attributes.push(attr("from", from));
        }
        if let Some(to) = self.to {
            rsp.attributes.push(attr("to", to));
        }
    }
}

/// Tracks self-service mints of starter tokens
pub struct StarterMintEvent<'a> {
    pub minter: &'a str,
    pub token_id: TokenId,
    pub timestamp: u64,
}

impl<'a> Event for StarterMintEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "mint_starter"));
        rsp.attributes.push(attr("minter", self.minter));
        rsp.attributes
            .push(attr("token_id", self.token_id.to_string()));
        rsp.attributes
            .push(attr("timestamp", self.timestamp.to_string()));
    }
}

/// Tracks changes of the privileged forge address
pub struct ForgeAddressEvent<'a> {
    pub sender: &'a str,
    pub forge: &'a str,
}

impl<'a> Event for ForgeAddressEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "set_forge_address"));
        rsp.attributes.push(attr("sender", self.sender));
        rsp.attributes.push(attr("forge", self.forge));
    }
}

/// Tracks approve_all status changes
pub struct ApproveAllEvent<'a> {
    pub sender: &'a str,
    pub operator: &'a str,
    pub approved: bool,
}

impl<'a> Event for ApproveAllEvent<'a> {
    fn add_attributes(&self, rsp: &mut Response) {
        rsp.attributes.push(attr("action", "approve_all"));
        rsp.attributes.push(attr("sender", self.sender));
        rsp.attributes.push(attr("operator", self.operator));
        rsp.attributes
            .push(attr("approved", (self.approved as u32).to_string()));
    }
}
