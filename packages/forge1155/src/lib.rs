pub use cw_utils::Expiration;

pub use crate::event::{
    ApproveAllEvent, Event, ForgeAddressEvent, StarterMintEvent, TransferEvent,
};
pub use crate::helpers::ForgeTokenContract;
pub use crate::msg::{
    is_starter_token, ForgeTokenExecuteMsg, TokenId, MINT_COOLDOWN_SECONDS, STARTER_TOKEN_IDS,
};
pub use crate::query::{
    Approval, ApprovedForAllResponse, BalanceResponse, BatchBalanceResponse, CooldownResponse,
    ForgeAddressResponse, ForgeTokenQueryMsg, IsApprovedForAllResponse, OwnerResponse,
    SupplyResponse, TokenInfoResponse, TokensResponse,
};
pub use crate::receiver::{ForgeTokenBatchReceiveMsg, ForgeTokenReceiveMsg};

mod event;
mod helpers;
mod msg;
mod query;
mod receiver;
