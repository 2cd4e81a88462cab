pub mod contract;
mod error;
mod execute;
mod helpers;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
