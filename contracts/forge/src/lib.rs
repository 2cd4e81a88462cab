pub mod contract;
mod error;
pub mod msg;
pub mod recipe;
pub mod state;

pub use crate::error::ContractError;

#[cfg(test)]
mod multitest;
