#![no_std]

mod binding;
mod constants;
mod contract;
pub mod errors;
mod events;
mod forwarder;
pub mod interface;
mod lp_token;
mod registry;
mod selectors;
mod storage;
mod test_permissions;
mod testutils;

pub use crate::contract::{LiquidityGauge, LiquidityGaugeArgs, LiquidityGaugeClient};
pub use crate::storage::{RewardBinding, RewardSelectors};
