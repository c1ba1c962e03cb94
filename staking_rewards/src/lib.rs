#![no_std]

mod constants;
mod contract;
pub mod errors;
mod events;
pub mod interface;
mod rewards;
mod storage;
mod test;
mod testutils;

pub use crate::contract::{StakingRewards, StakingRewardsArgs, StakingRewardsClient};
