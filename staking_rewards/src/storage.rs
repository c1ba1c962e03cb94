use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
    generate_persistent_storage_getter_and_setter_with_default,
};

// ------------------------------------
// Data Structures
// ------------------------------------

// Reward stream state shared by all stakers.
#[derive(Clone)]
#[contracttype]
pub struct RewardState {
    pub reward_rate: u128,
    pub period_finish: u64,
    pub last_update_time: u64,
    pub reward_per_token_stored: u128,
    pub total_supply: u128,
}

// Per-staker position.
#[derive(Clone)]
#[contracttype]
pub struct UserData {
    pub balance: u128,
    pub reward_per_token_paid: u128,
    pub rewards: u128,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Admin,
    StakingToken,
    RewardToken,
    RewardsDuration,
    RewardState,

    // User-level data
    UserData(Address),
}

generate_instance_storage_getter_and_setter!(admin, DataKey::Admin, Address);
generate_instance_storage_getter_and_setter!(staking_token, DataKey::StakingToken, Address);
generate_instance_storage_getter_and_setter!(reward_token, DataKey::RewardToken, Address);
generate_instance_storage_getter_and_setter!(rewards_duration, DataKey::RewardsDuration, u64);
generate_instance_storage_getter_and_setter_with_default!(
    reward_state,
    DataKey::RewardState,
    RewardState,
    RewardState {
        reward_rate: 0,
        period_finish: 0,
        last_update_time: 0,
        reward_per_token_stored: 0,
        total_supply: 0,
    }
);

generate_persistent_storage_getter_and_setter_with_default!(
    user_data,
    DataKey::UserData,
    Address,
    UserData,
    UserData {
        balance: 0,
        reward_per_token_paid: 0,
        rewards: 0,
    }
);
