use crate::constants::MAX_REWARD_TOKENS;
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Symbol, Vec};
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

// Function names the gauge invokes on the bound reward contract.
// A missing entry means the capability is absent.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardSelectors {
    pub stake: Option<Symbol>,
    pub withdraw: Option<Symbol>,
    pub get_reward: Option<Symbol>,
}

impl RewardSelectors {
    pub const fn empty() -> Self {
        RewardSelectors {
            stake: None,
            withdraw: None,
            get_reward: None,
        }
    }
}

// Reward contract and its selector table, always replaced together.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardBinding {
    pub reward_contract: Option<Address>,
    pub selectors: RewardSelectors,
}

impl RewardBinding {
    pub const fn unbound() -> Self {
        RewardBinding {
            reward_contract: None,
            selectors: RewardSelectors::empty(),
        }
    }

    // contract to stake into, if bound with a stake-capable table
    pub(crate) fn staking_target(&self) -> Option<(&Address, &Symbol)> {
        match (&self.reward_contract, &self.selectors.stake) {
            (Some(contract), Some(stake)) => Some((contract, stake)),
            _ => None,
        }
    }

    pub(crate) fn withdraw_target(&self) -> Option<(&Address, &Symbol)> {
        match (&self.reward_contract, &self.selectors.withdraw) {
            (Some(contract), Some(withdraw)) => Some((contract, withdraw)),
            _ => None,
        }
    }

    pub(crate) fn claim_target(&self) -> Option<(&Address, &Symbol)> {
        match (&self.reward_contract, &self.selectors.get_reward) {
            (Some(contract), Some(get_reward)) => Some((contract, get_reward)),
            _ => None,
        }
    }
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    LpToken,
    TotalSupply,
    RewardBinding,
    RewardTokens,

    // User-level data
    Balance(Address),
}

generate_instance_storage_getter_and_setter!(lp_token, DataKey::LpToken, Address);
generate_instance_storage_getter_and_setter_with_default!(
    total_supply,
    DataKey::TotalSupply,
    u128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    reward_binding,
    DataKey::RewardBinding,
    RewardBinding,
    RewardBinding::unbound()
);

pub(crate) fn get_reward_tokens(e: &Env) -> Vec<Option<Address>> {
    bump_instance(e);
    match e.storage().instance().get(&DataKey::RewardTokens) {
        Some(tokens) => tokens,
        None => {
            let mut tokens = Vec::new(e);
            for _ in 0..MAX_REWARD_TOKENS {
                tokens.push_back(None);
            }
            tokens
        }
    }
}

pub(crate) fn set_reward_tokens(e: &Env, tokens: &Vec<Option<Address>>) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::RewardTokens, tokens);
}

generate_persistent_storage_getter_and_setter_with_default!(
    balance,
    DataKey::Balance,
    Address,
    u128,
    0
);
