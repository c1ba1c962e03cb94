use crate::storage::RewardSelectors;
use soroban_sdk::{Address, Env, Map, Symbol, Vec};

pub trait LiquidityGaugeTrait {
    // Deposit LP tokens into the gauge. Forwarded to the reward contract if one is bound.
    fn deposit(e: Env, user: Address, amount: u128);

    // Withdraw LP tokens from the gauge, pulling them back from the reward contract first.
    fn withdraw(e: Env, user: Address, amount: u128);

    fn lp_token(e: Env) -> Address;
    fn total_supply(e: Env) -> u128;
    fn balance(e: Env, user: Address) -> u128;
}

pub trait RewardsBindingTrait {
    // set_rewards
    // Bind the gauge to a new reward contract or unbind it, replacing the reward token registry.
    //
    // Arguments:
    //   - admin: Owner or rewards admin.
    //   - reward_contract: Contract to forward deposits to, None to unbind.
    //   - selectors: Function names to call on the reward contract.
    //   - reward_tokens: Exactly 8 slots, unused ones are None.
    fn set_rewards(
        e: Env,
        admin: Address,
        reward_contract: Option<Address>,
        selectors: RewardSelectors,
        reward_tokens: Vec<Option<Address>>,
    );

    // Claim pending rewards from the bound contract into the gauge.
    // Returns the gauge balance of every registered reward token.
    fn claim_external_rewards(e: Env) -> Map<Address, i128>;

    fn reward_contract(e: Env) -> Option<Address>;
    fn reward_selectors(e: Env) -> RewardSelectors;
    fn reward_tokens(e: Env) -> Vec<Option<Address>>;
    fn reward_token(e: Env, index: u32) -> Option<Address>;
}

pub trait AdminInterfaceTrait {
    fn set_privileged_addrs(e: Env, admin: Address, rewards_admin: Address);
    fn get_privileged_addrs(e: Env) -> Map<Symbol, Vec<Address>>;
}

pub trait ContractInfoTrait {
    // Get contract version
    fn version() -> u32;

    // Get contract type symbolic name
    fn contract_name(e: Env) -> Symbol;
}
