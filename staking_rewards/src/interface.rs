use soroban_sdk::{Address, Env};

pub trait StakingRewardsTrait {
    // Pull `amount` of staking token from `from` using the allowance granted to this contract
    fn stake(e: Env, from: Address, amount: u128);

    // Return `amount` of staked token to `to`
    fn withdraw(e: Env, to: Address, amount: u128);

    // Pay out everything earned by `user` so far
    fn get_reward(e: Env, user: Address) -> u128;

    // Start a new reward period with `reward` tokens already held by the contract
    fn notify_reward_amount(e: Env, admin: Address, reward: u128);

    // Views
    fn balance_of(e: Env, user: Address) -> u128;
    fn total_supply(e: Env) -> u128;
    fn earned(e: Env, user: Address) -> u128;
    fn reward_per_token(e: Env) -> u128;
    fn reward_rate(e: Env) -> u128;
    fn period_finish(e: Env) -> u64;
    fn staking_token(e: Env) -> Address;
    fn reward_token(e: Env) -> Address;
}
