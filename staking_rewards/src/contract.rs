use crate::errors::StakingRewardsError;
use crate::events::StakingRewardsEvents;
use crate::interface::StakingRewardsTrait;
use crate::rewards::{earned, reward_per_token, update_reward_global, update_reward_user};
use crate::storage::{
    get_admin, get_reward_state, get_reward_token, get_rewards_duration, get_staking_token,
    get_user_data, set_admin, set_reward_state, set_reward_token, set_rewards_duration,
    set_staking_token, set_user_data,
};
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{contract, contractimpl, contractmeta, panic_with_error, Address, Env};

contractmeta!(
    key = "Description",
    val = "Linear stream staking rewards distributor"
);

#[contract]
pub struct StakingRewards;

fn token_amount(e: &Env, amount: u128) -> i128 {
    match i128::try_from(amount) {
        Ok(amount) => amount,
        Err(_) => panic_with_error!(e, StakingRewardsError::AmountTooLarge),
    }
}

#[contractimpl]
impl StakingRewards {
    // __constructor
    // Initializes the StakingRewards contract.
    //
    // Arguments:
    //   - admin: The address allowed to start reward periods.
    //   - staking_token: The token users stake.
    //   - reward_token: The token paid out as reward.
    //   - rewards_duration: Length of every reward period in seconds.
    pub fn __constructor(
        e: Env,
        admin: Address,
        staking_token: Address,
        reward_token: Address,
        rewards_duration: u64,
    ) {
        if rewards_duration == 0 {
            panic_with_error!(&e, StakingRewardsError::ZeroDuration);
        }

        set_admin(&e, &admin);
        set_staking_token(&e, &staking_token);
        set_reward_token(&e, &reward_token);
        set_rewards_duration(&e, &rewards_duration);
    }
}

#[contractimpl]
impl StakingRewardsTrait for StakingRewards {
    fn stake(e: Env, from: Address, amount: u128) {
        from.require_auth();
        if amount == 0 {
            panic_with_error!(&e, StakingRewardsError::ZeroAmount);
        }
        let transfer_amount = token_amount(&e, amount);

        let mut state = update_reward_global(&e);
        let mut user_data = update_reward_user(&e, &state, &from);

        state.total_supply += amount;
        user_data.balance += amount;
        set_reward_state(&e, &state);
        set_user_data(&e, &from, &user_data);

        let contract = e.current_contract_address();
        SorobanTokenClient::new(&e, &get_staking_token(&e)).transfer_from(
            &contract,
            &from,
            &contract,
            &transfer_amount,
        );

        StakingRewardsEvents::new(&e).staked(from, amount);
    }

    fn withdraw(e: Env, to: Address, amount: u128) {
        to.require_auth();
        if amount == 0 {
            panic_with_error!(&e, StakingRewardsError::ZeroAmount);
        }
        let transfer_amount = token_amount(&e, amount);

        let mut state = update_reward_global(&e);
        let mut user_data = update_reward_user(&e, &state, &to);
        if user_data.balance < amount {
            panic_with_error!(&e, StakingRewardsError::InsufficientBalance);
        }

        state.total_supply -= amount;
        user_data.balance -= amount;
        set_reward_state(&e, &state);
        set_user_data(&e, &to, &user_data);

        SorobanTokenClient::new(&e, &get_staking_token(&e)).transfer(
            &e.current_contract_address(),
            &to,
            &transfer_amount,
        );

        StakingRewardsEvents::new(&e).withdrawn(to, amount);
    }

    fn get_reward(e: Env, user: Address) -> u128 {
        user.require_auth();

        let state = update_reward_global(&e);
        let mut user_data = update_reward_user(&e, &state, &user);

        let reward = user_data.rewards;
        if reward > 0 {
            user_data.rewards = 0;
            set_user_data(&e, &user, &user_data);
            SorobanTokenClient::new(&e, &get_reward_token(&e)).transfer(
                &e.current_contract_address(),
                &user,
                &token_amount(&e, reward),
            );
            StakingRewardsEvents::new(&e).reward_paid(user, reward);
        }
        reward
    }

    fn notify_reward_amount(e: Env, admin: Address, reward: u128) {
        admin.require_auth();
        if get_admin(&e) != admin {
            panic_with_error!(&e, StakingRewardsError::Unauthorized);
        }

        let mut state = update_reward_global(&e);
        let now = e.ledger().timestamp();
        let duration = get_rewards_duration(&e);

        // unfinished period leftovers roll into the new one
        state.reward_rate = if now >= state.period_finish {
            reward / duration as u128
        } else {
            let leftover = (state.period_finish - now) as u128 * state.reward_rate;
            (reward + leftover) / duration as u128
        };

        // the contract must already hold enough to pay the whole period
        let balance = SorobanTokenClient::new(&e, &get_reward_token(&e))
            .balance(&e.current_contract_address()) as u128;
        if state.reward_rate > balance / duration as u128 {
            panic_with_error!(&e, StakingRewardsError::RewardTooHigh);
        }

        state.last_update_time = now;
        state.period_finish = now + duration;
        set_reward_state(&e, &state);

        StakingRewardsEvents::new(&e).reward_added(reward, state.period_finish);
    }

    fn balance_of(e: Env, user: Address) -> u128 {
        get_user_data(&e, &user).balance
    }

    fn total_supply(e: Env) -> u128 {
        get_reward_state(&e).total_supply
    }

    fn earned(e: Env, user: Address) -> u128 {
        earned(&e, &get_reward_state(&e), &get_user_data(&e, &user))
    }

    fn reward_per_token(e: Env) -> u128 {
        reward_per_token(&e, &get_reward_state(&e))
    }

    fn reward_rate(e: Env) -> u128 {
        get_reward_state(&e).reward_rate
    }

    fn period_finish(e: Env) -> u64 {
        get_reward_state(&e).period_finish
    }

    fn staking_token(e: Env) -> Address {
        get_staking_token(&e)
    }

    fn reward_token(e: Env) -> Address {
        get_reward_token(&e)
    }
}
