use crate::constants::REWARD_PRECISION;
use crate::storage::{
    get_reward_state, get_user_data, set_reward_state, set_user_data, RewardState, UserData,
};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{Address, Env};

pub(crate) fn last_time_reward_applicable(e: &Env, state: &RewardState) -> u64 {
    let now = e.ledger().timestamp();
    if now < state.period_finish {
        now
    } else {
        state.period_finish
    }
}

pub(crate) fn reward_per_token(e: &Env, state: &RewardState) -> u128 {
    if state.total_supply == 0 {
        return state.reward_per_token_stored;
    }

    let last_applicable = last_time_reward_applicable(e, state);
    if last_applicable <= state.last_update_time {
        return state.reward_per_token_stored;
    }

    let generated = (last_applicable - state.last_update_time) as u128 * state.reward_rate;
    state.reward_per_token_stored
        + generated.fixed_mul_floor(e, &REWARD_PRECISION, &state.total_supply)
}

pub(crate) fn earned(e: &Env, state: &RewardState, user_data: &UserData) -> u128 {
    let reward_per_token = reward_per_token(e, state);
    user_data.rewards
        + user_data.balance.fixed_mul_floor(
            e,
            &(reward_per_token - user_data.reward_per_token_paid),
            &REWARD_PRECISION,
        )
}

// Snapshot the global accumulator up to now.
pub(crate) fn update_reward_global(e: &Env) -> RewardState {
    let mut state = get_reward_state(e);
    state.reward_per_token_stored = reward_per_token(e, &state);
    state.last_update_time = last_time_reward_applicable(e, &state);
    set_reward_state(e, &state);
    state
}

// Settle the user's pending reward against a fresh global snapshot.
pub(crate) fn update_reward_user(e: &Env, state: &RewardState, user: &Address) -> UserData {
    let mut data = get_user_data(e, user);
    data.rewards = earned(e, state, &data);
    data.reward_per_token_paid = state.reward_per_token_stored;
    set_user_data(e, user, &data);
    data
}
