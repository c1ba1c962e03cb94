use crate::constants::MAX_REWARD_TOKENS;
use crate::errors::GaugeError;
use crate::storage::get_reward_tokens;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Address, Env, Map, Vec};

pub(crate) fn validate_reward_tokens(e: &Env, tokens: &Vec<Option<Address>>) {
    if tokens.len() != MAX_REWARD_TOKENS {
        panic_with_error!(e, GaugeError::RewardTokensLengthMismatch);
    }
}

pub(crate) fn reward_token(e: &Env, index: u32) -> Option<Address> {
    if index >= MAX_REWARD_TOKENS {
        panic_with_error!(e, GaugeError::RewardTokenIndexOutOfBounds);
    }
    get_reward_tokens(e).get(index).flatten()
}

// gauge balance of every registered token, empty slots skipped
pub(crate) fn reward_balances(e: &Env) -> Map<Address, i128> {
    let gauge = e.current_contract_address();
    let mut balances = Map::new(e);
    for token in get_reward_tokens(e).iter().flatten() {
        let balance = SorobanTokenClient::new(e, &token).balance(&gauge);
        balances.set(token, balance);
    }
    balances
}
