use crate::lp_token;
use crate::selectors::{encode_args, raw_call};
use crate::storage::get_reward_binding;
use soroban_sdk::Env;

// Mirror a deposit into the bound reward contract. Tokens must already be on the gauge.
pub(crate) fn on_deposit(e: &Env, amount: u128) {
    let binding = get_reward_binding(e);
    if let Some((contract, stake)) = binding.staking_target() {
        lp_token::ensure_allowance(e, contract, amount);
        raw_call(e, contract, stake, encode_args(e, Some(amount)));
    }
}

// Pull a withdrawal back from the bound reward contract before paying the user.
pub(crate) fn on_withdraw(e: &Env, amount: u128) {
    let binding = get_reward_binding(e);
    if let Some((contract, withdraw)) = binding.withdraw_target() {
        raw_call(e, contract, withdraw, encode_args(e, Some(amount)));
    }
}
