use crate::errors::GaugeError;
use crate::lp_token;
use crate::registry::validate_reward_tokens;
use crate::selectors::{encode_args, raw_call, validate_selectors};
use crate::storage::{
    get_reward_binding, get_total_supply, set_reward_binding, set_reward_tokens, RewardBinding,
    RewardSelectors,
};
use soroban_sdk::{log, panic_with_error, Address, Env, Vec};

// Replace the reward contract binding and the reward token registry.
//
// The previous contract is claimed from, drained of the gauge stake and loses
// its allowance. The new contract, if stake-capable, receives the whole supply.
// Either everything happens or the invocation is rolled back.
pub(crate) fn set_rewards(
    e: &Env,
    reward_contract: Option<Address>,
    selectors: RewardSelectors,
    reward_tokens: Vec<Option<Address>>,
) -> RewardBinding {
    validate_reward_tokens(e, &reward_tokens);
    let new_binding = match reward_contract {
        Some(contract) => {
            validate_selectors(e, &selectors);
            RewardBinding {
                reward_contract: Some(contract),
                selectors,
            }
        }
        None => RewardBinding::unbound(),
    };

    let total_supply = get_total_supply(e);
    if new_binding.staking_target().is_some() && total_supply == 0 {
        panic_with_error!(e, GaugeError::ZeroTotalSupply);
    }

    unwind(e, &get_reward_binding(e), total_supply);

    set_reward_binding(e, &new_binding);
    set_reward_tokens(e, &reward_tokens);

    if new_binding.staking_target().is_some() {
        establish(e, &new_binding, total_supply);
    }
    new_binding
}

// Flush pending external rewards into the gauge.
pub(crate) fn claim(e: &Env, binding: &RewardBinding) {
    if let Some((contract, get_reward)) = binding.claim_target() {
        raw_call(e, contract, get_reward, encode_args(e, None));
    }
}

fn unwind(e: &Env, binding: &RewardBinding, total_supply: u128) {
    let contract = match &binding.reward_contract {
        Some(contract) => contract,
        None => return,
    };
    log!(e, "unwinding reward contract", contract.clone(), total_supply);

    claim(e, binding);
    if total_supply > 0 {
        if let Some((contract, withdraw)) = binding.withdraw_target() {
            raw_call(e, contract, withdraw, encode_args(e, Some(total_supply)));
        }
    }
    lp_token::revoke(e, contract);
}

// Stake, withdraw and stake again, checking each leg actually moved the supply.
// A table pointing at the wrong functions fails here instead of on the next deposit.
fn establish(e: &Env, binding: &RewardBinding, total_supply: u128) {
    let (contract, stake) = match binding.staking_target() {
        Some(target) => target,
        None => return,
    };
    let withdraw = match &binding.selectors.withdraw {
        Some(withdraw) => withdraw,
        None => panic_with_error!(e, GaugeError::IncompleteSelectors),
    };
    log!(e, "establishing reward contract", contract.clone(), total_supply);

    lp_token::approve_max(e, contract);
    let balance = lp_token::gauge_balance(e);
    let staked_balance = match balance.checked_sub(total_supply) {
        Some(value) => value,
        None => panic_with_error!(e, GaugeError::SelectorsVerificationFailed),
    };

    raw_call(e, contract, stake, encode_args(e, Some(total_supply)));
    check_gauge_balance(e, staked_balance);

    raw_call(e, contract, withdraw, encode_args(e, Some(total_supply)));
    check_gauge_balance(e, balance);

    raw_call(e, contract, stake, encode_args(e, Some(total_supply)));
    check_gauge_balance(e, staked_balance);
}

fn check_gauge_balance(e: &Env, expected: u128) {
    if lp_token::gauge_balance(e) != expected {
        panic_with_error!(e, GaugeError::SelectorsVerificationFailed);
    }
}
