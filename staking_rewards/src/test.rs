#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, WEEK};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use utils::test_utils::{assert_approx_eq_abs, jump};

const REWARD: u128 = 100_000_000_000_000_000_000;

#[test]
fn test_stake_withdraw() {
    let setup = Setup::default();
    let user = setup.staker(1000);

    setup.contract.stake(&user, &600);
    assert_eq!(setup.contract.balance_of(&user), 600);
    assert_eq!(setup.contract.total_supply(), 600);
    assert_eq!(setup.staking_token.balance(&user), 400);
    assert_eq!(setup.staking_token.balance(&setup.contract.address), 600);

    setup.contract.withdraw(&user, &200);
    assert_eq!(setup.contract.balance_of(&user), 400);
    assert_eq!(setup.contract.total_supply(), 400);
    assert_eq!(setup.staking_token.balance(&user), 600);
}

#[test]
fn test_single_staker_receives_whole_period() {
    let setup = Setup::default();
    let user = setup.staker(1_000_000_000_000_000_000);
    setup.contract.stake(&user, &1_000_000_000_000_000_000);

    setup.fund_rewards(REWARD);
    jump(&setup.env, WEEK);

    let reward = setup.contract.get_reward(&user);
    assert!(reward <= REWARD);
    // rate is floored to whole tokens per second
    assert_approx_eq_abs(reward, REWARD, WEEK as u128);
    assert_eq!(setup.reward_token.balance(&user) as u128, reward);

    // nothing left to claim after the period ends
    jump(&setup.env, WEEK);
    assert_eq!(setup.contract.get_reward(&user), 0);
}

#[test]
fn test_rewards_split_by_stake_time() {
    let setup = Setup::default();
    let user1 = setup.staker(100);
    let user2 = setup.staker(100);
    let reward_per_second = 1_000_000_u128;

    setup.contract.stake(&user1, &100);
    setup.fund_rewards(reward_per_second * WEEK as u128);

    // first half of the week user1 is alone, second half split equally
    jump(&setup.env, WEEK / 2);
    setup.contract.stake(&user2, &100);
    jump(&setup.env, WEEK / 2);

    let half = reward_per_second * (WEEK / 2) as u128;
    assert_approx_eq_abs(setup.contract.earned(&user1), half + half / 2, 2);
    assert_approx_eq_abs(setup.contract.earned(&user2), half / 2, 2);
}

#[test]
fn test_withdraw_keeps_pending_reward() {
    let setup = Setup::default();
    let user = setup.staker(100);
    setup.contract.stake(&user, &100);
    setup.fund_rewards(WEEK as u128 * 10);

    jump(&setup.env, 100);
    setup.contract.withdraw(&user, &100);
    assert_eq!(setup.contract.earned(&user), 1000);

    // no stake, no further accrual
    jump(&setup.env, 100);
    assert_eq!(setup.contract.earned(&user), 1000);
    assert_eq!(setup.contract.get_reward(&user), 1000);
}

#[test]
fn test_notify_rolls_over_leftover() {
    let setup = Setup::default();
    let user = setup.staker(100);
    setup.contract.stake(&user, &100);

    setup.fund_rewards(WEEK as u128 * 10);
    assert_eq!(setup.contract.reward_rate(), 10);

    jump(&setup.env, WEEK / 2);
    setup.fund_rewards(WEEK as u128 * 10);
    // half of the first period is left: (10 * week / 2 + 10 * week) / week
    assert_eq!(setup.contract.reward_rate(), 15);
    assert_eq!(
        setup.contract.period_finish(),
        setup.env.ledger().timestamp() + WEEK
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #3205)")]
fn test_notify_unfunded_reward() {
    let setup = Setup::default();
    setup.contract.notify_reward_amount(&setup.admin, &REWARD);
}

#[test]
#[should_panic(expected = "Error(Contract, #3201)")]
fn test_notify_not_admin() {
    let setup = Setup::default();
    setup
        .contract
        .notify_reward_amount(&Address::generate(&setup.env), &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #3203)")]
fn test_withdraw_over_balance() {
    let setup = Setup::default();
    let user = setup.staker(100);
    setup.contract.stake(&user, &100);
    setup.contract.withdraw(&user, &101);
}

#[test]
#[should_panic(expected = "Error(Contract, #3202)")]
fn test_stake_zero() {
    let setup = Setup::default();
    let user = setup.staker(100);
    setup.contract.stake(&user, &0);
}

#[test]
fn test_stake_requires_allowance() {
    let setup = Setup::default();
    let user = setup.staker(100);
    setup
        .staking_token
        .approve(&user, &setup.contract.address, &0, &99999);
    assert!(setup.contract.try_stake(&user, &100).is_err());
    assert_eq!(setup.contract.balance_of(&user), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #3206)")]
fn test_stake_amount_too_large() {
    let setup = Setup::default();
    let user = setup.staker(1000);
    setup.contract.stake(&user, &u128::MAX);
}
