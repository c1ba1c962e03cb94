#![cfg(test)]
extern crate std;

use crate::testutils::{reward_tokens, staking_selectors, Setup, LP_AMOUNT};
use crate::RewardSelectors;
use access_control::role::{Role, SymbolRepresentation};
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{symbol_short, vec, Address, IntoVal, Symbol};

#[test]
fn test_set_rewards_admin() {
    let setup = Setup::default();
    setup.gauge.set_rewards(
        &setup.admin,
        &None,
        &RewardSelectors::empty(),
        &reward_tokens(&setup.env, &[&setup.reward_token.address]),
    );
}

#[test]
fn test_set_rewards_rewards_admin() {
    let setup = Setup::default();
    let user = setup.depositor(LP_AMOUNT);
    setup.gauge.deposit(&user, &LP_AMOUNT);
    setup.gauge.set_rewards(
        &setup.rewards_admin,
        &Some(setup.reward_contract.address.clone()),
        &staking_selectors(&setup.env),
        &reward_tokens(&setup.env, &[&setup.reward_token.address]),
    );
    assert_eq!(
        setup.gauge.reward_contract(),
        Some(setup.reward_contract.address.clone())
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_rewards_third_party_user() {
    let setup = Setup::default();
    setup.gauge.set_rewards(
        &Address::generate(&setup.env),
        &None,
        &RewardSelectors::empty(),
        &reward_tokens(&setup.env, &[]),
    );
}

#[test]
fn test_set_privileged_addrs() {
    let setup = Setup::default();
    let rewards_admin = Address::generate(&setup.env);
    setup.gauge.set_privileged_addrs(&setup.admin, &rewards_admin);

    let addrs = setup.gauge.get_privileged_addrs();
    assert_eq!(
        addrs.get(Role::Admin.as_symbol(&setup.env)),
        Some(vec![&setup.env, setup.admin.clone()])
    );
    assert_eq!(
        addrs.get(Role::RewardsAdmin.as_symbol(&setup.env)),
        Some(vec![&setup.env, rewards_admin.clone()])
    );

    // previous rewards admin lost its rights
    assert!(setup
        .gauge
        .try_set_rewards(
            &setup.rewards_admin,
            &None,
            &RewardSelectors::empty(),
            &reward_tokens(&setup.env, &[]),
        )
        .is_err());
    setup.gauge.set_rewards(
        &rewards_admin,
        &None,
        &RewardSelectors::empty(),
        &reward_tokens(&setup.env, &[]),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_privileged_addrs_rewards_admin() {
    let setup = Setup::default();
    setup
        .gauge
        .set_privileged_addrs(&setup.rewards_admin, &Address::generate(&setup.env));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_privileged_addrs_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.gauge.set_privileged_addrs(&user, &user);
}

#[test]
fn test_deposit_requires_user_auth() {
    let setup = Setup::default();
    let user = setup.depositor(1000);
    setup.gauge.deposit(&user, &1000);

    assert_eq!(
        setup.env.auths(),
        std::vec![(
            user.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    setup.gauge.address.clone(),
                    Symbol::new(&setup.env, "deposit"),
                    (&user, 1000_u128).into_val(&setup.env),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        setup.lp_token.address.clone(),
                        symbol_short!("transfer"),
                        (&user, &setup.gauge.address, 1000_i128).into_val(&setup.env),
                    )),
                    sub_invocations: std::vec![],
                }],
            }
        )]
    );
}
