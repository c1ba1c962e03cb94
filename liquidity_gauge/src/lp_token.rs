use crate::constants::ALLOWANCE_LIFETIME;
use crate::errors::GaugeError;
use crate::storage::get_lp_token;
use soroban_sdk::token::TokenClient as SorobanTokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

fn lp_client(e: &Env) -> SorobanTokenClient<'_> {
    SorobanTokenClient::new(e, &get_lp_token(e))
}

fn token_amount(e: &Env, amount: u128) -> i128 {
    match i128::try_from(amount) {
        Ok(amount) => amount,
        Err(_) => panic_with_error!(e, GaugeError::AmountTooLarge),
    }
}

pub(crate) fn gauge_balance(e: &Env) -> u128 {
    lp_client(e).balance(&e.current_contract_address()) as u128
}

pub(crate) fn receive(e: &Env, from: &Address, amount: u128) {
    lp_client(e).transfer(from, &e.current_contract_address(), &token_amount(e, amount));
}

pub(crate) fn send(e: &Env, to: &Address, amount: u128) {
    lp_client(e).transfer(&e.current_contract_address(), to, &token_amount(e, amount));
}

pub(crate) fn approve_max(e: &Env, spender: &Address) {
    lp_client(e).approve(
        &e.current_contract_address(),
        spender,
        &i128::MAX,
        &(e.ledger().sequence() + ALLOWANCE_LIFETIME),
    );
}

pub(crate) fn revoke(e: &Env, spender: &Address) {
    lp_client(e).approve(
        &e.current_contract_address(),
        spender,
        &0,
        &e.ledger().sequence(),
    );
}

// Allowances expire with the ledger, renew before the reward contract pulls.
pub(crate) fn ensure_allowance(e: &Env, spender: &Address, amount: u128) {
    let allowance = lp_client(e).allowance(&e.current_contract_address(), spender);
    if (allowance as u128) < amount {
        approve_max(e, spender);
    }
}
