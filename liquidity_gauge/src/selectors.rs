use crate::errors::GaugeError;
use crate::storage::RewardSelectors;
use soroban_sdk::{log, panic_with_error, Address, Env, IntoVal, Symbol, Val, Vec};

// stake and withdraw go together, get_reward may stand alone
pub(crate) fn validate_selectors(e: &Env, selectors: &RewardSelectors) {
    if selectors.stake.is_some() != selectors.withdraw.is_some() {
        panic_with_error!(e, GaugeError::IncompleteSelectors);
    }
}

// Call payload for a selector: the gauge identity first, then the amount if any.
pub(crate) fn encode_args(e: &Env, amount: Option<u128>) -> Vec<Val> {
    let mut args = Vec::from_array(e, [e.current_contract_address().to_val()]);
    if let Some(amount) = amount {
        args.push_back(amount.into_val(e));
    }
    args
}

// Invoke a stored selector on the reward contract. Whatever it returns is ignored,
// any failure of the callee aborts the whole operation.
pub(crate) fn raw_call(e: &Env, contract: &Address, selector: &Symbol, args: Vec<Val>) {
    log!(e, "reward contract call", contract.clone(), selector.clone());
    match e.try_invoke_contract::<Val, GaugeError>(contract, selector, args) {
        Ok(Ok(_)) => {}
        _ => panic_with_error!(e, GaugeError::ExternalCallFailed),
    }
}
