use crate::binding::{claim, set_rewards};
use crate::errors::GaugeError;
use crate::events::GaugeEvents;
use crate::forwarder::{on_deposit, on_withdraw};
use crate::interface::{
    AdminInterfaceTrait, ContractInfoTrait, LiquidityGaugeTrait, RewardsBindingTrait,
};
use crate::lp_token;
use crate::registry::{reward_balances, reward_token};
use crate::storage::{
    get_balance, get_lp_token, get_reward_binding, get_reward_tokens, get_total_supply,
    set_balance, set_lp_token, set_total_supply, RewardSelectors,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::management::SingleAddressManagementTrait;
use access_control::role::{Role, SymbolRepresentation};
use access_control::utils::require_rewards_admin_or_owner;
use soroban_sdk::{
    contract, contractimpl, contractmeta, panic_with_error, Address, Env, Map,
    Symbol, Vec,
};

contractmeta!(
    key = "Description",
    val = "Liquidity gauge forwarding deposits to an external reward contract"
);

#[contract]
pub struct LiquidityGauge;

#[contractimpl]
impl LiquidityGauge {
    // __constructor
    // Initializes the LiquidityGauge contract.
    //
    // Arguments:
    //   - admin: The owner, allowed to set privileged addresses and reward contracts.
    //   - lp_token: The token deposited into the gauge.
    pub fn __constructor(e: Env, admin: Address, lp_token: Address) {
        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        set_lp_token(&e, &lp_token);
    }
}

#[contractimpl]
impl LiquidityGaugeTrait for LiquidityGauge {
    fn deposit(e: Env, user: Address, amount: u128) {
        user.require_auth();
        if amount == 0 {
            panic_with_error!(&e, GaugeError::ZeroAmount);
        }

        lp_token::receive(&e, &user, amount);
        set_balance(&e, &user, &(get_balance(&e, &user) + amount));
        set_total_supply(&e, &(get_total_supply(&e) + amount));
        on_deposit(&e, amount);

        GaugeEvents::new(&e).deposit(user, amount);
    }

    fn withdraw(e: Env, user: Address, amount: u128) {
        user.require_auth();
        if amount == 0 {
            panic_with_error!(&e, GaugeError::ZeroAmount);
        }

        let balance = get_balance(&e, &user);
        if balance < amount {
            panic_with_error!(&e, GaugeError::InsufficientBalance);
        }

        on_withdraw(&e, amount);
        set_balance(&e, &user, &(balance - amount));
        set_total_supply(&e, &(get_total_supply(&e) - amount));
        lp_token::send(&e, &user, amount);

        GaugeEvents::new(&e).withdraw(user, amount);
    }

    fn lp_token(e: Env) -> Address {
        get_lp_token(&e)
    }

    fn total_supply(e: Env) -> u128 {
        get_total_supply(&e)
    }

    fn balance(e: Env, user: Address) -> u128 {
        get_balance(&e, &user)
    }
}

#[contractimpl]
impl RewardsBindingTrait for LiquidityGauge {
    fn set_rewards(
        e: Env,
        admin: Address,
        reward_contract: Option<Address>,
        selectors: RewardSelectors,
        reward_tokens: Vec<Option<Address>>,
    ) {
        admin.require_auth();
        require_rewards_admin_or_owner(&e, &admin);

        let binding = set_rewards(&e, reward_contract, selectors, reward_tokens.clone());
        GaugeEvents::new(&e).set_rewards(binding.reward_contract, binding.selectors, reward_tokens);
    }

    fn claim_external_rewards(e: Env) -> Map<Address, i128> {
        let binding = get_reward_binding(&e);
        claim(&e, &binding);

        let balances = reward_balances(&e);
        if let Some(reward_contract) = binding.reward_contract {
            GaugeEvents::new(&e).claim_external_rewards(reward_contract, balances.clone());
        }
        balances
    }

    fn reward_contract(e: Env) -> Option<Address> {
        get_reward_binding(&e).reward_contract
    }

    fn reward_selectors(e: Env) -> RewardSelectors {
        get_reward_binding(&e).selectors
    }

    fn reward_tokens(e: Env) -> Vec<Option<Address>> {
        get_reward_tokens(&e)
    }

    fn reward_token(e: Env, index: u32) -> Option<Address> {
        reward_token(&e, index)
    }
}

#[contractimpl]
impl AdminInterfaceTrait for LiquidityGauge {
    // Set privileged addresses.
    //
    // # Arguments
    //
    // * `admin` - The address of the admin.
    // * `rewards_admin` - The address allowed to rebind the reward contract.
    fn set_privileged_addrs(e: Env, admin: Address, rewards_admin: Address) {
        admin.require_auth();
        let access_control = AccessControl::new(&e);
        access_control.assert_address_has_role(&admin, &Role::Admin);

        access_control.set_role_address(&Role::RewardsAdmin, &rewards_admin);
        AccessControlEvents::new(&e).set_privileged_addrs(rewards_admin);
    }

    // Get map of privileged roles.
    //
    // # Returns
    //
    // A map of privileged roles to their respective addresses.
    fn get_privileged_addrs(e: Env) -> Map<Symbol, Vec<Address>> {
        let access_control = AccessControl::new(&e);
        let mut result: Map<Symbol, Vec<Address>> = Map::new(&e);
        for role in [Role::Admin, Role::RewardsAdmin] {
            result.set(
                role.as_symbol(&e),
                match access_control.get_role_safe(&role) {
                    Some(v) => Vec::from_array(&e, [v]),
                    None => Vec::new(&e),
                },
            );
        }
        result
    }
}

#[contractimpl]
impl ContractInfoTrait for LiquidityGauge {
    fn version() -> u32 {
        100
    }

    fn contract_name(e: Env) -> Symbol {
        Symbol::new(&e, "LiquidityGauge")
    }
}
