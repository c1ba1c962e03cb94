#![cfg(test)]

use crate::constants::MAX_REWARD_TOKENS;
use crate::{LiquidityGauge, LiquidityGaugeArgs, LiquidityGaugeClient, RewardSelectors};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol, Vec};
use soroban_staking_rewards_contract::{
    StakingRewards, StakingRewardsArgs, StakingRewardsClient,
};

pub(crate) const WEEK: u64 = 7 * 86400;
pub(crate) const REWARD: u128 = 100_000_000_000_000_000_000;
pub(crate) const LP_AMOUNT: u128 = 1_000_000_000_000_000_000;

// Pays its whole reward balance to whoever claims. Nothing to stake.
#[contract]
pub struct MockedDistributor;

#[contractimpl]
impl MockedDistributor {
    pub fn __constructor(e: Env, reward_token: Address) {
        e.storage()
            .instance()
            .set(&symbol_short!("token"), &reward_token);
    }

    pub fn claim(e: Env, user: Address) {
        let token: Address = e
            .storage()
            .instance()
            .get(&symbol_short!("token"))
            .unwrap();
        let client = TokenClient::new(&e, &token);
        let balance = client.balance(&e.current_contract_address());
        if balance > 0 {
            client.transfer(&e.current_contract_address(), &user, &balance);
        }
    }
}

// Accepts stake and withdraw calls without moving any tokens.
#[contract]
pub struct MockedLazyStaking;

#[contractimpl]
impl MockedLazyStaking {
    pub fn stake(_e: Env, from: Address, _amount: u128) {
        from.require_auth();
    }

    pub fn withdraw(_e: Env, to: Address, _amount: u128) {
        to.require_auth();
    }

    pub fn get_reward(_e: Env, _user: Address) -> u128 {
        0
    }
}

pub fn create_token_contract<'a>(e: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn create_contract<'a>(e: &Env, admin: &Address, lp_token: &Address) -> LiquidityGaugeClient<'a> {
    LiquidityGaugeClient::new(
        e,
        &e.register(
            LiquidityGauge {},
            LiquidityGaugeArgs::__constructor(admin, lp_token),
        ),
    )
}

pub fn create_staking_rewards<'a>(
    e: &Env,
    admin: &Address,
    staking_token: &Address,
    reward_token: &Address,
) -> StakingRewardsClient<'a> {
    StakingRewardsClient::new(
        e,
        &e.register(
            StakingRewards {},
            StakingRewardsArgs::__constructor(admin, staking_token, reward_token, &WEEK),
        ),
    )
}

pub fn staking_selectors(e: &Env) -> RewardSelectors {
    RewardSelectors {
        stake: Some(Symbol::new(e, "stake")),
        withdraw: Some(Symbol::new(e, "withdraw")),
        get_reward: Some(Symbol::new(e, "get_reward")),
    }
}

pub fn claim_only_selectors(e: &Env) -> RewardSelectors {
    RewardSelectors {
        stake: None,
        withdraw: None,
        get_reward: Some(Symbol::new(e, "claim")),
    }
}

// registry with the given tokens in the leading slots
pub fn reward_tokens(e: &Env, tokens: &[&Address]) -> Vec<Option<Address>> {
    let mut result = Vec::new(e);
    for token in tokens {
        result.push_back(Some((*token).clone()));
    }
    while result.len() < MAX_REWARD_TOKENS {
        result.push_back(None);
    }
    result
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) rewards_admin: Address,
    pub(crate) lp_token: TokenClient<'a>,
    pub(crate) reward_token: TokenClient<'a>,
    pub(crate) reward_token_2: TokenClient<'a>,
    pub(crate) reward_contract: StakingRewardsClient<'a>,
    pub(crate) reward_contract_2: StakingRewardsClient<'a>,
    pub(crate) distributor: Address,
    pub(crate) gauge: LiquidityGaugeClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let rewards_admin = Address::generate(&env);
        let lp_token = create_token_contract(&env, &admin);
        let reward_token = create_token_contract(&env, &admin);
        let reward_token_2 = create_token_contract(&env, &admin);

        let reward_contract = create_staking_rewards(
            &env,
            &admin,
            &lp_token.address,
            &reward_token.address,
        );
        let reward_contract_2 = create_staking_rewards(
            &env,
            &admin,
            &lp_token.address,
            &reward_token_2.address,
        );
        let distributor = env.register(MockedDistributor, (reward_token_2.address.clone(),));

        let gauge = create_contract(&env, &admin, &lp_token.address);
        gauge.set_privileged_addrs(&admin, &rewards_admin);

        // both reward contracts stream REWARD over the coming week
        for (contract, token) in [
            (&reward_contract, &reward_token),
            (&reward_contract_2, &reward_token_2),
        ] {
            StellarAssetClient::new(&env, &token.address)
                .mint(&contract.address, &(REWARD as i128));
            contract.notify_reward_amount(&admin, &REWARD);
        }

        Setup {
            env,
            admin,
            rewards_admin,
            lp_token,
            reward_token,
            reward_token_2,
            reward_contract,
            reward_contract_2,
            distributor,
            gauge,
        }
    }
}

impl Setup<'_> {
    // Gauge bound to the first reward contract with nothing deposited.
    // Binding needs supply, so a throwaway deposit is made around it.
    pub(crate) fn with_bound_reward_contract() -> Self {
        let setup = Self::default();
        let user = setup.depositor(1);
        setup.gauge.deposit(&user, &1);
        setup.gauge.set_rewards(
            &setup.admin,
            &Some(setup.reward_contract.address.clone()),
            &staking_selectors(&setup.env),
            &reward_tokens(&setup.env, &[&setup.reward_token.address]),
        );
        setup.gauge.withdraw(&user, &1);
        setup
    }

    pub(crate) fn depositor(&self, amount: u128) -> Address {
        let user = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.lp_token.address).mint(&user, &(amount as i128));
        user
    }

    pub(crate) fn fund_distributor(&self, amount: u128) {
        StellarAssetClient::new(&self.env, &self.reward_token_2.address)
            .mint(&self.distributor, &(amount as i128));
    }

    pub(crate) fn lp_allowance(&self, spender: &Address) -> i128 {
        self.lp_token.allowance(&self.gauge.address, spender)
    }

    // Every LP token the gauge accounts for is either on the gauge or staked
    // in the bound stake-capable contract, and nowhere else.
    pub(crate) fn assert_conservation(&self) {
        let total_supply = self.gauge.total_supply();
        let on_gauge = self.lp_token.balance(&self.gauge.address) as u128;
        let bound = self.gauge.reward_contract();
        let stake_capable = self.gauge.reward_selectors().stake.is_some();

        let mut staked = 0;
        for contract in [&self.reward_contract, &self.reward_contract_2] {
            let stake = contract.balance_of(&self.gauge.address);
            if stake_capable && bound == Some(contract.address.clone()) {
                assert_eq!(stake, total_supply);
            } else {
                assert_eq!(stake, 0);
            }
            staked += stake;
        }
        assert_eq!(on_gauge + staked, total_supply);
    }
}
