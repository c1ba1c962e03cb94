#![cfg(test)]

use crate::{StakingRewards, StakingRewardsArgs, StakingRewardsClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

pub(crate) const WEEK: u64 = 7 * 86400;

pub fn create_token_contract<'a>(e: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn create_contract<'a>(
    e: &Env,
    admin: &Address,
    staking_token: &Address,
    reward_token: &Address,
    duration: u64,
) -> StakingRewardsClient<'a> {
    StakingRewardsClient::new(
        e,
        &e.register(
            StakingRewards {},
            StakingRewardsArgs::__constructor(admin, staking_token, reward_token, &duration),
        ),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) staking_token: TokenClient<'a>,
    pub(crate) reward_token: TokenClient<'a>,
    pub(crate) contract: StakingRewardsClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let staking_token = create_token_contract(&env, &admin);
        let reward_token = create_token_contract(&env, &admin);
        let contract = create_contract(
            &env,
            &admin,
            &staking_token.address,
            &reward_token.address,
            WEEK,
        );

        Setup {
            env,
            admin,
            staking_token,
            reward_token,
            contract,
        }
    }
}

impl Setup<'_> {
    // mint staking tokens to a fresh user and let the contract pull them
    pub(crate) fn staker(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.staking_token.address).mint(&user, &amount);
        self.staking_token
            .approve(&user, &self.contract.address, &amount, &99999);
        user
    }

    pub(crate) fn fund_rewards(&self, reward: u128) {
        StellarAssetClient::new(&self.env, &self.reward_token.address)
            .mint(&self.contract.address, &(reward as i128));
        self.contract.notify_reward_amount(&self.admin, &reward);
    }
}
