use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct StakingRewardsEvents(Env);

impl StakingRewardsEvents {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> StakingRewardsEvents {
        StakingRewardsEvents(env.clone())
    }

    pub fn reward_added(&self, reward: u128, period_finish: u64) {
        self.env().events().publish(
            (Symbol::new(self.env(), "reward_added"),),
            (reward, period_finish),
        )
    }

    pub fn staked(&self, user: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "staked"), user), (amount,))
    }

    pub fn withdrawn(&self, user: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "withdrawn"), user), (amount,))
    }

    pub fn reward_paid(&self, user: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "reward_paid"), user), (amount,))
    }
}
