use crate::storage::RewardSelectors;
use soroban_sdk::{Address, Env, Map, Symbol, Vec};

#[derive(Clone)]
pub struct GaugeEvents(Env);

impl GaugeEvents {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> GaugeEvents {
        GaugeEvents(env.clone())
    }

    pub fn deposit(&self, user: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "deposit"), user), (amount,))
    }

    pub fn withdraw(&self, user: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "withdraw"), user), (amount,))
    }

    pub fn set_rewards(
        &self,
        reward_contract: Option<Address>,
        selectors: RewardSelectors,
        reward_tokens: Vec<Option<Address>>,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_rewards"),),
            (reward_contract, selectors, reward_tokens),
        )
    }

    pub fn claim_external_rewards(&self, reward_contract: Address, balances: Map<Address, i128>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "claim_external_rewards"), reward_contract),
            (balances,),
        )
    }
}
