use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn set_privileged_addrs(&self, rewards_admin: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_privileged_addrs"),),
            (rewards_admin,),
        )
    }
}
