use soroban_sdk::{Env, Symbol};

#[derive(Clone)]
pub enum Role {
    Admin,
    RewardsAdmin,
}

pub trait SymbolRepresentation {
    fn as_symbol(&self, e: &Env) -> Symbol;
}

impl SymbolRepresentation for Role {
    fn as_symbol(&self, e: &Env) -> Symbol {
        match self {
            Role::Admin => Symbol::new(e, "Admin"),
            Role::RewardsAdmin => Symbol::new(e, "RewardsAdmin"),
        }
    }
}
