use crate::errors::AccessControlError;
use crate::management::SingleAddressManagementTrait;
use crate::role::Role;
use crate::storage::DataKey;
use soroban_sdk::{panic_with_error, Address, Env};

#[derive(Clone)]
pub struct AccessControl(pub(crate) Env);

impl AccessControl {
    pub fn new(env: &Env) -> AccessControl {
        AccessControl(env.clone())
    }

    pub(crate) fn get_key(&self, role: &Role) -> DataKey {
        match role {
            Role::Admin => DataKey::Admin,
            Role::RewardsAdmin => DataKey::RewardsAdmin,
        }
    }
}

pub trait AccessControlTrait {
    fn address_has_role(&self, address: &Address, role: &Role) -> bool;
    fn assert_address_has_role(&self, address: &Address, role: &Role);
}

impl AccessControlTrait for AccessControl {
    fn address_has_role(&self, address: &Address, role: &Role) -> bool {
        match self.get_role_safe(role) {
            Some(role_address) => address == &role_address,
            None => false,
        }
    }

    fn assert_address_has_role(&self, address: &Address, role: &Role) {
        if !self.address_has_role(address, role) {
            panic_with_error!(&self.0, AccessControlError::Unauthorized);
        }
    }
}
