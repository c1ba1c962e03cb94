use crate::access::AccessControl;
use crate::role::Role;
use soroban_sdk::Address;
use utils::bump::bump_instance;

pub trait SingleAddressManagementTrait {
    fn get_role_safe(&self, role: &Role) -> Option<Address>;
    fn set_role_address(&self, role: &Role, address: &Address);
}

impl SingleAddressManagementTrait for AccessControl {
    fn get_role_safe(&self, role: &Role) -> Option<Address> {
        let key = self.get_key(role);
        bump_instance(&self.0);
        self.0.storage().instance().get(&key)
    }

    fn set_role_address(&self, role: &Role, address: &Address) {
        let key = self.get_key(role);
        bump_instance(&self.0);
        self.0.storage().instance().set(&key, address);
    }
}
