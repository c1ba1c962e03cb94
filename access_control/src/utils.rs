use crate::access::{AccessControl, AccessControlTrait};
use crate::errors::AccessControlError;
use crate::role::Role;
use soroban_sdk::{panic_with_error, Address, Env};

// Reward contract binding may be reconfigured by the owner or the rewards admin
pub fn require_rewards_admin_or_owner(e: &Env, address: &Address) {
    let access_control = AccessControl::new(e);
    let _ = access_control.address_has_role(address, &Role::Admin)
        || access_control.address_has_role(address, &Role::RewardsAdmin)
        || panic_with_error!(e, AccessControlError::Unauthorized);
}
