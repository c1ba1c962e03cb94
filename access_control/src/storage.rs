use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Admin,        // owner - set privileged roles, reconfigure rewards
    RewardsAdmin, // rewards admin - reconfigure reward contract binding
}
