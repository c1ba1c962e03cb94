use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingRewardsError {
    Unauthorized = 3201,
    ZeroAmount = 3202,
    InsufficientBalance = 3203,
    ZeroDuration = 3204,
    RewardTooHigh = 3205,
    AmountTooLarge = 3206,
}
