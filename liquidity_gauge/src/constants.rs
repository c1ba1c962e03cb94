// number of slots in the reward token registry
pub(crate) const MAX_REWARD_TOKENS: u32 = 8;

// ~1 hour. The reward contract only pulls within the call that approves or renews.
pub(crate) const ALLOWANCE_LIFETIME: u32 = 720;
