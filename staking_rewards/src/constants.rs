// precision of the reward-per-token accumulator
pub(crate) const REWARD_PRECISION: u128 = 1_000_000_000_000_000_000;
