use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GaugeError {
    ZeroTotalSupply = 3101,
    ExternalCallFailed = 3102,
    SelectorsVerificationFailed = 3103,
    IncompleteSelectors = 3104,
    RewardTokensLengthMismatch = 3105,
    RewardTokenIndexOutOfBounds = 3106,
    ZeroAmount = 3107,
    InsufficientBalance = 3108,
    AmountTooLarge = 3109,
}
