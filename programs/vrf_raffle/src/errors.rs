use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Not enough lamports to enter the raffle")]
    NotEnoughFunds,
    #[msg("Raffle is not open")]
    NotOpen,
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,
    #[msg("Unrecognized randomness request")]
    UnrecognizedRequest,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Prize transfer failed")]
    TransferFailed,

    #[msg("Raffle is full for this round")]
    RaffleFull,
    #[msg("Callback carried no random words")]
    InsufficientRandomWords,
    #[msg("Entrant index out of bounds")]
    EntrantIndexOutOfBounds,

    // -----------------
    // Initialization
    // -----------------
    #[msg("Invalid entrance fee (below rent-exempt minimum)")]
    InvalidEntranceFee,
    #[msg("Invalid interval (must be > 0)")]
    InvalidInterval,
    #[msg("Invalid callback gas limit (must be > 0)")]
    InvalidCallbackGasLimit,
    #[msg("Oracle pubkey not set")]
    OracleNotSet,

    #[msg("Math overflow")]
    MathOverflow,
}
